// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Gtodrill hand evaluator and board texture analyzer.
//!
//! The evaluator finds the best 5 cards hand out of the two hole cards and
//! the 3 to 5 community cards by ranking each 5 cards subset, the analyzer
//! classifies the community cards structure to pick and explain drills.
//!
//! To evaluate a hand use [evaluate_hand] and compare evaluations with
//! [compare_hands] or the [HandEvaluation] ordering:
//!
//! ```
//! # use gtodrill_eval::*;
//! let board = parse_cards("Qh Jh Th 2d 3c").unwrap();
//! let royal = evaluate_hand(&parse_cards("AhKh").unwrap(), &board).unwrap();
//! let trips = evaluate_hand(&parse_cards("QsQd").unwrap(), &board).unwrap();
//!
//! assert_eq!(royal.rank(), HandRank::RoyalFlush);
//! assert!(compare_hands(&royal, &trips) > 0);
//! ```
//!
//! use [determine_winners] to find the players who win a pot, more than one
//! for a split pot, and [analyze_board_texture] to classify a board:
//!
//! ```
//! # use gtodrill_eval::*;
//! let board = parse_cards("9h 8d 7s").unwrap();
//! let result = analyze_board_texture(&board).unwrap();
//!
//! assert_eq!(result.texture, BoardTexture::Connected);
//! assert!(result.has_straight_draw);
//! ```
//!
//! All functions are pure and can be called from any number of threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{HandEvaluation, HandRank, compare_hands, evaluate_cards, evaluate_hand};

pub mod showdown;
pub use showdown::{PlayerHand, Showdown, WinnerResult, determine_winners};

pub mod texture;
pub use texture::{BoardTexture, BoardTextureResult, analyze_board_texture};

// Reexport cards types.
pub use gtodrill_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn types_are_send_and_sync() {
        assert_send_sync::<Card>();
        assert_send_sync::<EvalError>();
        assert_send_sync::<HandEvaluation>();
        assert_send_sync::<PlayerHand>();
        assert_send_sync::<WinnerResult>();
        assert_send_sync::<Showdown>();
        assert_send_sync::<BoardTextureResult>();
    }
}
