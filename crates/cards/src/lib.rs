// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Gtodrill cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use gtodrill_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.to_string(), "Ah");
//! assert!(ah > kd);
//! ```
//!
//! Cards coming from drills configuration or solver hand strings are parsed
//! once at the boundary with [parse_cards] or [Card]'s `FromStr`:
//!
//! ```
//! # use gtodrill_cards::{parse_cards, Card, Rank, Suit};
//! let board = parse_cards("Ah Kd 10c").unwrap();
//! assert_eq!(board.len(), 3);
//! assert_eq!(board[2], Card::new(Rank::Ten, Suit::Clubs));
//!
//! let card: Card = "K♠".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::King, Suit::Spades));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use gtodrill_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
