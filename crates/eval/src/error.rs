// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::Card;

/// Error returned for cards that are outside the evaluator contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A player must have exactly two hole cards.
    #[error("expected 2 hole cards, got {0}")]
    InvalidHoleCards(usize),
    /// A hand needs a flop, turn or river.
    #[error("expected 3 to 5 community cards, got {0}")]
    InvalidCommunityCards(usize),
    /// A board has at most 5 cards.
    #[error("expected at most 5 board cards, got {0}")]
    InvalidBoard(usize),
    /// A hand is made of 5 to 7 cards.
    #[error("expected 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    /// The same card was given more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A showdown needs at least one player.
    #[error("no players in the hand")]
    NoPlayers,
}

/// Checks that no card appears twice, returns the cards mask.
pub(crate) fn ensure_distinct<'a, I>(cards: I) -> Result<u64, EvalError>
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().try_fold(0u64, |mask, card| {
        if mask & card.mask() != 0 {
            Err(EvalError::DuplicateCard(*card))
        } else {
            Ok(mask | card.mask())
        }
    })
}
