// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand is evaluated by ranking each 5 cards subset of the hole and
//! community cards (21 subsets on the river) and keeping the strongest one.
//! The result is a [HandEvaluation] with the hand category, the best five
//! cards, and a packed strength value used to order hands:
//!
//! ```text
//!   +--------+--------+--------+--------+
//!   |xxxxxxxx|cccckkkk|kkkkkkkk|kkkkkkkk|
//!   +--------+--------+--------+--------+
//!   c = hand category (high card=0,...,royal flush=9)
//!   k = five 4 bits rank values, most significant first (deuce=2,...,ace=14)
//! ```
//!
//! The ace takes the value 1 only in the wheel so that A-2-3-4-5 loses to
//! any other straight.
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, Rank, error::ensure_distinct};

mod five;

/// The hand category, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from worst to best.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The evaluation of the best 5 cards hand.
///
/// Evaluations compare by hand strength only, two hands with the same
/// category and kickers are equal even if their suits differ.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HandEvaluation {
    rank: HandRank,
    hand: [Card; 5],
    strength: u32,
}

impl HandEvaluation {
    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The best five cards, most significant first.
    ///
    /// Cards that make the category come first followed by the kickers, in
    /// a wheel the ace is the last card.
    pub fn hand(&self) -> &[Card; 5] {
        &self.hand
    }

    /// The ranks of the best five cards, most significant first.
    pub fn kickers(&self) -> [Rank; 5] {
        self.hand.map(|c| c.rank())
    }

    /// The packed comparable strength.
    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// A human readable description, for example "Two Pair, Kings and Sevens".
    pub fn description(&self) -> String {
        let [r0, _, r2, r3, _] = self.kickers();
        match self.rank {
            HandRank::HighCard => format!("High Card, {}", r0.name()),
            HandRank::Pair => format!("Pair of {}", plural(r0)),
            HandRank::TwoPair => format!("Two Pair, {} and {}", plural(r0), plural(r2)),
            HandRank::ThreeOfAKind => format!("Three of a Kind, {}", plural(r0)),
            HandRank::Straight => format!("Straight, {} high", r0.name()),
            HandRank::Flush => format!("Flush, {} high", r0.name()),
            HandRank::FullHouse => format!("Full House, {} full of {}", plural(r0), plural(r3)),
            HandRank::FourOfAKind => format!("Four of a Kind, {}", plural(r0)),
            HandRank::StraightFlush => format!("Straight Flush, {} high", r0.name()),
            HandRank::RoyalFlush => "Royal Flush".to_string(),
        }
    }
}

fn plural(rank: Rank) -> String {
    match rank {
        Rank::Six => "Sixes".to_string(),
        _ => format!("{}s", rank.name()),
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for HandEvaluation {}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.description())?;
        for (idx, card) in self.hand.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Evaluates a player hand given the two hole cards and 3 to 5 community cards.
///
/// Returns an error if the cards count is wrong or if any card appears twice.
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> Result<HandEvaluation, EvalError> {
    if hole.len() != 2 {
        return Err(EvalError::InvalidHoleCards(hole.len()));
    }

    if !(3..=5).contains(&community.len()) {
        return Err(EvalError::InvalidCommunityCards(community.len()));
    }

    let mut cards = [hole[0]; 7];
    cards[1] = hole[1];
    cards[2..2 + community.len()].copy_from_slice(community);

    let eval = evaluate_cards(&cards[..2 + community.len()])?;
    log::trace!("{hole:?} {community:?} -> {eval}");

    Ok(eval)
}

/// Evaluates the best hand out of 5 to 7 distinct cards.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(EvalError::InvalidCardCount(n));
    }

    ensure_distinct(cards)?;

    let mut best: Option<HandEvaluation> = None;
    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                        let eval = five::eval(hand);
                        if best.is_none_or(|b| eval > b) {
                            best = Some(eval);
                        }
                    }
                }
            }
        }
    }

    best.ok_or(EvalError::InvalidCardCount(n))
}

/// Compares two evaluations.
///
/// Returns a positive value if `a` beats `b`, a negative value if `b` beats
/// `a`, and zero for a tie.
pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> i32 {
    a.cmp(b) as i32
}
