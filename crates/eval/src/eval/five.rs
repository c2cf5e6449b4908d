// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! 5 cards hand ranking.
use super::{HandEvaluation, HandRank};
use crate::{Card, Rank};

/// Ranks a 5 cards hand.
pub(super) fn eval(mut hand: [Card; 5]) -> HandEvaluation {
    let mut counts = [0u8; 13];
    for c in &hand {
        counts[c.rank() as usize] += 1;
    }

    // Sort by multiplicity and rank so that pairs, trips, and quads come
    // first followed by the kickers, the suit keeps the order stable.
    hand.sort_by(|a, b| {
        let (ca, cb) = (counts[a.rank() as usize], counts[b.rank() as usize]);
        cb.cmp(&ca)
            .then(b.rank().cmp(&a.rank()))
            .then(b.suit().cmp(&a.suit()))
    });

    let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
    let distinct = counts.iter().filter(|&&n| n > 0).count() == 5;

    let mut values = hand.map(|c| c.rank().value());
    let mut is_straight = distinct && values[0] - values[4] == 4;

    // The wheel A-5-4-3-2, move the ace last and count it as 1.
    if distinct && values == [14, 5, 4, 3, 2] {
        hand.rotate_left(1);
        values = [5, 4, 3, 2, 1];
        is_straight = true;
    }

    let primary = counts[hand[0].rank() as usize];
    let secondary = counts[hand[primary as usize].rank() as usize];

    let rank = match (primary, secondary) {
        _ if is_straight && is_flush && hand[0].rank() == Rank::Ace => HandRank::RoyalFlush,
        _ if is_straight && is_flush => HandRank::StraightFlush,
        (4, _) => HandRank::FourOfAKind,
        (3, 2) => HandRank::FullHouse,
        _ if is_flush => HandRank::Flush,
        _ if is_straight => HandRank::Straight,
        (3, _) => HandRank::ThreeOfAKind,
        (2, 2) => HandRank::TwoPair,
        (2, _) => HandRank::Pair,
        _ => HandRank::HighCard,
    };

    let strength = values
        .iter()
        .fold(rank as u32, |acc, &v| (acc << 4) | v as u32);

    HandEvaluation {
        rank,
        hand,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    fn eval_str(s: &str) -> HandEvaluation {
        let cards = parse_cards(s).unwrap();
        eval([cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    #[test]
    fn strength_layout() {
        let e = eval_str("2c3d4h5s7c");
        assert_eq!(e.rank(), HandRank::HighCard);
        assert_eq!(e.strength(), 0x75432);

        let e = eval_str("AhKhQhJhTh");
        assert_eq!(e.rank(), HandRank::RoyalFlush);
        assert_eq!(e.strength(), 0x9EDCBA);
    }

    #[test]
    fn wheel() {
        let e = eval_str("Ah2c3d4s5h");
        assert_eq!(e.rank(), HandRank::Straight);
        assert_eq!(e.strength(), 0x454321);
        assert_eq!(e.hand()[4].rank(), Rank::Ace);

        // A steel wheel is a straight flush, not a royal.
        let e = eval_str("Ad2d3d4d5d");
        assert_eq!(e.rank(), HandRank::StraightFlush);

        // No wrap around straights.
        let e = eval_str("QhKdAc2s3h");
        assert_eq!(e.rank(), HandRank::HighCard);
    }

    #[test]
    fn groups_come_first() {
        let e = eval_str("3c9dKh9s3h");
        assert_eq!(e.rank(), HandRank::TwoPair);
        assert_eq!(
            e.kickers(),
            [Rank::Nine, Rank::Nine, Rank::Trey, Rank::Trey, Rank::King]
        );

        let e = eval_str("2c2d2hAsAh");
        assert_eq!(e.rank(), HandRank::FullHouse);
        assert_eq!(e.kickers()[0], Rank::Deuce);

        let e = eval_str("5c5d5h5sAh");
        assert_eq!(e.rank(), HandRank::FourOfAKind);
        assert_eq!(e.kickers()[4], Rank::Ace);
    }

    #[test]
    fn lower_category_never_wins() {
        // Quads with the lowest kicker beat the best full house.
        assert!(eval_str("2c2d2h2s3c") > eval_str("AcAdAhKsKc"));
        // The worst straight beats the best three of a kind.
        assert!(eval_str("Ah2c3d4s5h") > eval_str("AcAdAhKsQc"));
    }
}
