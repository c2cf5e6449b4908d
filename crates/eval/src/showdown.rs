// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners, with split pots support.
use serde::{Deserialize, Serialize};

use crate::{Card, EvalError, HandEvaluation, error::ensure_distinct, evaluate_hand};

/// A player hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    /// The player identifier.
    pub id: String,
    /// The player hole cards.
    pub hole: [Card; 2],
}

impl PlayerHand {
    /// Creates a player hand.
    pub fn new(id: impl Into<String>, hole: [Card; 2]) -> Self {
        Self {
            id: id.into(),
            hole,
        }
    }
}

/// A player evaluated hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerResult {
    /// The player identifier.
    pub player_id: String,
    /// The player best hand.
    pub evaluation: HandEvaluation,
}

/// The evaluation of all players hands at showdown.
#[derive(Debug, Clone, Serialize)]
pub struct Showdown {
    results: Vec<WinnerResult>,
    winners: Vec<usize>,
}

impl Showdown {
    /// Evaluates all players hands against the community cards.
    pub fn evaluate(players: &[PlayerHand], community: &[Card]) -> Result<Self, EvalError> {
        if players.is_empty() {
            return Err(EvalError::NoPlayers);
        }

        // Cards must be distinct across players and board.
        ensure_distinct(players.iter().flat_map(|p| &p.hole).chain(community))?;

        let results = players
            .iter()
            .map(|p| {
                evaluate_hand(&p.hole, community).map(|evaluation| WinnerResult {
                    player_id: p.id.clone(),
                    evaluation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let best = results.iter().map(|r| r.evaluation).max();
        let winners = results
            .iter()
            .enumerate()
            .filter(|(_, r)| Some(r.evaluation) == best)
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        if winners.len() > 1 {
            log::debug!("Split pot between {} players", winners.len());
        }

        Ok(Self { results, winners })
    }

    /// All players results in input order.
    pub fn results(&self) -> &[WinnerResult] {
        &self.results
    }

    /// The players with the best hand.
    pub fn winners(&self) -> impl Iterator<Item = &WinnerResult> {
        self.winners.iter().map(|&idx| &self.results[idx])
    }

    /// Checks if more than one player wins.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    /// Consumes the showdown returning the winners.
    pub fn into_winners(self) -> Vec<WinnerResult> {
        let Self { results, winners } = self;
        results
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| winners.contains(idx))
            .map(|(_, r)| r)
            .collect()
    }
}

/// Returns the players with the best hand, more than one for a split pot.
pub fn determine_winners(
    players: &[PlayerHand],
    community: &[Card],
) -> Result<Vec<WinnerResult>, EvalError> {
    Showdown::evaluate(players, community).map(Showdown::into_winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandRank, parse_cards};

    fn player(id: &str, hole: &str) -> PlayerHand {
        let cards = parse_cards(hole).unwrap();
        PlayerHand::new(id, [cards[0], cards[1]])
    }

    fn ids(winners: &[WinnerResult]) -> Vec<&str> {
        winners.iter().map(|w| w.player_id.as_str()).collect()
    }

    #[test]
    fn single_player_wins() {
        let board = parse_cards("2c7d9hJsKd").unwrap();
        let winners = determine_winners(&[player("alice", "3c4d")], &board).unwrap();
        assert_eq!(ids(&winners), ["alice"]);
        assert_eq!(winners[0].evaluation.rank(), HandRank::HighCard);
    }

    #[test]
    fn split_pot_on_board_straight() {
        let board = parse_cards("TcJdQhKsAc").unwrap();
        let players = [player("a", "2s3d"), player("b", "4c5h")];

        let showdown = Showdown::evaluate(&players, &board).unwrap();
        assert!(showdown.is_split());
        assert_eq!(showdown.results().len(), 2);

        let winners = determine_winners(&players, &board).unwrap();
        assert_eq!(ids(&winners), ["a", "b"]);
        assert!(
            winners
                .iter()
                .all(|w| w.evaluation.rank() == HandRank::Straight)
        );
    }

    #[test]
    fn best_hand_wins() {
        let board = parse_cards("Kd7s7c2hQs").unwrap();
        let players = [
            player("pair", "AsKs"),
            player("boat", "7hKh"),
            player("trips", "7d3d"),
        ];

        let showdown = Showdown::evaluate(&players, &board).unwrap();
        assert!(!showdown.is_split());
        assert_eq!(
            showdown.winners().map(|w| w.player_id.as_str()).collect::<Vec<_>>(),
            ["boat"]
        );
    }

    #[test]
    fn kicker_decides() {
        let board = parse_cards("As8d5c3h2d").unwrap();
        let players = [player("q", "AdQc"), player("k", "AhKc"), player("j", "AcJs")];
        let winners = determine_winners(&players, &board).unwrap();
        assert_eq!(ids(&winners), ["k"]);
    }

    #[test]
    fn three_way_split() {
        let board = parse_cards("AhAdAcAsKh").unwrap();
        let players = [player("a", "2c3c"), player("b", "4d5d"), player("c", "QsQh")];
        let winners = determine_winners(&players, &board).unwrap();
        assert_eq!(ids(&winners), ["a", "b", "c"]);
    }

    #[test]
    fn invalid_showdowns() {
        let board = parse_cards("TcJdQhKsAc").unwrap();
        assert_eq!(determine_winners(&[], &board), Err(EvalError::NoPlayers));

        let players = [player("a", "2s3d"), player("b", "3d5h")];
        assert_eq!(
            determine_winners(&players, &board),
            Err(EvalError::DuplicateCard(players[1].hole[0]))
        );

        let players = [player("a", "2s3d"), player("b", "Ac5h")];
        assert_eq!(
            determine_winners(&players, &board),
            Err(EvalError::DuplicateCard(board[4]))
        );

        let players = [player("a", "2s3d")];
        assert_eq!(
            determine_winners(&players, &board[..2]),
            Err(EvalError::InvalidCommunityCards(2))
        );
    }
}
