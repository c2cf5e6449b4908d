// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random drill scenarios.
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use rand::prelude::*;
use serde::Serialize;
use std::fmt;

use gtodrill_eval::{
    BoardTextureResult, Card, Deck, PlayerHand, Showdown, analyze_board_texture,
};

use crate::report::{CardList, write_showdown, write_texture};

/// The street dealt in a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// The number of board cards on this street.
    pub fn board_len(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{name}")
    }
}

/// Drills configuration.
#[derive(Debug, Clone)]
pub struct DrillConfig {
    /// The street to deal.
    pub street: Street,
    /// Number of drills.
    pub count: usize,
    /// Number of players, the first one is the hero.
    pub players: usize,
    /// The random seed, drills are not reproducible without it.
    pub seed: Option<u64>,
}

/// A dealt drill with its analysis.
#[derive(Debug, Serialize)]
pub struct Drill {
    /// The drill number starting from 1.
    pub number: usize,
    /// The dealt street.
    pub street: Street,
    /// The board cards.
    pub board: Vec<Card>,
    /// The board texture.
    pub texture: BoardTextureResult,
    /// The players hands at showdown.
    pub showdown: Showdown,
}

impl fmt::Display for Drill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Drill #{} ({}): {}",
            self.number,
            self.street,
            CardList(&self.board)
        )?;
        write_texture(f, &self.texture)?;
        write_showdown(f, &self.showdown)?;
        writeln!(f)
    }
}

/// Deals the configured number of drills.
pub fn deal(config: &DrillConfig) -> Result<Vec<Drill>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (1..=config.count)
        .map(|number| deal_one(&mut rng, config, number))
        .collect()
}

fn deal_one<R: Rng>(rng: &mut R, config: &DrillConfig, number: usize) -> Result<Drill> {
    let mut deck = Deck::new_and_shuffled(rng);

    let players = (0..config.players)
        .map(|idx| -> Result<PlayerHand> {
            let hole = [deal_card(&mut deck)?, deal_card(&mut deck)?];
            Ok(PlayerHand::new(player_id(idx), hole))
        })
        .collect::<Result<Vec<_>>>()?;

    let board = (0..config.street.board_len())
        .map(|_| deal_card(&mut deck))
        .collect::<Result<Vec<_>>>()?;

    let texture = analyze_board_texture(&board)?;
    let showdown = Showdown::evaluate(&players, &board)?;
    debug!("Drill {number} {} board {}", texture.texture, CardList(&board));

    Ok(Drill {
        number,
        street: config.street,
        board,
        texture,
        showdown,
    })
}

fn deal_card(deck: &mut Deck) -> Result<Card> {
    deck.deal().context("The deck is out of cards")
}

fn player_id(idx: usize) -> String {
    if idx == 0 {
        "hero".to_string()
    } else {
        format!("villain{idx}")
    }
}
