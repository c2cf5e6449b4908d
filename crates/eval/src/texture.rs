// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board texture analysis.
//!
//! Classifies the community cards by their suits distribution, pairing, and
//! ranks connectivity. The categories follow this priority:
//!
//! 1. `monotone` at least 3 cards of the same suit, or all the cards of a
//!    one or two cards board.
//! 2. `paired` a rank appears at least twice.
//! 3. `wet` a flush draw and a straight draw on a connected board.
//! 4. `connected` a straight draw on a connected board.
//! 5. `semi_wet` a flush draw or a loose straight draw.
//! 6. `dry` none of the above.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, EvalError, Rank, error::ensure_distinct};

/// Connectedness from which a straight draw makes the board connected.
const CONNECTED_THRESHOLD: f32 = 0.5;

/// Number of ranks in a straight.
const STRAIGHT_LEN: u32 = 5;

/// Bit position used by the ace when it plays low.
const LOW_ACE: u32 = 1;

/// Bit position used by the ace when it plays high.
const HIGH_ACE: u32 = 14;

/// The board texture category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardTexture {
    /// No flush or straight draws.
    #[default]
    Dry,
    /// A single weak draw.
    SemiWet,
    /// Flush and straight draws on connected ranks.
    Wet,
    /// Three or more cards of the same suit, or a single suit board.
    Monotone,
    /// Two or more cards of the same rank.
    Paired,
    /// Straight draws on connected ranks.
    Connected,
}

impl fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoardTexture::Dry => "dry",
            BoardTexture::SemiWet => "semi_wet",
            BoardTexture::Wet => "wet",
            BoardTexture::Monotone => "monotone",
            BoardTexture::Paired => "paired",
            BoardTexture::Connected => "connected",
        };

        write!(f, "{name}")
    }
}

/// The result of a board analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardTextureResult {
    /// The texture category.
    pub texture: BoardTexture,
    /// At least 3 cards share a suit, with fewer cards all of them do.
    pub is_monotone: bool,
    /// At least 2 cards share a rank.
    pub is_paired: bool,
    /// The board has no draws and it is neither monotone nor paired.
    pub is_dry: bool,
    /// The board has both flush and straight draws on connected ranks.
    pub is_wet: bool,
    /// At least 2 cards share a suit.
    pub has_flush_draw: bool,
    /// At least 3 ranks fit in a 5 ranks window.
    pub has_straight_draw: bool,
    /// How close the ranks are to be consecutive, in [0, 1].
    pub connectedness: f32,
    /// The highest card rank, `None` for an empty board.
    pub high_card: Option<Rank>,
}

impl Default for BoardTextureResult {
    fn default() -> Self {
        Self {
            texture: BoardTexture::Dry,
            is_monotone: false,
            is_paired: false,
            is_dry: true,
            is_wet: false,
            has_flush_draw: false,
            has_straight_draw: false,
            connectedness: 0.0,
            high_card: None,
        }
    }
}

/// Analyzes the texture of a board with 0 to 5 distinct cards.
pub fn analyze_board_texture(board: &[Card]) -> Result<BoardTextureResult, EvalError> {
    if board.len() > 5 {
        return Err(EvalError::InvalidBoard(board.len()));
    }

    ensure_distinct(board)?;

    if board.is_empty() {
        return Ok(BoardTextureResult::default());
    }

    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 13];
    for c in board {
        suit_counts[c.suit() as usize] += 1;
        rank_counts[c.rank() as usize] += 1;
    }

    let max_suit = suit_counts.iter().copied().max().unwrap_or_default();
    let is_monotone = if board.len() < 3 {
        max_suit as usize == board.len()
    } else {
        max_suit >= 3
    };
    let has_flush_draw = max_suit >= 2;
    let is_paired = rank_counts.iter().any(|&n| n >= 2);

    // Bit v is set for each rank value v, the ace sets both 14 and 1.
    let positions = board.iter().fold(0u32, |acc, c| {
        let v = c.rank().value() as u32;
        let acc = acc | (1 << v);
        if v == HIGH_ACE { acc | (1 << LOW_ACE) } else { acc }
    });

    let has_straight_draw = max_in_window(positions) >= 3;
    let connectedness = connectedness(positions);
    let high_card = board.iter().map(|c| c.rank()).max();

    let is_connected = has_straight_draw && connectedness >= CONNECTED_THRESHOLD;
    let is_wet = has_flush_draw && is_connected;

    let texture = if is_monotone {
        BoardTexture::Monotone
    } else if is_paired {
        BoardTexture::Paired
    } else if is_wet {
        BoardTexture::Wet
    } else if is_connected {
        BoardTexture::Connected
    } else if has_flush_draw || has_straight_draw {
        BoardTexture::SemiWet
    } else {
        BoardTexture::Dry
    };

    let result = BoardTextureResult {
        texture,
        is_monotone,
        is_paired,
        is_dry: texture == BoardTexture::Dry,
        is_wet,
        has_flush_draw,
        has_straight_draw,
        connectedness,
        high_card,
    };

    log::trace!("{board:?} -> {result:?}");

    Ok(result)
}

/// The max number of distinct ranks within a straight window.
fn max_in_window(positions: u32) -> u32 {
    let window = (1 << STRAIGHT_LEN) - 1;
    (LOW_ACE..=HIGH_ACE + 1 - STRAIGHT_LEN)
        .map(|low| ((positions >> low) & window).count_ones())
        .max()
        .unwrap_or_default()
}

/// Connectedness with the ace playing high or low, whichever is better.
fn connectedness(positions: u32) -> f32 {
    let high = gap_score(positions & !(1 << LOW_ACE));
    let low = gap_score(positions & !(1 << HIGH_ACE));
    high.max(low)
}

/// Mean score of the gaps between adjacent ranks.
///
/// A gap of 1 scores 1.0 and each missing rank takes off 0.25 so that ranks
/// that can't be in the same straight score 0.
fn gap_score(positions: u32) -> f32 {
    let mut prev = None;
    let mut total = 0.0;
    let mut gaps = 0;

    for v in (LOW_ACE..=HIGH_ACE).filter(|v| positions & (1 << v) != 0) {
        if let Some(p) = prev {
            let gap = (v - p) as f32;
            total += ((STRAIGHT_LEN as f32 - gap) / 4.0).clamp(0.0, 1.0);
            gaps += 1;
        }
        prev = Some(v);
    }

    if gaps == 0 { 0.0 } else { total / gaps as f32 }
}
