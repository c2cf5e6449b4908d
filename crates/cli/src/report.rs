// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Commands output.
use anyhow::Result;
use serde::Serialize;
use std::fmt;

use gtodrill_eval::{BoardTextureResult, Card, HandEvaluation, HandRank, Showdown};

/// Prints a report as text or as JSON.
pub fn print_report<T>(json: bool, report: &T) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

/// Formats cards separated by spaces.
pub struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }

        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Writes the board texture flags.
pub fn write_texture(f: &mut fmt::Formatter<'_>, r: &BoardTextureResult) -> fmt::Result {
    let high_card = r
        .high_card
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "-".to_string());

    writeln!(f, "Texture:       {}", r.texture)?;
    writeln!(f, "High card:     {high_card}")?;
    writeln!(f, "Monotone:      {}", yes_no(r.is_monotone))?;
    writeln!(f, "Paired:        {}", yes_no(r.is_paired))?;
    writeln!(f, "Flush draw:    {}", yes_no(r.has_flush_draw))?;
    writeln!(f, "Straight draw: {}", yes_no(r.has_straight_draw))?;
    writeln!(f, "Connectedness: {:.2}", r.connectedness)
}

/// Writes each player hand marking the winners with `*`.
pub fn write_showdown(f: &mut fmt::Formatter<'_>, showdown: &Showdown) -> fmt::Result {
    let winners = showdown.winners().collect::<Vec<_>>();
    for result in showdown.results() {
        let is_winner = winners.iter().any(|w| std::ptr::eq(*w, result));
        let mark = if is_winner { "*" } else { " " };
        writeln!(f, "{mark} {:<12} {}", result.player_id, result.evaluation)?;
    }

    if showdown.is_split() {
        writeln!(f, "Split pot between {} players", winners.len())?;
    }

    Ok(())
}

/// The eval command output.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    /// The player hole cards.
    pub hole: Vec<Card>,
    /// The community cards.
    pub board: Vec<Card>,
    /// The player best hand.
    pub evaluation: HandEvaluation,
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hole:  {}", CardList(&self.hole))?;
        writeln!(f, "Board: {}", CardList(&self.board))?;
        writeln!(f, "Hand:  {}", self.evaluation)
    }
}

/// The showdown command output.
#[derive(Debug, Serialize)]
pub struct ShowdownReport {
    /// The community cards.
    pub board: Vec<Card>,
    /// Every player result and the winners.
    pub showdown: Showdown,
}

impl fmt::Display for ShowdownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board: {}", CardList(&self.board))?;
        write_showdown(f, &self.showdown)
    }
}

/// The texture command output.
#[derive(Debug, Serialize)]
pub struct TextureReport {
    /// The analyzed board.
    pub board: Vec<Card>,
    /// The board texture.
    pub analysis: BoardTextureResult,
}

impl fmt::Display for TextureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:         {}", CardList(&self.board))?;
        write_texture(f, &self.analysis)
    }
}

/// Number of hands in a category.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    /// The hand category.
    pub rank: HandRank,
    /// Number of hands in this category.
    pub count: usize,
    /// Fraction of all hands, in [0, 1].
    pub frequency: f64,
}

/// The stats command output.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Number of hands evaluated.
    pub total: usize,
    /// Counts from worst to best category.
    pub categories: Vec<CategoryCount>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total hands      {}\n", self.total)?;
        for c in &self.categories {
            let name = format!("{}:", c.rank);
            writeln!(f, "{name:<17}{:<10}{:.4}%", c.count, c.frequency * 100.0)?;
        }

        Ok(())
    }
}
