// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Gtodrill CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::str::FromStr;

use gtodrill_eval::{
    Card, Deck, EvalError, HandRank, ParseCardError, PlayerHand, Showdown, analyze_board_texture,
    evaluate_cards, evaluate_hand, parse_cards,
};

mod drill;
mod report;

use drill::{DrillConfig, Street};
use report::{
    CategoryCount, EvalReport, ShowdownReport, StatsReport, TextureReport, print_report,
};

#[derive(Debug, Parser)]
#[command(version, about = "Hold'em hand evaluation and board texture drills.")]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate the best hand for the hole and community cards.
    Eval {
        /// The two hole cards, for example AhKh.
        #[clap(long)]
        hole: Cards,
        /// The 3 to 5 community cards, for example "Qh Jh Th".
        #[clap(long)]
        board: Cards,
    },
    /// Find the winners at showdown.
    Showdown {
        /// The 3 to 5 community cards.
        #[clap(long)]
        board: Cards,
        /// A player as id=cards, for example alice=AhKd, repeat for each player.
        #[clap(long = "player", required = true, value_parser = parse_player)]
        players: Vec<PlayerHand>,
    },
    /// Analyze a board texture.
    Texture {
        /// The 0 to 5 board cards.
        #[clap(long, default_value = "")]
        board: Cards,
    },
    /// Deal random drill scenarios.
    Drill {
        /// The street to deal.
        #[clap(long, value_enum, default_value_t = Street::Flop)]
        street: Street,
        /// Number of scenarios.
        #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..=1000))]
        count: u16,
        /// Number of players including the hero.
        #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=9))]
        players: u8,
        /// Seed for reproducible drills.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Count the hand categories of all 5 cards hands.
    Stats,
}

/// A list of cards parsed from a single argument.
#[derive(Debug, Clone)]
struct Cards(Vec<Card>);

impl FromStr for Cards {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Cards)
    }
}

/// Parses a player argument formatted as id=cards.
fn parse_player(s: &str) -> Result<PlayerHand> {
    let Some((id, cards)) = s.split_once('=') else {
        bail!("invalid player '{s}', expected id=cards");
    };

    if id.is_empty() {
        bail!("missing player id in '{s}'");
    }

    match parse_cards(cards)?.as_slice() {
        [c1, c2] => Ok(PlayerHand::new(id, [*c1, *c2])),
        cards => bail!("player {id} must have 2 hole cards, got {}", cards.len()),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Eval {
            hole: Cards(hole),
            board: Cards(board),
        } => {
            let evaluation = evaluate_hand(&hole, &board)?;
            print_report(
                cli.json,
                &EvalReport {
                    hole,
                    board,
                    evaluation,
                },
            )
        }
        Command::Showdown {
            board: Cards(board),
            players,
        } => {
            let showdown = Showdown::evaluate(&players, &board)?;
            print_report(cli.json, &ShowdownReport { board, showdown })
        }
        Command::Texture { board: Cards(board) } => {
            let analysis = analyze_board_texture(&board)?;
            print_report(cli.json, &TextureReport { board, analysis })
        }
        Command::Drill {
            street,
            count,
            players,
            seed,
        } => {
            let config = DrillConfig {
                street,
                count: count as usize,
                players: players as usize,
                seed,
            };

            for drill in drill::deal(&config)? {
                print_report(cli.json, &drill)?;
            }

            Ok(())
        }
        Command::Stats => {
            info!("Evaluating all 5 cards hands...");

            let counts = count_categories(&Deck::default())?;

            let total = counts.iter().sum::<usize>();
            let categories = HandRank::ranks()
                .map(|rank| CategoryCount {
                    rank,
                    count: counts[rank as usize],
                    frequency: counts[rank as usize] as f64 / total as f64,
                })
                .collect();

            print_report(cli.json, &StatsReport { total, categories })
        }
    }
}

/// Counts the 5 cards hands in the deck by category.
fn count_categories(deck: &Deck) -> Result<[usize; 10]> {
    let mut counts = [0usize; 10];
    let mut first_error: Option<EvalError> = None;

    deck.for_each(5, |hand| match evaluate_cards(hand) {
        Ok(eval) => counts[eval.rank() as usize] += 1,
        Err(e) => {
            first_error.get_or_insert(e);
        }
    });

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(counts),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
