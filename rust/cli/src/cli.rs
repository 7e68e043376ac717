//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "shoe",
    version,
    about = "Blackjack shoe and hand inspection tool"
)]
pub struct ShoeCli {
    /// Log engine events at debug level (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prepare a deck and deal two cards to each hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Number of 52-card sets in the shoe
        #[arg(long)]
        sets: Option<usize>,
        /// Number of hands to deal
        #[arg(long)]
        hands: Option<usize>,
        /// Print a JSON document instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show deck state and card order, optionally after shuffling and drawing
    Deck {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        sets: Option<usize>,
        /// Prepare (reset and shuffle) before drawing
        #[arg(long)]
        shuffle: bool,
        /// Cards to draw before printing
        #[arg(long, default_value_t = 0)]
        draw: usize,
    },
    /// Score a blackjack hand, e.g. `eval AS 10h`
    Eval {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Print ChaCha20 samples for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
