//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "casino-war",
    version,
    about = "Casino War: one card each, highest rank wins"
)]
pub struct CasinoWarCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: deal, reshuffle, status, quit
    Play {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal a single round from a fresh deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Print the round as JSON
        #[arg(long)]
        json: bool,
        /// Print the image asset path of each card
        #[arg(long)]
        assets: bool,
    },
    /// Play whole decks unattended, reshuffling between decks
    Sim {
        #[arg(long, default_value_t = 1)]
        decks: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
