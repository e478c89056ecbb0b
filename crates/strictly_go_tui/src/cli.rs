//! Command-line interface for strictly_go.

use clap::Parser;
use std::path::PathBuf;
use strictly_go::{BoardSize, Coordinate};

/// Strictly Go - place stones on a Go board in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_go")]
#[command(about = "Two players take turns placing stones on a Go board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (overrides the config file)
    #[arg(short, long)]
    pub size: Option<BoardSize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write logs (the terminal is busy drawing the board)
    #[arg(long, default_value = "strictly_go.log")]
    pub log_file: PathBuf,

    /// Opening move as "x y"; repeat to play several in order
    #[arg(long = "play", value_name = "X Y")]
    pub play: Vec<Coordinate>,

    /// Print the board after the opening moves and exit
    #[arg(long)]
    pub print: bool,
}
