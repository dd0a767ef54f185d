//! Command-line interface for Beat the Hand
//!
//! Supports both graphical (default) and headless modes.

use clap::Parser;
use std::path::PathBuf;

/// Rock Paper Scissors against the computer, first to five wins
#[derive(Parser, Debug)]
#[command(name = "beat-the-hand")]
#[command(about = "Rock Paper Scissors against the computer, first to five wins")]
#[command(version)]
pub struct Args {
    /// Run in headless mode with the specified JSON config file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub headless: Option<PathBuf>,

    /// Output path for the match summary (headless mode only)
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Seed the computer's hands for a reproducible match
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with sound disabled
    #[arg(long)]
    pub mute: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_flags_parse() {
        let args = Args::parse_from([
            "beat-the-hand",
            "--headless",
            "match.json",
            "--seed",
            "42",
            "--output",
            "out.json",
        ]);
        assert_eq!(args.headless, Some(PathBuf::from("match.json")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(!args.mute);
    }
}
