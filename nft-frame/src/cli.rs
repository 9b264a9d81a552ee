use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and project NFT frame configurations.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Print debug logs.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every recognized option.
    Schema {
        /// Print the JSON Schema of the configuration instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Validate a configuration file and print what the child frame receives.
    Project {
        /// Path to a `.json` or `.toml` configuration.
        file: PathBuf,
    },
    /// Show the link and frame request of a demo card.
    Card {
        /// NFT path relative to its origin.
        #[arg(long)]
        url: String,
        /// Origin the NFT is served from.
        #[arg(long)]
        origin: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project() {
        let cli = Cli::try_parse_from(["nft-frame", "project", "frame.toml"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Command::Project { file } => assert_eq!(file, PathBuf::from("frame.toml")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_card_verbose() {
        let cli = Cli::try_parse_from([
            "nft-frame",
            "card",
            "--url",
            "assets/1",
            "--origin",
            "https://nfts.example",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Card { ref url, .. } if url == "assets/1"));
    }

    #[test]
    fn test_card_requires_origin() {
        assert!(Cli::try_parse_from(["nft-frame", "card", "--url", "assets/1"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
