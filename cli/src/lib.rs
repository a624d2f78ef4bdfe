//! BetsAPI CLI - Command line access to the BetsAPI sports odds API.
//!
//! This crate wires the SDK client to a small command line interface that
//! prints leagues, events and odds as JSON.
//!
//! # Components
//!
//! - [`settings`]: Connection settings from flags and environment
//! - [`commands`]: Subcommands and their execution

pub mod commands;
pub mod settings;

use clap::Parser;

pub use commands::Command;
pub use settings::ConnectionArgs;

/// Command line interface.
#[derive(Debug, Parser)]
#[command(name = "betsapi", version, about = "Query the BetsAPI sports odds API")]
pub struct Cli {
    /// Connection settings.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use betsapi_sdk::Sport;

    use super::*;

    #[test]
    fn test_cli_parses_leagues() {
        let cli = Cli::try_parse_from([
            "betsapi",
            "--token",
            "TOK",
            "leagues",
            "ice-hockey",
            "--country",
            "se",
        ])
        .unwrap();

        assert_eq!(cli.connection.token.as_deref(), Some("TOK"));
        match cli.command {
            Command::Leagues { sport, country } => {
                assert_eq!(sport, Sport::IceHockey);
                assert_eq!(country.as_deref(), Some("se"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["betsapi", "odds", "123", "--retries", "0"]).unwrap();

        assert_eq!(cli.connection.retries, "0");
        assert!(matches!(cli.command, Command::Odds { event_id: 123 }));
    }

    #[test]
    fn test_cli_rejects_unknown_sport() {
        let result = Cli::try_parse_from(["betsapi", "leagues", "quidditch"]);
        assert!(result.is_err());
    }
}
