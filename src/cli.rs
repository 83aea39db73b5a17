use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrosmart",
    version,
    about = "Smart farming companion with rule-based crop suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file interactively
    Init,
    /// Validate config and open the database
    Check,
    /// Suggest crops for soil, rainfall and temperature
    Suggest {
        /// Soil type: loamy, sandy, clay, silt or peaty
        #[arg(short, long)]
        soil: String,
        /// Annual rainfall in millimeters
        #[arg(short, long, allow_negative_numbers = true)]
        rainfall: Option<f64>,
        /// Average temperature in degrees Celsius
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or toggle the saved light/dark theme
    Theme {
        /// Switch to the other theme and save it
        #[arg(long)]
        toggle: bool,
    },
    /// Print a demo weather reading
    Weather {
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_suggest() {
        let cli = Cli::parse_from([
            "agrosmart",
            "suggest",
            "--soil",
            "clay",
            "--rainfall",
            "700",
            "--temperature",
            "-2.5",
            "--json",
        ]);
        match cli.command {
            Some(Commands::Suggest {
                soil,
                rainfall,
                temperature,
                json,
            }) => {
                assert_eq!(soil, "clay");
                assert_eq!(rainfall, Some(700.0));
                assert_eq!(temperature, Some(-2.5));
                assert!(json);
            }
            _ => panic!("expected suggest"),
        }
    }

    #[test]
    fn suggest_numbers_are_optional_at_parse_time() {
        let cli = Cli::parse_from(["agrosmart", "suggest", "--soil", "silt"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Suggest {
                rainfall: None,
                temperature: None,
                ..
            })
        ));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["agrosmart", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }
}
