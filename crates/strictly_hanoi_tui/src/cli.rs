//! Command-line interface for strictly_hanoi.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strictly_hanoi::{DiskCount, InvalidConfigurationError};

/// Settings file read by `play` when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_hanoi.toml";

/// Log file written while the terminal UI is active.
pub const DEFAULT_LOG_PATH: &str = "strictly_hanoi.log";

/// Strictly Hanoi - Tower of Hanoi with drag-and-drop in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Tower of Hanoi puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `play`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively
    Play {
        /// Disk count for new games (3-8); overrides the settings file
        #[arg(short, long, value_parser = parse_disk_count)]
        disks: Option<DiskCount>,

        /// Path to the TOML settings file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Path to the log file
        #[arg(long, default_value = DEFAULT_LOG_PATH)]
        log_file: PathBuf,
    },

    /// Print the optimal solution
    Solve {
        /// Number of disks (3-8)
        #[arg(short, long, default_value = "3", value_parser = parse_disk_count)]
        disks: DiskCount,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            disks: None,
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_file: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

fn parse_disk_count(s: &str) -> Result<DiskCount, InvalidConfigurationError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["strictly_hanoi"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_disks_validated() {
        let cli = Cli::try_parse_from(["strictly_hanoi", "play", "--disks", "6"]).unwrap();
        let Some(Command::Play { disks, .. }) = cli.command else {
            panic!("Expected play");
        };
        assert_eq!(disks.map(DiskCount::get), Some(6));

        assert!(Cli::try_parse_from(["strictly_hanoi", "play", "--disks", "9"]).is_err());
        assert!(Cli::try_parse_from(["strictly_hanoi", "solve", "--disks", "two"]).is_err());
    }

    #[test]
    fn test_solve_defaults() {
        let cli = Cli::try_parse_from(["strictly_hanoi", "solve", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Solve {
                disks: DiskCount::default(),
                json: true,
            })
        );
    }
}
