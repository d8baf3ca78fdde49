use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_DB_URL: &str = "sqlite://belajar.sqlite3";
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Belajar - learn Indonesian unit by unit
#[derive(Parser, Debug)]
#[command(name = "belajar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database holding learner progress
    #[arg(long = "db", global = true, env = "BELAJAR_DB_URL", default_value = DEFAULT_DB_URL)]
    pub db_url: String,

    /// Directory containing units.json and unit<N>.json files
    #[arg(long = "content", global = true, env = "BELAJAR_CONTENT_DIR", default_value = DEFAULT_CONTENT_DIR)]
    pub content_dir: PathBuf,

    /// Log filter, e.g. `info` or `services=debug`
    #[arg(long = "log", global = true, env = "BELAJAR_LOG", default_value = "info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Launch the desktop app (default)
    Ui,
    /// Print XP, streak and unit unlock state
    Status,
    /// Erase all saved progress
    Reset,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ui_with_default_paths() {
        let cli = Cli::try_parse_from(["belajar"]).unwrap();
        assert_eq!(cli.command(), Command::Ui);
        assert_eq!(cli.db_url, DEFAULT_DB_URL);
        assert_eq!(cli.content_dir, PathBuf::from(DEFAULT_CONTENT_DIR));
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["belajar", "status", "--db", "sqlite::memory:"]).unwrap();
        assert_eq!(cli.command(), Command::Status);
        assert_eq!(cli.db_url, "sqlite::memory:");
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["belajar", "seed"]).is_err());
    }
}
