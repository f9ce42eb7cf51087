use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};

/// Runs CREATE, MOVE, DELETE and LIST commands against an in-memory directory tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File with one command per line. Commands are read from stdin when omitted
    pub input: Option<PathBuf>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Print every command before its output
    #[clap(long, short)]
    pub echo: bool,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin_without_echo() {
        let cli = Cli::try_parse_from(["dirtree"]).expect("Failed to parse arguments");
        assert!(cli.input.is_none());
        assert!(!cli.echo);
        assert!(matches!(cli.log_level, LogLevel::Warn));
        assert!(matches!(cli.color, ColorMode::Auto));
    }

    #[test]
    fn parses_script_and_flags() {
        let cli = Cli::try_parse_from([
            "dirtree",
            "commands.txt",
            "--echo",
            "-l",
            "debug",
            "--color",
            "never",
        ])
        .expect("Failed to parse arguments");
        assert_eq!(cli.input, Some(PathBuf::from("commands.txt")));
        assert!(cli.echo);
        assert!(matches!(cli.log_level, LogLevel::Debug));
        assert!(matches!(cli.color, ColorMode::Never));
    }
}
