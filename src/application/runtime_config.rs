use std::path::PathBuf;

use crate::application::data::ColorMode;
use crate::cli::Cli;

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub input: Option<PathBuf>,
    pub echo: bool,
    pub color: ColorMode,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            echo: cli.echo,
            color: cli.color,
        }
    }
}
