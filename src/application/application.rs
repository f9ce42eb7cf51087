use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::info;

use crate::application::{InputSource, InputSourceError, Printer, RuntimeConfig, Session};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let styled = app_config.color.enabled();
        colored::control::set_override(styled);

        Self::run_with_output(app_config, io::stdout().lock(), styled).await
    }

    /// Runs every command from the configured input, writing output to `out`.
    pub async fn run_with_output<W: Write>(
        app_config: RuntimeConfig,
        out: W,
        styled: bool,
    ) -> Result<(), ApplicationError> {
        let lines = InputSource::from(app_config.input)
            .open()
            .await
            .context(InputSnafu)?;

        let mut session = Session::new(app_config.echo);
        let mut printer = Printer::new(out, styled);
        let mut processed = 0usize;
        for line in lines {
            let line = line.context(InputSnafu)?;
            let output = session.process_line(&line);
            printer.print_all(&output).context(OutputSnafu)?;
            processed += 1;
        }

        info!("End of input reached after {} lines", processed);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading commands"))]
    InputError { source: InputSourceError },
    #[snafu(display("Critical failure encountered while writing output"))]
    OutputError { source: io::Error },
}
