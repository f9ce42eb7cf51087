use std::io::{self, BufRead, StdinLock};
use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

/// Where command lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Script(PathBuf),
    Interactive,
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Interactive, InputSource::Script)
    }
}

impl InputSource {
    /// Opens the source. A script is read up front; stdin is consumed lazily until
    /// end of input.
    pub async fn open(self) -> Result<InputLines, InputSourceError> {
        match self {
            InputSource::Script(path) => {
                let script = Self::read_script(&path).await?;
                let lines = script.lines().map(str::to_string).collect::<Vec<_>>();
                debug!("Read {} lines from {}", lines.len(), path.display());
                Ok(InputLines::Script(lines.into_iter()))
            }
            InputSource::Interactive => {
                info!("Reading commands from standard input");
                Ok(InputLines::Interactive(io::stdin().lock().lines()))
            }
        }
    }

    async fn read_script(path: &Path) -> Result<String, InputSourceError> {
        debug!("Opening command file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu { path })?;
        String::from_utf8(bytes).context(EncodingSnafu { path })
    }
}

pub enum InputLines {
    Script(std::vec::IntoIter<String>),
    Interactive(io::Lines<StdinLock<'static>>),
}

impl Iterator for InputLines {
    type Item = Result<String, InputSourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            InputLines::Script(lines) => lines.next().map(Ok),
            InputLines::Interactive(lines) => lines.next().map(|line| line.context(StdinSnafu)),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum InputSourceError {
    #[snafu(display("Failed to read the command file: {}", path.display()))]
    ReadError { path: PathBuf, source: io::Error },
    #[snafu(display("The command file {} is not valid UTF-8", path.display()))]
    EncodingError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to read a command from standard input"))]
    StdinError { source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_path_means_interactive() {
        assert_eq!(InputSource::from(None), InputSource::Interactive);
        assert_eq!(
            InputSource::from(Some(PathBuf::from("cmds.txt"))),
            InputSource::Script(PathBuf::from("cmds.txt"))
        );
    }

    #[compio::test]
    async fn script_lines_are_returned_in_order() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "CREATE a\r\n\nLIST\n").expect("Failed to write to temp file");

        let lines = InputSource::Script(temp_file.path().to_path_buf())
            .open()
            .await
            .expect("Failed to open script")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to read script lines");

        assert_eq!(lines, vec!["CREATE a", "", "LIST"]);
    }

    #[compio::test]
    async fn missing_script_is_a_read_error() {
        let path = PathBuf::from("/this/path/does/not/exist.txt");
        let result = InputSource::Script(path.clone()).open().await;

        match result {
            Err(InputSourceError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("Expected ReadError, got {other:?}"),
            Ok(_) => panic!("Expected ReadError"),
        }
    }

    #[compio::test]
    async fn non_utf8_script_is_an_encoding_error() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(&[0x43, 0xff, 0xfe, 0x0a])
            .expect("Failed to write to temp file");

        let result = InputSource::Script(temp_file.path().to_path_buf())
            .open()
            .await;

        assert!(matches!(result, Err(InputSourceError::EncodingError { .. })));
    }

    #[test]
    fn read_error_display_names_the_file() {
        let err = InputSourceError::ReadError {
            path: PathBuf::from("/tmp/commands.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("/tmp/commands.txt"));
    }
}
