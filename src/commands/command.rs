use derive_more::Display;
use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::filesystem::{DirectoryTree, TreeError};

/// One parsed input line.
///
/// `Display` renders the canonical form of the command, which is what gets echoed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[display("CREATE {path}")]
    Create { path: String },
    #[display("MOVE {from} {to}")]
    Move { from: String, to: String },
    #[display("DELETE {path}")]
    Delete { path: String },
    #[display("LIST")]
    List,
}

impl Command {
    /// Parses a whitespace-separated command line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args = words.collect::<Vec<_>>();

        let command = match verb {
            "CREATE" => {
                let [path] = Self::expect_args::<1>(verb, &args, "one argument")?;
                Command::Create { path }
            }
            "MOVE" => {
                let [from, to] = Self::expect_args::<2>(verb, &args, "two arguments")?;
                Command::Move { from, to }
            }
            "DELETE" => {
                let [path] = Self::expect_args::<1>(verb, &args, "one argument")?;
                Command::Delete { path }
            }
            "LIST" => {
                Self::expect_args::<0>(verb, &args, "no arguments")?;
                Command::List
            }
            _ => return UnknownCommandSnafu { verb }.fail(),
        };

        debug!("Parsed command: {:?}", command);
        Ok(Some(command))
    }

    fn expect_args<const N: usize>(
        verb: &str,
        args: &[&str],
        expected: &'static str,
    ) -> Result<[String; N], CommandError> {
        ensure!(args.len() == N, ArgumentCountSnafu { verb, expected });
        Ok(std::array::from_fn(|index| args[index].to_string()))
    }

    /// Runs the command against `tree` and returns the lines it prints.
    pub fn execute(&self, tree: &mut DirectoryTree) -> Result<Vec<String>, ExecutionError> {
        match self {
            Command::Create { path } => {
                tree.create(path).context(CreateSnafu { path })?;
                Ok(Vec::new())
            }
            Command::Move { from, to } => {
                tree.move_node(from, to).context(MoveSnafu { from })?;
                Ok(Vec::new())
            }
            Command::Delete { path } => {
                tree.delete(path).context(DeleteSnafu { path })?;
                Ok(Vec::new())
            }
            Command::List => Ok(tree.list().map(|entry| entry.to_string()).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CommandError {
    #[snafu(display("Unknown command: {verb}"))]
    UnknownCommand { verb: String },
    #[snafu(display("Error: {verb} command requires {expected}."))]
    ArgumentCount { verb: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ExecutionError {
    #[snafu(display("Cannot create {path} - {source}"))]
    Create { path: String, source: TreeError },
    #[snafu(display("Cannot move {from} - {source}"))]
    Move { from: String, source: TreeError },
    #[snafu(display("Cannot delete {path} - {source}"))]
    Delete { path: String, source: TreeError },
}
