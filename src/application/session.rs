use tracing::debug;

use crate::commands::Command;
use crate::filesystem::DirectoryTree;

/// A single line of program output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Listing rows and echoed commands.
    Plain(String),
    /// A command that was rejected or could not be applied.
    Failure(String),
}

impl OutputLine {
    pub fn text(&self) -> &str {
        match self {
            OutputLine::Plain(text) | OutputLine::Failure(text) => text,
        }
    }
}

/// Owns the tree for one run and feeds it one command line at a time.
#[derive(Debug, Default)]
pub struct Session {
    tree: DirectoryTree,
    echo: bool,
}

impl Session {
    pub fn new(echo: bool) -> Self {
        Self {
            tree: DirectoryTree::new(),
            echo,
        }
    }

    pub fn tree(&self) -> &DirectoryTree {
        &self.tree
    }

    /// Applies one input line. A bad line is reported and leaves the tree untouched.
    pub fn process_line(&mut self, line: &str) -> Vec<OutputLine> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Vec::new(),
            Err(err) => {
                debug!("Rejected line '{}': {:?}", line.trim(), err);
                let mut output = self.echoed(line.trim());
                output.push(OutputLine::Failure(err.to_string()));
                return output;
            }
        };

        let mut output = self.echoed(&command.to_string());
        match command.execute(&mut self.tree) {
            Ok(lines) => output.extend(lines.into_iter().map(OutputLine::Plain)),
            Err(err) => {
                debug!("Command '{}' failed: {:?}", command, err);
                output.push(OutputLine::Failure(err.to_string()));
            }
        }
        output
    }

    fn echoed(&self, text: &str) -> Vec<OutputLine> {
        if self.echo {
            vec![OutputLine::Plain(text.to_string())]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(output: &[OutputLine]) -> Vec<&str> {
        output.iter().map(OutputLine::text).collect()
    }

    #[test]
    fn blank_lines_produce_no_output() {
        let mut session = Session::new(true);
        assert!(session.process_line("").is_empty());
        assert!(session.process_line("   \t").is_empty());
    }

    #[test]
    fn echo_prints_canonical_command_first() {
        let mut session = Session::new(true);
        session.process_line("CREATE   fruits/apples");

        let output = session.process_line("  LIST ");
        assert_eq!(
            output,
            vec![
                OutputLine::Plain("LIST".to_string()),
                OutputLine::Plain("fruits".to_string()),
                OutputLine::Plain("  apples".to_string()),
            ]
        );
    }

    #[test]
    fn failures_are_reported_and_tree_is_kept() {
        let mut session = Session::new(false);
        session.process_line("CREATE a/b");
        let before = session.tree().clone();

        let output = session.process_line("MOVE a a/b");
        assert_eq!(
            output,
            vec![OutputLine::Failure(
                "Cannot move a - cannot move a directory inside itself".to_string()
            )]
        );
        assert_eq!(session.tree(), &before);
    }

    #[test]
    fn usage_errors_are_echoed_verbatim() {
        let mut session = Session::new(true);
        let output = session.process_line(" COPY a b ");
        assert_eq!(texts(&output), vec!["COPY a b", "Unknown command: COPY"]);
        assert!(matches!(output[1], OutputLine::Failure(_)));
    }

    #[test]
    fn processing_continues_after_a_failure() {
        let mut session = Session::new(false);
        session.process_line("DELETE nothing");
        session.process_line("CREATE something");

        assert_eq!(texts(&session.process_line("LIST")), vec!["something"]);
    }
}
