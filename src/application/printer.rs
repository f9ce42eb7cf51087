use std::io::{self, Write};

use colored::Colorize;

use crate::application::OutputLine;

/// Writes output lines, colouring failures when styling is on.
pub struct Printer<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn print(&mut self, line: &OutputLine) -> io::Result<()> {
        match line {
            OutputLine::Failure(text) if self.styled => writeln!(self.out, "{}", text.red()),
            _ => writeln!(self.out, "{}", line.text()),
        }
    }

    pub fn print_all<'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a OutputLine>,
    ) -> io::Result<()> {
        for line in lines {
            self.print(line)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyled_output_is_plain_text() {
        let mut printer = Printer::new(Vec::new(), false);
        printer
            .print_all(&[
                OutputLine::Plain("fruits".to_string()),
                OutputLine::Failure("Cannot delete x - x does not exist".to_string()),
            ])
            .expect("Failed to write output");

        let written = String::from_utf8(printer.into_inner()).expect("Output is not UTF-8");
        assert_eq!(written, "fruits\nCannot delete x - x does not exist\n");
    }

    #[test]
    fn styled_output_only_touches_failures() {
        colored::control::set_override(true);
        let mut printer = Printer::new(Vec::new(), true);
        printer
            .print_all(&[
                OutputLine::Plain("fruits".to_string()),
                OutputLine::Failure("oops".to_string()),
            ])
            .expect("Failed to write output");

        let written = String::from_utf8(printer.into_inner()).expect("Output is not UTF-8");
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("fruits"));
        let failure = lines.next().expect("failure line missing");
        assert!(failure.contains("oops"));
        assert!(failure.starts_with("\u{1b}["));
    }
}
