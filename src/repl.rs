//! Read-eval-print loop over any line source
//!
//! [`run`] drives a [`Session`] with lines read from `input` and writes every result,
//! or the error message in its place, to `output`. The binary uses it with stdin for
//! interactive use and with a file for batch mode; tests use in-memory buffers.

use crate::session::Session;
use std::io::{self, BufRead, Write};

/// Prompt printed before each line in interactive mode
pub const PROMPT: &str = ">> ";

/// Line that ends the loop
pub const EXIT_COMMAND: &str = ".exit";

/// Counts gathered over one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-empty lines handed to the session
    pub processed: usize,
    /// Lines whose execution returned an error
    pub failed: usize,
}

impl Summary {
    /// Whether every processed line succeeded
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Run the loop until `input` is exhausted or a line starts with [`EXIT_COMMAND`]
///
/// Lines are trimmed and blank lines are skipped. A line that fails has its error
/// written out and the loop moves on. With `interactive` set a greeting is printed
/// first and [`PROMPT`] before every line.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop early.
///
/// # Examples
///
/// ```
/// use proposition::{repl, Config, Session};
/// use std::io::Cursor;
///
/// let session = Session::new(Config { colour: false, ..Default::default() });
/// let mut output = Vec::new();
/// let summary = repl::run(&session, Cursor::new("simplify !!a\n"), &mut output, false)?;
///
/// assert_eq!(String::from_utf8(output).unwrap(), "a\n");
/// assert_eq!(summary.processed, 1);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn run<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    mut output: W,
    interactive: bool,
) -> io::Result<Summary> {
    let mut summary = Summary::default();

    if interactive {
        writeln!(output, "Welcome to the proposition REPL!")?;
        writeln!(output, "Type \"{}\" or press Ctrl+D to quit.", EXIT_COMMAND)?;
        prompt(&mut output)?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with(EXIT_COMMAND) {
            break;
        }

        if !line.is_empty() {
            summary.processed += 1;
            match session.execute(line) {
                Ok(outcome) => {
                    let rendered = session.render(&outcome);
                    writeln!(output, "{}", rendered.trim_end_matches('\n'))?;
                }
                Err(err) => {
                    log::debug!("line {} failed: {}", summary.processed, err);
                    summary.failed += 1;
                    writeln!(output, "{}", err)?;
                }
            }
        }

        if interactive {
            prompt(&mut output)?;
        }
    }

    output.flush()?;
    Ok(summary)
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()
}
