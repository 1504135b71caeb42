//! Operator-facing output and the yes/no confirmation.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::commit::CommitMessage;

/// Question asked before committing.
pub const CONFIRM_QUESTION: &str = "Do you want to use this commit message? (y/n)";

const SEPARATOR: &str = "--------------------------------------------------";

/// Where the workflow sends status text and asks for confirmation.
pub trait Operator {
    /// Print a status line.
    fn notice(&mut self, text: &str);

    /// Show the suggested commit message.
    fn present(&mut self, message: &CommitMessage);

    /// Ask `question` and block until a line of input arrives.
    ///
    /// End of input yields an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Whether an answer counts as consent. Only `y` (any case) does.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// The message bracketed by separator lines under a heading.
pub fn render_message(message: &CommitMessage) -> String {
    format!("\nSuggested commit message:\n{SEPARATOR}\n{message}\n{SEPARATOR}")
}

/// Print `question` to `writer` and read one line from `reader`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled answer declines instead of failing the run.
pub fn read_answer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<String> {
    write!(writer, "{question}: ")?;
    writer.flush()?;

    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    let line = String::from_utf8_lossy(&line);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// [`Operator`] on the process's standard streams.
///
/// Uses an interactive line editor when stdin is a terminal and a plain line
/// read otherwise, so answers can be piped in.
#[derive(Debug, Default)]
pub struct ConsoleOperator;

impl Operator for ConsoleOperator {
    fn notice(&mut self, text: &str) {
        println!("{text}");
    }

    fn present(&mut self, message: &CommitMessage) {
        println!("{}", render_message(message));
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(io::Error::other)
        } else {
            read_answer(&mut stdin.lock(), &mut io::stdout(), question)
        }
    }
}
