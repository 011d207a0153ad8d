//! Yes/no and free-text prompting
//!
//! Interactive terminals get `inquire` dialogs. When stdin is not a terminal (piped
//! input, CI) a plain line is read instead, with the same `[yes]` default: an empty
//! answer or `y`/`yes` in any case confirms, end of input declines.

use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};

use crate::error::{InstallerError, Result};

/// Source of answers to the questions asked during a run
pub trait Prompter {
    /// Ask a question whose default answer is yes
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Ask for a value; `None` when nothing was entered
    fn ask_text(&mut self, message: &str, secret: bool) -> Result<Option<String>>;
}

/// Confirm unless `assume_yes` is set, in which case the question is echoed and answered
pub fn confirm_or_assume(prompter: &mut dyn Prompter, message: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        println!("{message} [yes]: yes");
        return Ok(true);
    }
    prompter.confirm(message)
}

/// Whether a typed answer accepts a `[yes]`-default question
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompts on the controlling terminal, or reads lines from stdin when there is none
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn interactive() -> bool {
        io::stdin().is_terminal()
    }

    fn read_line(message: &str) -> Result<Option<String>> {
        print!("{message} ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // EOF: stdin closed
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !Self::interactive() {
            return Ok(Self::read_line(&format!("{message} [yes]:"))?
                .is_some_and(|answer| is_affirmative(&answer)));
        }

        match Confirm::new(message).with_default(true).prompt() {
            Ok(answer) => Ok(answer),
            // Ctrl-C or Esc declines; nothing is in flight at a prompt
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => Ok(false),
            Err(e) => Err(InstallerError::from(e)),
        }
    }

    fn ask_text(&mut self, message: &str, secret: bool) -> Result<Option<String>> {
        let answer = if !Self::interactive() {
            Self::read_line(message)?
        } else {
            let prompted = if secret {
                Password::new(message)
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()
            } else {
                Text::new(message).prompt()
            };
            match prompted {
                Ok(answer) => Some(answer),
                Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => None,
                Err(e) => return Err(InstallerError::from(e)),
            }
        };

        Ok(answer.filter(|value| !value.trim().is_empty()))
    }
}
