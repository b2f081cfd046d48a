//! Interactive overwrite confirmation

use std::io::BufRead;
use std::path::Path;

use console::{style, Term};
use crudsmith::{parse_confirmation, ConfirmOverwrite, OverwriteDecision, ScaffoldError};
use dialoguer::Input;

/// Asks before replacing an existing file
///
/// On a terminal the question goes through dialoguer. When stderr is not a
/// terminal (piped input, CI) one line is read from stdin instead, so
/// `printf 'y\nn\n' | crudsmith ...` answers the prompts in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl ConfirmOverwrite for TerminalConfirm {
    fn confirm(&mut self, path: &Path) -> crudsmith::Result<OverwriteDecision> {
        let question = format!(
            "{} already exists. Overwrite? (y/n)",
            style(path.display()).yellow()
        );

        if !Term::stderr().is_term() {
            eprintln!("{question}");
            return read_confirmation(&mut std::io::stdin().lock());
        }

        let answer: String = Input::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;

        parse_confirmation(&answer)
    }
}

/// Read one answer line from `reader`; end of input counts as an empty answer
fn read_confirmation(reader: &mut impl BufRead) -> crudsmith::Result<OverwriteDecision> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| ScaffoldError::Prompt(e.to_string()))?;
    parse_confirmation(&line)
}
