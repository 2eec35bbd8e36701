// Interaction surface for the CLI. Every prompt and every line printed to
// the operator goes through the `Console` trait, so the whole interactive
// flow can be driven by a scripted input sequence in tests instead of a
// real terminal.

use anyhow::Result;
#[cfg(test)]
use anyhow::Context;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use dialoguer::Input;
use std::io::stderr;

/// One line in, lines out. `prompt` shows the given text and reads a single
/// line (which may be empty); `say` prints an information line; `warn`
/// prints a diagnostic.
pub trait Console {
    fn prompt(&mut self, text: &str) -> Result<String>;
    fn say(&mut self, text: &str);
    fn warn(&mut self, text: &str);
}

/// The real terminal. Prompts go through `dialoguer` so the operator gets
/// line editing for free; diagnostics are printed in yellow on stderr.
#[derive(Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }
}

impl Console for Terminal {
    fn prompt(&mut self, text: &str) -> Result<String> {
        let line = Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn say(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn(&mut self, text: &str) {
        let _ = execute!(
            stderr(),
            SetForegroundColor(Color::Yellow),
            Print(text),
            Print("\n"),
            ResetColor
        );
    }
}

/// Deterministic console for tests: answers prompts from a fixed script and
/// records everything that would have been shown to the operator.
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        ScriptedConsole {
            inputs: lines.iter().map(|line| line.to_string()).collect(),
            prompts: Vec::new(),
            notes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Everything printed via `say`, joined for substring assertions.
    pub fn note_text(&self) -> String {
        self.notes.join("\n")
    }

    /// Input lines the script still holds.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        self.prompts.push(text.to_string());
        self.inputs.pop_front().context("script ran out of input lines")
    }

    fn say(&mut self, text: &str) {
        self.notes.push(text.to_string());
    }

    fn warn(&mut self, text: &str) {
        self.warnings.push(text.to_string());
    }
}
