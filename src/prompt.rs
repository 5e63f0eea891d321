// src/prompt.rs

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

pub const YES_NO_RETRY: &str = "Please enter either 'yes'(or 'y') or 'no'(or 'n')";

/// A closed set of values the user may pick by name.
pub trait Choice: Sized + Copy + 'static {
    fn all() -> &'static [Self];

    /// Canonical display name; input is matched against it case-insensitively.
    fn label(&self) -> &'static str;

    fn parse(input: &str) -> Option<Self> {
        let wanted = input.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
    }
}

/// Parse a yes/no answer: `yes`/`y` → true, `no`/`n` → false.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one line. End of input is an error.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("reading answer from input")?;
        if n == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line)
    }

    /// Keep asking until `parse` accepts the answer, printing `retry` after each rejection.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            debug!(answer = answer.trim(), "rejected answer");
            writeln!(self.output, "{}", retry).context("writing retry message")?;
        }
    }

    pub fn choose<T: Choice>(&mut self, question: &str, retry: &str) -> Result<T> {
        self.ask_until(question, retry, T::parse)
    }

    pub fn yes_no(&mut self, question: &str) -> Result<bool> {
        self.ask_until(question, YES_NO_RETRY, parse_yes_no)
    }
}
