//! Line-oriented console prompting over arbitrary reader/writer pairs

use std::io::{BufRead, Write};

use zeroize::Zeroizing;

use crate::error::{TrackerError, TrackerResult};

/// Writes prompts to `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Read secrets from the terminal without echo instead of from `input`
    pub fn hide_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    /// Print `prompt` (no newline added) and read one line
    ///
    /// The line terminator is stripped. Fails with `EndOfInput` once the
    /// reader is exhausted.
    pub fn ask(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TrackerError::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Like `ask`, but the answer is wiped from memory when dropped
    pub fn ask_secret(&mut self, prompt: &str) -> TrackerResult<Zeroizing<String>> {
        if !self.hide_secrets {
            return self.ask(prompt).map(Zeroizing::new);
        }

        self.output.flush()?;
        rpassword::prompt_password(prompt)
            .map(Zeroizing::new)
            .map_err(|e| TrackerError::Io(format!("Failed to read password: {}", e)))
    }

    /// Print `message` followed by a newline
    pub fn say(&mut self, message: impl AsRef<str>) -> TrackerResult<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Print pre-formatted, newline-terminated text as is
    pub fn print(&mut self, text: &str) -> TrackerResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
