use std::io::{BufRead, Write};

use log::debug;
use student_records_core::error::Result;
use student_records_core::money::Money;

const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid positive number.";

/// Turns raw input bytes into text without its line terminator.
///
/// Invalid UTF-8 is replaced rather than rejected, so a stray byte in one
/// answer cannot end the session.
pub fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Reads answers to prompts from `input`, writing the prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The stream prompts are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompts once and returns the answer, or `None` at end of input.
    ///
    /// Only the line terminator is removed; other whitespace is part of the
    /// answer. Invalid UTF-8 is decoded lossily.
    pub fn prompt_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("End of input while prompting `{}`", message.trim_end());
            return Ok(None);
        }

        Ok(Some(decode_line(&line)))
    }

    /// Prompts until the answer is a positive amount, or `None` at end of input.
    ///
    /// Amounts are exact to the cent: exponent forms such as `1e3` and more
    /// than two decimals such as `1.234` are refused and asked again.
    pub fn prompt_amount(&mut self, message: &str) -> Result<Option<Money>> {
        loop {
            let Some(answer) = self.prompt_line(message)? else {
                return Ok(None);
            };

            match answer.parse::<Money>() {
                Ok(amount) if amount.is_positive() => return Ok(Some(amount)),
                _ => writeln!(self.output, "{INVALID_AMOUNT_MESSAGE}")?,
            }
        }
    }
}
