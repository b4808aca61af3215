use std::io::{BufRead, Write};

use crate::error::{CatalogError, Result};

/// Line-oriented console the session talks through. Input and output are
/// injected so tests can drive it with a scripted sequence of lines.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CatalogError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt_non_blank(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("Input can not be blank")?;
        }
    }

    /// Like `prompt_non_blank`, but also refuses text containing `delimiter`,
    /// which the movie file can not store.
    pub fn prompt_field(&mut self, prompt: &str, delimiter: char) -> Result<String> {
        loop {
            let answer = self.prompt_non_blank(prompt)?;
            if !answer.contains(delimiter) {
                return Ok(answer);
            }
            self.say(&format!("Input can not contain '{}'", delimiter))?;
        }
    }

    pub fn prompt_positive_integer(&mut self, prompt: &str) -> Result<u64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i128>() {
                Ok(n) if n < 1 => self.say("Number must be >= 1")?,
                Ok(n) => match u64::try_from(n) {
                    Ok(n) => return Ok(n),
                    Err(_) => self.say("Invalid input; enter a valid number")?,
                },
                Err(_) => self.say("Invalid input; enter a valid number")?,
            }
        }
    }
}
