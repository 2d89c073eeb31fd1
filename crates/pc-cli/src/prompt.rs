//! Interactive yes/no prompts.

use std::io::{BufRead, Write};

use pc_store::Confirm;

/// Asks on `output` and reads answers from `input` until one is yes or no.
///
/// End of input counts as no.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Prompter<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if !prompt.is_empty() {
            let _ = writeln!(self.output, "{prompt}");
            let _ = self.output.flush();
        }
        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return false,
                Ok(_) => {}
            }
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => {}
            }
        }
    }
}
