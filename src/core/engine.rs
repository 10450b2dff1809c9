use crate::core::trial_division::divisor_bound;
use crate::domain::model::Report;
use crate::domain::ports::PrimalityTest;
use crate::utils::error::{CheckError, Result};
use std::io::{BufRead, Write};

pub const DEFAULT_PROMPT: &str = "Enter a number: ";

/// Prompts for one integer, tests it and prints the answer.
pub struct CheckEngine<T: PrimalityTest> {
    checker: T,
    prompt: String,
}

impl<T: PrimalityTest> CheckEngine<T> {
    pub fn new(checker: T) -> Self {
        Self::with_prompt(checker, DEFAULT_PROMPT)
    }

    pub fn with_prompt(checker: T, prompt: impl Into<String>) -> Self {
        Self {
            checker,
            prompt: prompt.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Report> {
        output.write_all(self.prompt.as_bytes())?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|source| CheckError::ReadError { source })?;
        if read == 0 {
            return Err(CheckError::EmptyInput);
        }

        let number = parse_number(&line)?;
        tracing::debug!("Parsed {} (divisor bound {})", number, divisor_bound(number));

        let verdict = self.checker.classify(number);
        tracing::debug!("Verdict for {}: {:?}", number, verdict);

        let report = Report::new(number, verdict);
        writeln!(output, "{}", report)?;
        output.flush()?;

        Ok(report)
    }
}

/// Parses a base-10 `i64`, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| CheckError::ParseError {
            input: trimmed.to_string(),
            source,
        })
}
