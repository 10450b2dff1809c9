use std::fmt;

/// Outcome of testing a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Anything below 2, including zero and negatives.
    BelowTwo,
    Prime,
    /// `divisor` is the smallest divisor greater than 1.
    Composite { divisor: i64 },
}

impl Verdict {
    pub fn is_prime(&self) -> bool {
        matches!(self, Verdict::Prime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub number: i64,
    pub verdict: Verdict,
}

impl Report {
    pub fn new(number: i64, verdict: Verdict) -> Self {
        Self { number, verdict }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verdict.is_prime() {
            write!(f, "{} is a prime number", self.number)
        } else {
            write!(f, "{} is not a prime number", self.number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        assert_eq!(Report::new(17, Verdict::Prime).to_string(), "17 is a prime number");
        assert_eq!(
            Report::new(18, Verdict::Composite { divisor: 2 }).to_string(),
            "18 is not a prime number"
        );
        assert_eq!(Report::new(-7, Verdict::BelowTwo).to_string(), "-7 is not a prime number");
    }
}
