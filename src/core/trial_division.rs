//! Deterministic primality by trial division over odd divisors.
//!
//! All bounds are computed with integer arithmetic. The loop condition
//! `d <= n / d` is the same test as `d * d <= n` for positive values and
//! cannot overflow, so inputs up to `i64::MAX` are handled.

use crate::domain::model::Verdict;
use crate::domain::ports::PrimalityTest;

/// Returns `true` if `n` is prime.
pub fn is_prime(n: i64) -> bool {
    classify(n).is_prime()
}

/// Classifies `n`, reporting the smallest divisor for composites.
pub fn classify(n: i64) -> Verdict {
    if n < 2 {
        return Verdict::BelowTwo;
    }
    if n % 2 == 0 {
        return if n == 2 {
            Verdict::Prime
        } else {
            Verdict::Composite { divisor: 2 }
        };
    }

    let mut d: i64 = 3;
    while d <= n / d {
        if n % d == 0 {
            return Verdict::Composite { divisor: d };
        }
        d += 2;
    }
    Verdict::Prime
}

/// Integer square root of `n`, the largest candidate trial division needs.
/// Zero for `n < 1`.
pub fn divisor_bound(n: i64) -> i64 {
    if n < 1 {
        return 0;
    }
    let n = n as u64;
    let mut x = n;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x as i64
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn classify(&self, n: i64) -> Verdict {
        classify(n)
    }
}
