use std::fmt;
use std::str::FromStr;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::math::{self, digit_count, validate, MAX_SAFE_INDEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    #[error("n must be a non-negative integer (got {0})")]
    InvalidIndex(i64),
}

/// Value plus derived metadata for one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FibonacciInfo {
    pub n: u64,
    pub value: u64,
    pub is_even: bool,
    #[serde(rename = "digits")]
    pub digit_count: u32,
}

/// Which single-value algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Linear scan backed by the engine's memo.
    Memoized,
    /// Fast doubling, O(log n), no memo.
    Fast,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected \"memoized\" or \"fast\")")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "fast" => Ok(Strategy::Fast),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Memoized => f.write_str("memoized"),
            Strategy::Fast => f.write_str("fast"),
        }
    }
}

/// Generates the first `n` Fibonacci numbers.
///
/// Each call builds a fresh vector and never consults an engine's memo.
///
/// # Parameters
/// - `n`: The number of Fibonacci numbers to produce.
///
/// # Returns
/// A vector of exactly `n` values, F(0) through F(n-1).
///
/// # Example
/// ```
/// use fibonacci_engine::fibonacci;
/// assert_eq!(fibonacci::sequence(6).unwrap(), vec![0, 1, 1, 2, 3, 5]);
/// ```
pub fn sequence(n: i64) -> Result<Vec<u64>, FibonacciError> {
    let len = validate(n)?;
    let mut fib_sequence = Vec::with_capacity(initial_capacity(len));

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..len {
        fib_sequence.push(a);
        (a, b) = (b, a.wrapping_add(b));
    }

    Ok(fib_sequence)
}

// Reserve at most the exact prefix; longer sequences grow as they are built.
fn initial_capacity(len: u64) -> usize {
    len.min(MAX_SAFE_INDEX + 1) as usize
}

/// Fibonacci calculator owning a growing memo of computed values.
///
/// The memo is dense: entry `i` holds F(i), so it always covers every index
/// from 0 up to the highest index requested so far. It starts seeded with
/// F(0) and F(1) and only ever grows. Access goes through a mutex held for
/// the whole check-then-extend step, so one engine may be shared between
/// threads by reference.
///
/// Values past [`MAX_SAFE_INDEX`] wrap modulo 2^64.
#[derive(Debug)]
pub struct FibonacciEngine {
    memo: Mutex<Vec<u64>>,
}

impl Default for FibonacciEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciEngine {
    pub fn new() -> Self {
        Self {
            memo: Mutex::new(vec![0, 1]),
        }
    }

    /// Returns F(n), extending the memo on a miss.
    ///
    /// A miss resumes from the two highest cached values rather than from
    /// zero, and records every index it passes through. Repeated or smaller
    /// queries are answered straight from the memo.
    ///
    /// The memo costs 8 bytes per index up to the highest one requested, so
    /// very large indices exhaust memory here; use
    /// [`FibonacciEngine::fibonacci_fast`] for those.
    pub fn fibonacci(&self, n: i64) -> Result<u64, FibonacciError> {
        let index = validate(n)?;
        let mut memo = self.memo.lock();

        if let Some(&value) = usize::try_from(index).ok().and_then(|i| memo.get(i)) {
            trace!(index, "memo hit");
            return Ok(value);
        }

        // seeded with F(0), F(1): at least two entries
        let from = memo.len();
        let mut a = memo[from - 2];
        let mut b = memo[from - 1];
        while (memo.len() as u64) <= index {
            (a, b) = (b, a.wrapping_add(b));
            memo.push(b);
        }

        debug!(from, to = index, "extended memo");
        Ok(b)
    }

    /// Same as [`sequence`]; the memo is neither read nor written.
    pub fn fibonacci_sequence(&self, n: i64) -> Result<Vec<u64>, FibonacciError> {
        sequence(n)
    }

    /// Same as [`math::fast_value`]; the memo is neither read nor written.
    pub fn fibonacci_fast(&self, n: i64) -> Result<u64, FibonacciError> {
        math::fast_value(n)
    }

    /// Returns F(n) together with its parity and decimal digit count.
    ///
    /// The value comes from the memoized path.
    ///
    /// # Example
    /// ```
    /// use fibonacci_engine::{FibonacciEngine, FibonacciInfo};
    /// let engine = FibonacciEngine::new();
    /// assert_eq!(
    ///     engine.fibonacci_with_info(10).unwrap(),
    ///     FibonacciInfo { n: 10, value: 55, is_even: false, digit_count: 2 }
    /// );
    /// ```
    pub fn fibonacci_with_info(&self, n: i64) -> Result<FibonacciInfo, FibonacciError> {
        let index = validate(n)?;
        let value = self.fibonacci(n)?;
        Ok(FibonacciInfo {
            n: index,
            value,
            is_even: value % 2 == 0,
            digit_count: digit_count(value),
        })
    }

    pub fn value_with(&self, strategy: Strategy, n: i64) -> Result<u64, FibonacciError> {
        match strategy {
            Strategy::Memoized => self.fibonacci(n),
            Strategy::Fast => self.fibonacci_fast(n),
        }
    }

    /// Like [`FibonacciEngine::fibonacci`], but `Ok(None)` instead of a
    /// wrapped value when n is past [`MAX_SAFE_INDEX`].
    pub fn checked_fibonacci(&self, n: i64) -> Result<Option<u64>, FibonacciError> {
        if validate(n)? > MAX_SAFE_INDEX {
            return Ok(None);
        }
        self.fibonacci(n).map(Some)
    }

    // number of memo entries, including the two seeds
    pub fn cached_len(&self) -> usize {
        self.memo.lock().len()
    }
}
