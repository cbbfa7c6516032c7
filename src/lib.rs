//! # Fibonacci Engine
//!
//! This library computes Fibonacci numbers over fixed-width `u64` arithmetic using three
//! strategies that share one validation and overflow policy. Results are available as single
//! values, as sequences, and as a value annotated with parity and digit count.
//!
//! ## Key Features
//! - **Memoized Linear Scan**: `FibonacciEngine::fibonacci` keeps a growing memo; repeated or
//!   smaller queries are O(1) and larger ones resume from the highest cached index.
//! - **Sequence Generation**: `fibonacci::sequence` builds the first `n` values iteratively,
//!   independent of any memo.
//! - **Fast Doubling**: `math::fast_value` computes a single value in O(log n) with the doubling
//!   identities and no memo.
//! - **Metadata**: `FibonacciEngine::fibonacci_with_info` reports parity and decimal digit count.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError::InvalidIndex`: the only failure; raised for a negative index before any
//!   computation or memo mutation.
//!
//! ### Overflow
//! Every value up to `MAX_SAFE_INDEX` (93) is exact. Past it all strategies silently wrap modulo
//! 2^64 and still agree with each other. `FibonacciEngine::checked_fibonacci` reports `None`
//! there instead of a wrapped value.
//!
//! ### Engines
//! Each `FibonacciEngine` owns its memo, so independent instances never interfere. The free
//! functions in this module all go through `default_engine()`, a single process-wide instance
//! created on first use that lives until the process exits and is never reset.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_engine::{fibonacci, fibonacci_fast, fibonacci_sequence, FibonacciEngine};
//! assert_eq!(fibonacci(10).unwrap(), 55);
//! assert_eq!(fibonacci_fast(93).unwrap(), 12_200_160_415_121_876_738);
//! assert_eq!(fibonacci_sequence(5).unwrap(), vec![0, 1, 1, 2, 3]);
//!
//! let engine = FibonacciEngine::new();
//! assert!(engine.fibonacci(-1).is_err());
//! ```

use std::sync::OnceLock;

pub mod fibonacci;
pub mod math;

pub use fibonacci::{FibonacciEngine, FibonacciError, FibonacciInfo, ParseStrategyError, Strategy};
pub use math::MAX_SAFE_INDEX;

static DEFAULT_ENGINE: OnceLock<FibonacciEngine> = OnceLock::new();

/// The process-wide engine behind the free functions.
///
/// Created on first use and kept for the life of the process; its memo is never reset.
pub fn default_engine() -> &'static FibonacciEngine {
    DEFAULT_ENGINE.get_or_init(FibonacciEngine::new)
}

/// F(n) from the default engine's memo.
pub fn fibonacci(n: i64) -> Result<u64, FibonacciError> {
    default_engine().fibonacci(n)
}

/// The first `n` Fibonacci numbers.
pub fn fibonacci_sequence(n: i64) -> Result<Vec<u64>, FibonacciError> {
    default_engine().fibonacci_sequence(n)
}

/// F(n) with parity and digit count, via the default engine.
pub fn fibonacci_with_info(n: i64) -> Result<FibonacciInfo, FibonacciError> {
    default_engine().fibonacci_with_info(n)
}

/// F(n) by fast doubling.
pub fn fibonacci_fast(n: i64) -> Result<u64, FibonacciError> {
    default_engine().fibonacci_fast(n)
}
