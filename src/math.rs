//! Fixed-width numeric domain shared by every strategy.
//!
//! All arithmetic here is `u64` with explicit wrapping. Every value up to
//! [`MAX_SAFE_INDEX`] is exact; past it the results are the true Fibonacci
//! numbers reduced modulo 2^64, identically for every strategy.

use tracing::debug;

use crate::fibonacci::FibonacciError;

/// Largest index whose Fibonacci value fits in a `u64`.
///
/// F(93) = 12200160415121876738. F(94) exceeds `u64::MAX` and wraps.
pub const MAX_SAFE_INDEX: u64 = 93;

/// Rejects negative indices, returning the index as unsigned otherwise.
pub fn validate(n: i64) -> Result<u64, FibonacciError> {
    u64::try_from(n).map_err(|_| {
        debug!(n, "rejected negative index");
        FibonacciError::InvalidIndex(n)
    })
}

// (F(n), F(n+1)) via the doubling identities, halving n at each level
pub fn doubling_pair(n: u64) -> (u64, u64) {
    if n == 0 {
        return (0, 1);
    }

    let (a, b) = doubling_pair(n >> 1);
    // F(2k) = F(k) * (2F(k+1) - F(k))
    let c = a.wrapping_mul(b.wrapping_mul(2).wrapping_sub(a));
    // F(2k+1) = F(k)^2 + F(k+1)^2
    let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));

    if n & 1 == 1 {
        (d, c.wrapping_add(d))
    } else {
        (c, d)
    }
}

/// Computes F(n) in O(log n) without touching any memo.
///
/// # Example
/// ```
/// use fibonacci_engine::math::fast_value;
/// assert_eq!(fast_value(50).unwrap(), 12_586_269_025);
/// ```
pub fn fast_value(n: i64) -> Result<u64, FibonacciError> {
    let index = validate(n)?;
    Ok(doubling_pair(index).0)
}

/// Number of decimal digits in `value`; zero has one digit.
pub fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_zero_and_positive() {
        assert_eq!(validate(0).unwrap(), 0);
        assert_eq!(validate(42).unwrap(), 42);
        assert_eq!(validate(i64::MAX).unwrap(), i64::MAX as u64);
    }

    #[test]
    fn validate_rejects_negative() {
        assert!(matches!(validate(-1), Err(FibonacciError::InvalidIndex(-1))));
        assert!(matches!(
            validate(i64::MIN),
            Err(FibonacciError::InvalidIndex(i64::MIN))
        ));
    }

    #[test]
    fn doubling_pair_small_indices() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        for (n, window) in expected.windows(2).enumerate() {
            assert_eq!(doubling_pair(n as u64), (window[0], window[1]), "n={n}");
        }
    }

    #[test]
    fn fast_value_at_safe_boundary() {
        assert_eq!(fast_value(MAX_SAFE_INDEX as i64).unwrap(), 12_200_160_415_121_876_738);
        assert_eq!(fast_value(92).unwrap(), 7_540_113_804_746_346_429);
    }

    #[test]
    fn fast_value_wraps_past_boundary() {
        // F(94) = 19740274219868223167, reduced mod 2^64
        assert_eq!(fast_value(94).unwrap(), 1_293_530_146_158_671_551);
    }

    #[test]
    fn fast_value_rejects_negative() {
        assert!(matches!(fast_value(-2), Err(FibonacciError::InvalidIndex(-2))));
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(6765), 4);
        assert_eq!(digit_count(832_040), 6);
        assert_eq!(digit_count(u64::MAX), 20);
    }
}
