use num_bigint::BigUint;
use num_traits::One;

use crate::math::Matrix2;

/// Counts the distinct ways to climb a staircase of `n` steps, taking 1 or 2
/// steps at a time.
///
/// The count follows the Fibonacci-style recurrence f(1) = 1, f(2) = 2,
/// f(k) = f(k-1) + f(k-2), computed iteratively with two running values in
/// O(n) time and O(1) auxiliary space. The value is F(n+1) in the standard
/// Fibonacci numbering and overflows `u64` near n = 92, hence the `BigUint`
/// return type.
///
/// By convention `count_ways(0)` is 1: there is exactly one way to climb no
/// steps, which is to stay where you are. This also keeps the recurrence
/// consistent, since f(0) + f(1) = f(2).
///
/// # Example
/// ```
/// use algo_practice::stairs::count_ways;
/// use num_bigint::BigUint;
/// assert_eq!(count_ways(4), BigUint::from(5u32));
/// ```
pub fn count_ways(n: u64) -> BigUint {
    let mut current = BigUint::one();
    let mut prev = BigUint::one();
    for _ in 1..n {
        // invariant: current == f(i), prev == f(i-1)
        let next = &current + &prev;
        prev = std::mem::replace(&mut current, next);
    }
    current
}

/// Computes the same count as [`count_ways`] in O(log n) time using 2x2 matrix
/// exponentiation.
///
/// The staircase count for `n` steps equals F(n+1), which is the top-left
/// entry of the n-th power of the Fibonacci companion matrix.
pub fn count_ways_matrix(n: u64) -> BigUint {
    Matrix2::fibonacci_base().pow(n).a
}

/// Generates the staircase counts for 0, 1, ..., `limit - 1` steps.
///
/// Runs in O(limit) time and O(limit) space. Returns an empty vector when
/// `limit` is 0.
pub fn count_ways_sequence(limit: usize) -> Vec<BigUint> {
    let mut sequence = Vec::with_capacity(limit);
    if limit >= 1 {
        sequence.push(BigUint::one()); // f(0)
    }
    if limit >= 2 {
        sequence.push(BigUint::one()); // f(1)
    }
    for i in 2..limit {
        let next = &sequence[i - 1] + &sequence[i - 2];
        sequence.push(next);
    }
    sequence
}
