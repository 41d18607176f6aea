//! # Algorithm Practice Library
//!
//! This library collects classic interview and coursework exercises as small, pure
//! functions: string mingling, staircase counting, a handful of dynamic-programming
//! problems, and binary-tree measurements. Every function is stateless and synchronous,
//! takes borrowed or `Copy` inputs, and allocates a fresh output, so repeated calls with
//! the same input always produce the same result.
//!
//! ## Key Features
//! - **Explicit errors**: validation failures (mismatched lengths, empty input) surface
//!   as the [`Error`] enum rather than sentinel values such as `-1`.
//! - **Arbitrary precision where it matters**: the staircase counter grows like the
//!   Fibonacci sequence and would overflow `u64` near n = 92, so it returns a
//!   `num_bigint::BigUint`.
//! - **Matrix exponentiation**: an O(log n) fast path for the staircase counter, backed
//!   by 2x2 matrix squaring over big integers.
//!
//! ## Overview of Functions
//!
//! #### `mingle::mingle`
//! Interleaves two strings of equal character length, alternating one character from
//! each. Unequal lengths are a precondition violation and return an error.
//!
//! #### `stairs::count_ways`
//! Counts the distinct ways to climb an `n`-step staircase taking 1 or 2 steps at a
//! time, iteratively in O(n) time and O(1) space. `stairs::count_ways_matrix` computes
//! the same value in O(log n) via matrix exponentiation, and
//! `stairs::count_ways_sequence` materializes a prefix of the sequence.
//!
//! #### `robber::max_non_adjacent_sum`
//! Maximum sum of a subset of a sequence with no two chosen elements adjacent, the
//! "house robber" recurrence with two running totals.
//!
//! #### `tree::max_depth`
//! Height of a binary tree in nodes, by pure recursive traversal. `tree::is_balanced`
//! checks that no node's children differ in height by more than one.
//!
//! #### `subarray::max_subarray_sum`
//! Largest sum of any non-empty contiguous subarray, via Kadane's scan.
//!
//! #### `pnl::max_negative_entries`
//! Greedy heap algorithm: flip as many entries of a profit-and-loss series negative as
//! possible while keeping every prefix sum strictly positive.
//!
//! #### `books::min_purchase_cost`
//! Interval dynamic program for buying books from either end of a shelf, with a limited
//! number of discounted pair purchases.
//!
//! ## Usage Example
//! ```rust
//! use algo_practice::{robber, stairs};
//! use num_bigint::BigUint;
//!
//! assert_eq!(stairs::count_ways(10), BigUint::from(89u32));
//! assert_eq!(robber::max_non_adjacent_sum(&[2, 7, 9, 3, 1]), Ok(12));
//! ```

pub mod books;
pub mod error;
pub mod math;
pub mod mingle;
pub mod pnl;
pub mod robber;
pub mod stairs;
pub mod subarray;
pub mod tree;

pub use error::Error;
