use crate::error::Error;

/// Returns the largest sum of any non-empty contiguous subarray of `nums`.
///
/// Kadane's scan: keep the best sum of a subarray ending at the current
/// position, restarting whenever the running sum would drag a new element
/// down. O(n) time, O(1) auxiliary space.
///
/// # Returns
/// The maximum subarray sum, or [`Error::EmptyInput`] for an empty slice. An
/// all-negative input is fine and yields its largest element.
///
/// # Example
/// ```
/// use algo_practice::subarray::max_subarray_sum;
/// assert_eq!(max_subarray_sum(&[-9, 1, -5, 4, 3, -6, 7, 8, -2]), Ok(16));
/// ```
pub fn max_subarray_sum(nums: &[i64]) -> Result<i64, Error> {
    let (&first, rest) = nums.split_first().ok_or(Error::EmptyInput)?;
    let mut best_ending_here = first;
    let mut best = first;
    for &num in rest {
        best_ending_here = num.max(best_ending_here + num);
        best = best.max(best_ending_here);
    }
    Ok(best)
}
