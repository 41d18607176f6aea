use crate::error::Error;

/// Returns the maximum sum obtainable by selecting elements of `nums` such
/// that no two selected elements are adjacent.
///
/// This is the "house robber" dynamic program: with `prev` holding the best
/// total over the first i-1 elements and `current` the best over the first i,
/// the recurrence is `best(i) = max(best(i-2) + nums[i], best(i-1))`. Runs in
/// O(n) time and O(1) auxiliary space.
///
/// Negative values are legitimate input; the one-element case returns that
/// element even when negative, so the result is never conflated with an error
/// sentinel.
///
/// # Returns
/// The maximum sum, or [`Error::EmptyInput`] for an empty slice, where no
/// maximum is defined.
///
/// # Example
/// ```
/// use algo_practice::robber::max_non_adjacent_sum;
/// assert_eq!(max_non_adjacent_sum(&[2, 7, 9, 3, 1]), Ok(12));
/// ```
pub fn max_non_adjacent_sum(nums: &[i64]) -> Result<i64, Error> {
    match *nums {
        [] => Err(Error::EmptyInput),
        [only] => Ok(only),
        [first, second] => Ok(first.max(second)),
        [first, second, ref rest @ ..] => {
            let mut prev = first;
            let mut current = first.max(second);
            for &num in rest {
                let next = current.max(prev + num);
                prev = current;
                current = next;
            }
            Ok(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(max_non_adjacent_sum(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn single_element_is_returned_as_is() {
        assert_eq!(max_non_adjacent_sum(&[5]), Ok(5));
        assert_eq!(max_non_adjacent_sum(&[-4]), Ok(-4));
    }

    #[test]
    fn two_elements_pick_the_larger() {
        assert_eq!(max_non_adjacent_sum(&[3, 7]), Ok(7));
        assert_eq!(max_non_adjacent_sum(&[7, 3]), Ok(7));
    }

    #[test]
    fn classic_cases() {
        assert_eq!(max_non_adjacent_sum(&[2, 7, 9, 3, 1]), Ok(12));
        assert_eq!(max_non_adjacent_sum(&[1, 2, 3, 1]), Ok(4));
    }

    #[test]
    fn skipping_two_in_a_row_can_win() {
        // 10 + 10 beats any selection touching the middle.
        assert_eq!(max_non_adjacent_sum(&[10, 1, 1, 10]), Ok(20));
    }

    #[test]
    fn negative_values_are_handled() {
        assert_eq!(max_non_adjacent_sum(&[-1, -2, -3]), Ok(-1));
        assert_eq!(max_non_adjacent_sum(&[-5, 6, -5]), Ok(6));
    }
}
