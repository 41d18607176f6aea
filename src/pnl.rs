use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Maximizes the number of negative entries in a profit-and-loss series while
/// keeping every cumulative sum strictly positive.
///
/// Each entry of `pnl` contributes its magnitude, signed either way; the
/// function chooses signs, preferring negative, so that all prefix sums stay
/// above zero, and returns how many entries end up negative.
///
/// Greedy with a min-heap of the accepted negative contributions: take an
/// entry negative whenever the running sum allows it, and otherwise swap out
/// the most damaging accepted negative when the newcomer hurts less. Runs in
/// O(n log n) time.
///
/// An empty series has zero negative entries.
///
/// # Example
/// ```
/// use algo_practice::pnl::max_negative_entries;
/// assert_eq!(max_negative_entries(&[5, -3, 1, 1, 1, 1]), 4);
/// ```
pub fn max_negative_entries(pnl: &[i64]) -> usize {
    // Running sum of the chosen signs; must stay strictly positive.
    let mut acc: i64 = 0;
    // Negative contributions accepted so far, most damaging on top.
    let mut neg: BinaryHeap<Reverse<i64>> = BinaryHeap::new();

    for &num in pnl {
        let d = if num > 0 { -num } else { num };
        let worth_replacing = neg.peek().is_some_and(|&Reverse(worst)| worst < d);
        if acc + d > 0 {
            acc += d;
            neg.push(Reverse(d));
        } else if worth_replacing {
            // Turn the most damaging accepted negative back positive and
            // take this one negative instead; the sum strictly improves.
            if let Some(Reverse(worst)) = neg.pop() {
                acc -= 2 * worst;
            }
            acc += d;
            neg.push(Reverse(d));
        } else {
            acc -= d;
        }
    }

    // Accepted zero-magnitude entries sit in the heap but are not negative.
    neg.into_iter().filter(|&Reverse(d)| d < 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_positives_with_one_negative() {
        assert_eq!(max_negative_entries(&[5, -3, 1, 1, 1, 1]), 4);
    }

    #[test]
    fn simple_case() {
        assert_eq!(max_negative_entries(&[1, -2]), 0);
    }

    #[test]
    fn all_positives() {
        assert_eq!(max_negative_entries(&[5, 4, 1, 1, 1, 1, 1]), 5);
    }

    #[test]
    fn more_negatives_than_positives() {
        assert_eq!(max_negative_entries(&[7, -3, -2, -1, -1, -1]), 4);
    }

    #[test]
    fn mixed_case() {
        assert_eq!(max_negative_entries(&[5, -3, 1, -2]), 2);
    }

    #[test]
    fn empty_series() {
        assert_eq!(max_negative_entries(&[]), 0);
    }

    #[test]
    fn zero_entries_do_not_count_as_negative() {
        assert_eq!(max_negative_entries(&[5, 0]), 0);
        assert_eq!(max_negative_entries(&[5, 0, -3]), 1);
    }
}
