/// Minimum total cost to buy every book on a shelf.
///
/// Books are bought one at a time from either end of the remaining run, at
/// that book's own price. Up to `k` times, the books at both ends may instead
/// be bought together for the flat `pair_cost`; the pair option is only on the
/// table once the remaining run holds at most two books, and covers a lone
/// final book as well.
///
/// Interval dynamic program over `min_cost[i][j][uses]`, the cheapest way to
/// clear the run `books[i..j]` with `uses` pair purchases still available.
/// O(n² · k) time and space.
///
/// An empty shelf costs 0.
///
/// # Example
/// ```
/// use algo_practice::books::min_purchase_cost;
/// // Buy the 4, then take the remaining pair for 3.
/// assert_eq!(min_purchase_cost(&[4, 5, 6], 3, 3), 7);
/// ```
pub fn min_purchase_cost(books: &[i64], pair_cost: i64, k: usize) -> i64 {
    let n = books.len();
    let mut min_cost = vec![vec![vec![0i64; k + 1]; n + 1]; n + 1];

    for len in 1..=n {
        for i in 0..=(n - len) {
            let j = i + len;
            for uses in 0..=k {
                let mut best = (min_cost[i + 1][j][uses] + books[i])
                    .min(min_cost[i][j - 1][uses] + books[j - 1]);
                if uses > 0 && j - i <= 2 {
                    best = best.min(min_cost[i + 1][j - 1][uses - 1] + pair_cost);
                }
                min_cost[i][j][uses] = best;
            }
        }
    }

    min_cost[0][n][k]
}
