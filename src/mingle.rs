use crate::error::Error;

/// Mingles two strings of equal character length into a new string.
///
/// For inputs `P = p1 p2 ... pn` and `Q = q1 q2 ... qn` the result is
/// `p1 q1 p2 q2 ... pn qn`. Lengths are counted in characters, not bytes, so
/// multi-byte UTF-8 input interleaves correctly.
///
/// # Parameters
/// - `p`: The first string.
/// - `q`: The second string.
///
/// # Returns
/// The mingled string, or [`Error::LengthMismatch`] when the inputs differ in
/// character count. A mismatch is a precondition violation and is reported
/// rather than silently truncating the longer input.
///
/// # Example
/// ```
/// use algo_practice::mingle::mingle;
/// assert_eq!(mingle("abcde", "pqrst").unwrap(), "apbqcrdset");
/// ```
pub fn mingle(p: &str, q: &str) -> Result<String, Error> {
    let p_len = p.chars().count();
    let q_len = q.chars().count();
    if p_len != q_len {
        return Err(Error::LengthMismatch {
            left: p_len,
            right: q_len,
        });
    }

    let mut mingled = String::with_capacity(p.len() + q.len());
    for (pc, qc) in p.chars().zip(q.chars()) {
        mingled.push(pc);
        mingled.push(qc);
    }
    Ok(mingled)
}
