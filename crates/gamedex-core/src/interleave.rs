//! Character interleaving of token pairs

/// Alternate the characters of `a` and `b`, then append the rest of the
/// longer one: `("abc", "12345")` gives `"a1b2c345"`.
pub fn interleave(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    let mut left = a.chars();
    let mut right = b.chars();

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                out.push(x);
                out.push(y);
            }
            (Some(x), None) => {
                out.push(x);
                out.extend(left);
                break;
            }
            (None, Some(y)) => {
                out.push(y);
                out.extend(right);
                break;
            }
            (None, None) => break,
        }
    }

    out
}

/// Interleave consecutive whitespace-separated token pairs of `input`.
///
/// A trailing token without a partner is ignored.
pub fn interleave_pairs(input: &str) -> Vec<String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    tokens
        .chunks_exact(2)
        .map(|pair| interleave(pair[0], pair[1]))
        .collect()
}
