//! Field normalizers
//!
//! Every function here is total: malformed input degrades to a documented
//! default or sentinel instead of returning an error.

use crate::row::{split_outside_quotes, strip_quotes, trim_cell};

/// Sentinel for an unknown integer score
pub const UNKNOWN_SCORE: i64 = -1;

/// Sentinel for an unknown or not yet determined user score
pub const UNKNOWN_USER_SCORE: f32 = -1.0;

/// Lower-cased prices that mean "costs nothing"
const FREE_PRICES: &[&str] = &["free to play", "free", "gratuito"];

/// Parse a leading signed decimal integer after optional whitespace.
///
/// Returns `None` when no digits follow. Values outside `i64` saturate.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(|c: char| c <= ' ');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if run.is_empty() {
        return None;
    }

    let value = run.into_iter().fold(0i64, |acc, d| {
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(d)
        } else {
            acc.saturating_add(d)
        }
    });
    Some(value)
}

/// Integer with a default for input that has no leading digits
pub fn parse_int_or(s: &str, default: i64) -> i64 {
    leading_int(s).unwrap_or(default)
}

/// Float built from the digits and the first decimal mark of `s`.
///
/// Both `.` and `,` count as a decimal mark. Every other character,
/// including signs and any later decimal marks, is ignored.
pub fn parse_float_or(s: &str, default: f32) -> f32 {
    let mut buf = String::with_capacity(s.len());
    let mut seen_mark = false;

    for c in s.chars() {
        match c {
            '0'..='9' => buf.push(c),
            '.' | ',' if !seen_mark => {
                seen_mark = true;
                buf.push('.');
            }
            _ => {}
        }
    }

    if buf.is_empty() {
        return default;
    }
    buf.parse().unwrap_or(default)
}

/// Owner count taken from the first run of digits anywhere in `s`.
///
/// Thousands separators are dropped first, so `"1,000,000 - 2,000,000"`
/// gives `1000000`.
pub fn normalize_owners(s: &str) -> u64 {
    s.bytes()
        .filter(|&b| b != b',')
        .skip_while(|b| !b.is_ascii_digit())
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

/// Price, with `0.0` for "free" synonyms and unparseable input
pub fn normalize_price(s: &str) -> f32 {
    let lowered = s.to_lowercase();
    if FREE_PRICES.contains(&trim_cell(&lowered)) {
        return 0.0;
    }
    parse_float_or(s, 0.0)
}

/// User score, or [`UNKNOWN_USER_SCORE`] for empty input and `"tbd"`
pub fn normalize_user_score(s: &str) -> f32 {
    let lowered = s.to_lowercase();
    let lowered = trim_cell(&lowered);
    if lowered.is_empty() || lowered == "tbd" {
        return UNKNOWN_USER_SCORE;
    }
    parse_float_or(lowered, UNKNOWN_USER_SCORE)
}

/// Join items into the canonical `[a, b, c]` form
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Trim, unquote and drop empty items
fn clean_items<'a, I>(parts: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(|part| strip_quotes(trim_cell(part)))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Normalize a list cell such as `"['Action', 'Indie']"` into `[Action, Indie]`.
///
/// Only the text between the first `[` and the last `]` is used when both are
/// present. Commas inside quoted items do not split.
pub fn normalize_list(s: &str) -> String {
    let source = match (s.find('['), s.rfind(']')) {
        (Some(open), Some(close)) if close > open => &s[open + 1..close],
        _ => s,
    };

    let items = clean_items(split_outside_quotes(source, None));

    // A whole list quoted as one string ends up as a single item
    if let [only] = items.as_slice() {
        if only.contains(',') {
            return join_list(&clean_items(only.split(',')));
        }
    }

    join_list(&items)
}

/// Normalize a plain comma-separated company cell into bracket form.
///
/// Commas always split here, even inside quotes. A value that is already in
/// bracket form is unwrapped first so the result is stable when re-applied.
pub fn normalize_companies(s: &str) -> String {
    let trimmed = trim_cell(s);
    let source = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    join_list(&clean_items(source.split(',')))
}
