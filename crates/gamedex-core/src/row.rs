//! Quote-aware splitting of one raw CSV line into cells
//!
//! This is deliberately not a full CSV grammar. Single and double quotes are
//! two independent toggles: while either is open, commas do not split. Quote
//! characters stay in the cell text, and a line with an odd number of quotes
//! simply leaves the toggle open until the end of the line.

/// Maximum number of cells produced for one line.
///
/// Once this many cells exist, the remaining text is kept unsplit in the last
/// cell.
pub const MAX_COLUMNS: usize = 32;

/// Two-state quote tracker shared by the row parser and the list normalizer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuoteState {
    in_single: bool,
    in_double: bool,
}

impl QuoteState {
    /// Update the state for one character
    pub fn feed(&mut self, c: char) {
        match c {
            '\'' if !self.in_double => self.in_single = !self.in_single,
            '"' if !self.in_single => self.in_double = !self.in_double,
            _ => {}
        }
    }

    /// True while inside a single- or double-quoted span
    pub fn is_quoted(&self) -> bool {
        self.in_single || self.in_double
    }
}

/// Split `text` on commas that are outside quoted spans.
///
/// With `limit = Some(n)` at most `n` pieces are produced and the last one
/// holds everything after the `n - 1`th split. Pieces are not trimmed.
pub fn split_outside_quotes(text: &str, limit: Option<usize>) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut quotes = QuoteState::default();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if limit.is_some_and(|n| pieces.len() + 1 >= n) {
            break;
        }
        quotes.feed(c);
        if c == ',' && !quotes.is_quoted() {
            pieces.push(&text[start..i]);
            start = i + 1;
        }
    }

    pieces.push(&text[start..]);
    pieces
}

/// Trim leading and trailing control characters and spaces (bytes <= 32)
pub fn trim_cell(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Remove one layer of matching surrounding quotes (`"..."` or `'...'`)
pub fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Parse one raw line into trimmed cells, capped at [`MAX_COLUMNS`]
pub fn parse_row(line: &str) -> Vec<String> {
    split_outside_quotes(line, Some(MAX_COLUMNS))
        .into_iter()
        .map(|cell| trim_cell(cell).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_row() {
        assert_eq!(parse_row("1, foo ,100"), vec!["1", "foo", "100"]);
    }

    #[test]
    fn test_parse_row_keeps_quoted_commas() {
        let cells = parse_row(r#"10,"1,000 - 2,000",Free,"['English', 'French']""#);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1], r#""1,000 - 2,000""#);
        assert_eq!(cells[3], r#""['English', 'French']""#);
    }

    #[test]
    fn test_single_quote_inside_double_is_literal() {
        let cells = parse_row(r#"a,"it's, fine",b"#);
        assert_eq!(cells, vec!["a", r#""it's, fine""#, "b"]);
    }

    #[test]
    fn test_unbalanced_quote_swallows_rest_of_line() {
        let cells = parse_row("1,Baldur's Gate,2,3");
        assert_eq!(cells, vec!["1", "Baldur's Gate,2,3"]);
    }

    #[test]
    fn test_empty_cells_and_trailing_comma() {
        assert_eq!(parse_row("1,,\t,"), vec!["1", "", "", ""]);
        assert_eq!(parse_row(""), vec![""]);
    }

    #[test]
    fn test_column_cap_absorbs_remainder() {
        let line = (0..40).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let cells = parse_row(&line);
        assert_eq!(cells.len(), MAX_COLUMNS);
        assert_eq!(cells[30], "30");
        assert_eq!(cells[31], "31,32,33,34,35,36,37,38,39");
    }

    #[test]
    fn test_split_with_limit() {
        assert_eq!(split_outside_quotes("a,b,c", Some(2)), vec!["a", "b,c"]);
        assert_eq!(split_outside_quotes("a,b,c", None), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'Action'"), "Action");
        assert_eq!(strip_quotes("\"x\""), "x");
        assert_eq!(strip_quotes("'mixed\""), "'mixed\"");
        assert_eq!(strip_quotes("'"), "'");
        assert_eq!(strip_quotes("''"), "");
    }
}
