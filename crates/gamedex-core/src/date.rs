//! Release date normalization to `DD/MM/YYYY`
//!
//! Accepted shapes, tried in this order:
//! - `13/08/2018`, `1 / 2 / 2018` (day/month/year numbers)
//! - `Aug 13, 2018` and `13 Aug, 2018`
//! - `Nov 2015`
//! - `2015`
//!
//! Anything else falls back to `01/01/1970`, with whatever parts could be
//! recovered filled in.

use crate::row::{strip_quotes, trim_cell};

const DEFAULT_DAY: &str = "01";
const DEFAULT_MONTH: &str = "01";
const DEFAULT_YEAR: &str = "1970";

/// Month names matched as prefixes of the lower-cased token, in order
const MONTHS: &[(&str, &str)] = &[
    ("jan", "01"),
    ("january", "01"),
    ("feb", "02"),
    ("february", "02"),
    ("mar", "03"),
    ("march", "03"),
    ("apr", "04"),
    ("april", "04"),
    ("may", "05"),
    ("jun", "06"),
    ("june", "06"),
    ("jul", "07"),
    ("july", "07"),
    ("aug", "08"),
    ("august", "08"),
    ("sep", "09"),
    ("sept", "09"),
    ("september", "09"),
    ("oct", "10"),
    ("october", "10"),
    ("nov", "11"),
    ("november", "11"),
    ("dec", "12"),
    ("december", "12"),
];

/// Normalize a raw release date. Never fails.
pub fn normalize_date(raw: &str) -> String {
    let s = trim_cell(strip_quotes(trim_cell(raw)));

    if let Some((day, month, year)) = scan_day_month_year(s) {
        if day > 0 && month > 0 && year > 0 {
            let day = if day > 31 { 1 } else { day };
            let month = if month > 12 { 1 } else { month };
            return format!("{:02}/{:02}/{:04}", day, month, year);
        }
    }

    let text: String = s
        .chars()
        .filter(|&c| c != ',')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let tokens: Vec<&str> = text
        .split([' ', '\t'])
        .filter(|t| !t.is_empty())
        .take(4)
        .collect();

    let mut day = DEFAULT_DAY.to_string();
    let mut month = DEFAULT_MONTH;
    let mut year = DEFAULT_YEAR.to_string();

    match tokens.as_slice() {
        [first, second, third] => {
            if starts_alpha(first) && starts_digit(second) {
                month = month_number(first);
                day = take_day(second);
                year = take_year(third);
            } else if starts_digit(first) && starts_alpha(second) {
                day = take_day(first);
                month = month_number(second);
                year = take_year(third);
            }
        }
        [first, second] => {
            month = month_number(first);
            year = take_year(second);
        }
        [only] => year = take_year(only),
        _ => {}
    }

    format!("{}/{}/{}", day, month, year)
}

/// Scan `D / M / Y` with optional whitespace around each number.
///
/// Text after the year is ignored.
fn scan_day_month_year(s: &str) -> Option<(i64, i64, i64)> {
    let mut cursor = Cursor::new(s);
    let day = cursor.int()?;
    cursor.expect('/')?;
    let month = cursor.int()?;
    cursor.expect('/')?;
    let year = cursor.int()?;
    Some((day, month, year))
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    }

    fn expect(&mut self, c: char) -> Option<()> {
        self.skip_whitespace();
        self.rest = self.rest.strip_prefix(c)?;
        Some(())
    }

    fn int(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let sign_len = usize::from(self.rest.starts_with(['-', '+']));
        let digits = self.rest[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        let (number, rest) = self.rest.split_at(sign_len + digits);
        self.rest = rest;
        let value = number.parse::<i64>().unwrap_or(if number.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        });
        Some(value)
    }
}

fn starts_alpha(token: &str) -> bool {
    token.bytes().next().is_some_and(|b| b.is_ascii_alphabetic())
}

fn starts_digit(token: &str) -> bool {
    token.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn month_number(token: &str) -> &'static str {
    MONTHS
        .iter()
        .find(|(name, _)| token.starts_with(name))
        .map_or(DEFAULT_MONTH, |&(_, number)| number)
}

/// First digits of the token, up to `max`, wherever they appear
fn digits(token: &str, max: usize) -> String {
    token.chars().filter(char::is_ascii_digit).take(max).collect()
}

fn take_day(token: &str) -> String {
    match digits(token, 2) {
        d if d.is_empty() => DEFAULT_DAY.to_string(),
        d => format!("{:0>2}", d),
    }
}

fn take_year(token: &str) -> String {
    match digits(token, 4) {
        y if y.is_empty() => DEFAULT_YEAR.to_string(),
        y => format!("{:0>4}", y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(date: &str) -> bool {
        let parts: Vec<&str> = date.split('/').collect();
        parts.len() == 3
            && parts[0].len() == 2
            && parts[1].len() == 2
            && parts[2].len() == 4
            && date.chars().all(|c| c == '/' || c.is_ascii_digit())
    }

    #[test]
    fn test_day_month_year_round_trip() {
        for day in 1..=31 {
            for month in 1..=12 {
                let raw = format!("{}/{}/2018", day, month);
                let expected = format!("{:02}/{:02}/2018", day, month);
                assert_eq!(normalize_date(&raw), expected);
            }
        }
    }

    #[test]
    fn test_day_month_year_with_spaces_and_quotes() {
        assert_eq!(normalize_date(" \"3 / 4 / 2019\" "), "03/04/2019");
        assert_eq!(normalize_date("'7/11/2001'"), "07/11/2001");
        assert_eq!(normalize_date("7/11/2001 extra"), "07/11/2001");
    }

    #[test]
    fn test_day_month_year_out_of_range_parts_reset() {
        assert_eq!(normalize_date("45/13/2020"), "01/01/2020");
        assert_eq!(normalize_date("12/31/2020"), "12/01/2020");
        assert_eq!(normalize_date("1/1/5"), "01/01/0005");
    }

    #[test]
    fn test_month_first() {
        assert_eq!(normalize_date("Aug 13, 2018"), "13/08/2018");
        assert_eq!(normalize_date("September 5, 2001"), "05/09/2001");
        assert_eq!(normalize_date("\"Dec 1, 1999\""), "01/12/1999");
    }

    #[test]
    fn test_day_first() {
        assert_eq!(normalize_date("13 Aug 2018"), "13/08/2018");
        assert_eq!(normalize_date("2 Mar, 2010"), "02/03/2010");
    }

    #[test]
    fn test_month_and_year() {
        assert_eq!(normalize_date("Nov 2015"), "01/11/2015");
        assert_eq!(normalize_date("Q3 2015"), "01/01/2015");
    }

    #[test]
    fn test_year_only() {
        assert_eq!(normalize_date("2015"), "01/01/2015");
    }

    #[test]
    fn test_unknown_month_name() {
        assert_eq!(normalize_date("Foo 13, 2018"), "13/01/2018");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(normalize_date(""), "01/01/1970");
        assert_eq!(normalize_date("coming soon"), "01/01/1970");
        assert_eq!(normalize_date("to be announced"), "01/01/1970");
        assert_eq!(normalize_date("a b c d e"), "01/01/1970");
        assert_eq!(normalize_date("0/0/0"), "01/01/0000");
    }

    #[test]
    fn test_always_canonical() {
        let inputs = [
            "", "   ", "\"\"", "tba", "Aug", "Aug 2", "13 Aug 18", "2018-08-13", "1/1", "-1/2/3",
            "Q1 2024 soon", "31/12/9999", "Mayo 5, 2020",
        ];
        for raw in inputs {
            let date = normalize_date(raw);
            assert!(is_canonical(&date), "{:?} -> {:?}", raw, date);
        }
    }
}
