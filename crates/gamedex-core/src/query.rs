//! Line-oriented lookup session
//!
//! Each input line is either the terminator `FIM`, a blank line, or a game id.
//! Found games are written one per line; unknown ids produce no output.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::normalize::leading_int;
use std::io::{BufRead, Write};
use tracing::debug;

/// Line that ends a session
pub const TERMINATOR: &str = "FIM";

/// Counters for one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that were looked up
    pub queries: usize,
    /// Lookups that printed a game
    pub hits: usize,
    /// Lookups for ids not in the dataset
    pub misses: usize,
    /// Non-blank lines without a leading integer
    pub skipped: usize,
}

/// Answer lookups from `input` until `FIM` or end of input.
///
/// Lines without a leading integer are skipped and counted in
/// [`SessionStats::skipped`] instead of being looked up as id `0`.
pub fn run_session<R: BufRead, W: Write>(
    dataset: &Dataset,
    mut input: R,
    mut output: W,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();

        if line == TERMINATOR {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let Some(id) = leading_int(line) else {
            debug!(line, "ignoring query without an id");
            stats.skipped += 1;
            continue;
        };

        stats.queries += 1;
        match dataset.lookup(id) {
            Some(game) => {
                stats.hits += 1;
                writeln!(output, "{}", game)?;
            }
            None => {
                stats.misses += 1;
                debug!(id, "no game with this id");
            }
        }
    }

    output.flush()?;
    Ok(stats)
}
