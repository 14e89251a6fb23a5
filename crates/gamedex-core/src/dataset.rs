//! Dataset loading and the id-sorted lookup index

use crate::error::{Error, Result};
use crate::game::Game;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Primary dataset location
pub const PRIMARY_PATH: &str = "/tmp/games.csv";

/// Fallback dataset location, relative to the working directory
pub const FALLBACK_PATH: &str = "games.csv";

/// Default candidate locations, in the order they are tried
pub fn default_candidates() -> Vec<PathBuf> {
    vec![PathBuf::from(PRIMARY_PATH), PathBuf::from(FALLBACK_PATH)]
}

/// All games of one dataset, sorted ascending by id
#[derive(Debug, Clone)]
pub struct Dataset {
    games: Vec<Game>,
    source_path: PathBuf,
}

impl Dataset {
    /// Load from a reader: skip the header line, build one game per
    /// non-empty line, then sort by id.
    pub fn from_reader<R: BufRead>(mut reader: R, source_path: PathBuf) -> Result<Self> {
        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::MissingHeader { path: source_path });
        }

        let mut games = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(|c: char| c <= ' ');
            if line.is_empty() {
                continue;
            }
            games.push(Game::from_line(line));
        }

        games.sort_by_key(|g| g.id);
        debug!(
            path = %source_path.display(),
            games = games.len(),
            "loaded dataset"
        );

        Ok(Self { games, source_path })
    }

    /// Load a dataset file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_reader(BufReader::new(file), path.to_path_buf())
    }

    /// Load the first candidate that can be read.
    ///
    /// Fails with [`Error::DatasetUnavailable`] naming every attempted path
    /// when none of them loads.
    pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        let mut attempted = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let path = candidate.as_ref();
            match Self::from_path(path) {
                Ok(dataset) => return Ok(dataset),
                Err(e) => {
                    debug!(error = %e, "dataset candidate unavailable");
                    attempted.push(path.to_path_buf());
                }
            }
        }

        Err(Error::DatasetUnavailable { attempted })
    }

    /// Find a game by id with a binary search over the sorted games.
    ///
    /// With duplicate ids, whichever match the descent reaches first is
    /// returned.
    pub fn lookup(&self, id: i64) -> Option<&Game> {
        let (mut lo, mut hi) = (0, self.games.len());
        while lo < hi {
            let mid = (lo + hi - 1) / 2;
            let game = &self.games[mid];
            if game.id == id {
                return Some(game);
            }
            if game.id < id {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        None
    }

    /// Games in ascending id order
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of loaded games
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True when the dataset has no games
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Where the dataset was loaded from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
