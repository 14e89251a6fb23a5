//! Error types for gamedex-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gamedex-core
///
/// Field normalization never produces an error; only dataset loading and
/// output can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset has no header line
    #[error("dataset '{path}' is empty (missing header line)")]
    MissingHeader { path: PathBuf },

    /// None of the candidate dataset locations could be loaded
    #[error("could not open any dataset (tried {})", display_paths(.attempted))]
    DatasetUnavailable { attempted: Vec<PathBuf> },

    /// No game with the requested id
    #[error("game {0} not found")]
    GameNotFound(i64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error from the csv crate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no paths".to_string();
    }
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(" and ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_names_every_path() {
        let err = Error::DatasetUnavailable {
            attempted: vec![PathBuf::from("/tmp/games.csv"), PathBuf::from("games.csv")],
        };
        assert_eq!(
            err.to_string(),
            "could not open any dataset (tried '/tmp/games.csv' and 'games.csv')"
        );
    }
}
