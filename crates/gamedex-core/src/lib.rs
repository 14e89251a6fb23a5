//! gamedex-core: Core library for loading and querying Steam game records
//!
//! This library provides functionality to:
//! - Split raw CSV lines into cells with a simple quote-toggle parser
//! - Normalize heterogeneous field formats (dates, prices, scores, lists)
//! - Build game records from a fixed positional column schema
//! - Load a dataset into an id-sorted, binary-searchable index
//! - Answer line-oriented id lookups until a terminator line
//! - Export normalized records as CSV or JSON

pub mod dataset;
pub mod date;
pub mod error;
pub mod export;
pub mod game;
pub mod interleave;
pub mod normalize;
pub mod query;
pub mod row;

pub use dataset::{default_candidates, Dataset};
pub use date::normalize_date;
pub use error::{Error, Result};
pub use export::{write_games, ExportFormat};
pub use game::{Column, Game};
pub use interleave::{interleave, interleave_pairs};
pub use normalize::{
    normalize_companies, normalize_list, normalize_owners, normalize_price, normalize_user_score,
};
pub use query::{run_session, SessionStats, TERMINATOR};
pub use row::parse_row;
