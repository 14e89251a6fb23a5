//! The game record and its fixed positional column schema

use crate::date::normalize_date;
use crate::normalize::{
    normalize_companies, normalize_list, normalize_owners, normalize_price, normalize_user_score,
    parse_int_or, UNKNOWN_SCORE,
};
use crate::row::parse_row;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of a dataset row, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Name,
    ReleaseDate,
    EstimatedOwners,
    Price,
    SupportedLanguages,
    MetacriticScore,
    UserScore,
    Achievements,
    Publishers,
    Developers,
    Categories,
    Genres,
    Tags,
}

impl Column {
    /// Every column in positional order
    pub const ALL: [Column; 14] = [
        Column::Id,
        Column::Name,
        Column::ReleaseDate,
        Column::EstimatedOwners,
        Column::Price,
        Column::SupportedLanguages,
        Column::MetacriticScore,
        Column::UserScore,
        Column::Achievements,
        Column::Publishers,
        Column::Developers,
        Column::Categories,
        Column::Genres,
        Column::Tags,
    ];

    /// Position of this column in a row (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Raw cell for this column, or `""` when the row is too short
    pub fn cell(self, cells: &[String]) -> &str {
        cells.get(self.index()).map_or("", String::as_str)
    }
}

/// One normalized game built from one dataset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Steam app id, `0` when the cell has no number
    pub id: i64,
    /// Name exactly as it appears in the cell
    pub name: String,
    /// Always `DD/MM/YYYY`
    pub release_date: String,
    /// Lower bound of the owner range
    pub estimated_owners: u64,
    /// Price, `0.0` for free games
    pub price: f32,
    /// Languages in `[a, b]` form
    pub supported_languages: String,
    /// `-1` when unknown
    pub metacritic_score: i64,
    /// `-1.0` when unknown or "tbd"
    pub user_score: f32,
    /// Number of achievements, `0` when missing
    pub achievements: i64,
    /// Publishers in `[a, b]` form
    pub publishers: String,
    /// Developers in `[a, b]` form
    pub developers: String,
    /// Categories in `[a, b]` form
    pub categories: String,
    /// Genres in `[a, b]` form
    pub genres: String,
    /// User tags in `[a, b]` form
    pub tags: String,
}

impl Game {
    /// Build a game from already split cells.
    ///
    /// Missing trailing cells behave like empty strings.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = move |column: Column| column.cell(cells);

        Self {
            id: parse_int_or(cell(Column::Id), 0),
            name: cell(Column::Name).to_string(),
            release_date: normalize_date(cell(Column::ReleaseDate)),
            estimated_owners: normalize_owners(cell(Column::EstimatedOwners)),
            price: normalize_price(cell(Column::Price)),
            supported_languages: normalize_list(cell(Column::SupportedLanguages)),
            metacritic_score: parse_int_or(cell(Column::MetacriticScore), UNKNOWN_SCORE),
            user_score: normalize_user_score(cell(Column::UserScore)),
            achievements: parse_int_or(cell(Column::Achievements), 0),
            publishers: normalize_companies(cell(Column::Publishers)),
            developers: normalize_companies(cell(Column::Developers)),
            categories: normalize_list(cell(Column::Categories)),
            genres: normalize_list(cell(Column::Genres)),
            tags: normalize_list(cell(Column::Tags)),
        }
    }

    /// Parse and normalize one raw dataset line
    pub fn from_line(line: &str) -> Self {
        Self::from_cells(&parse_row(line))
    }

    /// False when the user score is the unknown sentinel
    pub fn has_user_score(&self) -> bool {
        self.user_score >= 0.0
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "=> {} ## {} ## {} ## {} ## {:.2} ## {} ## {} ## ",
            self.id,
            self.name,
            self.release_date,
            self.estimated_owners,
            self.price,
            self.supported_languages,
            self.metacritic_score,
        )?;
        if self.has_user_score() {
            write!(f, "{:.1}", self.user_score)?;
        } else {
            write!(f, "-1.0")?;
        }
        write!(
            f,
            " ## {} ## {} ## {} ## {} ## {} ## {} ##",
            self.achievements,
            self.publishers,
            self.developers,
            self.categories,
            self.genres,
            self.tags,
        )
    }
}
