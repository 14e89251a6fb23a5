//! Export normalized games as CSV or JSON

use crate::error::Result;
use crate::game::Game;
use std::io::Write;

/// Output format for [`write_games`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Parse a format name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Write games as CSV with a snake_case header row
pub fn write_csv<W: Write>(games: &[Game], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for game in games {
        csv_writer.serialize(game)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write games as a pretty-printed JSON array
pub fn write_json<W: Write>(games: &[Game], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, games)?;
    writeln!(writer)?;
    Ok(())
}

/// Write games in the requested format
pub fn write_games<W: Write>(games: &[Game], format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(games, writer),
        ExportFormat::Json => write_json(games, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Game> {
        vec![
            Game::from_line("1,Alpha,Aug 13 2018,100,1.50,['English'],90,8.0,5,\"Pub, Inc\",Dev,[],[],[]"),
            Game::from_line("2,Beta"),
        ]
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(ExportFormat::from_name("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_name("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_name("xml"), None);
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "id,name,release_date,estimated_owners,price,supported_languages,metacritic_score,user_score,achievements,publishers,developers,categories,genres,tags"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1,Alpha,13/08/2018,100,1.5,[English],90,8.0,5,\"[\"\"Pub, Inc\"\"]\",[Dev],[],[],[]"
        );
        assert!(lines.next().unwrap().starts_with("2,Beta,01/01/1970,0,"));
    }

    #[test]
    fn test_write_json_round_trips() {
        let games = sample();
        let mut out = Vec::new();
        write_json(&games, &mut out).unwrap();

        let parsed: Vec<Game> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, games);
    }
}
