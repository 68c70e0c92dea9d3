use std::{fs::File, io, path::Path};

use anyhow::Context as _;
use footy_engine::Dataset;
use serde::Deserialize;

/// The attributes the game may ask about, in selection-priority order.
pub const FEATURE_COLUMNS: [&str; 4] = ["nationality", "club", "preferred_foot", "team_position"];

/// The column holding each player's name.
pub const LABEL_COLUMN: &str = "short_name";

/// Loads a player dataset from a `.csv` or `.json` file.
///
/// CSV files must carry a header row naming at least the label column and
/// the four feature columns; extra columns are kept but unused. JSON files
/// are arrays of objects with exactly those five fields.
pub fn load(path: &Path) -> anyhow::Result<Dataset> {
    let (columns, rows) = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => read_json(path)?,
        _ => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
            parse_csv(&text)?
        }
    };
    let dataset = Dataset::new(columns, rows, &FEATURE_COLUMNS, LABEL_COLUMN)
        .with_context(|| format!("Invalid dataset file: {}", path.display()))?;
    Ok(dataset)
}

/// One player object of a JSON dataset file.
#[derive(Debug, Deserialize)]
struct PlayerRecord {
    short_name: String,
    nationality: String,
    club: String,
    preferred_foot: String,
    team_position: String,
}

fn read_json(path: &Path) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
    parse_json(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse dataset JSON file: {}", path.display()))
}

/// Parses a JSON array of player objects into header and rows.
fn parse_json(reader: impl io::Read) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    let records: Vec<PlayerRecord> = serde_json::from_reader(reader)?;

    let columns = std::iter::once(LABEL_COLUMN)
        .chain(FEATURE_COLUMNS)
        .map(str::to_owned)
        .collect();
    let rows = records
        .into_iter()
        .map(|record| {
            vec![
                record.short_name,
                record.nationality,
                record.club,
                record.preferred_foot,
                record.team_position,
            ]
        })
        .collect();
    Ok((columns, rows))
}

/// Parses plain comma-separated values with a header row.
///
/// Quoting is not supported; blank lines are skipped.
fn parse_csv(text: &str) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().context("dataset file has no header row")?;
    let split = |line: &str| -> Vec<String> {
        line.split(',').map(|field| field.trim().to_owned()).collect()
    };

    let columns = split(header);
    let rows = lines.map(split).collect();
    Ok((columns, rows))
}
