use crate::types::{LayoutError, Result, Spell};
use log::warn;
use std::path::Path;

/// Load spells from a `.json` array or a `.csv` file with a header row.
///
/// CSV columns are matched by field name; missing optional columns are left
/// empty. Rows without a name are skipped.
pub async fn load_spells(path: impl AsRef<Path>) -> Result<Vec<Spell>> {
    let path = path.as_ref().to_owned();
    let format = SpellFormat::from_path(&path)?;

    let contents = tokio::fs::read_to_string(&path).await?;

    // Parsing is CPU-bound
    let spells = tokio::task::spawn_blocking(move || match format {
        SpellFormat::Json => parse_json(&contents),
        SpellFormat::Csv => parse_csv(&contents),
    })
    .await??;

    Ok(spells)
}

/// Write cards as a pretty-printed JSON array
pub async fn save_spells(spells: &[Spell], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(spells)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpellFormat {
    Json,
    Csv,
}

impl SpellFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(SpellFormat::Json),
            Some("csv") => Ok(SpellFormat::Csv),
            _ => Err(LayoutError::Config(format!(
                "Unsupported spell file '{}': expected .json or .csv",
                path.display()
            ))),
        }
    }
}

pub fn parse_json(contents: &str) -> Result<Vec<Spell>> {
    let spells: Vec<Spell> = serde_json::from_str(contents)?;
    Ok(keep_named(spells))
}

pub fn parse_csv(contents: &str) -> Result<Vec<Spell>> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut spells = Vec::new();

    for result in reader.deserialize() {
        let spell: Spell = result?;
        spells.push(spell);
    }

    Ok(keep_named(spells))
}

fn keep_named(spells: Vec<Spell>) -> Vec<Spell> {
    spells
        .into_iter()
        .enumerate()
        .filter_map(|(index, spell)| {
            if spell.name.trim().is_empty() {
                warn!("Skipping spell #{} without a name", index + 1);
                None
            } else {
                Some(spell)
            }
        })
        .collect()
}
