use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Card layout for '{name}' leaves no space for description text. Increase card size or adjust fonts.")]
    LayoutInfeasible { name: String },
    #[error("Text measurement unavailable: {0}")]
    MeasurementUnavailable(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// One spell as it arrives from the data source, or one card's worth of it
/// once pagination has run.
///
/// Optional metadata fields are omitted from the card when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spell {
    pub name: String,
    /// "i/n" once split, empty otherwise
    pub part: String,
    /// e.g. "Wizard 1"
    pub class_level: Option<String>,
    /// e.g. "Evocation [Fire]"
    pub school_text: Option<String>,
    /// Lowercase school used for theming, e.g. "evocation"
    pub school_key: Option<String>,
    pub cast: Option<String>,
    pub range: Option<String>,
    /// Already prefixed: "Target: ..." or "Area: ..."
    pub target_or_area: Option<String>,
    pub duration: Option<String>,
    pub save: Option<String>,
    pub sr: Option<String>,
    pub components: Option<String>,
    pub tags: Option<String>,
    pub description: String,
    pub notes: Option<String>,
    pub source_url: Option<String>,
}

impl Spell {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Whether this spell already carries a part label
    pub fn has_part(&self) -> bool {
        !self.part.trim().is_empty()
    }

    /// Copy of this spell carrying one fragment of the description
    pub fn with_part(&self, index: usize, count: usize, description: String) -> Self {
        Self {
            part: format!("{}/{}", index, count),
            description,
            ..self.clone()
        }
    }
}

/// Returns the value when it holds something other than whitespace
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
