use crate::geometry::CardGeometry;
use crate::measure::{FontTables, WrappingOracle};
use crate::paginate::Paginator;
use crate::style::{TextRole, TextStyle};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete layout configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    // Card size and chrome
    pub geometry: CardGeometry,

    // Fonts per visual role
    pub style: TextStyle,

    // Width tables replacing the standard fonts
    pub font_tables: Option<PathBuf>,
}

impl LayoutOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;

        for role in TextStyle::roles() {
            let metric = self.style.metric(role);
            if metric.size <= 0.0 || !metric.size.is_finite() {
                return Err(LayoutError::Config(format!(
                    "{:?} font size must be positive (got {})",
                    role, metric.size
                )));
            }
            if metric.line_height <= 0.0 || !metric.line_height.is_finite() {
                return Err(LayoutError::Config(format!(
                    "{:?} line height must be positive (got {})",
                    role, metric.line_height
                )));
            }
        }

        if self.style.metric(TextRole::Description).size > self.geometry.height {
            return Err(LayoutError::Config(
                "Description font is taller than the card".to_string(),
            ));
        }

        Ok(())
    }

    /// Font tables named by the options, or the standard fonts
    pub async fn font_tables(&self) -> Result<FontTables> {
        match &self.font_tables {
            Some(path) => FontTables::load(path).await,
            None => Ok(FontTables::standard()),
        }
    }

    /// Validated paginator measuring with these options' fonts
    pub async fn paginator(&self) -> Result<Paginator<WrappingOracle>> {
        self.validate()?;
        let tables = self.font_tables().await?;
        Ok(Paginator::new(
            self.geometry,
            self.style,
            WrappingOracle::new(tables),
        ))
    }
}
