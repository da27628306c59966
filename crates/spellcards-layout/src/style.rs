use serde::{Deserialize, Serialize};

/// Typefaces available to the card layout.
///
/// These match the PDF standard fonts so that measurement and rendering use the
/// same glyph advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Typeface {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
}

impl Typeface {
    pub const ALL: [Typeface; 4] = [
        Typeface::Helvetica,
        Typeface::HelveticaBold,
        Typeface::TimesRoman,
        Typeface::TimesBold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Typeface::Helvetica => "Helvetica",
            Typeface::HelveticaBold => "Helvetica-Bold",
            Typeface::TimesRoman => "Times-Roman",
            Typeface::TimesBold => "Times-Bold",
        }
    }
}

/// Typeface, size and line height for one visual role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetric {
    pub typeface: Typeface,
    /// Font size in points
    pub size: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl TextMetric {
    pub const fn new(typeface: Typeface, size: f32, line_height: f32) -> Self {
        Self {
            typeface,
            size,
            line_height,
        }
    }

    /// Height of a single line in points
    pub fn line_advance(&self) -> f32 {
        self.size * self.line_height
    }
}

/// Visual roles on a card, one metric each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Title,
    PartLabel,
    MetadataLarge,
    Metadata,
    Tags,
    Description,
    Notes,
}

/// The full set of text metrics used on a card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub title: TextMetric,
    pub part_label: TextMetric,
    pub metadata_large: TextMetric,
    pub metadata: TextMetric,
    pub tags: TextMetric,
    pub description: TextMetric,
    pub notes: TextMetric,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            title: TextMetric::new(Typeface::TimesBold, 11.0, 1.15),
            part_label: TextMetric::new(Typeface::TimesRoman, 7.0, 1.1),
            metadata_large: TextMetric::new(Typeface::TimesRoman, 7.0, 1.15),
            metadata: TextMetric::new(Typeface::TimesRoman, 6.5, 1.15),
            tags: TextMetric::new(Typeface::TimesBold, 6.0, 1.1),
            description: TextMetric::new(Typeface::TimesRoman, 7.0, 1.05),
            notes: TextMetric::new(Typeface::TimesRoman, 6.0, 1.1),
        }
    }
}

impl TextStyle {
    pub fn metric(&self, role: TextRole) -> &TextMetric {
        match role {
            TextRole::Title => &self.title,
            TextRole::PartLabel => &self.part_label,
            TextRole::MetadataLarge => &self.metadata_large,
            TextRole::Metadata => &self.metadata,
            TextRole::Tags => &self.tags,
            TextRole::Description => &self.description,
            TextRole::Notes => &self.notes,
        }
    }

    pub fn roles() -> [TextRole; 7] {
        [
            TextRole::Title,
            TextRole::PartLabel,
            TextRole::MetadataLarge,
            TextRole::Metadata,
            TextRole::Tags,
            TextRole::Description,
            TextRole::Notes,
        ]
    }

    /// Same style with every font size multiplied by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |metric: TextMetric| TextMetric {
            size: metric.size * factor,
            ..metric
        };
        Self {
            title: scale(self.title),
            part_label: scale(self.part_label),
            metadata_large: scale(self.metadata_large),
            metadata: scale(self.metadata),
            tags: scale(self.tags),
            description: scale(self.description),
            notes: scale(self.notes),
        }
    }
}
