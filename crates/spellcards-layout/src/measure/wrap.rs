use super::{FontTables, GlyphMeasure, TextOracle};
use crate::style::TextMetric;

/// Greedy word wrapper over a [`GlyphMeasure`].
///
/// Words are packed onto lines left to right. A word wider than the column is
/// broken into the longest character runs that fit, so measurement never
/// reports a segment that cannot be placed.
#[derive(Debug, Clone, Default)]
pub struct WrappingOracle<G = FontTables> {
    glyphs: G,
}

/// One piece of a word, as placed on a line
struct Segment<'a> {
    text: &'a str,
    width: f32,
    /// First segment of its word (separated from the previous one by a space)
    starts_word: bool,
}

impl<G: GlyphMeasure> WrappingOracle<G> {
    pub fn new(glyphs: G) -> Self {
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &G {
        &self.glyphs
    }

    /// Number of lines `text` wraps to at `width`
    pub fn line_count(&self, text: &str, metric: &TextMetric, width: f32) -> usize {
        let mut count = 0;
        self.pack(text, metric, width, |_| count += 1);
        count
    }

    /// The wrapped lines themselves, for drawing
    pub fn wrap_lines(&self, text: &str, metric: &TextMetric, width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        self.pack(text, metric, width, |line| lines.push(line));
        lines
    }

    fn pack(&self, text: &str, metric: &TextMetric, width: f32, mut emit: impl FnMut(String)) {
        if width <= 0.0 || text.trim().is_empty() {
            return;
        }

        let space_width = self.glyphs.text_width(" ", metric);
        let mut line = String::new();
        let mut line_width = 0.0_f32;

        for word in text.split_whitespace() {
            for segment in self.segments(word, metric, width) {
                let spacer = if segment.starts_word && !line.is_empty() {
                    space_width
                } else {
                    0.0
                };

                if line.is_empty() || line_width + spacer + segment.width <= width {
                    if spacer > 0.0 {
                        line.push(' ');
                    }
                    line.push_str(segment.text);
                    line_width += spacer + segment.width;
                } else {
                    emit(std::mem::take(&mut line));
                    line.push_str(segment.text);
                    line_width = segment.width;
                }
            }
        }

        if !line.is_empty() {
            emit(line);
        }
    }

    /// Break a word into runs no wider than `max_width`.
    ///
    /// A single character wider than `max_width` stays a segment of its own.
    fn segments<'a>(&self, word: &'a str, metric: &TextMetric, max_width: f32) -> Vec<Segment<'a>> {
        let word_width = self.glyphs.text_width(word, metric);
        if word_width <= max_width {
            return vec![Segment {
                text: word,
                width: word_width,
                starts_word: true,
            }];
        }

        let mut segments = Vec::new();
        let mut start = 0;
        let mut accepted_width = 0.0_f32;

        for (offset, ch) in word.char_indices() {
            let end = offset + ch.len_utf8();
            let candidate = &word[start..end];
            let candidate_width = self.glyphs.text_width(candidate, metric);

            if candidate_width <= max_width {
                accepted_width = candidate_width;
                continue;
            }

            if offset > start {
                segments.push(Segment {
                    text: &word[start..offset],
                    width: accepted_width,
                    starts_word: segments.is_empty(),
                });
                start = offset;
                accepted_width = self.glyphs.text_width(&word[start..end], metric);
                if accepted_width > max_width {
                    segments.push(Segment {
                        text: &word[start..end],
                        width: accepted_width,
                        starts_word: false,
                    });
                    start = end;
                    accepted_width = 0.0;
                }
            } else {
                segments.push(Segment {
                    text: candidate,
                    width: candidate_width,
                    starts_word: segments.is_empty(),
                });
                start = end;
                accepted_width = 0.0;
            }
        }

        if start < word.len() {
            segments.push(Segment {
                text: &word[start..],
                width: accepted_width,
                starts_word: segments.is_empty(),
            });
        }

        segments
    }
}

impl<G: GlyphMeasure> TextOracle for WrappingOracle<G> {
    fn wrapped_height(&self, text: &str, metric: &TextMetric, width: f32) -> f32 {
        self.line_count(text, metric, width) as f32 * metric.line_advance()
    }
}
