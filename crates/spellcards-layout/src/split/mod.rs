//! Description splitting
//!
//! When a description does not fit on one card it is cut into fragments that
//! each fit alongside the card chrome. Accumulation is greedy and falls back to
//! finer units only when a coarser unit cannot fit on its own:
//! sentence, then word, then character.

mod text;

pub use text::*;

use crate::layout::CardMeasurer;
use crate::measure::TextOracle;
use crate::types::{LayoutError, Result, Spell};

/// Granularity a fragment was accumulated at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitMode {
    Sentence,
    Word,
    Character,
}

/// One card's share of a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// Finest granularity used while building this fragment
    pub mode: SplitMode,
}

/// Splits one spell's description against a measurer.
///
/// Every fit check reserves room for a part label, since every fragment will
/// carry one.
pub struct Splitter<'a, O> {
    measurer: &'a CardMeasurer<O>,
    spell: &'a Spell,
}

/// Fragment under construction
struct Buffer {
    text: String,
    mode: SplitMode,
}

impl Buffer {
    fn new(mode: SplitMode) -> Self {
        Self {
            text: String::new(),
            mode,
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn flush_into(&mut self, fragments: &mut Vec<Fragment>) {
        let text = std::mem::take(&mut self.text);
        let text = text.trim();
        if !text.is_empty() {
            fragments.push(Fragment {
                text: text.to_string(),
                mode: self.mode,
            });
        }
    }
}

impl<'a, O: TextOracle> Splitter<'a, O> {
    pub fn new(measurer: &'a CardMeasurer<O>, spell: &'a Spell) -> Self {
        Self { measurer, spell }
    }

    fn fits(&self, description: &str) -> bool {
        self.measurer.fits(self.spell, description, true)
    }

    fn infeasible(&self) -> LayoutError {
        LayoutError::LayoutInfeasible {
            name: self.spell.name.clone(),
        }
    }

    /// Split a normalized description into ordered fragments.
    ///
    /// Fails with [`LayoutError::LayoutInfeasible`] when not even a single
    /// character fits beside the chrome.
    pub fn split(&self, description: &str) -> Result<Vec<Fragment>> {
        let mut fragments = Vec::new();
        let mut buffer = Buffer::new(SplitMode::Sentence);

        for sentence in sentences(description) {
            if self.try_append(&mut buffer, sentence) {
                continue;
            }

            if !buffer.is_empty() {
                buffer.flush_into(&mut fragments);
                if self.try_append(&mut buffer, sentence) {
                    continue;
                }
            }

            self.split_words(sentence, &mut fragments)?;
        }

        buffer.flush_into(&mut fragments);

        if fragments.is_empty() {
            // Nothing to place, yet the chrome alone overflowed the first fit check
            return Err(self.infeasible());
        }

        Ok(fragments)
    }

    /// Word-level accumulation for a sentence that does not fit on its own
    fn split_words(&self, sentence: &str, fragments: &mut Vec<Fragment>) -> Result<()> {
        let mut buffer = Buffer::new(SplitMode::Word);

        for word in sentence.split_whitespace() {
            if self.try_append(&mut buffer, word) {
                continue;
            }

            if !buffer.is_empty() {
                buffer.flush_into(fragments);
                buffer.mode = SplitMode::Word;
                if self.try_append(&mut buffer, word) {
                    continue;
                }
            }

            // Full chunks become fragments; the tail stays open for the next word
            let mut chunks = self.split_characters(word)?;
            let tail = chunks.pop();
            fragments.extend(chunks.into_iter().map(|text| Fragment {
                text,
                mode: SplitMode::Character,
            }));
            if let Some(tail) = tail {
                buffer = Buffer {
                    text: tail,
                    mode: SplitMode::Character,
                };
            }
        }

        buffer.flush_into(fragments);
        Ok(())
    }

    /// Character-level accumulation for a word that does not fit on its own.
    ///
    /// Each chunk is the longest prefix of the remainder that fits.
    fn split_characters(&self, word: &str) -> Result<Vec<String>> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();

        for ch in word.chars() {
            buffer.push(ch);
            if self.fits(&buffer) {
                continue;
            }

            buffer.pop();
            if buffer.is_empty() {
                return Err(self.infeasible());
            }

            chunks.push(std::mem::take(&mut buffer));
            buffer.push(ch);
            if !self.fits(&buffer) {
                return Err(self.infeasible());
            }
        }

        if !buffer.is_empty() {
            chunks.push(buffer);
        }

        self.absorb_stray_chunks(&mut chunks)?;
        Ok(chunks)
    }

    /// Give every lone-symbol chunk the last character of the chunk before it.
    ///
    /// `normalize_description` drops such tokens, so a card holding only a
    /// trailing "." would come back empty from the painter or a second pass.
    fn absorb_stray_chunks(&self, chunks: &mut [String]) -> Result<()> {
        for index in 1..chunks.len() {
            if !text::is_stray_token(&chunks[index]) {
                continue;
            }

            let previous = &mut chunks[index - 1];
            if previous.chars().count() < 2 {
                return Err(self.infeasible());
            }
            let Some(ch) = previous.pop() else {
                return Err(self.infeasible());
            };
            if text::is_stray_token(previous) {
                return Err(self.infeasible());
            }

            chunks[index].insert(0, ch);
            if !self.fits(&chunks[index]) {
                return Err(self.infeasible());
            }
        }

        if chunks.first().is_some_and(|chunk| text::is_stray_token(chunk)) {
            return Err(self.infeasible());
        }

        Ok(())
    }

    /// Append `piece` to the buffer if the result still fits
    fn try_append(&self, buffer: &mut Buffer, piece: &str) -> bool {
        let piece = piece.trim();
        if piece.is_empty() {
            return true;
        }

        let candidate = if buffer.is_empty() {
            piece.to_string()
        } else {
            format!("{} {}", buffer.text, piece)
        };

        if !self.fits(&candidate) {
            return false;
        }

        buffer.text = candidate;
        true
    }
}
