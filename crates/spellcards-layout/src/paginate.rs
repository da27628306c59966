use crate::geometry::CardGeometry;
use crate::layout::CardMeasurer;
use crate::measure::{TextOracle, WrappingOracle};
use crate::split::{Fragment, Splitter, normalize_description};
use crate::style::TextStyle;
use crate::types::{Result, Spell};
use log::{debug, info};
use std::sync::Arc;

/// Lays spells out onto cards of one geometry.
///
/// Holds no state between spells, so one paginator can serve many threads.
#[derive(Debug, Clone)]
pub struct Paginator<O = WrappingOracle> {
    measurer: CardMeasurer<O>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(
            CardGeometry::default(),
            TextStyle::default(),
            WrappingOracle::default(),
        )
    }
}

impl<O: TextOracle> Paginator<O> {
    pub fn new(geometry: CardGeometry, style: TextStyle, oracle: O) -> Self {
        Self {
            measurer: CardMeasurer::new(geometry, style, oracle),
        }
    }

    pub fn measurer(&self) -> &CardMeasurer<O> {
        &self.measurer
    }

    /// Cards for one spell: the spell itself when it fits, otherwise one card
    /// per description fragment labelled "i/n".
    pub fn split_if_needed(&self, spell: &Spell) -> Result<Vec<Spell>> {
        let description = normalize_description(&spell.description);

        // Only reserve a label line if the spell already has one
        if self.measurer.fits(spell, &description, spell.has_part()) {
            debug!("'{}' fits on one card", spell.name);
            return Ok(vec![Spell {
                description,
                ..spell.clone()
            }]);
        }

        let fragments = self.split_description(spell, &description)?;
        debug!(
            "'{}' split into {} cards ({:?})",
            spell.name,
            fragments.len(),
            fragments.iter().map(|f| f.mode).collect::<Vec<_>>()
        );

        Ok(assemble(spell, fragments))
    }

    /// Fragments of `description` for `spell`, each fitting with a part label
    pub fn split_description(&self, spell: &Spell, description: &str) -> Result<Vec<Fragment>> {
        Splitter::new(&self.measurer, spell).split(description)
    }

    /// Cards for each spell, grouped per input spell
    pub fn paginate_grouped(&self, spells: &[Spell]) -> Result<Vec<Vec<Spell>>> {
        spells.iter().map(|spell| self.split_if_needed(spell)).collect()
    }

    /// Cards for all spells in input order
    pub fn paginate_all(&self, spells: &[Spell]) -> Result<Vec<Spell>> {
        let groups = self.paginate_grouped(spells)?;
        let stats = PaginationStats::from_groups(&groups);
        info!(
            "Paginated {} spells into {} cards ({} split)",
            stats.spells, stats.cards, stats.split_spells
        );
        Ok(groups.into_iter().flatten().collect())
    }
}

/// Turn fragments into cards. A single fragment keeps the spell's own part.
fn assemble(spell: &Spell, fragments: Vec<Fragment>) -> Vec<Spell> {
    let count = fragments.len();
    if count == 1 {
        let text = fragments.into_iter().map(|f| f.text).collect();
        return vec![Spell {
            description: text,
            ..spell.clone()
        }];
    }

    fragments
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| spell.with_part(index + 1, count, fragment.text))
        .collect()
}

/// Paginate spells on the blocking pool, one task per spell.
///
/// Output order matches input order. The first failure aborts the batch.
pub async fn paginate_parallel<O>(paginator: Arc<Paginator<O>>, spells: Vec<Spell>) -> Result<Vec<Spell>>
where
    O: TextOracle + 'static,
{
    let handles: Vec<_> = spells
        .into_iter()
        .map(|spell| {
            let paginator = Arc::clone(&paginator);
            tokio::task::spawn_blocking(move || paginator.split_if_needed(&spell))
        })
        .collect();

    let mut groups = Vec::with_capacity(handles.len());
    for handle in handles {
        groups.push(handle.await??);
    }

    let stats = PaginationStats::from_groups(&groups);
    info!(
        "Paginated {} spells into {} cards ({} split)",
        stats.spells, stats.cards, stats.split_spells
    );

    Ok(groups.into_iter().flatten().collect())
}

/// Summary of a pagination run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationStats {
    /// Spells paginated
    pub spells: usize,
    /// Cards produced
    pub cards: usize,
    /// Spells that needed more than one card
    pub split_spells: usize,
    /// Most cards used by a single spell
    pub max_parts: usize,
}

impl PaginationStats {
    pub fn from_groups(groups: &[Vec<Spell>]) -> Self {
        Self {
            spells: groups.len(),
            cards: groups.iter().map(Vec::len).sum(),
            split_spells: groups.iter().filter(|g| g.len() > 1).count(),
            max_parts: groups.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}
