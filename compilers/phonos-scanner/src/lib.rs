//! Rule-driven sound classification.
//!
//! The [`Classifier`] scans text left to right against a compiled
//! [`RuleTable`], emitting an ordered sequence of [`Sound`] tokens that
//! partitions the input: concatenating the token texts reproduces the input
//! exactly, for any input.

pub mod boundary;
pub mod english;
pub mod rules_text;
pub mod table;

use phonos_protocol::{IdSource, RuleSetError, Sound, SoundId, SoundKind};
use uuid::Uuid;

pub use english::english;
pub use rules_text::{parse_rules, RuleTextError};
pub use table::RuleTable;

/// Production identifier source: random version-4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> SoundId {
        SoundId::new(Uuid::new_v4())
    }
}

/// The classification engine.
///
/// Owns its rule table (no ambient global state) and an injectable identifier
/// source. `classify` is a pure function of the input given the table, holds
/// no locks and performs no I/O, so a shared `Classifier` may be used from
/// multiple threads at once.
pub struct Classifier {
    table: RuleTable,
    ids: Box<dyn IdSource + Send + Sync>,
}

impl Classifier {
    /// Classifier over a compiled table, with random identifiers.
    pub fn new(table: RuleTable) -> Self {
        Self::with_ids(table, Box::new(RandomIds))
    }

    /// Classifier with an explicit identifier strategy (deterministic sources
    /// keep classify reproducible under test).
    pub fn with_ids(table: RuleTable, ids: Box<dyn IdSource + Send + Sync>) -> Self {
        Self { table, ids }
    }

    /// Classifier over the built-in English rule set.
    pub fn english() -> Self {
        let table = RuleTable::from_ruleset(&english())
            .expect("built-in English rule set is valid");
        Self::new(table)
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Converts text into the ordered sound sequence.
    ///
    /// Total over any input: unmatched characters fall through to single
    /// [`SoundKind::Undefined`] tokens, and an empty input yields an empty
    /// sequence. Each step advances the cursor by at least one character, so
    /// the scan terminates in input-length-bounded steps.
    pub fn classify<T: AsRef<str>>(&self, text: T) -> Vec<Sound> {
        let chars: Vec<char> = text.as_ref().chars().collect();

        let mut sounds = Vec::new();
        let mut cursor = 0;

        while cursor < chars.len() {
            match self.table.match_at(&chars, cursor) {
                Some((len, kind)) => {
                    let text: String = chars[cursor..cursor + len].iter().collect();
                    sounds.push(Sound::new(self.ids.next_id(), kind, text));
                    cursor += len;
                }
                None => {
                    let text = chars[cursor].to_string();
                    sounds.push(Sound::new(self.ids.next_id(), SoundKind::Undefined, text));
                    cursor += 1;
                }
            }
        }

        sounds
    }
}

/// Convenience: classify with the built-in English rule set.
pub fn classify<T: AsRef<str>>(text: T) -> Vec<Sound> {
    Classifier::english().classify(text)
}

/// Builds a classifier from a compiled (rkyv) rule-set binary, validating the
/// archive before use.
pub fn classifier_from_bytes(bytes: &[u8]) -> Result<Classifier, LoadError> {
    let archived = rkyv::check_archived_root::<phonos_protocol::RuleSet>(bytes)
        .map_err(|e| LoadError::BadArchive(e.to_string()))?;
    let table = RuleTable::from_archived(archived)?;
    Ok(Classifier::new(table))
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("invalid rule-set archive: {0}")]
    BadArchive(String),
    #[error(transparent)]
    Invalid(#[from] RuleSetError),
}
