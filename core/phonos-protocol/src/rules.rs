use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

use crate::sound::SoundKind;

bitflags! {
    /// Positional constraints on a rule.
    ///
    /// Empty anchors mean the rule applies anywhere. Non-empty anchors mean
    /// the match position must satisfy at least one of the set anchors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct RuleAnchors: u32 {
        /// The character before the match is a word boundary (or text start).
        const WORD_START = 1;
        /// The character after the match is a word boundary (or text end).
        const WORD_END = 2;
    }
}

impl Default for RuleAnchors {
    fn default() -> Self {
        RuleAnchors::empty()
    }
}

// rkyv support for RuleAnchors
impl Archive for RuleAnchors {
    type Archived = u32;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::ser::Serializer + ?Sized> Serialize<S> for RuleAnchors {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<RuleAnchors, D> for u32 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<RuleAnchors, D::Error> {
        Ok(RuleAnchors::from_bits_truncate(*self))
    }
}

/// One classification rule: a literal pattern mapped to a category.
///
/// Patterns are matched case-sensitively against the input; a rule set that
/// wants case-insensitive behavior enumerates the case variants explicitly.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Rule {
    pub pattern: String,
    pub kind: SoundKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub anchors: RuleAnchors,
}

/// An ordered rule collection.
///
/// Declaration order is meaningful: it is the tie-break between equal-length
/// matches (first-declared wins), so every serialization of a rule set must
/// preserve it.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RuleSet {
    pub version: u32,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Checks the structural invariants every rule set must uphold before it
    /// can drive classification.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(RuleSetError::EmptyPattern { index });
            }

            if rule.kind == SoundKind::Undefined {
                // Undefined is the fallback category; a rule producing it
                // could emit multi-character passthrough tokens.
                return Err(RuleSetError::UndefinedKind { index });
            }

            if self.rules[..index].iter().any(|r| r.pattern == rule.pattern) {
                return Err(RuleSetError::DuplicatePattern {
                    pattern: rule.pattern.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    EmptyPattern { index: usize },
    DuplicatePattern { pattern: String },
    UndefinedKind { index: usize },
}

impl fmt::Display for RuleSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSetError::EmptyPattern { index } => {
                write!(f, "rule {} has an empty pattern", index)
            }
            RuleSetError::DuplicatePattern { pattern } => {
                write!(f, "pattern '{}' is declared more than once", pattern)
            }
            RuleSetError::UndefinedKind { index } => {
                write!(f, "rule {} maps to Undefined, which is reserved for fallback", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuleSetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn rule(pattern: &str, kind: SoundKind) -> Rule {
        Rule {
            pattern: pattern.to_string(),
            kind,
            anchors: RuleAnchors::empty(),
        }
    }

    #[test]
    fn valid_set_passes() {
        let set = RuleSet {
            version: 1,
            rules: vec![rule("th", SoundKind::Th), rule("t", SoundKind::Ptk)],
        };

        assert_eq!(set.validate(), Ok(()));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let set = RuleSet {
            version: 1,
            rules: vec![rule("", SoundKind::Th)],
        };

        assert_eq!(set.validate(), Err(RuleSetError::EmptyPattern { index: 0 }));
    }

    #[test]
    fn duplicate_pattern_is_rejected() {
        let set = RuleSet {
            version: 1,
            rules: vec![rule("th", SoundKind::Th), rule("th", SoundKind::Ch)],
        };

        assert_eq!(
            set.validate(),
            Err(RuleSetError::DuplicatePattern {
                pattern: "th".to_string()
            })
        );
    }

    #[test]
    fn undefined_kind_is_rejected() {
        let set = RuleSet {
            version: 1,
            rules: vec![rule("xx", SoundKind::Undefined)],
        };

        assert_eq!(set.validate(), Err(RuleSetError::UndefinedKind { index: 0 }));
    }
}
