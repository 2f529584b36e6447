use phonos_protocol::rules::ArchivedRuleSet;
use phonos_protocol::{RuleAnchors, RuleSet, RuleSetError, SoundKind};

use crate::boundary::is_boundary;

#[derive(Debug, Clone)]
struct Entry {
    pattern: Vec<char>,
    kind: SoundKind,
    anchors: RuleAnchors,
}

/// Compiled, immutable rule lookup.
///
/// Built once from a [`RuleSet`] (or its archived form) and read-only
/// thereafter, so concurrent queries need no synchronization.
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<Entry>,
}

impl RuleTable {
    /// Compiles an owned rule set, validating it first.
    pub fn from_ruleset(ruleset: &RuleSet) -> Result<Self, RuleSetError> {
        ruleset.validate()?;

        let entries = ruleset
            .rules
            .iter()
            .map(|rule| Entry {
                pattern: rule.pattern.chars().collect(),
                kind: rule.kind,
                anchors: rule.anchors,
            })
            .collect();

        Ok(Self { entries })
    }

    /// Compiles directly from an rkyv archive (the ruleset-compiler output),
    /// without deserializing the whole set.
    pub fn from_archived(ruleset: &ArchivedRuleSet) -> Result<Self, RuleSetError> {
        let entries: Vec<Entry> = ruleset
            .rules
            .iter()
            .map(|rule| Entry {
                pattern: rule.pattern.as_str().chars().collect(),
                kind: SoundKind::from_archived(&rule.kind),
                anchors: RuleAnchors::from_bits_truncate(rule.anchors),
            })
            .collect();

        // Same invariants as RuleSet::validate, checked on the compiled form.
        for (index, entry) in entries.iter().enumerate() {
            if entry.pattern.is_empty() {
                return Err(RuleSetError::EmptyPattern { index });
            }
            if entry.kind == SoundKind::Undefined {
                return Err(RuleSetError::UndefinedKind { index });
            }
            if entries[..index].iter().any(|e| e.pattern == entry.pattern) {
                return Err(RuleSetError::DuplicatePattern {
                    pattern: entry.pattern.iter().collect(),
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest rule matching at `pos`, as `(length in chars, kind)`.
    ///
    /// Equal-length candidates are resolved by declaration order (the first
    /// declared rule wins). `None` is a normal outcome: the caller falls back
    /// to a single-character passthrough token.
    ///
    /// Linear scan over the rules (O(N)) - rule sets are small.
    pub fn match_at(&self, chars: &[char], pos: usize) -> Option<(usize, SoundKind)> {
        let mut best: Option<(usize, SoundKind)> = None;

        for entry in &self.entries {
            let len = entry.pattern.len();

            if pos + len > chars.len() {
                continue;
            }
            if chars[pos..pos + len] != entry.pattern[..] {
                continue;
            }
            if !anchors_hold(entry.anchors, chars, pos, len) {
                continue;
            }

            match best {
                // Strict '>' keeps the first-declared rule on ties.
                Some((best_len, _)) if best_len >= len => {}
                _ => best = Some((len, entry.kind)),
            }
        }

        best
    }
}

fn anchors_hold(anchors: RuleAnchors, chars: &[char], pos: usize, len: usize) -> bool {
    if anchors.is_empty() {
        return true;
    }

    let at_start = anchors.contains(RuleAnchors::WORD_START)
        && is_boundary(pos.checked_sub(1).and_then(|p| chars.get(p)).copied());
    let at_end = anchors.contains(RuleAnchors::WORD_END)
        && is_boundary(chars.get(pos + len).copied());

    at_start || at_end
}
