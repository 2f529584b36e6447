//! The built-in English rule set.
//!
//! Matching is case-sensitive, so every case variant of a cluster is declared
//! literally. Clusters come before single letters; the single-letter stops and
//! glides carry the positional anchors of the historical behavior (p/t/c at a
//! word edge, w/v/j word-initial).

use phonos_protocol::{Rule, RuleAnchors, RuleSet, SoundKind};

fn rule(pattern: &str, kind: SoundKind, anchors: RuleAnchors) -> Rule {
    Rule {
        pattern: pattern.to_string(),
        kind,
        anchors,
    }
}

/// Builds the default English rule set.
pub fn english() -> RuleSet {
    let anywhere = RuleAnchors::empty();
    let word_edge = RuleAnchors::WORD_START | RuleAnchors::WORD_END;
    let word_start = RuleAnchors::WORD_START;

    let mut rules = Vec::new();

    for pattern in ["ch", "cH", "Ch", "CH"] {
        rules.push(rule(pattern, SoundKind::Ch, anywhere));
    }
    for pattern in ["th", "tH", "Th", "TH"] {
        rules.push(rule(pattern, SoundKind::Th, anywhere));
    }
    for pattern in ["ng", "nG", "Ng", "NG", "nk", "nK", "Nk", "NK"] {
        rules.push(rule(pattern, SoundKind::Ng, anywhere));
    }
    for pattern in ["p", "P", "t", "T", "c", "C"] {
        rules.push(rule(pattern, SoundKind::Ptk, word_edge));
    }
    for pattern in ["w", "W"] {
        rules.push(rule(pattern, SoundKind::W, word_start));
    }
    for pattern in ["v", "V"] {
        rules.push(rule(pattern, SoundKind::V, word_start));
    }
    for pattern in ["j", "J"] {
        rules.push(rule(pattern, SoundKind::Dj, word_start));
    }

    RuleSet { version: 1, rules }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_ruleset_is_valid() {
        assert_eq!(english().validate(), Ok(()));
    }

    #[test]
    fn clusters_are_declared_before_single_letters() {
        let rules = english().rules;
        let first_single = rules.iter().position(|r| r.pattern.chars().count() == 1);
        let last_cluster = rules.iter().rposition(|r| r.pattern.chars().count() == 2);

        assert!(first_single.unwrap() > last_cluster.unwrap());
    }
}
