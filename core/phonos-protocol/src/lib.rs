#![no_std] // Critical for WASM/Embedded compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod rules;
pub mod sound;

// Re-export core types for convenience
pub use ids::{IdSource, SequentialIds, SoundId};
pub use rules::{Rule, RuleAnchors, RuleSet, RuleSetError};
pub use sound::{Sound, SoundKind, Spelled};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_kind_serialization() {
        // Test basic enum round-trip
        let original = SoundKind::Ch;

        // Serialize
        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize SoundKind");

        // Deserialize (Simulate loading from disk)
        let deserialized: SoundKind = from_bytes(&bytes).expect("Failed to deserialize SoundKind");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_ruleset_serialization() {
        let original = RuleSet {
            version: 1,
            rules: vec![
                Rule {
                    pattern: "th".to_string(),
                    kind: SoundKind::Th,
                    anchors: RuleAnchors::empty(),
                },
                Rule {
                    pattern: "p".to_string(),
                    kind: SoundKind::Ptk,
                    anchors: RuleAnchors::WORD_START | RuleAnchors::WORD_END,
                },
            ],
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize RuleSet");
        let deserialized: RuleSet = from_bytes(&bytes).expect("Failed to deserialize RuleSet");

        assert_eq!(deserialized.version, 1);
        assert_eq!(deserialized.rules.len(), 2);
        assert_eq!(deserialized.rules[0].pattern, "th");
        assert_eq!(deserialized.rules[0].kind, SoundKind::Th);
        assert_eq!(
            deserialized.rules[1].anchors,
            RuleAnchors::WORD_START | RuleAnchors::WORD_END
        );
    }

    #[test]
    fn test_id_layout() {
        // Verify Zero-Cost abstraction: SoundId should be exactly 16 bytes
        assert_eq!(core::mem::size_of::<SoundId>(), 16);
    }
}
