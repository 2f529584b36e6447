use phonos_protocol::Spelled;
use thiserror::Error;

/// Serialize sounds back to plain text.
///
/// The entire contract is order plus concatenation: any producer's records are
/// accepted as long as each carries a text field, so this is the exact left
/// inverse of classification (`serialize(classify(s)) == s`).
pub fn serialize<S: Spelled>(sounds: &[S]) -> String {
    sounds
        .iter()
        .fold(String::new(), |text, sound| text + sound.text())
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A supplied record had no usable text field. Substituting empty text
    /// would silently corrupt the round-trip, so the call is rejected.
    #[error("record {index} has no usable text field")]
    MissingText { index: usize },
}

/// Lenient boundary form of [`serialize`] for externally built sequences
/// where a record's text may be absent.
pub fn serialize_parts<'a, I>(parts: I) -> Result<String, RenderError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut text = String::new();

    for (index, part) in parts.into_iter().enumerate() {
        match part {
            Some(s) => text.push_str(s),
            None => return Err(RenderError::MissingText { index }),
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonos_protocol::{Sound, SoundId, SoundKind};
    use phonos_scanner::Classifier;

    fn sound(kind: SoundKind, text: &str) -> Sound {
        Sound::new(SoundId::from_u128(0), kind, text.to_string())
    }

    #[test]
    fn it_should_serialize_empty() {
        assert_eq!(serialize(&Vec::<Sound>::new()), "");
    }

    #[test]
    fn it_should_serialize_sounds() {
        let sounds = vec![
            sound(SoundKind::Th, "Th"),
            sound(SoundKind::Undefined, "e"),
            sound(SoundKind::Undefined, "n"),
            sound(SoundKind::Undefined, " "),
            sound(SoundKind::Ptk, "P"),
            sound(SoundKind::Undefined, "u"),
            sound(SoundKind::Ptk, "T"),
        ];

        assert_eq!(serialize(&sounds), "Then PuT");
    }

    #[test]
    fn it_should_round_trip_classification() {
        let classifier = Classifier::english();

        for text in [
            "The text just in case",
            "Then PuT tOgETHer",
            "what!the such-exp:the going?Jhon much; Going.",
            "",
            "   ",
            "Θαλασσα δεν είναι αγγλικά",
        ] {
            assert_eq!(serialize(&classifier.classify(text)), text);
        }
    }

    #[test]
    fn parts_concatenate_in_order() {
        let parts = vec![Some("Th"), Some("e"), Some(" "), Some("end")];

        assert_eq!(serialize_parts(parts), Ok("The end".to_string()));
    }

    #[test]
    fn missing_text_is_rejected_with_its_index() {
        let parts = vec![Some("Th"), None, Some("e")];

        assert_eq!(
            serialize_parts(parts),
            Err(RenderError::MissingText { index: 1 })
        );
    }

    #[test]
    fn empty_parts_serialize_to_empty_text() {
        assert_eq!(
            serialize_parts(Vec::<Option<&str>>::new()),
            Ok(String::new())
        );
    }
}
