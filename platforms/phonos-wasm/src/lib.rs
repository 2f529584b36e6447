use wasm_bindgen::prelude::*;

use serde::{Deserialize, Serialize};

use phonos_render::{highlight, highlight_escaped, serialize_parts};
use phonos_scanner::{classifier_from_bytes, Classifier};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The record shape exchanged with JavaScript: all fields are strings.
#[derive(Serialize)]
pub struct SoundRecord {
    pub id: String,
    pub kind: String,
    pub text: String,
}

/// Incoming records only need a text field; anything else is ignored.
#[derive(Deserialize)]
struct LooseRecord {
    #[serde(default)]
    text: Option<String>,
}

/// The Engine Instance running in the Browser
#[wasm_bindgen]
pub struct SoundEngine {
    classifier: Classifier,
}

#[wasm_bindgen]
impl SoundEngine {
    /// Builds an engine from a compiled rule-set binary (loaded via fetch()
    /// in JS). The archive is validated before the table is compiled.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<SoundEngine, JsError> {
        let classifier =
            classifier_from_bytes(&data).map_err(|e| JsError::new(&e.to_string()))?;

        Ok(Self { classifier })
    }

    /// Engine over the built-in English rule set, no fetch required.
    pub fn english() -> SoundEngine {
        Self {
            classifier: Classifier::english(),
        }
    }

    /// Text -> array of `{id, kind, text}` records.
    pub fn classify(&self, text: &str) -> Result<JsValue, JsError> {
        let records: Vec<SoundRecord> = self
            .classifier
            .classify(text)
            .iter()
            .map(|sound| SoundRecord {
                id: sound.id().to_string(),
                kind: sound.kind().to_string(),
                text: sound.text().to_string(),
            })
            .collect();

        serde_wasm_bindgen::to_value(&records).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Text -> HTML fragment with categorized runs wrapped in spans.
    pub fn highlight(&self, text: &str) -> String {
        highlight(&self.classifier, text)
    }

    /// As `highlight`, but HTML-escapes the emitted text runs.
    pub fn highlight_escaped(&self, text: &str) -> String {
        highlight_escaped(&self.classifier, text)
    }

    /// Array of `{text, …}`-shaped records -> plain text. A record missing a
    /// usable text field fails this call only; nothing is substituted.
    pub fn serialize(&self, sounds: JsValue) -> Result<String, JsError> {
        let records: Vec<LooseRecord> =
            serde_wasm_bindgen::from_value(sounds).map_err(|e| JsError::new(&e.to_string()))?;

        serialize_parts(records.iter().map(|r| r.text.as_deref()))
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
