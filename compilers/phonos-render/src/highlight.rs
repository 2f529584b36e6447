use phonos_protocol::SoundKind;
use phonos_scanner::Classifier;

/// Highlight sounds in the text with HTML tags.
///
/// Classifies internally, wraps every categorized run in
/// `<span class='<kind>'>…</span>` and emits passthrough characters as-is, so
/// the visible text content of the fragment equals the input exactly.
///
/// Token text is injected into the markup verbatim (the historical contract).
/// Callers rendering untrusted input should use [`highlight_escaped`].
pub fn highlight<T: AsRef<str>>(classifier: &Classifier, text: T) -> String {
    render(classifier, text.as_ref(), false)
}

/// [`highlight`] with HTML escaping of every emitted text run.
///
/// Escapes `&`, `<`, `>`, `"` and `'`, so the fragment is safe to inject even
/// when the input itself contains markup. The visible content still decodes to
/// the original input; only its byte form differs.
pub fn highlight_escaped<T: AsRef<str>>(classifier: &Classifier, text: T) -> String {
    render(classifier, text.as_ref(), true)
}

fn render(classifier: &Classifier, text: &str, escape: bool) -> String {
    let mut out = String::new();

    for sound in classifier.classify(text) {
        let body = if escape {
            escape_html(sound.text())
        } else {
            sound.text().to_string()
        };

        if sound.kind() == SoundKind::Undefined {
            out.push_str(&body);
        } else {
            out.push_str(&format!("<span class='{}'>{}</span>", sound.kind(), body));
        }
    }

    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }

    escaped
}
