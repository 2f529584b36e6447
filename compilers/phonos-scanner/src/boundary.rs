//! Word-boundary detection for anchored rules.
//!
//! A boundary sits wherever a word visually ends in running text: at the text
//! edges, at spaces (including the non-breaking HTML space), and at common
//! punctuation. Both derived views share this single definition.

const NON_BREAKABLE_HTML_CHAR: char = '\u{a0}';
const PUNCTUATION_CHARS: [char; 7] = ['.', ',', ';', '!', '?', ':', '-'];

fn is_punctuation(c: char) -> bool {
    PUNCTUATION_CHARS.iter().any(|cc| *cc == c)
}

/// Is the adjacent character (or text edge, when `None`) a word boundary?
pub fn is_boundary(adjacent: Option<char>) -> bool {
    match adjacent {
        None => true,
        Some(c) => c == ' ' || c == NON_BREAKABLE_HTML_CHAR || is_punctuation(c),
    }
}
