//! The two derived views over a sound sequence: `serialize` (sounds back to
//! plain text, the exact inverse of classification) and `highlight` (HTML
//! markup over categorized runs).

pub mod highlight;
pub mod serialize;

pub use highlight::{highlight, highlight_escaped};
pub use serialize::{serialize, serialize_parts, RenderError};
