use core::fmt;
use core::str::FromStr;

use alloc::string::String;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::ids::SoundId;

/// English sound categories.
///
/// The string form of each variant is a stable external contract: the
/// highlight renderer emits it verbatim as a CSS class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum SoundKind {
    /// Aspirated stop consonants (p, t, k clusters)
    Ptk = 0,
    /// Dental fricative digraph (th)
    Th = 1,
    /// Rounded glide (w)
    W = 2,
    /// Voiced labiodental (v)
    V = 3,
    /// Velar nasal digraph (ng, nk)
    Ng = 4,
    /// Affricate digraph (ch)
    Ch = 5,
    /// Voiced affricate (j)
    Dj = 6,
    /// No rule matched; literal passthrough, always a single character
    Undefined = 7,
}

impl SoundKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SoundKind::Ptk => "Ptk",
            SoundKind::Th => "Th",
            SoundKind::W => "W",
            SoundKind::V => "V",
            SoundKind::Ng => "Ng",
            SoundKind::Ch => "Ch",
            SoundKind::Dj => "Dj",
            SoundKind::Undefined => "Undefined",
        }
    }

    /// Maps the rkyv-archived representation back to the enum.
    pub fn from_archived(archived: &ArchivedSoundKind) -> SoundKind {
        match archived {
            ArchivedSoundKind::Ptk => SoundKind::Ptk,
            ArchivedSoundKind::Th => SoundKind::Th,
            ArchivedSoundKind::W => SoundKind::W,
            ArchivedSoundKind::V => SoundKind::V,
            ArchivedSoundKind::Ng => SoundKind::Ng,
            ArchivedSoundKind::Ch => SoundKind::Ch,
            ArchivedSoundKind::Dj => SoundKind::Dj,
            ArchivedSoundKind::Undefined => SoundKind::Undefined,
        }
    }
}

impl fmt::Display for SoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a kind name in a rule source is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sound kind: '{}'", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownKind {}

impl FromStr for SoundKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ptk" => Ok(SoundKind::Ptk),
            "Th" => Ok(SoundKind::Th),
            "W" => Ok(SoundKind::W),
            "V" => Ok(SoundKind::V),
            "Ng" => Ok(SoundKind::Ng),
            "Ch" => Ok(SoundKind::Ch),
            "Dj" => Ok(SoundKind::Dj),
            "Undefined" => Ok(SoundKind::Undefined),
            other => Err(UnknownKind(String::from(other))),
        }
    }
}

/// Anything that can be serialized back to plain text.
///
/// The serialize renderer only requires this much shape, so sequences built by
/// external producers are accepted as-is.
pub trait Spelled {
    fn text(&self) -> &str;
}

/// One classified token, covering a contiguous substring of the input.
#[derive(Debug, Clone)]
pub struct Sound {
    id: SoundId,
    kind: SoundKind,
    text: String,
}

impl Sound {
    pub fn new(id: SoundId, kind: SoundKind, text: String) -> Self {
        Self { id, kind, text }
    }

    pub fn id(&self) -> SoundId {
        self.id
    }

    pub fn kind(&self) -> SoundKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Spelled for Sound {
    fn text(&self) -> &str {
        &self.text
    }
}

/// Identity is excluded from equality: two sounds are equal when they classify
/// the same text the same way, regardless of which call produced them.
impl PartialEq for Sound {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}
