use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Unique identifier for a classified [`Sound`](crate::Sound).
///
/// Assigned fresh at classification time and unique within one classify call.
/// Never persisted and never reused; consumers use it to track a token through
/// downstream editing without recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)] // Ensure it has the same layout as Uuid (128 bits)
pub struct SoundId(pub Uuid);

impl SoundId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn from_u128(id: u128) -> Self {
        Self(Uuid::from_u128(id))
    }
}

impl From<Uuid> for SoundId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<SoundId> for Uuid {
    fn from(id: SoundId) -> Uuid {
        id.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hyphenated UUID form; this string is the boundary representation.
        write!(f, "{}", self.0)
    }
}

/// Injectable identifier strategy for the classifier.
///
/// Production uses a random source; tests swap in [`SequentialIds`] so that
/// classify output is fully deterministic.
pub trait IdSource {
    fn next_id(&self) -> SoundId;
}

/// Monotonic counter source. Deterministic, no RNG required, so it also works
/// in embedding contexts without an entropy provider.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> SoundId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        SoundId::from_u128(n as u128 + 1)
    }
}
