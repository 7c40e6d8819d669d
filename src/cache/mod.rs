// src/cache/mod.rs

pub mod clock;
pub mod evidence_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use evidence_cache::{fingerprint, EvidenceCache};
