// src/api/mod.rs

pub mod types;
pub mod verify;

pub use types::{ErrorResponse, VerifyRequest, VerifyResponse};
pub use verify::{Verifier, KNOWN_FALSE_VERDICT};
