// src/scoring/mod.rs

pub mod rules;
pub mod fusion;

pub use rules::{score_text, BASE_SCORE};
pub use fusion::fuse;
