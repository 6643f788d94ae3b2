//! Blend derivation: answers in, coffee recommendation out.
//!
//! Everything here is pure table lookup and arithmetic.

mod derive;
pub mod tables;

pub use derive::{derive_result, derive_result_with};

use serde::{Deserialize, Serialize};

/// The recommendation shown on the result screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendResult {
    pub name: String,
    pub tasting_notes: String,
    pub origin_breakdown: String,
    pub roast_level: String,
    pub grind_suggestion: String,
    pub caffeine_level: String,
    pub description: String,
    /// Body of the primary origin
    pub body: String,
}
