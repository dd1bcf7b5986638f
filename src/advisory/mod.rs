//! Rule-based taste, texture, and substitution guidance.
//!
//! Both entry points are pure: the same formula and thresholds always give
//! the same text, regardless of how the formula was built.

pub mod feedback;
pub mod substitution;
pub mod thresholds;

use serde::{Deserialize, Serialize};

pub use feedback::sensory_feedback;
pub use substitution::substitution_advice;
pub use thresholds::AdvisoryThresholds;

/// Which advisory stages run after the nutrition calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub feedback: bool,
    pub substitution: bool,
}

impl FeatureSet {
    pub const NONE: FeatureSet = FeatureSet {
        feedback: false,
        substitution: false,
    };

    pub const ALL: FeatureSet = FeatureSet {
        feedback: true,
        substitution: true,
    };
}
