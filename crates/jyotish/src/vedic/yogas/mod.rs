//! Yoga detection.
//!
//! Two paths feed one result list: the declarative catalog evaluated by
//! [`engine`], and the hand-written [`legacy`] families. [`detector`] merges
//! them, keeping the catalog finding whenever both produce the same name.

pub mod catalog;
pub mod detector;
pub mod engine;
pub mod helpers;
pub mod legacy;
pub mod predicates;
pub mod types;

pub use catalog::{
    catalog, find_definition, Detection, Gate, PatternCheck, StrengthCondition, StrengthRule,
    YogaDefinition,
};
pub use detector::{detect_yogas, merge_findings, YogaDetector};
pub use engine::{evaluate, evaluate_with};
pub use helpers::Polarity;
pub use legacy::detect_legacy;
pub use predicates::{evaluate_pattern, mercury_not_combust, PatternMatch};
pub use types::{Strength, Yoga, YogaCategory};
