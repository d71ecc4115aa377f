pub mod yogas;

pub use yogas::{detect_yogas, Strength, Yoga, YogaCategory, YogaDetector};
