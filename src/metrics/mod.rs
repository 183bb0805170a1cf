//! Metrics module for time arithmetic and effort colors.

pub mod calculator;
pub mod zones;

pub use calculator::{PaceParseError, TimeCalculator, PLACEHOLDER};
pub use zones::{Color, ColorSample, EffortPaceWindow, PaceColorMapper};
