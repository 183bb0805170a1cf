//! Pace rows for the reference table.

pub mod range;

pub use range::{
    generate_paces, PaceEntry, PaceRangeConfig, PaceRangeIssue, ABS_MAX_SECONDS, ABS_MIN_SECONDS,
};
