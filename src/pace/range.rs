//! Pace range generation.
//!
//! Paces are tabulated from the slow bound down to the fast bound in fixed
//! steps, clamped to the representable domain of 2:00/km to 9:00/km. Both
//! user bounds always appear as rows, even when the step skips them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::TimeCalculator;

/// Fastest representable pace (2:00/km).
pub const ABS_MIN_SECONDS: i32 = 120;
/// Slowest representable pace (9:00/km).
pub const ABS_MAX_SECONDS: i32 = 540;

/// One table row: a pace and its `m:ss` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceEntry {
    pub label: String,
    /// Seconds per kilometer
    pub total_seconds: u32,
}

impl PaceEntry {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            label: TimeCalculator::format_pace(total_seconds),
            total_seconds,
        }
    }
}

/// Why a pace configuration produces no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaceRangeIssue {
    #[error("slow pace {max} is faster than fast pace {min}")]
    Inverted { max: i32, min: i32 },

    #[error("pace step must be positive, got {0}s")]
    NonPositiveInterval(i32),

    #[error("slow pace {0}s is faster than the 2:00/km limit")]
    BelowDomain(i32),

    #[error("fast pace {0}s is slower than the 9:00/km limit")]
    AboveDomain(i32),
}

/// User-chosen slow/fast bounds and step, in seconds per km.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaceRangeConfig {
    /// Slowest pace to show
    pub max_seconds: i32,
    /// Fastest pace to show
    pub min_seconds: i32,
    /// Step between rows
    pub interval_seconds: i32,
}

impl Default for PaceRangeConfig {
    fn default() -> Self {
        Self {
            max_seconds: 7 * 60,
            min_seconds: 3 * 60,
            interval_seconds: 15,
        }
    }
}

impl PaceRangeConfig {
    pub fn new(max_seconds: i32, min_seconds: i32, interval_seconds: i32) -> Self {
        Self {
            max_seconds,
            min_seconds,
            interval_seconds,
        }
    }

    /// Clamped `(start, end)` bounds, or the reason the range is empty.
    pub fn clamped_bounds(&self) -> Result<(i32, i32), PaceRangeIssue> {
        if self.max_seconds < self.min_seconds {
            return Err(PaceRangeIssue::Inverted {
                max: self.max_seconds,
                min: self.min_seconds,
            });
        }
        if self.interval_seconds <= 0 {
            return Err(PaceRangeIssue::NonPositiveInterval(self.interval_seconds));
        }
        if self.max_seconds < ABS_MIN_SECONDS {
            return Err(PaceRangeIssue::BelowDomain(self.max_seconds));
        }
        if self.min_seconds > ABS_MAX_SECONDS {
            return Err(PaceRangeIssue::AboveDomain(self.min_seconds));
        }

        Ok((
            self.max_seconds.min(ABS_MAX_SECONDS),
            self.min_seconds.max(ABS_MIN_SECONDS),
        ))
    }

    pub fn is_valid(&self) -> bool {
        self.clamped_bounds().is_ok()
    }

    /// Rows for this configuration. See [`generate_paces`].
    pub fn generate(&self) -> Vec<PaceEntry> {
        generate_paces(self)
    }
}

/// Paces from slowest to fastest.
///
/// Steps down from the clamped slow bound by `interval_seconds`, then adds
/// either clamped bound the stepping missed. Invalid configurations give
/// an empty list.
pub fn generate_paces(config: &PaceRangeConfig) -> Vec<PaceEntry> {
    let (start, end) = match config.clamped_bounds() {
        Ok(bounds) => bounds,
        Err(issue) => {
            tracing::debug!("Empty pace range: {}", issue);
            return Vec::new();
        }
    };

    let mut seconds: Vec<i32> = (end..=start)
        .rev()
        .step_by(config.interval_seconds as usize)
        .collect();

    for bound in [end, start] {
        if !seconds.contains(&bound) {
            seconds.push(bound);
        }
    }

    seconds.sort_unstable_by(|a, b| b.cmp(a));
    seconds.dedup();

    seconds
        .into_iter()
        .map(|s| PaceEntry::new(s as u32))
        .collect()
}
