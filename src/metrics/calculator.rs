//! Distance/pace time arithmetic and clock formatting.

use thiserror::Error;

/// Shown in place of a time that cannot be computed.
pub const PLACEHOLDER: &str = "--:--";

/// Pace string parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaceParseError {
    #[error("empty pace")]
    Empty,

    #[error("invalid pace: {0}")]
    InvalidNumber(String),

    #[error("seconds must be below 60, got {0}")]
    SecondsOutOfRange(u32),
}

/// Pure time calculations over distances and paces.
pub struct TimeCalculator;

impl TimeCalculator {
    /// Seconds needed to cover `distance_meters` at `pace_seconds_per_km`.
    ///
    /// Returns `None` when the pace is not positive.
    pub fn time(distance_meters: f64, pace_seconds_per_km: f64) -> Option<f64> {
        if pace_seconds_per_km.is_nan() || pace_seconds_per_km <= 0.0 {
            return None;
        }
        Some(distance_meters * pace_seconds_per_km / 1000.0)
    }

    /// Format seconds as `hh:mm:ss`, or `mm:ss` under one hour.
    ///
    /// Seconds are rounded; a rounded 60 carries into minutes and a
    /// resulting 60 minutes carries into hours. Non-finite or non-positive
    /// input gives [`PLACEHOLDER`].
    pub fn format_duration(total_seconds: f64) -> String {
        if !total_seconds.is_finite() || total_seconds <= 0.0 {
            return PLACEHOLDER.to_string();
        }

        let mut hours = (total_seconds / 3600.0).floor() as u64;
        let mut minutes = ((total_seconds % 3600.0) / 60.0).floor() as u64;
        let mut seconds = (total_seconds % 60.0).round() as u64;

        if seconds == 60 {
            minutes += 1;
            seconds = 0;
        }
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }

        if hours > 0 {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes:02}:{seconds:02}")
        }
    }

    /// Format an optional time, using the placeholder for `None`.
    pub fn format_time(time: Option<f64>) -> String {
        time.map_or_else(|| PLACEHOLDER.to_string(), Self::format_duration)
    }

    /// Format a pace as `m:ss` (minutes unpadded).
    pub fn format_pace(seconds_per_km: u32) -> String {
        format!("{}:{:02}", seconds_per_km / 60, seconds_per_km % 60)
    }

    /// Parse `m:ss` or a plain number of seconds.
    pub fn parse_pace(input: &str) -> Result<u32, PaceParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PaceParseError::Empty);
        }

        let parse = |s: &str| {
            s.trim()
                .parse::<u32>()
                .map_err(|_| PaceParseError::InvalidNumber(input.to_string()))
        };

        match input.split_once(':') {
            Some((min, sec)) => {
                let minutes = parse(min)?;
                let seconds = parse(sec)?;
                if seconds >= 60 {
                    return Err(PaceParseError::SecondsOutOfRange(seconds));
                }
                minutes
                    .checked_mul(60)
                    .and_then(|m| m.checked_add(seconds))
                    .ok_or_else(|| PaceParseError::InvalidNumber(input.to_string()))
            }
            None => parse(input),
        }
    }

    /// Pace in seconds per kilometer when running at `vma` km/h.
    pub fn vma_pace_seconds(vma: f64) -> Option<f64> {
        if !vma.is_finite() || vma <= 0.0 {
            return None;
        }
        Some(3600.0 / vma)
    }
}
