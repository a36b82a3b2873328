//! Tunables for schedule insights.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LARGE_BLOCK_MINUTES, DEFAULT_LOOKAHEAD_DAYS, DEFAULT_MAX_REPORTED_GAPS,
    DEFAULT_MIN_GAP_MINUTES, DEFAULT_WORK_DAY_END, DEFAULT_WORK_DAY_START,
};
use crate::error::{TimeboxError, TimeboxResult};

fn default_work_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_WORK_DAY_START.0, DEFAULT_WORK_DAY_START.1, 0)
        .unwrap_or_default()
}

fn default_work_day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_WORK_DAY_END.0, DEFAULT_WORK_DAY_END.1, 0)
        .unwrap_or_default()
}

fn default_min_gap_minutes() -> i64 {
    DEFAULT_MIN_GAP_MINUTES
}

fn default_lookahead_days() -> u32 {
    DEFAULT_LOOKAHEAD_DAYS
}

fn default_max_reported_gaps() -> usize {
    DEFAULT_MAX_REPORTED_GAPS
}

fn default_large_block_minutes() -> i64 {
    DEFAULT_LARGE_BLOCK_MINUTES
}

/// Settings for gap finding and the insights report.
///
/// Every field has a default, so an empty `[insights]` table (or none at all)
/// gives the stock 08:00-18:00 working day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Start of the daily working window, "HH:MM"
    #[serde(default = "default_work_day_start", with = "clock_time")]
    pub work_day_start: NaiveTime,

    /// End of the daily working window, "HH:MM"
    #[serde(default = "default_work_day_end", with = "clock_time")]
    pub work_day_end: NaiveTime,

    /// Free intervals shorter than this are not reported
    #[serde(default = "default_min_gap_minutes")]
    pub min_gap_minutes: i64,

    /// Number of days, starting today, scanned for gaps
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,

    /// How many gaps the report lists
    #[serde(default = "default_max_reported_gaps")]
    pub max_reported_gaps: usize,

    /// Gaps at least this long count as "large free blocks"
    #[serde(default = "default_large_block_minutes")]
    pub large_block_minutes: i64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        InsightsConfig {
            work_day_start: default_work_day_start(),
            work_day_end: default_work_day_end(),
            min_gap_minutes: default_min_gap_minutes(),
            lookahead_days: default_lookahead_days(),
            max_reported_gaps: default_max_reported_gaps(),
            large_block_minutes: default_large_block_minutes(),
        }
    }
}

impl InsightsConfig {
    pub fn validate(&self) -> TimeboxResult<()> {
        if self.work_day_start >= self.work_day_end {
            return Err(TimeboxError::Config(format!(
                "work_day_start ({}) must be before work_day_end ({})",
                self.work_day_start.format("%H:%M"),
                self.work_day_end.format("%H:%M")
            )));
        }
        if self.min_gap_minutes < 0 {
            return Err(TimeboxError::Config(
                "min_gap_minutes must not be negative".into(),
            ));
        }
        if self.large_block_minutes < 0 {
            return Err(TimeboxError::Config(
                "large_block_minutes must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// (De)serialize a `NaiveTime` as "HH:MM" (seconds accepted on input).
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|_| D::Error::custom(format!("invalid time of day '{s}', expected HH:MM")))
    }
}
