//! Default values shared across TimeBox.

/// Working window start (hour, minute)
pub const DEFAULT_WORK_DAY_START: (u32, u32) = (8, 0);

/// Working window end (hour, minute)
pub const DEFAULT_WORK_DAY_END: (u32, u32) = (18, 0);

/// Shortest free interval worth reporting
pub const DEFAULT_MIN_GAP_MINUTES: i64 = 30;

/// Days scanned for gaps, today included
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Gaps listed in the insights report
pub const DEFAULT_MAX_REPORTED_GAPS: usize = 5;

/// Threshold for the "large free blocks" insight
pub const DEFAULT_LARGE_BLOCK_MINUTES: i64 = 120;
