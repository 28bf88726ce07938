use chrono::{DateTime, Utc};

/// Length of the challenge. Only used for the progress ring.
pub const CHALLENGE_DAYS: u32 = 75;

/// "Day N" of the challenge, counting the launch day as day 1.
///
/// Whole elapsed days since launch, plus one. Never below 1 and not
/// capped at [`CHALLENGE_DAYS`].
pub fn day_counter(launch_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    let Some(launch) = launch_date else {
        return 1;
    };
    let days = (now - launch).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX - 1) + 1
}

/// Fill ratio for the progress ring, clamped to 1.0.
pub fn progress_ratio(day: u32) -> f64 {
    (day as f64 / CHALLENGE_DAYS as f64).min(1.0)
}
