// Clock-time utility functions
// "HH:MM" strings are the wire format for activity times; parsing is
// best-effort because the store accepts whatever the UI hands it.

/// Minutes index of the last minute of a day (23:59).
pub const LAST_MINUTE_OF_DAY: i64 = 23 * 60 + 59;

/// Parse an "HH:MM" string into minutes since midnight.
/// Returns `None` for anything that is not a valid time of day.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format minutes since midnight as "HH:MM".
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Saturate a minute value to the 0:00–23:59 day bound. Out-of-range
/// values clamp at the boundary rather than wrapping into another day.
pub fn clamp_to_day(minutes: i64) -> u32 {
    minutes.clamp(0, LAST_MINUTE_OF_DAY) as u32
}
