//! Playback time display

/// Format seconds as `m:ss`
///
/// Minutes are not padded and are not wrapped into hours; seconds are
/// truncated. Negative or non-finite input shows as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!("{}:{:02}", total / 60, total % 60)
}
