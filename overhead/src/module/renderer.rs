///! Renders pass predictions into human-readable lines.

use chrono::{Local, TimeZone, Utc};

use super::pass::PassRecord;

/// Format one pass as a display line in the given timezone.
fn format_pass_in<Tz>(pass: &PassRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match Utc.timestamp_opt(pass.risetime, 0).single() {
        Some(risetime) => format!(
            "Next pass at {} for {} seconds.",
            risetime.with_timezone(tz).format("%Y-%m-%d %H:%M:%S %Z"),
            pass.duration
        ),
        // Out-of-range epoch second; show the raw value instead of a date
        None => format!(
            "Next pass at epoch {} for {} seconds.",
            pass.risetime, pass.duration
        ),
    }
}

/// Format one pass in the machine's local timezone.
pub fn format_pass(pass: &PassRecord) -> String {
    format_pass_in(pass, &Local)
}

/// Render the whole forecast, one line per pass, upstream order kept.
pub fn render_passes(passes: &[PassRecord]) -> Vec<String> {
    passes.iter().map(format_pass).collect()
}
