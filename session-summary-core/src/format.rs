//! Display formatting for solve times.

use crate::solve::RealTime;

/// Token rendered in place of a disqualified time.
pub const DNF_TOKEN: &str = "DNF";

/// Format a real time as `M:SS.HH`, or `S.HH` below one minute.
///
/// Values are rounded half-up to hundredths of a second. A DNF renders as
/// [`DNF_TOKEN`].
pub fn format_seconds(time: RealTime) -> String {
    match time {
        RealTime::Dnf => DNF_TOKEN.to_string(),
        RealTime::Finite(ms) => format_millis(ms),
    }
}

fn format_millis(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let centis = (ms.unsigned_abs() + 5) / 10;

    let minutes = centis / 6_000;
    let seconds = (centis / 100) % 60;
    let hundredths = centis % 100;

    if minutes > 0 {
        format!("{}{}:{:02}.{:02}", sign, minutes, seconds, hundredths)
    } else {
        format!("{}{}.{:02}", sign, seconds, hundredths)
    }
}
