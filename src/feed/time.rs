// Wall-clock helpers

use chrono::{Local, NaiveDateTime, Timelike};

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// ISO-8601 without offset; microseconds appear only when non-zero.
pub fn isoformat(ts: &NaiveDateTime) -> String {
    let base = ts.format("%Y-%m-%dT%H:%M:%S");
    match ts.nanosecond() / 1_000 {
        0 => base.to_string(),
        micros => format!("{base}.{micros:06}"),
    }
}
