//! Deterministic tick fixtures.

use chrono::NaiveDate;
use tickgate_core::TickRecord;

/// Build a tick with plausible payload values derived from the price.
#[must_use]
pub fn tick(base_time: i64, last_price: f64, volume: u64) -> TickRecord {
    TickRecord {
        base_time,
        last_price,
        volume,
        net_change: last_price * 0.01,
        percent_change: 1.0,
    }
}

/// Epoch seconds of a naive civil datetime, for feed-local timestamps.
///
/// # Panics
/// Panics on an invalid civil date or time; fixtures are hand-written.
#[must_use]
pub fn civil(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, 0)
        .unwrap()
        .and_utc()
        .timestamp()
}

/// One 09:00 tick on each of Saturday 2024-06-01, Sunday 2024-06-02, and
/// Monday 2024-06-03, feed-local civil time.
#[must_use]
pub fn weekend_straddle() -> Vec<TickRecord> {
    vec![
        tick(civil(2024, 6, 1, 9, 0), 101.0, 1_000),
        tick(civil(2024, 6, 2, 9, 0), 102.0, 2_000),
        tick(civil(2024, 6, 3, 9, 0), 103.0, 3_000),
    ]
}

/// An ascending intraday run, `count` ticks one minute apart from 09:30 on
/// Monday 2024-06-03.
#[must_use]
pub fn intraday_run(count: usize) -> Vec<TickRecord> {
    let open = civil(2024, 6, 3, 9, 30);
    (0..count)
        .map(|i| tick(open + 60 * i as i64, 100.0 + i as f64, 100 * (i as u64 + 1)))
        .collect()
}
