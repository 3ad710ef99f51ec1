//! Feed-local timestamp to calendar-date conversion.

use chrono::DateTime;

use crate::timezone::TimeZoneSpec;
use crate::types::CalendarDate;
use crate::TickGateError;

/// Convert a feed-native timestamp into the civil calendar date under
/// `target_zone`.
///
/// `ts` is feed-local civil time in epoch seconds, not UTC. Two hops, each
/// against the zone's live transition table: interpret `ts` as civil time in
/// `feed_zone` to obtain the absolute UTC instant, then reinterpret that
/// instant under `target_zone` to take the date. A single cached offset is
/// not equivalent — a given instant's date can differ between the two zones
/// near midnight and near DST boundaries.
///
/// # Errors
/// Returns `TickGateError::Data` when `ts` is outside the representable
/// civil range or cannot be resolved in the feed zone.
pub fn to_calendar_date(
    ts: i64,
    feed_zone: TimeZoneSpec,
    target_zone: TimeZoneSpec,
) -> Result<CalendarDate, TickGateError> {
    let civil = DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| TickGateError::Data(format!("timestamp {ts} out of range")))?
        .naive_utc();
    let instant = feed_zone
        .civil_to_utc(civil)
        .ok_or_else(|| TickGateError::Data(format!("timestamp {ts} unresolvable in feed zone")))?;
    Ok(target_zone.date_at(instant))
}
