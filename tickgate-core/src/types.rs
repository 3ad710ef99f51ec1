//! Request, record, and result types for tick queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::TickGateError;

/// Timezone-independent (year, month, day) value; the cache key and the unit
/// of holiday determination.
pub type CalendarDate = NaiveDate;

/// Iteration order requested from the store.
///
/// The pipeline never re-sorts: output order is whatever order the store was
/// asked to yield in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Increasing time order (wire value 0).
    #[default]
    Ascending,
    /// Decreasing time order (wire value 1).
    Descending,
}

impl Direction {
    /// Map the wire flag (0 = ascending, anything else = descending).
    #[must_use]
    pub const fn from_flag(flag: i64) -> Self {
        if flag == 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// A parsed point-in-time tick query.
///
/// Argument-list parsing into these fields is the host's concern; this type
/// is the already-typed request. Optional fields default to
/// zero/false/empty/ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickQuery {
    /// Symbol to query. Required.
    pub symbol: String,
    /// Record-schema (definition) name understood by the store. Required.
    pub schema: String,
    /// Inclusive start time in epoch seconds; 0 = unbounded earliest.
    pub start: i64,
    /// Inclusive end time in epoch seconds; 0 = unbounded latest.
    pub end: i64,
    /// Iteration order requested from the store.
    pub direction: Direction,
    /// Maximum number of records the store should yield; 0 = unbounded.
    pub limit: i64,
    /// Free-form query property string passed through to the store.
    pub query_property: String,
    /// Encode output timestamps as decimal strings instead of numbers.
    pub use_string_timestamp: bool,
    /// Drop records falling on holidays of the effective calendar zone.
    pub use_holiday_filter: bool,
    /// Optional per-query zone for the holiday-date derivation. An
    /// unresolvable override falls back to the configured calendar zone.
    pub holiday_zone_override: Option<String>,
}

impl TickQuery {
    /// Check the required fields. A miss means the store is never contacted.
    ///
    /// # Errors
    /// Returns `TickGateError::InvalidArg` naming the missing field.
    pub fn validate(&self) -> Result<(), TickGateError> {
        if self.symbol.is_empty() {
            return Err(TickGateError::InvalidArg("symbol is required".into()));
        }
        if self.schema.is_empty() {
            return Err(TickGateError::InvalidArg(
                "record schema name is required".into(),
            ));
        }
        Ok(())
    }
}

/// The store-facing slice of a query: everything the cursor is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorScope {
    /// Symbol to iterate.
    pub symbol: String,
    /// Record-schema name.
    pub schema: String,
    /// Inclusive start time; 0 = unbounded.
    pub start: i64,
    /// Inclusive end time; 0 = unbounded.
    pub end: i64,
    /// Yield order.
    pub direction: Direction,
    /// Record cap; 0 = unbounded.
    pub limit: i64,
    /// Free-form properties, passed through verbatim.
    pub query_property: String,
}

impl From<&TickQuery> for CursorScope {
    fn from(q: &TickQuery) -> Self {
        Self {
            symbol: q.symbol.clone(),
            schema: q.schema.clone(),
            start: q.start,
            end: q.end,
            direction: q.direction,
            limit: q.limit,
            query_property: q.query_property.clone(),
        }
    }
}

/// One tick as yielded by the external store. Read-only.
///
/// `base_time` is feed-local civil time in epoch seconds, not UTC; the
/// payload field names follow the store's record definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRecord {
    /// Feed-native timestamp: feed-local civil time, epoch seconds.
    pub base_time: i64,
    /// Last trade price.
    pub last_price: f64,
    /// Cumulative session volume.
    pub volume: u64,
    /// Net change.
    pub net_change: f64,
    /// Percent change.
    pub percent_change: f64,
}

/// Largest timestamp magnitude representable without loss in the caller's
/// numeric type (doubles: 2^53 - 1).
pub const MAX_SAFE_TIMESTAMP: i64 = (1 << 53) - 1;

/// Output encoding of a row timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Numeric epoch seconds.
    Seconds(i64),
    /// Decimal string, used when string encoding is selected or the value
    /// exceeds [`MAX_SAFE_TIMESTAMP`].
    Text(String),
}

/// One projected 5-column output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRow {
    /// Timestamp in the encoding the query selected.
    pub ts: Timestamp,
    /// Last trade price.
    pub last_price: f64,
    /// Cumulative session volume.
    pub volume: u64,
    /// Net change.
    pub net_change: f64,
    /// Percent change.
    pub percent_change: f64,
}

impl TickRow {
    /// Project a store record into the chosen timestamp encoding.
    #[must_use]
    pub fn project(rec: &TickRecord, use_string_timestamp: bool) -> Self {
        let ts = if use_string_timestamp || rec.base_time.unsigned_abs() > MAX_SAFE_TIMESTAMP as u64
        {
            Timestamp::Text(rec.base_time.to_string())
        } else {
            Timestamp::Seconds(rec.base_time)
        };
        Self {
            ts,
            last_price: rec.last_price,
            volume: rec.volume,
            net_change: rec.net_change,
            percent_change: rec.percent_change,
        }
    }
}
