//! The query pipeline: validation, cursor lifecycle, per-record
//! normalize → filter → project, and result assembly.

use std::sync::Arc;

use crate::calendar::BusinessDayCache;
use crate::normalize::to_calendar_date;
use crate::store::{HolidayOracle, TickStore};
use crate::timezone::{TimeZoneResolver, TimeZoneSpec};
use crate::types::{CursorScope, TickQuery, TickRow};
use crate::TickGateError;

/// Drives one query at a time against the external store and oracle.
///
/// Constructed once at startup with the resolved startup zones; invoked per
/// request. All per-query mutable state (cursor, cache, row buffer) is local
/// to a single [`execute`](Self::execute) call, so one pipeline may serve
/// concurrent queries from separate caller threads.
pub struct QueryPipeline {
    feed_zone: TimeZoneSpec,
    calendar_zone: TimeZoneSpec,
    resolver: TimeZoneResolver,
    store: Arc<dyn TickStore>,
    oracle: Arc<dyn HolidayOracle>,
}

impl QueryPipeline {
    /// Assemble a pipeline from resolved startup zones and the external
    /// collaborators.
    #[must_use]
    pub fn new(
        feed_zone: TimeZoneSpec,
        calendar_zone: TimeZoneSpec,
        resolver: TimeZoneResolver,
        store: Arc<dyn TickStore>,
        oracle: Arc<dyn HolidayOracle>,
    ) -> Self {
        Self {
            feed_zone,
            calendar_zone,
            resolver,
            store,
            oracle,
        }
    }

    /// The zone whose civil calendar dates the holiday check uses for this
    /// query: the resolved override when one is given and resolvable, else
    /// the configured calendar zone. Failing a live query over an optional
    /// override would be worse than proceeding with the default, so an
    /// unresolvable override never aborts.
    fn holiday_zone(&self, query: &TickQuery) -> TimeZoneSpec {
        match query.holiday_zone_override.as_deref() {
            Some(id) if !id.is_empty() => match self.resolver.resolve(id) {
                Ok(zone) => zone,
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(identifier = id, "unresolvable holiday zone override, using calendar zone");
                    self.calendar_zone
                }
            },
            _ => self.calendar_zone,
        }
    }

    /// Run one query to completion.
    ///
    /// Records are consumed strictly in the order the cursor yields them;
    /// the pipeline never re-sorts. A filtered record is dropped before
    /// projection and has no effect on store-side limit accounting. The
    /// cursor is closed on every exit path (its `Drop`), and an abort
    /// discards any partially accumulated rows — an aborted query never
    /// returns partial data.
    ///
    /// # Errors
    /// `InvalidArg` for a missing required field (no store interaction),
    /// `Store` when the store rejects the scope or fails mid-iteration,
    /// `Data` when a timestamp cannot be normalized, and whatever the
    /// oracle propagates.
    pub fn execute(&self, query: &TickQuery) -> Result<Vec<TickRow>, TickGateError> {
        query.validate()?;
        let holiday_zone = self.holiday_zone(query);

        let scope = CursorScope::from(query);
        let mut cursor = self.store.open(&scope)?;
        let mut cache = BusinessDayCache::new();
        let mut rows = Vec::new();
        while let Some(record) = cursor.next()? {
            if query.use_holiday_filter {
                let date = to_calendar_date(record.base_time, self.feed_zone, holiday_zone)?;
                if cache.is_holiday(date, self.oracle.as_ref())? {
                    continue;
                }
            }
            rows.push(TickRow::project(&record, query.use_string_timestamp));
        }
        Ok(rows)
    }
}
