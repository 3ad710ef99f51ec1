//! Deterministic doubles for the external collaborators: an in-memory tick
//! store honoring cursor scoping, and holiday oracles with call counting.
//!
//! Reserved symbols trigger forced failures so error paths are testable:
//! `FAIL` rejects the cursor open, `FAIL_MID` fails after yielding one
//! record.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Datelike, Weekday};
use tickgate_core::{
    CalendarDate, CursorScope, Direction, HolidayOracle, TickCursor, TickGateError, TickRecord,
    TickStore,
};

pub mod fixtures;

/// Symbol whose cursor open is rejected with a store diagnostic.
pub const FAIL_OPEN: &str = "FAIL";
/// Symbol whose cursor fails after yielding one record.
pub const FAIL_MID_ITERATION: &str = "FAIL_MID";

/// In-memory tick store keyed by symbol.
///
/// `open` applies the scope the way the real store would: inclusive time
/// range (0 = unbounded), yield direction, and record limit. Opens are
/// counted so tests can assert the store was never contacted.
#[derive(Default)]
pub struct MockStore {
    series: HashMap<String, Vec<TickRecord>>,
    opens: AtomicUsize,
}

impl MockStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tick series for a symbol, in ascending time order.
    #[must_use]
    pub fn with_series(mut self, symbol: &str, ticks: Vec<TickRecord>) -> Self {
        self.series.insert(symbol.to_string(), ticks);
        self
    }

    /// Number of cursors opened so far.
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl TickStore for MockStore {
    fn open(&self, scope: &CursorScope) -> Result<Box<dyn TickCursor + '_>, TickGateError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if scope.symbol == FAIL_OPEN {
            return Err(TickGateError::store("symbol not licensed: FAIL"));
        }
        let mut ticks = self.series.get(&scope.symbol).cloned().unwrap_or_default();
        ticks.retain(|t| {
            (scope.start == 0 || t.base_time >= scope.start)
                && (scope.end == 0 || t.base_time <= scope.end)
        });
        if scope.direction == Direction::Descending {
            ticks.reverse();
        }
        if scope.limit > 0 {
            ticks.truncate(usize::try_from(scope.limit).unwrap_or(usize::MAX));
        }
        let fail_after = (scope.symbol == FAIL_MID_ITERATION).then_some(1);
        Ok(Box::new(MockCursor {
            ticks: ticks.into_iter(),
            yielded: 0,
            fail_after,
        }))
    }
}

struct MockCursor {
    ticks: std::vec::IntoIter<TickRecord>,
    yielded: usize,
    fail_after: Option<usize>,
}

impl TickCursor for MockCursor {
    fn next(&mut self) -> Result<Option<TickRecord>, TickGateError> {
        if self.fail_after == Some(self.yielded) {
            return Err(TickGateError::store("tick plant connection lost"));
        }
        match self.ticks.next() {
            Some(t) => {
                self.yielded += 1;
                Ok(Some(t))
            }
            None => Ok(None),
        }
    }
}

/// Oracle marking Saturday and Sunday as holidays.
pub struct WeekendOracle;

impl HolidayOracle for WeekendOracle {
    fn is_holiday(&self, date: CalendarDate) -> Result<bool, TickGateError> {
        Ok(matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
    }
}

/// Oracle wrapper that counts invocations of an arbitrary verdict function.
pub struct CountingOracle {
    calls: AtomicUsize,
    verdict: fn(CalendarDate) -> bool,
}

impl CountingOracle {
    /// Wrap a verdict function.
    #[must_use]
    pub const fn new(verdict: fn(CalendarDate) -> bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            verdict,
        }
    }

    /// Oracle marking weekends, with counting.
    #[must_use]
    pub const fn weekends() -> Self {
        Self::new(weekend_verdict)
    }

    /// Number of oracle invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn weekend_verdict(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

impl HolidayOracle for CountingOracle {
    fn is_holiday(&self, date: CalendarDate) -> Result<bool, TickGateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((self.verdict)(date))
    }
}
