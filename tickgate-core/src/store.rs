//! Trait seams over the external collaborators.
//!
//! The tick store's cursor and the business-day oracle are external systems;
//! this crate only drives them. Implementations must map their native
//! failures into [`TickGateError`] values — errors are data here, not
//! unwinding control flow.

use crate::types::{CalendarDate, CursorScope, TickRecord};
use crate::TickGateError;

/// An open, ordered iteration handle over matching tick records.
///
/// A cursor belongs exclusively to one query for its full open → drain →
/// close lifetime. Closing is the `Drop` impl's job, so every exit path of a
/// query — completion or abort — releases the cursor.
pub trait TickCursor {
    /// Yield the next record, `None` when drained.
    ///
    /// # Errors
    /// Returns `TickGateError::Store` with the store's diagnostic text on a
    /// mid-iteration failure; the driving query aborts with no partial
    /// result.
    fn next(&mut self) -> Result<Option<TickRecord>, TickGateError>;
}

/// The external tick store.
pub trait TickStore: Send + Sync {
    /// Open a cursor over the records matching `scope`.
    ///
    /// # Errors
    /// Returns `TickGateError::Store` carrying the store's diagnostic text
    /// when the scope is rejected.
    fn open(&self, scope: &CursorScope) -> Result<Box<dyn TickCursor + '_>, TickGateError>;
}

/// The external business-day oracle: does this calendar date fall on a
/// trading holiday?
///
/// The oracle call is assumed costly; [`crate::BusinessDayCache`] amortizes
/// it across same-date runs.
pub trait HolidayOracle: Send + Sync {
    /// Answer whether `date` is a trading holiday.
    ///
    /// # Errors
    /// An oracle failure aborts the driving query.
    fn is_holiday(&self, date: CalendarDate) -> Result<bool, TickGateError>;
}
