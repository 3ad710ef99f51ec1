//! Single-slot memoization of the business-day oracle.

use crate::store::HolidayOracle;
use crate::types::CalendarDate;
use crate::TickGateError;

/// Memoizes the most recent date's holiday verdict.
///
/// Ticks cluster within a trading day and the oracle call is assumed costly,
/// so amortizing it across a contiguous same-date run is the dominant
/// optimization. The slot only ever compares against the immediately prior
/// record's date: correctness does not depend on stream monotonicity, a
/// non-monotonic stream merely loses the amortization.
///
/// One instance per query execution, owned by that execution, discarded at
/// query end.
#[derive(Debug, Default)]
pub struct BusinessDayCache {
    last: Option<(CalendarDate, bool)>,
}

impl BusinessDayCache {
    /// An empty cache; the first lookup always consults the oracle.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Answer whether `date` is a holiday, consulting the oracle only when
    /// `date` differs from the immediately prior lookup.
    ///
    /// # Errors
    /// Propagates the oracle's error; the slot is left unchanged so a retry
    /// would consult the oracle again.
    pub fn is_holiday(
        &mut self,
        date: CalendarDate,
        oracle: &dyn HolidayOracle,
    ) -> Result<bool, TickGateError> {
        if let Some((last_date, verdict)) = self.last
            && last_date == date
        {
            return Ok(verdict);
        }
        let verdict = oracle.is_holiday(date)?;
        self.last = Some((date, verdict));
        Ok(verdict)
    }
}
