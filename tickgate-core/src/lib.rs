//! tickgate-core
//!
//! Core types, traits, and the query pipeline shared across the tickgate
//! workspace.
//!
//! - `types`: request, record, row, and cursor-scope structures.
//! - `store`: the `TickStore`/`TickCursor` seam over the external tick store
//!   and the `HolidayOracle` seam over the external business-day calendar.
//! - `timezone`: zone resolution (IANA region with POSIX fallback) and the
//!   `TimeZoneSpec` handle.
//! - `normalize`: feed-local timestamp to calendar-date conversion.
//! - `calendar`: the single-slot business-day verdict cache.
//! - `pipeline`: validation, cursor lifecycle, filter, and projection.
//!
//! Execution model
//! ---------------
//! Queries run synchronously: cursor iteration, normalization, cache lookup,
//! and projection happen inline with no suspension points. Concurrency is the
//! caller's concern — one query per caller thread, each owning its cursor and
//! its cache. Resolved `TimeZoneSpec` handles are `Copy` and immutable after
//! startup, so they may be read from any number of threads.
#![warn(missing_docs)]

/// Single-slot business-day verdict cache.
pub mod calendar;
pub mod error;
/// Feed-local timestamp to calendar-date conversion.
pub mod normalize;
/// Query validation, cursor drive, filtering, and projection.
pub mod pipeline;
/// Store and oracle trait seams.
pub mod store;
/// Zone identifier resolution and the resolved zone handle.
pub mod timezone;
pub mod types;

pub use calendar::BusinessDayCache;
pub use error::TickGateError;
pub use normalize::to_calendar_date;
pub use pipeline::QueryPipeline;
pub use store::{HolidayOracle, TickCursor, TickStore};
pub use timezone::{TimeZoneResolver, TimeZoneSpec};
pub use types::*;
