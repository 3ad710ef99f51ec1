//! tickgate
//!
//! Host-facing facade over the trading-day tick query core. A host process
//! (plugin shell, RPC server, test harness) loads a [`Config`], wires in its
//! tick store and business-day oracle, and builds one [`TickGate`] at
//! startup; every inbound request then becomes a [`TickGate::query`] call.
//!
//! Startup is the only place configuration errors can surface: a missing or
//! malformed zone database, or an unresolvable required zone identifier,
//! fails [`TickGateBuilder::build`] and no query path becomes reachable.
//! Per-query failures are contained within their own `query` call.
#![warn(missing_docs)]

/// Startup configuration loading and validation.
pub mod config;
/// Process logging bootstrap.
pub mod logging;
mod service;

pub use config::{Config, ZoneConfig};
pub use service::{TickGate, TickGateBuilder};

pub use tickgate_core::{
    CalendarDate, CursorScope, Direction, HolidayOracle, TickCursor, TickGateError, TickQuery,
    TickRecord, TickRow, TickStore, Timestamp,
};
