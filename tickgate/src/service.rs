use std::sync::Arc;
use std::time::Instant;

use tickgate_core::{
    HolidayOracle, QueryPipeline, TickGateError, TickQuery, TickRow, TickStore, TimeZoneResolver,
    TimeZoneSpec,
};

use crate::config::Config;

/// The host-facing query service: one pipeline, built at startup, invoked
/// per request.
pub struct TickGate {
    pipeline: QueryPipeline,
}

/// Builder wiring configuration and the external collaborators into a
/// [`TickGate`].
#[derive(Default)]
pub struct TickGateBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn TickStore>>,
    oracle: Option<Arc<dyn HolidayOracle>>,
}

impl TickGateBuilder {
    /// A builder with nothing wired yet. Configuration, store, and oracle
    /// are all required before [`build`](Self::build).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the startup configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Supply the external tick store.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn TickStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Supply the external business-day oracle.
    #[must_use]
    pub fn with_oracle(mut self, oracle: Arc<dyn HolidayOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Validate configuration, load the zone database, resolve the startup
    /// zones, and assemble the service.
    ///
    /// # Errors
    /// `TickGateError::Config` for anything missing or unresolvable; the
    /// service never comes up half-configured.
    pub fn build(self) -> Result<TickGate, TickGateError> {
        let config = self
            .config
            .ok_or_else(|| TickGateError::config("configuration is required"))?;
        config.validate()?;
        let store = self
            .store
            .ok_or_else(|| TickGateError::config("tick store is required"))?;
        let oracle = self
            .oracle
            .ok_or_else(|| TickGateError::config("business-day oracle is required"))?;

        let resolver = TimeZoneResolver::from_spec_file(&config.tzdb)?;
        let feed_zone = resolve_startup_zone(&resolver, config.zones.feed_zone())?;
        let calendar_zone = resolve_startup_zone(&resolver, config.zones.calendar_zone())?;

        tracing::info!(
            feed_zone = config.zones.feed_zone(),
            calendar_zone = config.zones.calendar_zone(),
            tzdb = %config.tzdb.display(),
            "init complete, awaiting queries"
        );
        Ok(TickGate {
            pipeline: QueryPipeline::new(feed_zone, calendar_zone, resolver, store, oracle),
        })
    }
}

/// A startup zone that fails to resolve is a configuration error, not a
/// per-query one.
fn resolve_startup_zone(
    resolver: &TimeZoneResolver,
    identifier: &str,
) -> Result<TimeZoneSpec, TickGateError> {
    resolver
        .resolve(identifier)
        .map_err(|_| TickGateError::config(format!("unresolvable zone \"{identifier}\"")))
}

impl TickGate {
    /// Run one query to completion and return the materialized rows.
    ///
    /// # Errors
    /// Propagates the pipeline's error taxonomy; an aborted query returns no
    /// partial data.
    pub fn query(&self, query: &TickQuery) -> Result<Vec<TickRow>, TickGateError> {
        let started = Instant::now();
        let result = self.pipeline.execute(query);
        let elapsed_us = started.elapsed().as_micros();
        match &result {
            Ok(rows) => {
                tracing::debug!(symbol = %query.symbol, rows = rows.len(), elapsed_us, "query complete");
            }
            Err(err) => {
                tracing::warn!(symbol = %query.symbol, error = %err, elapsed_us, "query failed");
            }
        }
        result
    }
}
