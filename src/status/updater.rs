//! Status updater implementation

use super::PresenceSink;
use crate::present::build_status_line;
use crate::price::PriceSource;
use crate::telemetry;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Result of a single refresh tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The status line was replaced with this text
    Updated(String),
    /// The fetch failed; the previous status line stays
    Skipped,
}

/// Upstream update time of the most recent successful tick.
///
/// Advisory only: written once per successful tick as a whole-value
/// replacement, read by nothing on the command path.
#[derive(Debug, Clone, Default)]
pub struct LastUpdated(Arc<RwLock<Option<String>>>);

impl LastUpdated {
    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, value: String) {
        *self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(value);
    }
}

/// Fetches a quote and pushes it to a presence sink on a fixed interval
pub struct StatusUpdater {
    source: Arc<dyn PriceSource>,
    sink: Arc<dyn PresenceSink>,
    last_updated: LastUpdated,
}

impl StatusUpdater {
    /// Create a new status updater
    pub fn new(source: Arc<dyn PriceSource>, sink: Arc<dyn PresenceSink>) -> Self {
        Self {
            source,
            sink,
            last_updated: LastUpdated::default(),
        }
    }

    /// Handle to the advisory last-updated cell
    pub fn last_updated(&self) -> LastUpdated {
        self.last_updated.clone()
    }

    /// Run one refresh. Failures are logged and swallowed.
    pub async fn tick(&self) -> TickOutcome {
        let quote = match self.source.fetch().await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Status refresh skipped");
                telemetry::record_tick("skipped");
                return TickOutcome::Skipped;
            }
        };

        let line = build_status_line(&quote);
        self.sink.set_status(&line).await;
        self.last_updated.set(quote.updated_at);
        telemetry::record_tick("updated");

        tracing::info!(status = %line, "Status updated");
        TickOutcome::Updated(line)
    }

    /// Tick immediately, then every `interval`.
    ///
    /// Each tick runs as its own task, so a tick slower than the interval
    /// overlaps the next one instead of delaying it.
    pub fn spawn(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let period = interval.max(Duration::from_millis(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let updater = Arc::clone(&self);
                tokio::spawn(async move {
                    updater.tick().await;
                });
            }
        })
    }
}
