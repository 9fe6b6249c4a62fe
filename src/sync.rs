use tracing::{error, info, instrument, warn};

use crate::config::{Config, StateTarget};
use crate::fetch_error::FetchError;
use crate::listing_fetcher::ListingFetcher;
use crate::point_fetcher::PointFetcher;
use crate::store::ArtifactStore;
use crate::timestamp::ObservationTimestamp;

/// Terminal state for one (state, timestamp) pair within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Artifact already existed; no request was issued.
    Skipped,
    /// Artifact written with the given number of coordinate records.
    Written(usize),
    /// Data request or artifact write failed; nothing persisted.
    FetchFailed,
}

/// Per-state totals reported back to the caller at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSummary {
    pub state_code: String,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Drives the fetch-parse-extract-write pipeline, strictly sequentially: one
/// state after another, one timestamp after another, one request in flight at
/// a time.
pub struct Syncer {
    listing: ListingFetcher,
    points: PointFetcher,
    store: ArtifactStore,
}

impl Syncer {
    pub fn new(config: &Config) -> Self {
        Self {
            listing: ListingFetcher::new(config.listing_url.clone()),
            points: PointFetcher::new(config.data_url.clone()),
            store: ArtifactStore::new(config.storage_root.clone()),
        }
    }

    /// Process every target in order. A state whose listing is unavailable is
    /// logged and dropped from the summaries; it never stops the run.
    pub async fn run(&self, targets: &[StateTarget]) -> Vec<StateSummary> {
        let mut summaries = Vec::new();
        for target in targets {
            match self.sync_state(target).await {
                Ok(summary) => summaries.push(summary),
                Err(e) => error!("Listing unavailable for state {}: {}", target.code, e),
            }
        }
        summaries
    }

    #[instrument(skip(self, target), fields(state = %target.code))]
    pub async fn sync_state(&self, target: &StateTarget) -> Result<StateSummary, FetchError> {
        let timestamps = self.listing.fetch_timestamps(target).await?;
        info!(
            "Listing for {} has {} observation timestamps",
            target.code,
            timestamps.len()
        );

        let mut summary = StateSummary {
            state_code: target.code.clone(),
            ..Default::default()
        };
        for timestamp in &timestamps {
            match self.sync_timestamp(target, timestamp).await {
                SyncOutcome::Skipped => summary.skipped += 1,
                SyncOutcome::Written(_) => summary.written += 1,
                SyncOutcome::FetchFailed => summary.failed += 1,
            }
        }
        Ok(summary)
    }

    /// One pass of the per-timestamp state machine: skip if the artifact
    /// exists, otherwise fetch and write. Failures are local to the timestamp;
    /// the caller moves on to the next one.
    async fn sync_timestamp(
        &self,
        target: &StateTarget,
        timestamp: &ObservationTimestamp,
    ) -> SyncOutcome {
        if self.store.is_synced(&target.code, timestamp) {
            info!(
                "Artifact for {} '{}' already exists, skipping download",
                target.code, timestamp
            );
            return SyncOutcome::Skipped;
        }

        let records = match self.points.fetch_points(target, timestamp).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Failed to retrieve points for {} '{}': {}",
                    target.code, timestamp, e
                );
                return SyncOutcome::FetchFailed;
            }
        };

        match self.store.write_records(&target.code, timestamp, &records) {
            Ok(path) => {
                info!(
                    "Wrote {} coordinate records to {}",
                    records.len(),
                    path.display()
                );
                SyncOutcome::Written(records.len())
            }
            Err(e) => {
                warn!(
                    "Failed to write artifact for {} '{}': {}",
                    target.code, timestamp, e
                );
                SyncOutcome::FetchFailed
            }
        }
    }
}
