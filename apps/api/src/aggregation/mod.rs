//! Multi-source aggregation: collect from every registered source, apply
//! the query predicates uniformly, dedup by id.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

pub mod filter;
pub mod handlers;

use crate::models::job::{JobPosting, JobQuery};
use crate::sources::JobSource;

/// Runs the registered sources in registration order and merges their
/// output into one canonical sequence.
pub struct Aggregator {
    sources: Vec<Arc<dyn JobSource>>,
}

impl Aggregator {
    pub fn new(sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self { sources }
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Fetches every source once (no retries), folds failures into empty
    /// contributions, filters centrally and dedups by id — the first
    /// occurrence wins, so earlier-registered sources take precedence.
    ///
    /// Never fails: with every live source down the result is exactly the
    /// filtered curated catalog. The merged sequence is returned unsorted;
    /// ordering is the caller's concern.
    pub async fn aggregate(&self, query: &JobQuery) -> Vec<JobPosting> {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();

        for source in &self.sources {
            let batch = match source.fetch(query).await {
                Ok(batch) => batch,
                Err(err) => {
                    warn!(
                        source = source.name(),
                        error = %err,
                        "source fetch failed; continuing without it"
                    );
                    Vec::new()
                }
            };
            debug!(source = source.name(), count = batch.len(), "source fetch settled");

            for job in batch {
                if filter::matches_query(&job, query) && seen.insert(job.id.clone()) {
                    merged.push(job);
                }
            }
        }

        merged
    }
}
