//! Batch recompute service.

use std::collections::HashSet;

use projfin_shared::config::AnalyticsConfig;
use projfin_shared::error::AppResult;
use projfin_shared::types::{CostCenterId, ProjectId};
use rayon::prelude::*;

use crate::summary::{FinancialSummary, Project, SummaryService};

use super::store::SummaryStore;

/// Number of projects recomputed per chunk, bounding memory and IO.
pub const RECOMPUTE_CHUNK_SIZE: usize = 100;

/// Service recomputing project summaries in chunked batches.
///
/// Configuration is read once at construction and held immutable for the
/// service's lifetime so every project in a batch sees the same tunables.
pub struct RecomputeService {
    config: AnalyticsConfig,
}

impl RecomputeService {
    /// Creates a new service with the given configuration.
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Recomputes the summaries of all projects attached to the given cost
    /// centers.
    ///
    /// Cost centers that do not exist or do not belong to the designated
    /// project plan are dropped. Projects are processed in chunks of
    /// [`RECOMPUTE_CHUNK_SIZE`]; a failing chunk is logged and skipped while
    /// the remaining chunks are still processed. A save failure skips only
    /// the affected project.
    ///
    /// Returns the number of projects whose summary was recomputed and
    /// saved.
    pub fn recompute_for_cost_centers<S: SummaryStore>(
        &self,
        store: &S,
        cost_center_ids: &HashSet<CostCenterId>,
    ) -> usize {
        if cost_center_ids.is_empty() {
            return 0;
        }
        let Some(plan_id) = store.project_plan() else {
            tracing::debug!("no project plan configured, nothing to recompute");
            return 0;
        };

        let valid: Vec<CostCenterId> = cost_center_ids
            .iter()
            .copied()
            .filter(|id| {
                store
                    .cost_center(*id)
                    .is_some_and(|center| center.plan_id == plan_id)
            })
            .collect();
        if valid.is_empty() {
            return 0;
        }

        let projects = match store.projects_for_cost_centers(&valid) {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(error = %err, "failed to resolve projects for recompute");
                return 0;
            }
        };

        let mut processed = 0;
        for chunk in projects.chunks(RECOMPUTE_CHUNK_SIZE) {
            match self.recompute_chunk(store, chunk) {
                Ok(count) => processed += count,
                Err(err) => {
                    let ids: Vec<ProjectId> = chunk.iter().map(|project| project.id).collect();
                    tracing::warn!(
                        error = %err,
                        projects = ?ids,
                        "recompute chunk failed, continuing with remaining chunks"
                    );
                }
            }
        }

        tracing::info!(processed, "batch recompute finished");
        processed
    }

    /// Recomputes one chunk: fetch snapshots, compute in parallel, save.
    ///
    /// A snapshot fetch error fails the whole chunk before anything is
    /// computed. Save errors are per project: the offending project is
    /// logged and skipped, and only successfully saved summaries count.
    fn recompute_chunk<S: SummaryStore>(&self, store: &S, chunk: &[Project]) -> AppResult<usize> {
        let mut inputs = Vec::with_capacity(chunk.len());
        for project in chunk {
            inputs.push((project, store.snapshot(project.id)?));
        }

        let summaries: Vec<(ProjectId, FinancialSummary)> = inputs
            .par_iter()
            .map(|(project, snapshot)| {
                (
                    project.id,
                    SummaryService::compute(project, snapshot, &self.config),
                )
            })
            .collect();

        let mut saved = 0;
        for (project_id, summary) in &summaries {
            match store.save_summary(*project_id, summary) {
                Ok(()) => saved += 1,
                Err(err) => {
                    tracing::warn!(
                        project_id = %project_id,
                        error = %err,
                        "failed to save recomputed summary, skipping project"
                    );
                }
            }
        }

        Ok(saved)
    }
}
