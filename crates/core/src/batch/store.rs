//! Collaborator seam for batch recomputation.

use projfin_shared::error::AppResult;
use projfin_shared::types::{CostCenterId, CostCenterPlanId, ProjectId};

use crate::summary::{CostCenter, FinancialSummary, Project, ProjectSnapshot};

/// Read/write seam the host implements for batch recomputation.
///
/// The engine only reads source records and writes whole summaries; storage
/// schema and caching are the host's concern. A summary must be written
/// atomically as one value, never field by field.
pub trait SummaryStore {
    /// The designated project plan, if one is configured.
    fn project_plan(&self) -> Option<CostCenterPlanId>;

    /// Looks up a cost center by id.
    fn cost_center(&self, id: CostCenterId) -> Option<CostCenter>;

    /// Resolves the projects whose cost center is in the given set.
    fn projects_for_cost_centers(&self, ids: &[CostCenterId]) -> AppResult<Vec<Project>>;

    /// Fetches the input snapshot for one project.
    fn snapshot(&self, project: ProjectId) -> AppResult<ProjectSnapshot>;

    /// Persists a freshly computed summary for one project.
    fn save_summary(&self, project: ProjectId, summary: &FinancialSummary) -> AppResult<()>;
}
