//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::job::{JobFilter, StageFilter};
use crate::domain::types::TypeConstraintError;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings for the `hover-hub` binary.
pub struct HubConfig {
    /// JSON seed file; the built-in sample data is used when absent.
    #[serde(default)]
    pub seed_path: Option<String>,
    /// Show only jobs that have a rep assigned.
    #[serde(default)]
    pub assigned_only: bool,
    /// Stage literal (e.g. `Design Sent`) or `all`.
    #[serde(default = "default_stage")]
    pub stage: String,
}

fn default_stage() -> String {
    "all".to_string()
}

impl HubConfig {
    /// Board filter described by these settings.
    pub fn job_filter(&self) -> Result<JobFilter, TypeConstraintError> {
        let filter = JobFilter::new().stage(self.stage.parse::<StageFilter>()?);
        Ok(if self.assigned_only {
            filter.assigned_only()
        } else {
            filter
        })
    }
}
