//! DTOs shaped for the jobs board and the job detail view.

use serde::Serialize;

use crate::domain::contact::Contact;
use crate::domain::job::{Job, StageColumn};
use crate::domain::team_member::TeamMember;
use crate::dto::communications::CommunicationsByType;

/// Data required to render the jobs board.
#[derive(Debug, Serialize)]
pub struct BoardPageData {
    /// Jobs matching the filter, in registry order (table view).
    pub jobs: Vec<Job>,
    /// The same jobs split into the five stage columns (kanban view).
    pub columns: Vec<StageColumn>,
}

/// Aggregated data required to render the job detail page.
#[derive(Debug, Serialize)]
pub struct JobPageData {
    pub job: Job,
    pub contact: Contact,
    pub communications: CommunicationsByType,
    /// Candidates for the rep picker.
    pub team: Vec<TeamMember>,
}

/// Result of dropping a job card on a board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMove {
    pub job: Job,
    /// `false` when the card was dropped on its own column.
    pub moved: bool,
}
