use std::cell::{Ref, RefCell, RefMut};

use crate::{
    domain::{
        communication::{Communication, NewCommunication},
        job::{Job, JobFilter, JobStage, TimelineEntry},
        team_member::TeamMember,
        template::{Template, TemplateFields},
        types::{ContactId, JobId, TeamMemberId, TemplateId},
    },
    models::seed::HubSeed,
    repository::errors::RepositoryResult,
};

pub mod communication;
pub mod errors;
pub mod job;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod team_member;
pub mod template;

/// Collections held by the in-memory repository, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HubState {
    pub team: Vec<TeamMember>,
    pub jobs: Vec<Job>,
    pub communications: Vec<Communication>,
    pub templates: Vec<Template>,
}

/// Process-lifetime store for every aggregate of the hub.
///
/// Constructed once at start-up and passed by reference to services and
/// handlers. Each trait method borrows the state for the duration of the call.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RefCell<HubState>,
}

impl InMemoryRepository {
    pub fn new(state: HubState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    /// Builds a repository from a seed, resolving rep references.
    pub fn from_seed(seed: HubSeed) -> RepositoryResult<Self> {
        Ok(Self::new(seed.into_state()?))
    }

    /// Repository preloaded with the built-in sample data.
    pub fn with_sample_data() -> RepositoryResult<Self> {
        Self::from_seed(HubSeed::sample()?)
    }

    /// Copy of the current state, e.g. for dumping the board.
    pub fn snapshot(&self) -> HubState {
        self.state.borrow().clone()
    }

    fn state(&self) -> Ref<'_, HubState> {
        self.state.borrow()
    }

    fn state_mut(&self) -> RefMut<'_, HubState> {
        self.state.borrow_mut()
    }
}

pub trait JobReader {
    fn get_job_by_id(&self, id: &JobId) -> RepositoryResult<Option<Job>>;
    fn list_jobs(&self, filter: JobFilter) -> RepositoryResult<Vec<Job>>;
}

pub trait JobWriter {
    fn update_job_stage(&self, id: &JobId, stage: JobStage) -> RepositoryResult<Job>;
    fn assign_job_rep(&self, id: &JobId, rep: Option<TeamMember>) -> RepositoryResult<Job>;
    fn append_timeline_entry(&self, id: &JobId, entry: TimelineEntry) -> RepositoryResult<Job>;
}

pub trait TeamMemberReader {
    fn get_team_member_by_id(&self, id: &TeamMemberId) -> RepositoryResult<Option<TeamMember>>;
    fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>>;
}

pub trait CommunicationReader {
    fn list_communications(&self) -> RepositoryResult<Vec<Communication>>;
    fn list_contact_communications(
        &self,
        contact_id: &ContactId,
    ) -> RepositoryResult<Vec<Communication>>;
}

pub trait CommunicationWriter {
    fn create_communication(
        &self,
        new_communication: &NewCommunication,
    ) -> RepositoryResult<Communication>;
}

pub trait TemplateReader {
    fn get_template_by_id(&self, id: &TemplateId) -> RepositoryResult<Option<Template>>;
    fn list_templates(&self) -> RepositoryResult<Vec<Template>>;
}

pub trait TemplateWriter {
    fn create_template(&self, fields: &TemplateFields) -> RepositoryResult<Template>;
    fn update_template(&self, id: &TemplateId, fields: &TemplateFields)
    -> RepositoryResult<Template>;
    /// Removes the template, returning it. Unknown ids yield `Ok(None)`.
    fn delete_template(&self, id: &TemplateId) -> RepositoryResult<Option<Template>>;
}
