//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::communication::{Communication, NewCommunication};
use crate::domain::job::{Job, JobFilter, JobStage, TimelineEntry};
use crate::domain::team_member::TeamMember;
use crate::domain::template::{Template, TemplateFields};
use crate::domain::types::{ContactId, JobId, TeamMemberId, TemplateId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CommunicationReader, CommunicationWriter, JobReader, JobWriter, TeamMemberReader,
    TemplateReader, TemplateWriter,
};

mock! {
    pub Repository {}

    impl JobReader for Repository {
        fn get_job_by_id(&self, id: &JobId) -> RepositoryResult<Option<Job>>;
        fn list_jobs(&self, filter: JobFilter) -> RepositoryResult<Vec<Job>>;
    }

    impl JobWriter for Repository {
        fn update_job_stage(&self, id: &JobId, stage: JobStage) -> RepositoryResult<Job>;
        fn assign_job_rep(&self, id: &JobId, rep: Option<TeamMember>) -> RepositoryResult<Job>;
        fn append_timeline_entry(&self, id: &JobId, entry: TimelineEntry) -> RepositoryResult<Job>;
    }

    impl TeamMemberReader for Repository {
        fn get_team_member_by_id(&self, id: &TeamMemberId) -> RepositoryResult<Option<TeamMember>>;
        fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>>;
    }

    impl CommunicationReader for Repository {
        fn list_communications(&self) -> RepositoryResult<Vec<Communication>>;
        fn list_contact_communications(
            &self,
            contact_id: &ContactId,
        ) -> RepositoryResult<Vec<Communication>>;
    }

    impl CommunicationWriter for Repository {
        fn create_communication(
            &self,
            new_communication: &NewCommunication,
        ) -> RepositoryResult<Communication>;
    }

    impl TemplateReader for Repository {
        fn get_template_by_id(&self, id: &TemplateId) -> RepositoryResult<Option<Template>>;
        fn list_templates(&self) -> RepositoryResult<Vec<Template>>;
    }

    impl TemplateWriter for Repository {
        fn create_template(&self, fields: &TemplateFields) -> RepositoryResult<Template>;
        fn update_template(
            &self,
            id: &TemplateId,
            fields: &TemplateFields,
        ) -> RepositoryResult<Template>;
        fn delete_template(&self, id: &TemplateId) -> RepositoryResult<Option<Template>>;
    }
}
