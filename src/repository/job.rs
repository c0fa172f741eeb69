//! Repository implementation for pipeline jobs.

use crate::{
    domain::{
        job::{Job, JobFilter, JobStage, TimelineEntry, JUST_NOW},
        team_member::TeamMember,
        types::JobId,
    },
    repository::{
        InMemoryRepository, JobReader, JobWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl InMemoryRepository {
    /// Applies `update` to the job with `id` and returns the updated record.
    fn update_job<F>(&self, id: &JobId, update: F) -> RepositoryResult<Job>
    where
        F: FnOnce(&mut Job),
    {
        let mut state = self.state_mut();
        let job = state
            .jobs
            .iter_mut()
            .find(|job| &job.id == id)
            .ok_or(RepositoryError::NotFound)?;

        update(job);

        Ok(job.clone())
    }
}

impl JobReader for InMemoryRepository {
    fn get_job_by_id(&self, id: &JobId) -> RepositoryResult<Option<Job>> {
        Ok(self.state().jobs.iter().find(|job| &job.id == id).cloned())
    }

    fn list_jobs(&self, filter: JobFilter) -> RepositoryResult<Vec<Job>> {
        Ok(self
            .state()
            .jobs
            .iter()
            .filter(|job| filter.matches(job))
            .cloned()
            .collect())
    }
}

impl JobWriter for InMemoryRepository {
    fn update_job_stage(&self, id: &JobId, stage: JobStage) -> RepositoryResult<Job> {
        self.update_job(id, |job| job.stage = stage)
    }

    fn assign_job_rep(&self, id: &JobId, rep: Option<TeamMember>) -> RepositoryResult<Job> {
        self.update_job(id, |job| job.assigned_rep = rep)
    }

    fn append_timeline_entry(&self, id: &JobId, entry: TimelineEntry) -> RepositoryResult<Job> {
        self.update_job(id, |job| {
            job.timeline.push(entry);
            job.last_activity = JUST_NOW.to_string();
        })
    }
}
