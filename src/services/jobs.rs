//! Services backing the jobs board and job detail view.

use chrono::Local;

use crate::domain::communication::{
    Communication, CommunicationType, DESIGN_PROPOSAL, NewCommunication,
};
use crate::domain::contact::{Contact, ContactRef};
use crate::domain::job::{Job, JobFilter, JobStage, TimelineEntry, group_by_stage};
use crate::domain::team_member::TeamMember;
use crate::domain::types::{ContactId, JobId, NoteText, TeamMemberId};
use crate::dto::jobs::{BoardPageData, JobMove, JobPageData};
use crate::forms::job::{AddNoteForm, ShareDesign, ShareDesignForm};
use crate::repository::{
    CommunicationReader, CommunicationWriter, JobReader, JobWriter, TeamMemberReader,
};

pub const DESIGN_SHARE_SUBJECT: &str = "Your Hover Design is Ready";
use crate::services::{ServiceError, ServiceResult};

/// Returns the jobs matching `filter` in registry order.
pub fn list_jobs<R>(repo: &R, filter: JobFilter) -> ServiceResult<Vec<Job>>
where
    R: JobReader + ?Sized,
{
    repo.list_jobs(filter).map_err(ServiceError::from)
}

/// Loads the filtered jobs for both the table and the kanban view.
pub fn load_board<R>(repo: &R, filter: JobFilter) -> ServiceResult<BoardPageData>
where
    R: JobReader + ?Sized,
{
    let jobs = list_jobs(repo, filter)?;
    let columns = group_by_stage(jobs.iter().cloned());

    Ok(BoardPageData { jobs, columns })
}

/// Moves a job to `stage`. Any stage may follow any other.
pub fn transition_stage<R>(repo: &R, job_id: &JobId, stage: JobStage) -> ServiceResult<Job>
where
    R: JobWriter + ?Sized,
{
    repo.update_job_stage(job_id, stage).map_err(|err| {
        log::error!("Failed to change stage of job {job_id}: {err}");
        ServiceError::from(err)
    })
}

/// Handles a board drop: dropping a card on its own column changes nothing.
pub fn move_job<R>(repo: &R, job_id: &JobId, target: JobStage) -> ServiceResult<JobMove>
where
    R: JobReader + JobWriter + ?Sized,
{
    let job = repo.get_job_by_id(job_id)?.ok_or(ServiceError::NotFound)?;

    if job.stage == target {
        return Ok(JobMove { job, moved: false });
    }

    let job = transition_stage(repo, job_id, target)?;

    Ok(JobMove { job, moved: true })
}

/// Assigns the rep with `rep_id` to the job, or clears the assignment.
pub fn assign_rep<R>(repo: &R, job_id: &JobId, rep_id: Option<&TeamMemberId>) -> ServiceResult<Job>
where
    R: JobWriter + TeamMemberReader + ?Sized,
{
    let rep = match rep_id {
        Some(rep_id) => Some(
            repo.get_team_member_by_id(rep_id)?
                .ok_or(ServiceError::NotFound)?,
        ),
        None => None,
    };

    repo.assign_job_rep(job_id, rep).map_err(|err| {
        log::error!("Failed to assign rep to job {job_id}: {err}");
        ServiceError::from(err)
    })
}

/// Appends a sanitized note to the job timeline.
pub fn add_note<R>(repo: &R, job_id: &JobId, form: AddNoteForm) -> ServiceResult<Job>
where
    R: JobWriter + ?Sized,
{
    let text = NoteText::try_from(form)?;

    repo.append_timeline_entry(job_id, TimelineEntry::note(text))
        .map_err(|err| {
            log::error!("Failed to add note to job {job_id}: {err}");
            ServiceError::from(err)
        })
}

/// Emails the design proposal to the job's homeowner and logs the email.
pub fn share_design<R>(
    repo: &R,
    job_id: &JobId,
    form: ShareDesignForm,
) -> ServiceResult<Communication>
where
    R: JobReader + CommunicationWriter + ?Sized,
{
    let share = ShareDesign::try_from(form)?;

    let job = repo.get_job_by_id(job_id)?.ok_or(ServiceError::NotFound)?;
    let contact = Contact::from(&job);
    let recipient = share
        .recipient
        .as_ref()
        .map_or(contact.email.as_str(), |email| email.as_str());
    log::info!("Sharing design for job {job_id} with {recipient}");

    let now = Local::now().naive_local();
    let new_email = NewCommunication {
        kind: CommunicationType::Email,
        contact: ContactRef::from(&contact),
        subject: Some(DESIGN_SHARE_SUBJECT.to_string()),
        message: share.body_for(&job.homeowner),
        date: now.date(),
        time: now.time(),
        status: CommunicationType::Email.initial_status(),
        attachments: vec![DESIGN_PROPOSAL.to_string()],
    };

    repo.create_communication(&new_email).map_err(|err| {
        log::error!("Failed to share design for job {job_id}: {err}");
        ServiceError::from(err)
    })
}

/// Team members whose name contains `query`, ignoring case.
pub fn search_reps<R>(repo: &R, query: &str) -> ServiceResult<Vec<TeamMember>>
where
    R: TeamMemberReader + ?Sized,
{
    Ok(repo
        .list_team_members()?
        .into_iter()
        .filter(|member| member.name_matches(query))
        .collect())
}

/// Loads everything the job detail page shows.
pub fn load_job_page<R>(repo: &R, job_id: &JobId) -> ServiceResult<JobPageData>
where
    R: JobReader + TeamMemberReader + CommunicationReader + ?Sized,
{
    let job = repo.get_job_by_id(job_id)?.ok_or(ServiceError::NotFound)?;
    let contact = Contact::from(&job);
    let communications = repo
        .list_contact_communications(&ContactId::from(job_id))?
        .into_iter()
        .collect();
    let team = repo.list_team_members()?;

    Ok(JobPageData {
        job,
        contact,
        communications,
        team,
    })
}
