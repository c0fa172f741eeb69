//! Job detail and board actions.

use crate::domain::communication::Communication;
use crate::domain::job::{Job, JobStage};
use crate::domain::types::JobId;
use crate::dto::jobs::JobMove;
use crate::forms::job::{AddNoteForm, AssignRepForm, ShareDesignForm};
use crate::handlers::{Notification, Notifier, report};
use crate::repository::{CommunicationWriter, JobReader, JobWriter, TeamMemberReader};
use crate::services::ServiceResult;
use crate::services::jobs as job_service;

/// Stage dropdown on the job detail page.
pub fn change_stage<R, N>(
    repo: &R,
    notifier: &N,
    job_id: &JobId,
    stage: JobStage,
) -> ServiceResult<Job>
where
    R: JobWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        job_service::transition_stage(repo, job_id, stage),
        |job| {
            Some(Notification::success(
                "Stage updated",
                format!("Job stage changed to {}", job.stage),
            ))
        },
    )
}

/// Drag end on the board: `target` is the column the card was dropped on.
pub fn drop_on_column<R, N>(
    repo: &R,
    notifier: &N,
    job_id: &JobId,
    target: JobStage,
) -> ServiceResult<JobMove>
where
    R: JobReader + JobWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        job_service::move_job(repo, job_id, target),
        |outcome| {
            outcome.moved.then(|| {
                Notification::success(
                    "Job moved",
                    format!("{} moved to {}", outcome.job.homeowner, outcome.job.stage),
                )
            })
        },
    )
}

/// Rep picker on the job detail page.
pub fn assign_rep<R, N>(
    repo: &R,
    notifier: &N,
    job_id: &JobId,
    form: AssignRepForm,
) -> ServiceResult<Job>
where
    R: JobWriter + TeamMemberReader + ?Sized,
    N: Notifier + ?Sized,
{
    let rep_id = form.rep_id();
    report(
        notifier,
        job_service::assign_rep(repo, job_id, rep_id.as_ref()),
        |job| {
            let description = match &job.assigned_rep {
                Some(rep) => format!("Job assigned to {}", rep.name),
                None => "Job unassigned".to_string(),
            };
            Some(Notification::success("Rep assigned", description))
        },
    )
}

/// Note drawer on the job detail page.
pub fn add_note<R, N>(
    repo: &R,
    notifier: &N,
    job_id: &JobId,
    form: AddNoteForm,
) -> ServiceResult<Job>
where
    R: JobWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(notifier, job_service::add_note(repo, job_id, form), |_| {
        Some(Notification::success(
            "Note added",
            "Your note has been added to the timeline",
        ))
    })
}

/// Send button of the share design dialog.
pub fn share_design<R, N>(
    repo: &R,
    notifier: &N,
    job_id: &JobId,
    form: ShareDesignForm,
) -> ServiceResult<Communication>
where
    R: JobReader + CommunicationWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        job_service::share_design(repo, job_id, form),
        |_| {
            Some(Notification::success(
                "Design shared",
                "Design has been shared with the homeowner",
            ))
        },
    )
}
