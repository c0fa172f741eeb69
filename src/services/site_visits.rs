//! Scheduling of on-site visits.

use crate::domain::communication::{Communication, CommunicationType, NewCommunication};
use crate::domain::contact::{Contact, ContactRef};
use crate::domain::job::Job;
use crate::domain::site_visit::SiteVisit;
use crate::forms::site_visit::ScheduleSiteVisitForm;
use crate::repository::{CommunicationWriter, JobReader};
use crate::services::{ServiceError, ServiceResult};

/// A booked visit together with the meeting logged for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledVisit {
    pub visit: SiteVisit,
    pub job: Job,
    pub meeting: Communication,
}

/// Validates the scheduler form and logs the visit as a scheduled meeting
/// with the job's homeowner.
pub fn schedule_site_visit<R>(repo: &R, form: ScheduleSiteVisitForm) -> ServiceResult<ScheduledVisit>
where
    R: JobReader + CommunicationWriter + ?Sized,
{
    let visit = SiteVisit::try_from(form)?;

    let job = repo
        .get_job_by_id(&visit.job_id)?
        .ok_or(ServiceError::NotFound)?;
    let contact = Contact::from(&job);

    let new_meeting = NewCommunication {
        kind: CommunicationType::Meeting,
        contact: ContactRef::from(&contact),
        subject: Some(format!("Site visit: {}", visit.visit_type.label())),
        message: visit.summary(),
        date: visit.date,
        time: visit.time,
        status: CommunicationType::Meeting.initial_status(),
        attachments: Vec::new(),
    };

    let meeting = repo.create_communication(&new_meeting).map_err(|err| {
        log::error!("Failed to schedule site visit for job {}: {err}", job.id);
        ServiceError::from(err)
    })?;

    if visit.send_reminder {
        log::info!("Reminder requested for {} on {}", contact.email, visit.date);
    }
    if visit.notify_team {
        log::info!("Team notification requested for job {}", job.id);
    }

    Ok(ScheduledVisit {
        visit,
        job,
        meeting,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::communication::CommunicationStatus;
    use crate::domain::site_visit::VisitType;
    use crate::forms::FormError;
    use crate::repository::{CommunicationReader, InMemoryRepository};

    fn repo() -> InMemoryRepository {
        InMemoryRepository::with_sample_data().expect("sample data should load")
    }

    fn form(job_id: &str) -> ScheduleSiteVisitForm {
        ScheduleSiteVisitForm {
            job_id: Some(job_id.to_string()),
            visit_type: VisitType::Measurement,
            date: NaiveDate::from_ymd_opt(2025, 5, 20),
            location: "Side gate".to_string(),
            ..ScheduleSiteVisitForm::default()
        }
    }

    #[test]
    fn scheduling_logs_a_meeting_for_the_homeowner() {
        let repo = repo();

        let scheduled = schedule_site_visit(&repo, form("3")).unwrap();

        assert_eq!(scheduled.job.homeowner, "Michael Smith");
        assert_eq!(scheduled.meeting.kind, CommunicationType::Meeting);
        assert_eq!(scheduled.meeting.status, CommunicationStatus::Scheduled);
        assert_eq!(
            scheduled.meeting.subject.as_deref(),
            Some("Site visit: Detailed Measurement")
        );
        assert_eq!(
            scheduled.meeting.message,
            "Detailed Measurement visit, 60 minutes. Location: Side gate."
        );
        assert_eq!(repo.list_communications().unwrap().len(), 9);
    }

    #[test]
    fn unknown_job_is_not_found() {
        let result = schedule_site_visit(&repo(), form("12"));
        assert_eq!(result, Err(ServiceError::NotFound));
    }

    #[test]
    fn missing_job_is_a_form_error() {
        let repo = repo();

        let result = schedule_site_visit(&repo, ScheduleSiteVisitForm::default());

        assert_eq!(result, Err(ServiceError::Form(FormError::MissingJob)));
        assert_eq!(repo.list_communications().unwrap().len(), 8);
    }
}
