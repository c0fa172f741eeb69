//! Services backing the communications center and composer.

use chrono::Local;

use crate::domain::communication::{
    Communication, CommunicationFilter, CommunicationType, NewCommunication, filter_communications,
};
use crate::domain::contact::{Contact, ContactRef};
use crate::domain::job::JobFilter;
use crate::domain::types::{ContactId, JobId};
use crate::dto::communications::CommunicationsPageData;
use crate::forms::communication::ComposeCommunicationForm;
use crate::repository::{CommunicationReader, CommunicationWriter, JobReader, TemplateReader};
use crate::services::{ServiceError, ServiceResult};

/// Every job homeowner as a contact, in registry order.
pub fn list_contacts<R>(repo: &R) -> ServiceResult<Vec<Contact>>
where
    R: JobReader + ?Sized,
{
    Ok(repo
        .list_jobs(JobFilter::new())?
        .iter()
        .map(Contact::from)
        .collect())
}

/// Looks up a contact through the job it is derived from.
pub fn get_contact<R>(repo: &R, contact_id: &ContactId) -> ServiceResult<Option<Contact>>
where
    R: JobReader + ?Sized,
{
    let job_id = JobId::new(contact_id.as_str())?;
    Ok(repo.get_job_by_id(&job_id)?.as_ref().map(Contact::from))
}

/// Communications matching the search box and status dropdown.
pub fn search_communications<R>(
    repo: &R,
    filter: &CommunicationFilter,
) -> ServiceResult<Vec<Communication>>
where
    R: CommunicationReader + ?Sized,
{
    let all = repo.list_communications()?;
    Ok(filter_communications(&all, filter))
}

/// Communications exchanged with the homeowner of `job_id`.
pub fn list_job_communications<R>(repo: &R, job_id: &JobId) -> ServiceResult<Vec<Communication>>
where
    R: CommunicationReader + ?Sized,
{
    repo.list_contact_communications(&ContactId::from(job_id))
        .map_err(ServiceError::from)
}

/// Loads the communications center: filtered log, contacts and templates.
pub fn load_communications_center<R>(
    repo: &R,
    filter: &CommunicationFilter,
) -> ServiceResult<CommunicationsPageData>
where
    R: CommunicationReader + JobReader + TemplateReader + ?Sized,
{
    Ok(CommunicationsPageData {
        communications: search_communications(repo, filter)?,
        contacts: list_contacts(repo)?,
        templates: repo.list_templates()?,
    })
}

/// Validates the composer input and records the communication.
///
/// Nothing is delivered; meetings are logged as scheduled, everything else as
/// completed. Date and time default to the local clock.
pub fn send_communication<R>(
    repo: &R,
    kind: CommunicationType,
    form: ComposeCommunicationForm,
) -> ServiceResult<(Communication, Contact)>
where
    R: JobReader + CommunicationWriter + ?Sized,
{
    let payload = form.into_payload(kind)?;

    let contact = get_contact(repo, &payload.contact_id)?.ok_or(ServiceError::NotFound)?;

    let now = Local::now().naive_local();
    let new_communication = NewCommunication {
        kind,
        contact: ContactRef::from(&contact),
        subject: payload.subject.map(String::from),
        message: payload.message.into_inner(),
        date: payload.date.unwrap_or(now.date()),
        time: payload.time.unwrap_or(now.time()),
        status: kind.initial_status(),
        attachments: payload.attachments,
    };

    let communication = repo
        .create_communication(&new_communication)
        .map_err(|err| {
            log::error!("Failed to record {kind} to {}: {err}", contact.name);
            ServiceError::from(err)
        })?;

    Ok((communication, contact))
}
