use crate::domain::communication::{
    Communication, CommunicationStatus, CommunicationType, DESIGN_PROPOSAL,
};
use crate::domain::contact::Contact;
use crate::forms::communication::ComposeCommunicationForm;
use crate::handlers::{Notification, Notifier, report};
use crate::repository::{CommunicationWriter, JobReader};
use crate::services::ServiceResult;
use crate::services::communications as communication_service;

/// Send button of the composer.
pub fn send<R, N>(
    repo: &R,
    notifier: &N,
    kind: CommunicationType,
    form: ComposeCommunicationForm,
) -> ServiceResult<(Communication, Contact)>
where
    R: JobReader + CommunicationWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        communication_service::send_communication(repo, kind, form),
        |(communication, contact)| {
            let outcome = match communication.status {
                CommunicationStatus::Scheduled => "scheduled",
                _ => "sent",
            };
            Some(Notification::success(
                "Communication sent",
                format!("Your {kind} to {} has been {outcome}.", contact.name),
            ))
        },
    )
}

/// Attach button of the composer: adds the design proposal to the draft.
pub fn add_attachment<N>(notifier: &N, form: &mut ComposeCommunicationForm)
where
    N: Notifier + ?Sized,
{
    form.add_attachment(DESIGN_PROPOSAL);

    let notification = Notification::success(
        "Attachment added",
        format!("{DESIGN_PROPOSAL} has been attached"),
    );
    log::info!("{}: {}", notification.title, notification.description);
    notifier.notify(notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{NotificationLevel, NotificationLog};
    use crate::repository::InMemoryRepository;

    fn form(contact: Option<&str>, subject: &str) -> ComposeCommunicationForm {
        ComposeCommunicationForm {
            contact_id: contact.map(str::to_string),
            subject: subject.to_string(),
            message: "Looking forward to it".to_string(),
            ..ComposeCommunicationForm::default()
        }
    }

    #[test]
    fn meetings_are_reported_as_scheduled() {
        let repo = InMemoryRepository::with_sample_data().unwrap();
        let log = NotificationLog::new();

        send(&repo, &log, CommunicationType::Meeting, form(Some("1"), "Walkthrough")).unwrap();
        send(&repo, &log, CommunicationType::Email, form(Some("1"), "Hello")).unwrap();

        let entries = log.drain();
        assert_eq!(
            entries[0].description,
            "Your meeting to Jane Doe has been scheduled."
        );
        assert_eq!(entries[1].description, "Your email to Jane Doe has been sent.");
    }

    #[test]
    fn missing_recipient_is_reported() {
        let repo = InMemoryRepository::with_sample_data().unwrap();
        let log = NotificationLog::new();

        let result = send(&repo, &log, CommunicationType::Email, form(None, "Hello"));

        assert!(result.is_err());
        let entries = log.drain();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, NotificationLevel::Error);
        assert_eq!(entries[0].title, "Missing recipient");
    }

    #[test]
    fn attached_proposal_goes_out_with_the_message() {
        let repo = InMemoryRepository::with_sample_data().unwrap();
        let log = NotificationLog::new();
        let mut draft = form(Some("2"), "Your design");

        add_attachment(&log, &mut draft);
        let (sent, _) = send(&repo, &log, CommunicationType::Email, draft).unwrap();

        assert_eq!(sent.attachments, vec![DESIGN_PROPOSAL]);
        let entries = log.drain();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Attachment added");
        assert_eq!(entries[0].description, "design_proposal.pdf has been attached");
        assert_eq!(entries[1].title, "Communication sent");
    }
}
