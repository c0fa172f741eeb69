//! Composer form for emails, texts, call logs and meetings.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::domain::communication::CommunicationType;
use crate::domain::types::{ContactId, MessageBody, MessageSubject};
use crate::forms::{FormError, non_blank};

#[derive(Debug, Default, Clone, Deserialize)]
/// Raw composer input.
pub struct ComposeCommunicationForm {
    /// Selected recipient; contacts share the id of their job.
    #[serde(default)]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    /// Defaults to today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Defaults to the current time when absent.
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Gate run before a send is considered successful.
///
/// Checks, in order: a recipient is selected, emails carry a non-blank
/// subject, and the message is non-blank after trimming.
pub fn validate_composition(
    kind: CommunicationType,
    form: &ComposeCommunicationForm,
) -> Result<(), FormError> {
    if form.contact_id.as_deref().and_then(non_blank).is_none() {
        return Err(FormError::MissingRecipient);
    }

    if kind == CommunicationType::Email && non_blank(&form.subject).is_none() {
        return Err(FormError::MissingSubject);
    }

    if non_blank(&form.message).is_none() {
        return Err(FormError::MissingMessage);
    }

    Ok(())
}

/// Validated composer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposePayload {
    pub kind: CommunicationType,
    pub contact_id: ContactId,
    pub subject: Option<MessageSubject>,
    pub message: MessageBody,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub attachments: Vec<String>,
}

impl ComposeCommunicationForm {
    /// Adds a file to the draft. The same file may be attached twice.
    pub fn add_attachment(&mut self, file_name: impl Into<String>) {
        self.attachments.push(file_name.into());
    }

    pub fn into_payload(self, kind: CommunicationType) -> Result<ComposePayload, FormError> {
        validate_composition(kind, &self)?;

        let contact_id = self
            .contact_id
            .map(ContactId::new)
            .transpose()
            .map_err(|_| FormError::MissingRecipient)?
            .ok_or(FormError::MissingRecipient)?;
        let message = MessageBody::new(self.message).map_err(|_| FormError::MissingMessage)?;
        let subject = MessageSubject::new(self.subject).ok();

        let attachments = self
            .attachments
            .iter()
            .filter_map(|name| non_blank(name))
            .collect();

        Ok(ComposePayload {
            kind,
            contact_id,
            subject,
            message,
            date: self.date,
            time: self.time,
            attachments,
        })
    }
}
