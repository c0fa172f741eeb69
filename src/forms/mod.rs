//! Form definitions backing the hub actions.

use thiserror::Error;

pub mod communication;
pub mod job;
pub mod site_visit;
pub mod template;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("missing recipient")]
    MissingRecipient,

    #[error("invalid recipient email")]
    InvalidRecipient,

    #[error("missing subject")]
    MissingSubject,

    #[error("missing message")]
    MissingMessage,

    #[error("missing name")]
    MissingName,

    #[error("missing content")]
    MissingContent,

    #[error("missing note text")]
    MissingNote,

    #[error("missing job")]
    MissingJob,

    #[error("missing date")]
    MissingDate,

    #[error("time must fall on the hour or half hour")]
    InvalidTime,

    #[error("duration must be between 30 and 240 minutes")]
    InvalidDuration,
}

impl FormError {
    /// Short heading shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingRecipient => "Missing recipient",
            FormError::InvalidRecipient => "Invalid recipient",
            FormError::MissingSubject => "Missing subject",
            FormError::MissingMessage => "Missing message",
            FormError::MissingName => "Missing name",
            FormError::MissingContent => "Missing content",
            FormError::MissingNote => "Missing note",
            FormError::MissingJob => "Missing job",
            FormError::MissingDate => "Missing date",
            FormError::InvalidTime => "Invalid time",
            FormError::InvalidDuration => "Invalid duration",
        }
    }

    /// What the user should do about it.
    pub fn description(&self) -> &'static str {
        match self {
            FormError::MissingRecipient => "Please select a recipient",
            FormError::InvalidRecipient => "Please enter a valid email address",
            FormError::MissingSubject => "Please enter a subject",
            FormError::MissingMessage => "Please enter a message",
            FormError::MissingName => "Please enter a template name",
            FormError::MissingContent => "Please enter template content",
            FormError::MissingNote => "Please enter a note",
            FormError::MissingJob => "Please select a job for this site visit",
            FormError::MissingDate => "Please select a date for the site visit",
            FormError::InvalidTime => "Please pick a time on the hour or half hour",
            FormError::InvalidDuration => "Please pick a duration between 30 minutes and 4 hours",
        }
    }
}

/// Trims `value` and returns it when something is left.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
