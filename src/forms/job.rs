use serde::Deserialize;

use crate::domain::types::{ContactEmail, MessageBody, NoteText, TeamMemberId};
use crate::forms::{FormError, non_blank};

#[derive(Debug, Default, Deserialize)]
/// Form data for adding a note to a job timeline.
pub struct AddNoteForm {
    #[serde(default)]
    pub text: String,
}

impl TryFrom<AddNoteForm> for NoteText {
    type Error = FormError;

    fn try_from(form: AddNoteForm) -> Result<Self, Self::Error> {
        NoteText::new(form.text).map_err(|_| FormError::MissingNote)
    }
}

#[derive(Debug, Default, Deserialize)]
/// Rep picker selection; an empty selection unassigns the job.
pub struct AssignRepForm {
    #[serde(default)]
    pub rep_id: Option<String>,
}

impl AssignRepForm {
    pub fn rep_id(&self) -> Option<TeamMemberId> {
        self.rep_id
            .as_deref()
            .and_then(non_blank)
            .and_then(|id| TeamMemberId::new(id).ok())
    }
}

/// Body sent when the share dialog's message is left empty.
pub const DEFAULT_SHARE_MESSAGE: &str = "I'm excited to share your new home design with you! \
Please take a look at the attached design and let me know your thoughts.\n\n\
Best regards,\nYour Hover Rep";

#[derive(Debug, Default, Clone, Deserialize)]
/// Share design dialog. Blank fields fall back to the homeowner's
/// placeholder address and the standard message.
pub struct ShareDesignForm {
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub message: String,
}

/// Share dialog input after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDesign {
    /// `None` sends to the homeowner's placeholder address.
    pub recipient: Option<ContactEmail>,
    pub message: Option<MessageBody>,
}

impl TryFrom<ShareDesignForm> for ShareDesign {
    type Error = FormError;

    fn try_from(form: ShareDesignForm) -> Result<Self, Self::Error> {
        let recipient = non_blank(&form.recipient)
            .map(ContactEmail::new)
            .transpose()
            .map_err(|_| FormError::InvalidRecipient)?;

        Ok(Self {
            recipient,
            message: MessageBody::new(form.message).ok(),
        })
    }
}

impl ShareDesign {
    /// Message body addressed to `homeowner` by first name.
    pub fn body_for(&self, homeowner: &str) -> String {
        match &self.message {
            Some(message) => message.as_str().to_string(),
            None => {
                let first_name = homeowner.split_whitespace().next().unwrap_or(homeowner);
                format!("Hi {first_name},\n\n{DEFAULT_SHARE_MESSAGE}")
            }
        }
    }
}
