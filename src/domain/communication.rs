//! Logged and scheduled customer communications.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::contact::ContactRef;
use crate::domain::types::{CommunicationId, ContactId, TypeConstraintError};

/// File attached when a design proposal is added to a message.
pub const DESIGN_PROPOSAL: &str = "design_proposal.pdf";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationType {
    Email,
    Sms,
    Call,
    Meeting,
}

impl CommunicationType {
    pub const ALL: [CommunicationType; 4] = [
        CommunicationType::Email,
        CommunicationType::Sms,
        CommunicationType::Call,
        CommunicationType::Meeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationType::Email => "email",
            CommunicationType::Sms => "sms",
            CommunicationType::Call => "call",
            CommunicationType::Meeting => "meeting",
        }
    }

    /// Status a freshly recorded communication of this type starts in.
    pub fn initial_status(&self) -> CommunicationStatus {
        match self {
            CommunicationType::Meeting => CommunicationStatus::Scheduled,
            _ => CommunicationStatus::Completed,
        }
    }
}

impl Display for CommunicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommunicationType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommunicationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                TypeConstraintError::InvalidValue(format!("unknown communication type `{s}`"))
            })
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStatus {
    Completed,
    Scheduled,
    Pending,
}

impl CommunicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStatus::Completed => "completed",
            CommunicationStatus::Scheduled => "scheduled",
            CommunicationStatus::Pending => "pending",
        }
    }
}

impl Display for CommunicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status selector used by the communications list; `All` disables filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(CommunicationStatus),
}

impl FromStr for StatusFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Status(CommunicationStatus::Completed)),
            "scheduled" => Ok(StatusFilter::Status(CommunicationStatus::Scheduled)),
            "pending" => Ok(StatusFilter::Status(CommunicationStatus::Pending)),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown communication status `{other}`"
            ))),
        }
    }
}

/// `HH:MM` wire format for communication times.
mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Communication {
    pub id: CommunicationId,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    pub contact: ContactRef,
    /// Always present for emails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub date: NaiveDate,
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    pub status: CommunicationStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

impl Communication {
    pub fn is_for_contact(&self, contact_id: &ContactId) -> bool {
        &self.contact.id == contact_id
    }
}

/// A communication ready to be recorded; the repository assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCommunication {
    pub kind: CommunicationType,
    pub contact: ContactRef,
    pub subject: Option<String>,
    pub message: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: CommunicationStatus,
    pub attachments: Vec<String>,
}

impl NewCommunication {
    #[must_use]
    pub fn into_communication(self, id: CommunicationId) -> Communication {
        Communication {
            id,
            kind: self.kind,
            contact: self.contact,
            subject: self.subject,
            message: self.message,
            date: self.date,
            time: self.time,
            status: self.status,
            attachments: self.attachments,
        }
    }
}

/// Search box and status dropdown of the communications center.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunicationFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl CommunicationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, communication: &Communication) -> bool {
        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Status(status) => communication.status == status,
        };
        if !matches_status {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        communication.contact.name.to_lowercase().contains(&needle)
            || communication
                .subject
                .as_deref()
                .is_some_and(|subject| subject.to_lowercase().contains(&needle))
            || communication.message.to_lowercase().contains(&needle)
    }
}

/// Returns the communications matching `filter`, in their original order.
pub fn filter_communications(
    all: &[Communication],
    filter: &CommunicationFilter,
) -> Vec<Communication> {
    all.iter()
        .filter(|communication| filter.matches(communication))
        .cloned()
        .collect()
}
