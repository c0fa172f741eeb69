//! Homeowner contacts derived from jobs.

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;
use crate::domain::types::ContactId;

pub const DEFAULT_AVATAR: &str = "/placeholder.svg?height=40&width=40";
pub const DEFAULT_PHONE: &str = "555-123-4567";

/// Directory entry used as a communication recipient.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub address: String,
    pub avatar: String,
    /// Display-only placeholder address, see [`homeowner_email`].
    pub email: String,
    pub phone: String,
}

impl From<&Job> for Contact {
    fn from(job: &Job) -> Self {
        Self {
            id: ContactId::from(&job.id),
            name: job.homeowner.clone(),
            address: job.address.clone(),
            avatar: DEFAULT_AVATAR.to_string(),
            email: homeowner_email(&job.homeowner),
            phone: DEFAULT_PHONE.to_string(),
        }
    }
}

/// Placeholder address for a homeowner: the lower-cased name with every
/// whitespace character replaced by a dot, e.g. `jane.doe@example.com`.
pub fn homeowner_email(homeowner: &str) -> String {
    let local: String = homeowner
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '.' } else { c })
        .collect();
    format!("{local}@example.com")
}

/// The slice of a contact embedded in a communication record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRef {
    pub id: ContactId,
    pub name: String,
    pub avatar: String,
}

impl From<&Contact> for ContactRef {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            avatar: contact.avatar.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobStage;
    use crate::domain::types::JobId;

    fn job(homeowner: &str) -> Job {
        Job {
            id: JobId::new("7").unwrap(),
            homeowner: homeowner.to_string(),
            address: "12 Calle Luna, Austin TX".to_string(),
            stage: JobStage::New,
            assigned_rep: None,
            last_activity: "1 hour ago".to_string(),
            timeline: Vec::new(),
        }
    }

    #[test]
    fn contact_mirrors_the_job() {
        let contact = Contact::from(&job("Jane Doe"));

        assert_eq!(contact.id.as_str(), "7");
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.address, "12 Calle Luna, Austin TX");
        assert_eq!(contact.email, "jane.doe@example.com");
        assert_eq!(contact.phone, DEFAULT_PHONE);
    }

    #[test]
    fn non_ascii_homeowner_still_gets_an_address() {
        let contact = Contact::from(&job("José García"));
        assert_eq!(contact.email, "josé.garcía@example.com");
    }

    #[test]
    fn every_whitespace_character_becomes_a_dot() {
        assert_eq!(homeowner_email("Carlos  Ramos"), "carlos..ramos@example.com");
    }
}
