//! DTOs used by the communications center and the job communications tab.

use serde::Serialize;

use crate::domain::communication::{Communication, CommunicationType};
use crate::domain::contact::Contact;
use crate::domain::template::Template;

/// Communications split into the composer tabs.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct CommunicationsByType {
    pub email: Vec<Communication>,
    pub sms: Vec<Communication>,
    pub call: Vec<Communication>,
    pub meeting: Vec<Communication>,
}

impl FromIterator<Communication> for CommunicationsByType {
    fn from_iter<I: IntoIterator<Item = Communication>>(iter: I) -> Self {
        let mut grouped = Self::default();
        for communication in iter {
            match communication.kind {
                CommunicationType::Email => grouped.email.push(communication),
                CommunicationType::Sms => grouped.sms.push(communication),
                CommunicationType::Call => grouped.call.push(communication),
                CommunicationType::Meeting => grouped.meeting.push(communication),
            }
        }
        grouped
    }
}

/// Data required to render the communications center.
#[derive(Debug, Serialize)]
pub struct CommunicationsPageData {
    /// Communications matching the search box and status dropdown.
    pub communications: Vec<Communication>,
    pub contacts: Vec<Contact>,
    pub templates: Vec<Template>,
}
