//! Repository implementation for the communication log.

use crate::{
    domain::{
        communication::{Communication, NewCommunication},
        types::{CommunicationId, ContactId},
    },
    repository::{
        CommunicationReader, CommunicationWriter, InMemoryRepository, errors::RepositoryResult,
    },
};

impl CommunicationReader for InMemoryRepository {
    fn list_communications(&self) -> RepositoryResult<Vec<Communication>> {
        Ok(self.state().communications.clone())
    }

    fn list_contact_communications(
        &self,
        contact_id: &ContactId,
    ) -> RepositoryResult<Vec<Communication>> {
        Ok(self
            .state()
            .communications
            .iter()
            .filter(|communication| communication.is_for_contact(contact_id))
            .cloned()
            .collect())
    }
}

impl CommunicationWriter for InMemoryRepository {
    fn create_communication(
        &self,
        new_communication: &NewCommunication,
    ) -> RepositoryResult<Communication> {
        let communication = new_communication
            .clone()
            .into_communication(CommunicationId::generate());

        self.state_mut().communications.push(communication.clone());

        Ok(communication)
    }
}
