use crate::{
    domain::{team_member::TeamMember, types::TeamMemberId},
    repository::{InMemoryRepository, TeamMemberReader, errors::RepositoryResult},
};

impl TeamMemberReader for InMemoryRepository {
    fn get_team_member_by_id(&self, id: &TeamMemberId) -> RepositoryResult<Option<TeamMember>> {
        Ok(self
            .state()
            .team
            .iter()
            .find(|member| &member.id == id)
            .cloned())
    }

    fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>> {
        Ok(self.state().team.clone())
    }
}
