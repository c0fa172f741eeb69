use serde::{Deserialize, Serialize};

use crate::domain::types::TeamMemberId;

/// A rep who may own jobs. Reference data, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl TeamMember {
    /// Case-insensitive name match used by the rep picker. Empty queries match.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.trim().to_lowercase())
    }
}
