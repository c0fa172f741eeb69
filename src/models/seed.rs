//! Seed file format used to populate the in-memory repository.
//!
//! Jobs reference their rep by id; references are resolved against `team`
//! when the seed is turned into repository state.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::communication::{Communication, CommunicationType};
use crate::domain::job::{Job, JobStage, TimelineEntry};
use crate::domain::team_member::TeamMember;
use crate::domain::template::Template;
use crate::domain::types::{JobId, TeamMemberId};
use crate::repository::HubState;
use crate::repository::errors::{RepositoryError, RepositoryResult};

const SAMPLE_SEED: &str = include_str!("../../data/sample_seed.json");

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedJob {
    pub id: JobId,
    pub homeowner: String,
    pub address: String,
    pub stage: JobStage,
    #[serde(default)]
    pub assigned_rep: Option<TeamMemberId>,
    pub last_activity: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HubSeed {
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub jobs: Vec<SeedJob>,
    #[serde(default)]
    pub communications: Vec<Communication>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// Rejects the first identifier that occurs twice.
fn ensure_unique<'a, I>(kind: &str, ids: I) -> RepositoryResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate {kind} id `{id}`"
            )));
        }
    }
    Ok(())
}

impl HubSeed {
    /// The demo data set shipped with the crate.
    pub fn sample() -> RepositoryResult<Self> {
        Self::from_json(SAMPLE_SEED)
    }

    pub fn from_json(raw: &str) -> RepositoryResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Resolves rep references and checks identifier uniqueness and that
    /// every email carries a subject.
    pub fn into_state(self) -> RepositoryResult<HubState> {
        ensure_unique("team member", self.team.iter().map(|m| m.id.as_str()))?;
        ensure_unique("job", self.jobs.iter().map(|j| j.id.as_str()))?;
        ensure_unique(
            "communication",
            self.communications.iter().map(|c| c.id.as_str()),
        )?;
        ensure_unique("template", self.templates.iter().map(|t| t.id.as_str()))?;

        if let Some(email) = self.communications.iter().find(|c| {
            c.kind == CommunicationType::Email
                && c.subject.as_deref().is_none_or(|s| s.trim().is_empty())
        }) {
            return Err(RepositoryError::ValidationError(format!(
                "email `{}` has no subject",
                email.id
            )));
        }

        let jobs = self
            .jobs
            .into_iter()
            .map(|seed_job| {
                let assigned_rep = match &seed_job.assigned_rep {
                    Some(rep_id) => Some(
                        self.team
                            .iter()
                            .find(|member| &member.id == rep_id)
                            .cloned()
                            .ok_or_else(|| {
                                RepositoryError::ValidationError(format!(
                                    "job `{}` references unknown rep `{rep_id}`",
                                    seed_job.id
                                ))
                            })?,
                    ),
                    None => None,
                };

                Ok(Job {
                    id: seed_job.id,
                    homeowner: seed_job.homeowner,
                    address: seed_job.address,
                    stage: seed_job.stage,
                    assigned_rep,
                    last_activity: seed_job.last_activity,
                    timeline: seed_job.timeline,
                })
            })
            .collect::<RepositoryResult<Vec<Job>>>()?;

        Ok(HubState {
            team: self.team,
            jobs,
            communications: self.communications,
            templates: self.templates,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn sample_seed_resolves_reps() {
        let state = HubSeed::sample().unwrap().into_state().unwrap();

        assert_eq!(state.team.len(), 4);
        assert_eq!(state.jobs.len(), 4);
        assert_eq!(state.communications.len(), 8);
        assert_eq!(state.templates.len(), 8);

        let jane = &state.jobs[0];
        assert_eq!(jane.homeowner, "Jane Doe");
        assert_eq!(jane.stage, JobStage::DesignSent);
        assert_eq!(jane.assigned_rep.as_ref().unwrap().name, "Ava Nguyen");
        assert!(state.jobs[1].assigned_rep.is_none());
    }

    #[test]
    fn unknown_rep_is_rejected() {
        let raw = r#"{
            "jobs": [{
                "id": "1",
                "homeowner": "Jane Doe",
                "address": "123 Maple St",
                "stage": "New",
                "assigned_rep": "9",
                "last_activity": "Today"
            }]
        }"#;

        let result = HubSeed::from_json(raw).unwrap().into_state();

        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[test]
    fn duplicate_job_ids_are_rejected() {
        let job = r#"{"id": "1", "homeowner": "A", "address": "B", "stage": "Won", "last_activity": "x"}"#;
        let raw = format!(r#"{{"jobs": [{job}, {job}]}}"#);

        let result = HubSeed::from_json(&raw).unwrap().into_state();

        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    }

    #[test]
    fn unknown_stage_fails_to_parse() {
        let raw = r#"{"jobs": [{"id": "1", "homeowner": "A", "address": "B", "stage": "Closed", "last_activity": "x"}]}"#;
        assert!(HubSeed::from_json(raw).is_err());
    }

    #[test]
    fn loads_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"team": [{{"id": "1", "name": "Ava Nguyen", "role": "Field Rep", "avatar": ""}}]}}"#
        )
        .unwrap();

        let seed = HubSeed::load(file.path()).unwrap();

        assert_eq!(seed.team.len(), 1);
        assert!(seed.jobs.is_empty());
    }

    #[test]
    fn emails_without_subject_are_rejected() {
        let contact = r#"{"id": "1", "name": "Jane Doe", "avatar": ""}"#;
        for subject in [String::new(), r#""subject": "  ","#.to_string()] {
            let raw = format!(
                r#"{{"communications": [{{"id": "9", "type": "email", "contact": {contact}, {subject}
                    "message": "Hi", "date": "2025-05-15", "time": "10:30", "status": "completed"}}]}}"#
            );

            let result = HubSeed::from_json(&raw).unwrap().into_state();

            assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
        }
    }

    #[test]
    fn texts_without_subject_are_accepted() {
        let raw = r#"{"communications": [{"id": "9", "type": "sms",
            "contact": {"id": "1", "name": "Jane Doe", "avatar": ""},
            "message": "Hi", "date": "2025-05-15", "time": "10:30", "status": "completed"}]}"#;

        let state = HubSeed::from_json(raw).unwrap().into_state().unwrap();

        assert_eq!(state.communications.len(), 1);
    }
}
