//! Jobs moving through the sales pipeline.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::team_member::TeamMember;
use crate::domain::types::{JobId, NoteText, TypeConstraintError};

/// Label stamped on timeline entries and `last_activity` by user actions.
pub const JUST_NOW: &str = "Just now";

/// Pipeline position of a job.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobStage {
    New,
    #[serde(rename = "Scan Complete")]
    ScanComplete,
    #[serde(rename = "Design Sent")]
    DesignSent,
    Won,
    Lost,
}

impl JobStage {
    /// Every stage in board column order.
    pub const ALL: [JobStage; 5] = [
        JobStage::New,
        JobStage::ScanComplete,
        JobStage::DesignSent,
        JobStage::Won,
        JobStage::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStage::New => "New",
            JobStage::ScanComplete => "Scan Complete",
            JobStage::DesignSent => "Design Sent",
            JobStage::Won => "Won",
            JobStage::Lost => "Lost",
        }
    }
}

impl Display for JobStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStage {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown stage `{s}`")))
    }
}

/// Stage selector used by the jobs list; `All` disables stage filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StageFilter {
    #[default]
    All,
    Stage(JobStage),
}

impl StageFilter {
    pub fn matches(&self, stage: JobStage) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Stage(expected) => *expected == stage,
        }
    }
}

impl FromStr for StageFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StageFilter::All);
        }
        s.parse().map(StageFilter::Stage)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimelineEntryKind {
    Scan,
    Design,
    Note,
}

/// One entry of a job timeline. `time` is a display label, not a timestamp.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub kind: TimelineEntryKind,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl TimelineEntry {
    #[must_use]
    pub fn note(text: NoteText) -> Self {
        Self {
            kind: TimelineEntryKind::Note,
            time: JUST_NOW.to_string(),
            content: Some(text.into_inner()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub homeowner: String,
    pub address: String,
    pub stage: JobStage,
    pub assigned_rep: Option<TeamMember>,
    pub last_activity: String,
    /// Append-only; insertion order is chronological order.
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

/// Query parameters for the jobs list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Excludes jobs without an assigned rep ("My Jobs").
    pub assigned_only: bool,
    pub stage: StageFilter,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assigned_only(mut self) -> Self {
        self.assigned_only = true;
        self
    }

    pub fn stage(mut self, stage: StageFilter) -> Self {
        self.stage = stage;
        self
    }

    pub fn matches(&self, job: &Job) -> bool {
        if self.assigned_only && job.assigned_rep.is_none() {
            return false;
        }
        self.stage.matches(job.stage)
    }
}

/// A board column: one stage and the jobs currently in it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct StageColumn {
    pub stage: JobStage,
    pub jobs: Vec<Job>,
}

/// Partitions jobs into the five stage columns, preserving relative order.
///
/// All five columns are always present, in [`JobStage::ALL`] order.
pub fn group_by_stage<I>(jobs: I) -> Vec<StageColumn>
where
    I: IntoIterator<Item = Job>,
{
    let mut columns: Vec<StageColumn> = JobStage::ALL
        .into_iter()
        .map(|stage| StageColumn {
            stage,
            jobs: Vec::new(),
        })
        .collect();

    for job in jobs {
        if let Some(column) = columns.iter_mut().find(|c| c.stage == job.stage) {
            column.jobs.push(job);
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, stage: JobStage) -> Job {
        Job {
            id: JobId::new(id).unwrap(),
            homeowner: format!("Homeowner {id}"),
            address: format!("{id} Main St"),
            stage,
            assigned_rep: None,
            last_activity: "Yesterday".to_string(),
            timeline: Vec::new(),
        }
    }

    #[test]
    fn stage_literals_round_trip() {
        for stage in JobStage::ALL {
            assert_eq!(stage.as_str().parse::<JobStage>().unwrap(), stage);
        }
        assert_eq!(
            serde_json::to_string(&JobStage::ScanComplete).unwrap(),
            "\"Scan Complete\""
        );
        assert!("Scanned".parse::<JobStage>().is_err());
    }

    #[test]
    fn stage_filter_parses_all() {
        assert_eq!("all".parse::<StageFilter>().unwrap(), StageFilter::All);
        assert_eq!(
            "Won".parse::<StageFilter>().unwrap(),
            StageFilter::Stage(JobStage::Won)
        );
    }

    #[test]
    fn group_by_stage_always_has_five_columns() {
        let columns = group_by_stage(Vec::new());
        assert_eq!(columns.len(), 5);
        assert!(columns.iter().all(|c| c.jobs.is_empty()));
        let stages: Vec<_> = columns.iter().map(|c| c.stage).collect();
        assert_eq!(stages, JobStage::ALL.to_vec());
    }

    #[test]
    fn group_by_stage_preserves_count_and_order() {
        let jobs = vec![
            job("1", JobStage::Won),
            job("2", JobStage::New),
            job("3", JobStage::Won),
            job("4", JobStage::Lost),
            job("5", JobStage::New),
        ];

        let columns = group_by_stage(jobs.clone());

        let total: usize = columns.iter().map(|c| c.jobs.len()).sum();
        assert_eq!(total, jobs.len());
        for original in &jobs {
            assert!(columns.iter().any(|c| c.jobs.contains(original)));
        }

        let won: Vec<_> = columns[3].jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(won, vec!["1", "3"]);
        let new: Vec<_> = columns[0].jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(new, vec!["2", "5"]);
    }

    #[test]
    fn filter_excludes_unassigned_and_other_stages() {
        let unassigned = job("1", JobStage::New);
        let mut assigned = job("2", JobStage::New);
        assigned.assigned_rep = Some(TeamMember {
            id: "1".try_into().unwrap(),
            name: "Ava Nguyen".to_string(),
            role: "Field Rep".to_string(),
            avatar: String::new(),
        });

        let filter = JobFilter::new().assigned_only();
        assert!(!filter.matches(&unassigned));
        assert!(filter.matches(&assigned));

        let filter = JobFilter::new().stage(StageFilter::Stage(JobStage::Won));
        assert!(!filter.matches(&assigned));
    }
}
