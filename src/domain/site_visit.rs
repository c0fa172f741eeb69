//! Site visits booked against a job.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{JobId, TypeConstraintError};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VisitType {
    #[default]
    InitialScan,
    FollowUp,
    Measurement,
    Presentation,
    FinalInspection,
}

impl VisitType {
    pub fn label(&self) -> &'static str {
        match self {
            VisitType::InitialScan => "Initial Scan",
            VisitType::FollowUp => "Follow-up Visit",
            VisitType::Measurement => "Detailed Measurement",
            VisitType::Presentation => "Design Presentation",
            VisitType::FinalInspection => "Final Inspection",
        }
    }
}

impl Display for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for VisitType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial-scan" => Ok(VisitType::InitialScan),
            "follow-up" => Ok(VisitType::FollowUp),
            "measurement" => Ok(VisitType::Measurement),
            "presentation" => Ok(VisitType::Presentation),
            "final-inspection" => Ok(VisitType::FinalInspection),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown visit type `{other}`"
            ))),
        }
    }
}

/// A validated site visit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteVisit {
    pub job_id: JobId,
    pub visit_type: VisitType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub send_reminder: bool,
    pub notify_team: bool,
}

impl SiteVisit {
    /// Body of the meeting communication recorded for this visit.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} visit, {} minutes.",
            self.visit_type.label(),
            self.duration_minutes
        );
        if let Some(location) = &self.location {
            summary.push_str(&format!(" Location: {location}."));
        }
        if let Some(notes) = &self.notes {
            summary.push_str(&format!(" Notes: {notes}"));
        }
        summary
    }
}
