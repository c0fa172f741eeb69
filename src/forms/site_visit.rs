//! Site visit scheduler form.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Deserialize;
use validator::Validate;

use crate::domain::site_visit::{SiteVisit, VisitType};
use crate::domain::types::JobId;
use crate::forms::{FormError, non_blank};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Raw scheduler input.
pub struct ScheduleSiteVisitForm {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub visit_type: VisitType,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
    #[validate(range(min = 30, max = 240))]
    pub duration_minutes: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_true")]
    pub send_reminder: bool,
    #[serde(default = "default_true")]
    pub notify_team: bool,
}

impl Default for ScheduleSiteVisitForm {
    fn default() -> Self {
        Self {
            job_id: None,
            visit_type: VisitType::default(),
            date: None,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            duration_minutes: 60,
            location: String::new(),
            notes: String::new(),
            send_reminder: true,
            notify_team: true,
        }
    }
}

impl TryFrom<ScheduleSiteVisitForm> for SiteVisit {
    type Error = FormError;

    fn try_from(form: ScheduleSiteVisitForm) -> Result<Self, Self::Error> {
        let job_id = form
            .job_id
            .as_deref()
            .and_then(non_blank)
            .and_then(|id| JobId::new(id).ok())
            .ok_or(FormError::MissingJob)?;

        let date = form.date.ok_or(FormError::MissingDate)?;

        if form.time.minute() % 30 != 0 || form.time.second() != 0 {
            return Err(FormError::InvalidTime);
        }

        if let Err(err) = form.validate() {
            log::error!("Failed to validate site visit form: {err}");
            return Err(FormError::InvalidDuration);
        }

        Ok(SiteVisit {
            job_id,
            visit_type: form.visit_type,
            date,
            time: form.time,
            duration_minutes: form.duration_minutes,
            location: non_blank(&form.location),
            notes: non_blank(&form.notes),
            send_reminder: form.send_reminder,
            notify_team: form.notify_team,
        })
    }
}
