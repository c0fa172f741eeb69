use crate::forms::site_visit::ScheduleSiteVisitForm;
use crate::handlers::{Notification, Notifier, report};
use crate::repository::{CommunicationWriter, JobReader};
use crate::services::ServiceResult;
use crate::services::site_visits::{ScheduledVisit, schedule_site_visit};

pub fn schedule<R, N>(
    repo: &R,
    notifier: &N,
    form: ScheduleSiteVisitForm,
) -> ServiceResult<ScheduledVisit>
where
    R: JobReader + CommunicationWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(notifier, schedule_site_visit(repo, form), |scheduled| {
        Some(Notification::success(
            "Site visit scheduled",
            format!(
                "Site visit scheduled for {} on {} at {}",
                scheduled.job.homeowner,
                scheduled.visit.date.format("%B %-d, %Y"),
                scheduled.visit.time.format("%H:%M"),
            ),
        ))
    })
}
