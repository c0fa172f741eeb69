use crate::domain::template::Template;
use crate::domain::types::TemplateId;
use crate::forms::template::TemplateForm;
use crate::handlers::{Notification, Notifier, report};
use crate::repository::TemplateWriter;
use crate::services::ServiceResult;
use crate::services::templates as template_service;

pub fn create<R, N>(repo: &R, notifier: &N, form: TemplateForm) -> ServiceResult<Template>
where
    R: TemplateWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        template_service::create_template(repo, form),
        |template| {
            Some(Notification::success(
                "Template created",
                format!("{} template has been created", template.name),
            ))
        },
    )
}

pub fn update<R, N>(
    repo: &R,
    notifier: &N,
    template_id: &TemplateId,
    form: TemplateForm,
) -> ServiceResult<Template>
where
    R: TemplateWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        template_service::update_template(repo, template_id, form),
        |template| {
            Some(Notification::success(
                "Template updated",
                format!("{} template has been updated", template.name),
            ))
        },
    )
}

/// Deleting an id that is already gone succeeds silently.
pub fn delete<R, N>(
    repo: &R,
    notifier: &N,
    template_id: &TemplateId,
) -> ServiceResult<Option<Template>>
where
    R: TemplateWriter + ?Sized,
    N: Notifier + ?Sized,
{
    report(
        notifier,
        template_service::delete_template(repo, template_id),
        |removed| {
            removed.as_ref().map(|template| {
                Notification::success(
                    "Template deleted",
                    format!("{} template has been deleted", template.name),
                )
            })
        },
    )
}
