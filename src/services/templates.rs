//! Services managing communication templates.

use crate::domain::communication::CommunicationType;
use crate::domain::template::{Template, TemplateDraft, TemplateFields, apply_template};
use crate::domain::types::{ContactId, TemplateId};
use crate::forms::template::TemplateForm;
use crate::repository::{JobReader, TemplateReader, TemplateWriter};
use crate::services::communications::get_contact;
use crate::services::{ServiceError, ServiceResult};

/// Templates offered in the composer for `kind`, including `all` templates.
pub fn list_templates_for<R>(repo: &R, kind: CommunicationType) -> ServiceResult<Vec<Template>>
where
    R: TemplateReader + ?Sized,
{
    Ok(repo
        .list_templates()?
        .into_iter()
        .filter(|template| template.kind.applies_to(kind))
        .collect())
}

/// Materializes a template for the selected recipient.
///
/// An unknown or missing recipient yields the template unsubstituted.
pub fn render_template<R>(
    repo: &R,
    template_id: &TemplateId,
    contact_id: Option<&ContactId>,
) -> ServiceResult<TemplateDraft>
where
    R: TemplateReader + JobReader + ?Sized,
{
    let template = repo
        .get_template_by_id(template_id)?
        .ok_or(ServiceError::NotFound)?;

    let contact = match contact_id {
        Some(contact_id) => get_contact(repo, contact_id)?,
        None => None,
    };

    Ok(apply_template(&template, contact.as_ref()))
}

/// Validates the form and stores a new template.
pub fn create_template<R>(repo: &R, form: TemplateForm) -> ServiceResult<Template>
where
    R: TemplateWriter + ?Sized,
{
    let fields = TemplateFields::try_from(form)?;

    repo.create_template(&fields).map_err(|err| {
        log::error!("Failed to create template: {err}");
        ServiceError::from(err)
    })
}

/// Validates the form and replaces the template with `template_id`.
pub fn update_template<R>(
    repo: &R,
    template_id: &TemplateId,
    form: TemplateForm,
) -> ServiceResult<Template>
where
    R: TemplateWriter + ?Sized,
{
    let fields = TemplateFields::try_from(form)?;

    repo.update_template(template_id, &fields).map_err(|err| {
        log::error!("Failed to update template {template_id}: {err}");
        ServiceError::from(err)
    })
}

/// Removes the template, returning it. Unknown ids are a no-op.
pub fn delete_template<R>(repo: &R, template_id: &TemplateId) -> ServiceResult<Option<Template>>
where
    R: TemplateWriter + ?Sized,
{
    repo.delete_template(template_id).map_err(|err| {
        log::error!("Failed to delete template {template_id}: {err}");
        ServiceError::from(err)
    })
}
