//! Template editor form.

use serde::Deserialize;

use crate::domain::template::{TemplateFields, TemplateType};
use crate::domain::types::{TemplateContent, TemplateName};
use crate::forms::{FormError, non_blank};

#[derive(Debug, Clone, Deserialize)]
/// Form data for creating or editing a template.
pub struct TemplateForm {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TemplateType,
    /// Required for email templates only.
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
}

impl TryFrom<TemplateForm> for TemplateFields {
    type Error = FormError;

    fn try_from(form: TemplateForm) -> Result<Self, Self::Error> {
        let name = TemplateName::new(form.name).map_err(|_| FormError::MissingName)?;

        let subject = non_blank(&form.subject);
        if form.kind.requires_subject() && subject.is_none() {
            return Err(FormError::MissingSubject);
        }

        let content = TemplateContent::new(form.content).map_err(|_| FormError::MissingContent)?;

        Ok(Self {
            name,
            kind: form.kind,
            subject,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, kind: TemplateType, subject: &str, content: &str) -> TemplateForm {
        TemplateForm {
            name: name.to_string(),
            kind,
            subject: subject.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn name_is_checked_before_anything_else() {
        let result = TemplateFields::try_from(form(" ", TemplateType::Email, "", ""));
        assert_eq!(result, Err(FormError::MissingName));
    }

    #[test]
    fn email_templates_need_a_subject() {
        let result = TemplateFields::try_from(form("Quote", TemplateType::Email, "", "Hi {name}"));
        assert_eq!(result, Err(FormError::MissingSubject));
    }

    #[test]
    fn content_is_required() {
        let result = TemplateFields::try_from(form("Ping", TemplateType::Sms, "", "  "));
        assert_eq!(result, Err(FormError::MissingContent));
    }

    #[test]
    fn sms_template_without_subject_is_accepted() {
        let fields =
            TemplateFields::try_from(form(" Ping ", TemplateType::Sms, " ", "Hi {name}")).unwrap();

        assert_eq!(fields.name.as_str(), "Ping");
        assert_eq!(fields.subject, None);
        assert_eq!(fields.content.as_str(), "Hi {name}");
    }

    #[test]
    fn content_keeps_trailing_signature_newline() {
        let fields =
            TemplateFields::try_from(form("Ping", TemplateType::Sms, "", "Hi {name}\n-- Ava\n"))
                .unwrap();

        assert_eq!(fields.content.as_str(), "Hi {name}\n-- Ava\n");
    }
}
