//! Reusable communication templates and placeholder substitution.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::communication::CommunicationType;
use crate::domain::contact::Contact;
use crate::domain::types::{TemplateContent, TemplateId, TemplateName, TypeConstraintError};

pub const NAME_TOKEN: &str = "{name}";
pub const ADDRESS_TOKEN: &str = "{address}";

/// Communication type a template is offered for; `All` matches every type.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Email,
    Sms,
    Call,
    Meeting,
    All,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Email => "email",
            TemplateType::Sms => "sms",
            TemplateType::Call => "call",
            TemplateType::Meeting => "meeting",
            TemplateType::All => "all",
        }
    }

    pub fn applies_to(&self, kind: CommunicationType) -> bool {
        match self {
            TemplateType::All => true,
            other => *other == TemplateType::from(kind),
        }
    }

    pub fn requires_subject(&self) -> bool {
        matches!(self, TemplateType::Email)
    }
}

impl From<CommunicationType> for TemplateType {
    fn from(kind: CommunicationType) -> Self {
        match kind {
            CommunicationType::Email => TemplateType::Email,
            CommunicationType::Sms => TemplateType::Sms,
            CommunicationType::Call => TemplateType::Call,
            CommunicationType::Meeting => TemplateType::Meeting,
        }
    }
}

impl Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(TemplateType::All);
        }
        s.parse::<CommunicationType>()
            .map(TemplateType::from)
            .map_err(|_| TypeConstraintError::InvalidValue(format!("unknown template type `{s}`")))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TemplateType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
}

/// Validated template fields shared by create and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateFields {
    pub name: TemplateName,
    pub kind: TemplateType,
    pub subject: Option<String>,
    pub content: TemplateContent,
}

impl TemplateFields {
    #[must_use]
    pub fn into_template(self, id: TemplateId) -> Template {
        Template {
            id,
            name: self.name.into_inner(),
            kind: self.kind,
            subject: self.subject,
            content: self.content.into_inner(),
        }
    }
}

/// Subject and body produced from a template, ready for the composer.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TemplateDraft {
    pub subject: String,
    pub content: String,
}

/// Materializes `template` for `contact`.
///
/// Only `content` is substituted: every `{name}` and `{address}` token is
/// replaced literally. The subject is copied verbatim. Other tokens stay as-is.
pub fn apply_template(template: &Template, contact: Option<&Contact>) -> TemplateDraft {
    let subject = template.subject.clone().unwrap_or_default();
    let content = match contact {
        Some(contact) => template
            .content
            .replace(NAME_TOKEN, &contact.name)
            .replace(ADDRESS_TOKEN, &contact.address),
        None => template.content.clone(),
    };

    TemplateDraft { subject, content }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ContactId;

    fn template(subject: Option<&str>, content: &str) -> Template {
        Template {
            id: TemplateId::new("quote").unwrap(),
            name: "Quote".to_string(),
            kind: TemplateType::Email,
            subject: subject.map(str::to_string),
            content: content.to_string(),
        }
    }

    fn jane() -> Contact {
        Contact {
            id: ContactId::new("1").unwrap(),
            name: "Jane Doe".to_string(),
            address: "123 Maple St".to_string(),
            avatar: String::new(),
            email: "jane.doe@example.com".to_string(),
            phone: "555-123-4567".to_string(),
        }
    }

    #[test]
    fn substitutes_name_and_address() {
        let draft = apply_template(
            &template(None, "Hi {name}, re {address}"),
            Some(&jane()),
        );
        assert_eq!(draft.content, "Hi Jane Doe, re 123 Maple St");
        assert_eq!(draft.subject, "");
    }

    #[test]
    fn replaces_every_occurrence() {
        let draft = apply_template(&template(None, "{name} {name} {address}{address}"), Some(&jane()));
        assert_eq!(draft.content, "Jane Doe Jane Doe 123 Maple St123 Maple St");
    }

    #[test]
    fn without_contact_returns_content_unchanged() {
        let t = template(Some("Quote for {name}"), "Hi {name}, re {address}");
        let draft = apply_template(&t, None);
        assert_eq!(draft.content, t.content);
        assert_eq!(draft.subject, "Quote for {name}");
    }

    #[test]
    fn subject_is_not_substituted() {
        let t = template(Some("Quote for {name}"), "Hi {name}");
        let draft = apply_template(&t, Some(&jane()));
        assert_eq!(draft.subject, "Quote for {name}");
        assert_eq!(draft.content, "Hi Jane Doe");
    }

    #[test]
    fn unknown_tokens_are_left_alone() {
        let t = template(None, "See you on [DATE] at {time}, {name}");
        let draft = apply_template(&t, Some(&jane()));
        assert_eq!(draft.content, "See you on [DATE] at {time}, Jane Doe");
    }

    #[test]
    fn all_templates_apply_to_every_type() {
        for kind in CommunicationType::ALL {
            assert!(TemplateType::All.applies_to(kind));
        }
        assert!(TemplateType::Sms.applies_to(CommunicationType::Sms));
        assert!(!TemplateType::Sms.applies_to(CommunicationType::Email));
    }
}
