//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (trimmed non-empty identifiers,
//! normalized/validated email, sanitized note text) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        non_empty_string_newtype!($name, $doc, trim = true);
    };
    ($name:ident, $doc:expr, trim = $trim:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Rejects blank input. Surrounding whitespace is dropped only
            /// for trimmed types.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if $trim {
                    let inner = NonEmptyString::new(value)?;
                    return Ok(Self(inner.into_inner()));
                }
                if value.trim().is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(JobId, "Unique identifier for a job.");
non_empty_string_newtype!(TeamMemberId, "Unique identifier for a team member.");
non_empty_string_newtype!(
    ContactId,
    "Identifier of a contact. Contacts share the identifier of the job they come from."
);
non_empty_string_newtype!(CommunicationId, "Unique identifier for a communication.");
non_empty_string_newtype!(TemplateId, "Unique identifier for a communication template.");
non_empty_string_newtype!(TemplateName, "Template name enforcing non-empty values.");
non_empty_string_newtype!(
    TemplateContent,
    "Template body kept as typed. May contain `{name}` and `{address}` tokens.",
    trim = false
);
non_empty_string_newtype!(
    MessageSubject,
    "Communication subject enforcing trimmed, non-empty values."
);
non_empty_string_newtype!(
    MessageBody,
    "Communication body kept as typed; blank input is rejected.",
    trim = false
);

impl TemplateId {
    /// Generates a fresh identifier for a user-created template.
    pub fn generate() -> Self {
        Self(format!("template-{}", Uuid::new_v4()))
    }
}

impl CommunicationId {
    /// Generates a fresh identifier for a newly logged communication.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<JobId> for ContactId {
    fn from(value: JobId) -> Self {
        Self(value.0)
    }
}

impl From<&JobId> for ContactId {
    fn from(value: &JobId) -> Self {
        Self(value.0.clone())
    }
}

/// Lower-cased and validated email address of a contact.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContactEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactEmail> for String {
    fn from(value: ContactEmail) -> Self {
        value.0
    }
}

/// Timeline note text, sanitized of markup, trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NoteText(String);

impl NoteText {
    /// Constructs a sanitized, trimmed, non-empty value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let sanitized = ammonia::clean(&value.into());
        let inner = NonEmptyString::new(sanitized)?;
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NoteText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_trimmed_and_reject_blank_input() {
        assert_eq!(JobId::new("  2 ").unwrap().as_str(), "2");
        assert_eq!(JobId::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn bodies_keep_surrounding_whitespace() {
        let body = MessageBody::new("Hi Jane,\n\n-- Ava\n").unwrap();
        assert_eq!(body.as_str(), "Hi Jane,\n\n-- Ava\n");

        let content = TemplateContent::new("  Hi {name}\n").unwrap();
        assert_eq!(content.as_str(), "  Hi {name}\n");

        assert_eq!(MessageBody::new(" \n "), Err(TypeConstraintError::EmptyString));
        assert_eq!(MessageSubject::new(" Quote ").unwrap().as_str(), "Quote");
    }

    #[test]
    fn contact_email_rejects_invalid_address() {
        assert_eq!(
            ContactEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn note_text_strips_markup() {
        let note = NoteText::new("  <script>alert('x')</script>Left VM ").unwrap();
        assert_eq!(note.as_str(), "Left VM");
        assert!(NoteText::new("<script></script>").is_err());
    }

    #[test]
    fn generated_template_ids_are_prefixed() {
        assert!(TemplateId::generate().as_str().starts_with("template-"));
    }

    #[test]
    fn deserializing_blank_id_fails() {
        assert!(serde_json::from_str::<JobId>("\"  \"").is_err());
        assert_eq!(serde_json::from_str::<JobId>("\"7\"").unwrap().as_str(), "7");
    }
}
