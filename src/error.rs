//! Error taxonomy for the assistant.
//!
//! Every handler failure is one of these variants; the dispatch layer
//! converts them to user-facing text, so nothing here ever escapes the
//! command loop.

use std::path::PathBuf;
use thiserror::Error;

/// Which validated field a value failed to parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Phone,
    Email,
    Birthday,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Phone => write!(f, "phone"),
            FieldKind::Email => write!(f, "email"),
            FieldKind::Birthday => write!(f, "birthday"),
        }
    }
}

/// What kind of record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Contact,
    Note,
    Phone,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Contact => write!(f, "Contact"),
            Entity::Note => write!(f, "Note"),
            Entity::Phone => write!(f, "Phone number"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", validation_message(.0))]
    Validation(FieldKind),

    #[error("{0} {1} not found.")]
    NotFound(Entity, String),

    #[error("Field '{0}' cannot be edited directly.")]
    UnsupportedField(String),

    #[error("Not enough arguments. Usage: {usage}")]
    ArgumentCount { usage: &'static str },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Failed to write data file '{0}': {1}")]
    Save(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode data: {0}")]
    Encode(#[from] serde_json::Error),
}

fn validation_message(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Phone => "Phone number must contain exactly 10 digits.",
        FieldKind::Email => "Invalid email format. Use user@domain.com.",
        FieldKind::Birthday => "Invalid date format. Use DD.MM.YYYY.",
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            Error::Validation(FieldKind::Phone).to_string(),
            "Phone number must contain exactly 10 digits."
        );
        assert_eq!(
            Error::Validation(FieldKind::Birthday).to_string(),
            "Invalid date format. Use DD.MM.YYYY."
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound(Entity::Contact, "Ann".into());
        assert_eq!(err.to_string(), "Contact Ann not found.");

        let err = Error::NotFound(Entity::Phone, "0501234567".into());
        assert_eq!(err.to_string(), "Phone number 0501234567 not found.");
    }

    #[test]
    fn test_argument_count_message() {
        let err = Error::ArgumentCount {
            usage: "phone <name>",
        };
        assert_eq!(
            err.to_string(),
            "Not enough arguments. Usage: phone <name>"
        );
    }
}
