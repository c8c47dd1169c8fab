//! Contact record: a name, an ordered list of unique phones, and
//! optional email, address and birthday.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::field::{Birthday, Email, Phone};
use crate::error::{Entity, Error, Result};

/// Outcome of [`Contact::add_phone`]: adding a number the contact already
/// has is a warning-level no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneAdded {
    Added,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phones: Vec<Phone>,
    pub email: Option<Email>,
    pub address: Option<String>,
    pub birthday: Option<Birthday>,
}

impl Contact {
    /// Creates a contact with the given (already normalized) name and no
    /// phones; optional fields start empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Validates and appends a phone. A duplicate of an existing
    /// normalized number is skipped with a warning.
    pub fn add_phone(&mut self, raw: &str) -> Result<PhoneAdded> {
        let phone = Phone::new(raw)?;
        if self.phones.iter().any(|p| p == &phone) {
            warn!(name = %self.name, phone = %phone, "phone already present, skipping");
            return Ok(PhoneAdded::Duplicate);
        }
        self.phones.push(phone);
        Ok(PhoneAdded::Added)
    }

    /// Replaces the phone whose stored digits equal `old` exactly.
    /// The new number is validated before anything is touched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old) else {
            return Err(Error::NotFound(Entity::Phone, old.to_string()));
        };
        phone.set(new)
    }

    /// Sets one of the directly editable fields by name.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "email" => self.email = Some(Email::new(value)?),
            "address" => self.address = Some(value.to_string()),
            "birthday" => self.birthday = Some(Birthday::new(value)?),
            other => return Err(Error::UnsupportedField(other.to_string())),
        }
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Name: {}, Phone: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        if let Some(email) = &self.email {
            write!(f, ", Email: {}", email)?;
        }
        if let Some(address) = &self.address {
            write!(f, ", Address: {}", address)?;
        }
        Ok(())
    }
}
