//! Validated scalar field types.
//!
//! Each wrapper validates on construction and on mutation, so a stored
//! value is always well-formed. Names, addresses and tags carry no
//! validation and stay plain strings on the records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::validation::{validate_birthday, validate_email, validate_phone, DATE_FORMAT};

/// A phone number normalized to exactly 10 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(validate_phone(raw)?))
    }

    /// Replaces the value, validating the new one first.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        self.0 = validate_phone(raw)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email address matching `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(validate_email(raw)?))
    }

    pub fn set(&mut self, raw: &str) -> Result<()> {
        self.0 = validate_email(raw)?;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday, parsed from and rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self> {
        Ok(Self(validate_birthday(raw)?))
    }

    pub fn set(&mut self, raw: &str) -> Result<()> {
        self.0 = validate_birthday(raw)?;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
