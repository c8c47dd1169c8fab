//! Personal assistant library: validated contact and note collections
//! behind a free-text command interface, persisted as one JSON blob.

pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

pub use book::{normalize_name, AddressBook, NoteBook};
pub use commands::{dispatch, is_mutating, parse_input};
pub use config::{Config, ConfigError};
pub use error::{Entity, Error, FieldKind};
pub use models::{Birthday, Contact, Email, Note, Phone, PhoneAdded};
pub use storage::{DataManager, DATA_FILE};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
