mod contact;
mod field;
mod note;

pub use contact::{Contact, PhoneAdded};
pub use field::{Birthday, Email, Phone};
pub use note::Note;
