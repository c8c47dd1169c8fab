mod contacts;
mod notes;

pub use contacts::{normalize_name, AddressBook};
pub use notes::NoteBook;
