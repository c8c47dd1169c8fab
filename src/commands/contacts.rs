//! Contact command handlers.
//!
//! Each handler takes the parsed argument list and the data manager and
//! returns the text shown to the user; errors bubble to the dispatch
//! boundary for translation.

use crate::book::normalize_name;
use crate::error::{Entity, Error, Result};
use crate::models::Contact;
use crate::storage::DataManager;

pub const ADD_USAGE: &str = "add <name> <phone> [email|None] [address|None] [DD.MM.YYYY|None]";
pub const CHANGE_USAGE: &str =
    "change <name> <email|address|birthday> <value> | change <name> phone <old> <new>";
pub const PHONE_USAGE: &str = "phone <name>";
pub const DELETE_USAGE: &str = "delete-contact <name>";
pub const SEARCH_USAGE: &str = "search <query>";
pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// An optional positional argument; the literal `None` (any case) leaves
/// the slot empty.
fn optional(args: &[String], index: usize) -> Option<&str> {
    args.get(index)
        .map(|s| s.as_str())
        .filter(|s| !s.eq_ignore_ascii_case("none"))
}

/// `add` merges into an existing contact: optional fields are updated
/// only when a value was actually supplied, and the phone is always
/// appended (a duplicate append is a warning no-op).
pub fn add(args: &[String], dm: &mut DataManager) -> Result<String> {
    if args.len() < 2 {
        return Err(Error::ArgumentCount { usage: ADD_USAGE });
    }
    let name = normalize_name(&args[0]);
    let phone = &args[1];
    let email = optional(args, 2);
    let address = optional(args, 3);
    let birthday = optional(args, 4);

    if let Some(contact) = dm.contacts.find_mut(&name) {
        if let Some(email) = email {
            contact.set_field("email", email)?;
        }
        if let Some(address) = address {
            contact.set_field("address", address)?;
        }
        if let Some(birthday) = birthday {
            contact.set_field("birthday", birthday)?;
        }
        contact.add_phone(phone)?;
        Ok(format!("Contact {} updated.", name))
    } else {
        let mut contact = Contact::new(name.clone());
        if let Some(email) = email {
            contact.set_field("email", email)?;
        }
        if let Some(address) = address {
            contact.set_field("address", address)?;
        }
        if let Some(birthday) = birthday {
            contact.set_field("birthday", birthday)?;
        }
        contact.add_phone(phone)?;
        dm.contacts.add_record(contact);
        Ok(format!("Contact {} added.", name))
    }
}

pub fn change(args: &[String], dm: &mut DataManager) -> Result<String> {
    if args.len() < 3 {
        return Err(Error::ArgumentCount {
            usage: CHANGE_USAGE,
        });
    }
    let name = normalize_name(&args[0]);
    let field = args[1].to_lowercase();

    let Some(contact) = dm.contacts.find_mut(&name) else {
        return Err(Error::NotFound(Entity::Contact, name));
    };

    if field == "phone" {
        if args.len() != 4 {
            return Err(Error::ArgumentCount {
                usage: CHANGE_USAGE,
            });
        }
        let (old, new) = (&args[2], &args[3]);
        contact.edit_phone(old, new)?;
        Ok(format!("Phone {} for {} changed to {}.", old, name, new))
    } else {
        let value = &args[2];
        contact.set_field(&field, value)?;
        Ok(format!("Field {} for {} set to {}.", field, name, value))
    }
}

pub fn phone(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(name) = args.first() else {
        return Err(Error::ArgumentCount { usage: PHONE_USAGE });
    };
    let name = normalize_name(name);
    match dm.contacts.find(&name) {
        Some(contact) => Ok(contact.to_string()),
        None => Err(Error::NotFound(Entity::Contact, name)),
    }
}

pub fn all(_args: &[String], dm: &mut DataManager) -> Result<String> {
    if dm.contacts.is_empty() {
        return Ok("The contact book is empty.".to_string());
    }
    let mut lines = vec!["All contacts:".to_string()];
    lines.extend(dm.contacts.iter().map(|contact| contact.to_string()));
    Ok(lines.join("\n"))
}

pub fn delete(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(name) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: DELETE_USAGE,
        });
    };
    let name = normalize_name(name);
    dm.contacts.delete(&name)?;
    Ok(format!("Contact {} deleted.", name))
}

pub fn search(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(query) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: SEARCH_USAGE,
        });
    };
    let results = dm.contacts.search(query);
    if results.is_empty() {
        return Ok(format!("No contacts matching '{}'.", query));
    }
    let lines: Vec<String> = results.iter().map(|contact| contact.to_string()).collect();
    Ok(lines.join("\n"))
}

pub fn add_birthday(args: &[String], dm: &mut DataManager) -> Result<String> {
    if args.len() < 2 {
        return Err(Error::ArgumentCount {
            usage: ADD_BIRTHDAY_USAGE,
        });
    }
    let name = normalize_name(&args[0]);
    let Some(contact) = dm.contacts.find_mut(&name) else {
        return Err(Error::NotFound(Entity::Contact, name));
    };
    contact.set_field("birthday", &args[1])?;
    Ok(format!("Birthday for {} saved.", name))
}

pub fn show_birthday(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(name) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: SHOW_BIRTHDAY_USAGE,
        });
    };
    let name = normalize_name(name);
    let Some(contact) = dm.contacts.find(&name) else {
        return Err(Error::NotFound(Entity::Contact, name));
    };
    match &contact.birthday {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("No birthday set for {}.", name)),
    }
}

/// `birthdays [N]` defaults to a 7-day window; a negative or unparsable
/// N is rejected, not clamped.
pub fn birthdays(args: &[String], dm: &mut DataManager) -> Result<String> {
    let days = match args.first() {
        None => 7,
        Some(raw) => {
            let days: i64 = raw.parse().map_err(|_| {
                Error::InvalidArgument(format!("'{}' is not a number of days.", raw))
            })?;
            if days < 0 {
                return Err(Error::InvalidArgument(
                    "The number of days cannot be negative.".to_string(),
                ));
            }
            days as u32
        }
    };
    Ok(dm.contacts.upcoming_birthdays(days))
}
