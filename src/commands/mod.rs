//! Free-text command parsing and dispatch.
//!
//! Input lines are split into a lower-cased verb and its arguments, the
//! verb is routed to its handler, and every handler error is translated
//! to user text at this single boundary. A command always produces
//! text; nothing propagates past here.

mod contacts;
mod notes;

use crate::error::Result;
use crate::storage::DataManager;

pub const HELP: &str = "\
Available commands:
  add <name> <phone> [email|None] [address|None] [DD.MM.YYYY|None]
  change <name> <email|address|birthday> <value>
  change <name> phone <old> <new>
  phone <name>
  all
  delete-contact <name>
  search <query>
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays [days]
  add-note <content> [tag1,tag2,...|None]
  edit-note <id> <new content>
  delete-note <id>
  search-note <query>
  sort-notes <tag>
  all-notes
  hello | help | close | exit";

/// Splits an input line into `(verb, args)`.
///
/// Two verbs get multi-word argument handling: `add-note` joins
/// everything into one content argument, peeling off a trailing
/// comma-bearing token as the tag list, and `edit-note` joins everything
/// after the id into the new content.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return (String::new(), Vec::new());
    };
    let verb = verb.to_lowercase();
    let args: Vec<String> = parts.map(str::to_string).collect();

    match verb.as_str() {
        "add-note" if !args.is_empty() => match args.split_last() {
            // a trailing token with a comma is the tag list
            Some((last, rest)) if last.contains(',') => {
                (verb, vec![rest.join(" "), last.clone()])
            }
            _ => (verb, vec![args.join(" ")]),
        },
        "edit-note" if args.len() >= 2 => {
            let id = args[0].clone();
            let content = args[1..].join(" ");
            (verb, vec![id, content])
        }
        _ => (verb, args),
    }
}

/// True for verbs that change the data manager; the REPL saves after
/// each of these.
pub fn is_mutating(verb: &str) -> bool {
    matches!(
        verb,
        "add"
            | "change"
            | "delete-contact"
            | "add-birthday"
            | "add-note"
            | "edit-note"
            | "delete-note"
    )
}

/// Routes a parsed command to its handler and renders the outcome,
/// errors included, as user-facing text.
pub fn dispatch(verb: &str, args: &[String], dm: &mut DataManager) -> String {
    let result: Result<String> = match verb {
        "add" => contacts::add(args, dm),
        "change" => contacts::change(args, dm),
        "phone" => contacts::phone(args, dm),
        "all" => contacts::all(args, dm),
        "delete-contact" => contacts::delete(args, dm),
        "search" => contacts::search(args, dm),
        "add-birthday" => contacts::add_birthday(args, dm),
        "show-birthday" => contacts::show_birthday(args, dm),
        "birthdays" => contacts::birthdays(args, dm),
        "add-note" => notes::add_note(args, dm),
        "edit-note" => notes::edit_note(args, dm),
        "delete-note" => notes::delete_note(args, dm),
        "search-note" => notes::search_note(args, dm),
        "sort-notes" => notes::sort_notes(args, dm),
        "all-notes" => notes::all_notes(args, dm),
        "hello" => Ok("How can I help you?".to_string()),
        "help" => Ok(HELP.to_string()),
        "" => Ok(String::new()),
        unknown => Ok(format!(
            "Unknown command '{}'. Type 'help' for the list of commands.",
            unknown
        )),
    };
    result.unwrap_or_else(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_verb() {
        let (verb, args) = parse_input("ADD Ann 0501234567");
        assert_eq!(verb, "add");
        assert_eq!(args, vec!["Ann", "0501234567"]);
    }

    #[test]
    fn test_parse_empty_line() {
        let (verb, args) = parse_input("   ");
        assert_eq!(verb, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_add_note_joins_content_and_splits_tags() {
        let (verb, args) = parse_input("add-note Buy milk and bread groceries,home");
        assert_eq!(verb, "add-note");
        assert_eq!(args, vec!["Buy milk and bread", "groceries,home"]);
    }

    #[test]
    fn test_parse_add_note_without_tags() {
        let (_, args) = parse_input("add-note Buy milk and bread");
        assert_eq!(args, vec!["Buy milk and bread"]);
    }

    #[test]
    fn test_parse_edit_note_joins_new_content() {
        let (verb, args) = parse_input("edit-note 3 the new longer content");
        assert_eq!(verb, "edit-note");
        assert_eq!(args, vec!["3", "the new longer content"]);
    }

    #[test]
    fn test_dispatch_translates_validation_error() {
        let mut dm = DataManager::new();
        let out = dispatch("add", &["Ann".into(), "123".into()], &mut dm);
        assert_eq!(out, "Phone number must contain exactly 10 digits.");
        // nothing was stored
        assert!(dm.contacts.is_empty());
    }

    #[test]
    fn test_dispatch_translates_not_found() {
        let mut dm = DataManager::new();
        let out = dispatch("phone", &["Ghost".into()], &mut dm);
        assert_eq!(out, "Contact Ghost not found.");
    }

    #[test]
    fn test_dispatch_translates_argument_count() {
        let mut dm = DataManager::new();
        let out = dispatch("add", &["Ann".into()], &mut dm);
        assert!(out.starts_with("Not enough arguments. Usage: add "));
    }

    #[test]
    fn test_dispatch_unknown_verb() {
        let mut dm = DataManager::new();
        let out = dispatch("frobnicate", &[], &mut dm);
        assert!(out.contains("Unknown command 'frobnicate'"));
    }

    #[test]
    fn test_is_mutating_covers_write_verbs() {
        for verb in [
            "add",
            "change",
            "delete-contact",
            "add-birthday",
            "add-note",
            "edit-note",
            "delete-note",
        ] {
            assert!(is_mutating(verb), "{verb} should be mutating");
        }
        for verb in ["phone", "all", "search", "birthdays", "help", "hello"] {
            assert!(!is_mutating(verb), "{verb} should not be mutating");
        }
    }
}
