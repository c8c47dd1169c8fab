//! Note command handlers.

use crate::error::{Entity, Error, Result};
use crate::models::Note;
use crate::storage::DataManager;

pub const ADD_NOTE_USAGE: &str = "add-note <content> [tag1,tag2,...|None]";
pub const EDIT_NOTE_USAGE: &str = "edit-note <id> <new content>";
pub const DELETE_NOTE_USAGE: &str = "delete-note <id>";
pub const SEARCH_NOTE_USAGE: &str = "search-note <query>";
pub const SORT_NOTES_USAGE: &str = "sort-notes <tag>";

fn render_list(header: String, notes: &[(String, &Note)]) -> String {
    let mut lines = vec![header];
    lines.extend(
        notes
            .iter()
            .map(|(id, note)| format!("ID {}: {}", id, note)),
    );
    lines.join("\n")
}

/// `add-note` takes the content first and an optional comma-separated
/// tag list (or the literal `None`) second; the parser has already
/// rejoined multi-word content.
pub fn add_note(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(content) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: ADD_NOTE_USAGE,
        });
    };
    let tags: Vec<&str> = match args.get(1) {
        Some(raw) if !raw.eq_ignore_ascii_case("none") => raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    let note = Note::new(content.clone()).with_tags(&tags);
    let rendered_tags: Vec<String> = note.tags.iter().cloned().collect();
    let id = dm.notes.add_note(note);
    if rendered_tags.is_empty() {
        Ok(format!("Note added. ID: {}.", id))
    } else {
        Ok(format!(
            "Note added. ID: {}. Tags: {}",
            id,
            rendered_tags.join(", ")
        ))
    }
}

pub fn edit_note(args: &[String], dm: &mut DataManager) -> Result<String> {
    if args.len() < 2 {
        return Err(Error::ArgumentCount {
            usage: EDIT_NOTE_USAGE,
        });
    }
    let id = &args[0];
    let Some(note) = dm.notes.find_mut(id) else {
        return Err(Error::NotFound(Entity::Note, id.clone()));
    };
    note.edit_content(args[1].clone());
    Ok(format!("Note {} updated.", id))
}

pub fn delete_note(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(id) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: DELETE_NOTE_USAGE,
        });
    };
    dm.notes.delete(id)?;
    Ok(format!("Note {} deleted.", id))
}

pub fn search_note(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(query) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: SEARCH_NOTE_USAGE,
        });
    };
    let results = dm.notes.search(query);
    if results.is_empty() {
        return Ok(format!("No notes matching '{}'.", query));
    }
    Ok(render_list(
        format!("Search results for '{}':", query),
        &results,
    ))
}

pub fn sort_notes(args: &[String], dm: &mut DataManager) -> Result<String> {
    let Some(tag) = args.first() else {
        return Err(Error::ArgumentCount {
            usage: SORT_NOTES_USAGE,
        });
    };
    let results = dm.notes.by_tag(tag);
    if results.is_empty() {
        return Ok(format!("No notes with tag '{}'.", tag));
    }
    Ok(render_list(format!("Notes tagged '{}':", tag), &results))
}

pub fn all_notes(_args: &[String], dm: &mut DataManager) -> Result<String> {
    if dm.notes.is_empty() {
        return Ok("The note book is empty.".to_string());
    }
    let notes: Vec<(String, &Note)> = dm.notes.iter().collect();
    Ok(render_list("All notes:".to_string(), &notes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_note_with_tags() {
        let mut dm = DataManager::new();
        let msg = add_note(&args(&["Buy milk", "Groceries,home"]), &mut dm).unwrap();
        assert_eq!(msg, "Note added. ID: 1. Tags: groceries, home");
    }

    #[test]
    fn test_add_note_none_means_no_tags() {
        let mut dm = DataManager::new();
        let msg = add_note(&args(&["Buy milk", "None"]), &mut dm).unwrap();
        assert_eq!(msg, "Note added. ID: 1.");
        assert!(dm.notes.find("1").unwrap().tags.is_empty());
    }

    #[test]
    fn test_add_note_requires_content() {
        let mut dm = DataManager::new();
        assert!(matches!(
            add_note(&[], &mut dm).unwrap_err(),
            Error::ArgumentCount { .. }
        ));
    }

    #[test]
    fn test_edit_note_replaces_content() {
        let mut dm = DataManager::new();
        add_note(&args(&["draft"]), &mut dm).unwrap();
        let msg = edit_note(&args(&["1", "final text"]), &mut dm).unwrap();
        assert_eq!(msg, "Note 1 updated.");
        assert_eq!(dm.notes.find("1").unwrap().content, "final text");
    }

    #[test]
    fn test_edit_note_missing_id() {
        let mut dm = DataManager::new();
        let err = edit_note(&args(&["9", "text"]), &mut dm).unwrap_err();
        assert_eq!(err.to_string(), "Note 9 not found.");
    }

    #[test]
    fn test_delete_note_then_add_no_id_collision() {
        let mut dm = DataManager::new();
        add_note(&args(&["first"]), &mut dm).unwrap();
        add_note(&args(&["second"]), &mut dm).unwrap();
        delete_note(&args(&["2"]), &mut dm).unwrap();
        let msg = add_note(&args(&["third"]), &mut dm).unwrap();
        assert_eq!(msg, "Note added. ID: 3.");
    }

    #[test]
    fn test_search_note_finds_by_content() {
        let mut dm = DataManager::new();
        add_note(&args(&["Buy milk", "groceries,home"]), &mut dm).unwrap();
        let msg = search_note(&args(&["milk"]), &mut dm).unwrap();
        assert_eq!(
            msg,
            "Search results for 'milk':\nID 1: Content: 'Buy milk' (Tags: groceries, home)"
        );
    }

    #[test]
    fn test_search_note_no_results() {
        let mut dm = DataManager::new();
        let msg = search_note(&args(&["milk"]), &mut dm).unwrap();
        assert_eq!(msg, "No notes matching 'milk'.");
    }

    #[test]
    fn test_sort_notes_exact_tag_case_insensitive() {
        let mut dm = DataManager::new();
        add_note(&args(&["Buy milk", "groceries,home"]), &mut dm).unwrap();

        let msg = sort_notes(&args(&["groceries"]), &mut dm).unwrap();
        assert!(msg.starts_with("Notes tagged 'groceries':"));
        assert!(msg.contains("Buy milk"));

        // lookup is case-insensitive against the lower-cased set
        let msg = sort_notes(&args(&["Groceries"]), &mut dm).unwrap();
        assert!(msg.contains("Buy milk"));

        let msg = sort_notes(&args(&["grocer"]), &mut dm).unwrap();
        assert_eq!(msg, "No notes with tag 'grocer'.");
    }

    #[test]
    fn test_all_notes_lists_everything() {
        let mut dm = DataManager::new();
        assert_eq!(all_notes(&[], &mut dm).unwrap(), "The note book is empty.");

        add_note(&args(&["first"]), &mut dm).unwrap();
        add_note(&args(&["second"]), &mut dm).unwrap();
        let msg = all_notes(&[], &mut dm).unwrap();
        assert!(msg.starts_with("All notes:"));
        assert!(msg.contains("ID 1:"));
        assert!(msg.contains("ID 2:"));
    }
}
