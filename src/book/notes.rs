//! Note book: notes keyed by a monotonically assigned numeric id.
//!
//! The id counter is stored next to the map and never rewinds, so a
//! deleted note's id is never handed out again. Ids cross the API
//! boundary as decimal strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Entity, Error, Result};
use crate::models::Note;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteBook {
    notes: BTreeMap<u64, Note>,
    next_id: u64,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Stores the note under the next counter value and returns its id.
    pub fn add_note(&mut self, note: Note) -> String {
        self.next_id += 1;
        let id = self.next_id;
        self.notes.insert(id, note);
        id.to_string()
    }

    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.get(&parse_id(id)?)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.get_mut(&parse_id(id)?)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let removed = parse_id(id).and_then(|key| self.notes.remove(&key));
        if removed.is_none() {
            return Err(Error::NotFound(Entity::Note, id.to_string()));
        }
        Ok(())
    }

    /// Notes in ascending-id (insertion) order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Note)> {
        self.notes.iter().map(|(id, note)| (id.to_string(), note))
    }

    /// Case-insensitive substring search against content or any tag;
    /// encounter order, each note at most once.
    pub fn search(&self, query: &str) -> Vec<(String, &Note)> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|(_, note)| {
                note.content.to_lowercase().contains(&query)
                    || note.tags.iter().any(|tag| tag.contains(&query))
            })
            .map(|(id, note)| (id.to_string(), note))
            .collect()
    }

    /// Exact (not substring) tag match, case-insensitive.
    pub fn by_tag(&self, tag: &str) -> Vec<(String, &Note)> {
        self.notes
            .iter()
            .filter(|(_, note)| note.has_tag(tag))
            .map(|(id, note)| (id.to_string(), note))
            .collect()
    }
}

fn parse_id(id: &str) -> Option<u64> {
    id.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_assigned_sequentially() {
        let mut book = NoteBook::new();
        assert_eq!(book.add_note(Note::new("first")), "1");
        assert_eq!(book.add_note(Note::new("second")), "2");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut book = NoteBook::new();
        let first = book.add_note(Note::new("first"));
        let second = book.add_note(Note::new("second"));
        book.delete(&second).unwrap();

        // a size-derived counter would hand out "2" again here
        let third = book.add_note(Note::new("third"));
        assert_eq!(third, "3");
        assert_ne!(third, first);
        assert!(book.find("2").is_none());
        assert_eq!(book.find("3").unwrap().content, "third");
    }

    #[test]
    fn test_find_unparsable_id_is_none() {
        let book = NoteBook::new();
        assert!(book.find("nope").is_none());
        assert!(book.find("-1").is_none());
    }

    #[test]
    fn test_delete_missing_note() {
        let mut book = NoteBook::new();
        let err = book.delete("7").unwrap_err();
        assert_eq!(err.to_string(), "Note 7 not found.");
    }

    #[test]
    fn test_search_content_and_tags() {
        let mut book = NoteBook::new();
        book.add_note(Note::new("Buy milk").with_tags(["groceries", "home"]));
        book.add_note(Note::new("Call plumber").with_tags(["home"]));

        let hits = book.search("MILK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "1");

        // tag substring matches too
        let hits = book.search("grocer");
        assert_eq!(hits.len(), 1);

        // both notes carry the "home" tag
        assert_eq!(book.search("home").len(), 2);
    }

    #[test]
    fn test_search_preserves_encounter_order() {
        let mut book = NoteBook::new();
        for n in 0..12 {
            book.add_note(Note::new(format!("note {}", n)));
        }
        let ids: Vec<String> = book.search("note").into_iter().map(|(id, _)| id).collect();
        // numeric order, not lexicographic ("10" after "9")
        assert_eq!(ids[8..12], ["9", "10", "11", "12"]);
    }

    #[test]
    fn test_by_tag_exact_match_only() {
        let mut book = NoteBook::new();
        book.add_note(Note::new("Buy milk").with_tags(["groceries"]));
        book.add_note(Note::new("Weekly plan").with_tags(["grocery-run"]));

        let hits = book.by_tag("groceries");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.content, "Buy milk");

        // case-insensitive but never substring
        assert_eq!(book.by_tag("Groceries").len(), 1);
        assert!(book.by_tag("grocer").is_empty());
    }
}
