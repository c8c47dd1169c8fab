//! Address book: contacts keyed by normalized name.
//!
//! A sorted map keeps iteration (and therefore `all`/search output) in
//! name order.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Entity, Error, Result};
use crate::models::Contact;
use crate::validation::DATE_FORMAT;

/// Normalizes a name for use as a collection key: the first character is
/// upper-cased, the remainder is left untouched. This is deliberately
/// not title-case; "aNN" keys as "ANN".
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    contacts: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Inserts the contact at its normalized name key, replacing any
    /// existing entry wholesale. Merge-on-add lives in the handler layer.
    pub fn add_record(&mut self, contact: Contact) {
        self.contacts.insert(normalize_name(&contact.name), contact);
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(&normalize_name(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(&normalize_name(name))
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        let key = normalize_name(name);
        if self.contacts.remove(&key).is_none() {
            return Err(Error::NotFound(Entity::Contact, key));
        }
        Ok(())
    }

    /// Contacts in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Case-insensitive substring search across name, phones, email and
    /// address. A contact matching any field appears exactly once;
    /// results come back in name order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();
        self.contacts
            .values()
            .filter(|contact| {
                contact.name.to_lowercase().contains(&query)
                    || contact.phones.iter().any(|p| p.as_str().contains(&query))
                    || contact
                        .email
                        .as_ref()
                        .is_some_and(|e| e.as_str().to_lowercase().contains(&query))
                    || contact
                        .address
                        .as_ref()
                        .is_some_and(|a| a.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Renders the contacts whose next birthday falls within `days` days
    /// of today. See [`Self::upcoming_birthdays_from`].
    pub fn upcoming_birthdays(&self, days: u32) -> String {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// The windowing uses the real occurrence date; only the displayed
    /// congratulation date shifts off weekends to the following Monday.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u32) -> String {
        let mut upcoming: Vec<(NaiveDate, &str)> = Vec::new();

        for contact in self.contacts.values() {
            let Some(birthday) = &contact.birthday else {
                continue;
            };
            let occurrence = next_occurrence(birthday.date(), today);
            let days_left = (occurrence - today).num_days();
            if days_left >= 0 && days_left <= i64::from(days) {
                upcoming.push((shift_off_weekend(occurrence), &contact.name));
            }
        }

        if upcoming.is_empty() {
            return format!("No birthdays within the next {} days.", days);
        }

        upcoming.sort();

        let mut lines = vec![format!("Birthdays within the next {} days:", days)];
        for (date, name) in upcoming {
            lines.push(format!(
                "{}: {} ({})",
                name,
                date.format(DATE_FORMAT),
                weekday_name(date.weekday())
            ));
        }
        lines.join("\n")
    }
}

/// Next occurrence of the birthday's month/day on or after `today`.
/// Feb 29 resolves to Mar 1 in non-leap years.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let in_year = |year: i32| {
        birthday
            .with_year(year)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists"))
    };
    let this_year = in_year(today.year());
    if this_year < today {
        in_year(today.year() + 1)
    } else {
        this_year
    }
}

/// Saturday and Sunday congratulation dates move to the next Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
