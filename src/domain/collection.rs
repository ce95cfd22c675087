use super::*;
use crate::domain::contact::Contact;
use serde::Serialize;
use std::collections::HashSet;

/// Ordered list of contacts, unique by id.
///
/// Mutating helpers return a new candidate collection instead of changing
/// `self`, so the store can persist the candidate before adopting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactCollection {
    contacts: Vec<Contact>,
}

impl ContactCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a decoded list, refusing lists that repeat an id.
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(contacts.len());

        for contact in &contacts {
            if !seen.insert(contact.id.as_str()) {
                return Err(AppError::StorageCorrupt(format!(
                    "duplicate contact id '{}'",
                    contact.id
                )));
            }
        }

        Ok(Self { contacts })
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the contact sharing `contact.id` in place, or appends it.
    pub fn upserted(&self, contact: Contact) -> Self {
        let mut contacts = self.contacts.clone();

        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact,
            None => contacts.push(contact),
        }

        Self { contacts }
    }

    /// The collection without `id`, or `None` when `id` is not present.
    pub fn without(&self, id: &str) -> Option<Self> {
        let index = self.contacts.iter().position(|c| c.id == id)?;

        let mut contacts = self.contacts.clone();
        contacts.remove(index);
        Some(Self { contacts })
    }
}
