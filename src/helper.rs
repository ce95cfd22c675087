use crate::domain::{collection::ContactCollection, contact::Contact};
use crate::errors::{AppError, Result};
use serde_json::Value;

/// Encodes the whole collection as one JSON array.
pub fn serialize_contacts(contacts: &ContactCollection) -> Result<Vec<u8>> {
    serde_json::to_vec(contacts).map_err(|err| AppError::StorageWrite(err.into()))
}

/// Decodes the slot payload. Blank payloads are an empty collection.
pub fn deserialize_contacts(bytes: &[u8]) -> Result<ContactCollection> {
    // serde_json will give an error if data is empty
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactCollection::new());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| AppError::StorageCorrupt(format!("not valid JSON: {err}")))?;

    if !value.is_array() {
        return Err(AppError::StorageCorrupt(
            "Invalid JSON structure: expected array of contacts".to_string(),
        ));
    }

    let contacts: Vec<Contact> = serde_json::from_value(value)
        .map_err(|err| AppError::StorageCorrupt(format!("malformed contact record: {err}")))?;

    ContactCollection::from_contacts(contacts)
}
