use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single person's stored details.
///
/// `id`, `name` and `phone` must be present in every stored record, though
/// they may be empty strings. `email` and `profile_image` are optional and
/// stay absent through a save/load cycle; they are never turned into empty
/// strings. The profile image is an opaque URI handed over by whatever
/// captured the photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(
        rename = "profileImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

/// Fresh identifier for a contact that has never been saved.
pub fn new_contact_id() -> String {
    Uuid::new_v4().to_string()
}

impl Contact {
    /// Builds a brand new contact with a freshly generated id.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::with_id(new_contact_id(), name, phone)
    }

    /// Builds a contact under an id the caller already owns, e.g. when editing.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Contact {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            profile_image: None,
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_profile_image(mut self, uri: Option<String>) -> Self {
        self.profile_image = uri;
        self
    }
}
