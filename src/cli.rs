pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::contact::Contact;

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Number: {}\n\
        Email: {}\n\
        Photo: {}",
        contact.id,
        contact.name,
        contact.phone,
        contact.email.as_deref().unwrap_or("-"),
        contact.profile_image.as_deref().unwrap_or("-"),
    )
}

pub fn listing_row(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:15} {:<30} {}",
        contact.name,
        contact.phone,
        contact.email.as_deref().unwrap_or(""),
        contact.id
    )
}
