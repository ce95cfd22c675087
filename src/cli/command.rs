use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Personal contact book")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the contacts file used by json storage
    #[arg(long, env = "JSON_STORAGE_PATH")]
    pub storage_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// URI of the contact's profile photo
        #[arg(long)]
        photo: Option<String>,
    },
    /// List contacts
    List,
    /// Show every detail of one contact
    Show {
        /// Contact id
        #[arg(long)]
        id: String,
    },
    /// Replace an existing contact.
    /// Every field is rewritten: optional fields left out are cleared
    Edit {
        /// Id of the contact to replace
        #[arg(long)]
        id: String,

        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// URI of the contact's profile photo
        #[arg(long)]
        photo: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of contact to delete
        #[arg(long)]
        id: String,
    },
}
