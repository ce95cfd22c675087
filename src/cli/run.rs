use crate::{
    cli::{
        command::{Cli, Commands},
        display_contact, listing_row,
    },
    config::Config,
    domain::{
        contact::Contact,
        manager::{ContactStore, StoreEvent},
    },
    errors::{AppError, Result},
};
use clap::Parser;

pub async fn run_app() -> Result<()> {
    // Loads .env before clap reads its `env` fallbacks.
    let config = Config::from_env()?;
    let cli = Cli::parse();

    let config = config.with_overrides(Some(&cli.storage_choice), cli.storage_path)?;
    let store = config.open_store();

    run_command(&store, cli.command).await
}

pub async fn run_command(store: &ContactStore, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            name,
            phone,
            email,
            photo,
        } => {
            let new_contact = Contact::new(name, phone)
                .with_email(email)
                .with_profile_image(photo);
            let id = new_contact.id.clone();

            store.upsert(new_contact).await?;

            println!("Contact added successfully");
            println!("Id: {id}");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            let contacts = store.load().await?;

            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", listing_row(i + 1, c));
            }
            Ok(())
        }

        Commands::Show { id } => {
            let contact = store
                .get(&id)
                .await?
                .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

            println!("{}", display_contact(&contact));
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            name,
            phone,
            email,
            photo,
        } => {
            let replacement = Contact::with_id(id, name, phone)
                .with_email(email)
                .with_profile_image(photo);
            store.update(replacement).await?;

            println!("Contact updated successfully");
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id } => {
            store.apply(StoreEvent::Delete(id)).await?;

            println!("Contact deleted successfully");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemorySlot;

    #[tokio::test]
    async fn edit_of_unknown_id_is_not_found() -> Result<()> {
        let store = ContactStore::new(MemorySlot::new());

        let result = run_command(
            &store,
            Commands::Edit {
                id: "missing".to_string(),
                name: "Nobody".to_string(),
                phone: String::new(),
                email: None,
                photo: None,
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.contacts().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn edit_clears_flags_left_out() -> Result<()> {
        let store = ContactStore::new(MemorySlot::new());
        let original = Contact::with_id("1", "Alice", "08031234567")
            .with_email(Some("alice@example.com".to_string()))
            .with_profile_image(Some("content://media/1".to_string()));
        store.upsert(original).await?;

        run_command(
            &store,
            Commands::Edit {
                id: "1".to_string(),
                name: "Alice B".to_string(),
                phone: "08031234567".to_string(),
                email: None,
                photo: None,
            },
        )
        .await?;

        assert_eq!(
            store.get("1").await?,
            Some(Contact::with_id("1", "Alice B", "08031234567"))
        );
        Ok(())
    }
}
