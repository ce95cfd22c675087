use super::*;
use crate::domain::{collection::ContactCollection, contact::Contact};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, error, info, warn};

/// Whether the snapshot has been filled from the durable slot yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    Unhydrated,
    Hydrated,
}

/// A save or delete request that reaches the store after a view transition,
/// possibly after another view already applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Upsert(Contact),
    Delete(String),
}

struct Snapshot {
    contacts: ContactCollection,
    hydration: Hydration,
}

impl Snapshot {
    fn adopt(&mut self, contacts: ContactCollection) {
        self.contacts = contacts;
        self.hydration = Hydration::Hydrated;
    }
}

/// Authoritative owner of the contact collection.
///
/// Every operation runs under one async mutex for its whole
/// read-modify-persist-adopt sequence. A mutation only becomes visible in
/// the snapshot after the slot acknowledged the write, so a failed write
/// leaves both the slot and the snapshot at their previous value.
///
/// The persist and adopt steps run on a spawned task that owns the lock.
/// Once a write has been handed to the slot it is adopted (or rejected)
/// even if the caller stops awaiting.
///
/// Share one instance between views by wrapping it in an `Arc`.
pub struct ContactStore {
    storage: Arc<dyn DurableSlot>,
    snapshot: Arc<Mutex<Snapshot>>,
}

impl ContactStore {
    pub fn new(storage: impl DurableSlot + 'static) -> Self {
        Self::from_boxed(Box::new(storage))
    }

    pub fn from_boxed(storage: Box<dyn DurableSlot>) -> Self {
        Self {
            storage: Arc::from(storage),
            snapshot: Arc::new(Mutex::new(Snapshot {
                contacts: ContactCollection::new(),
                hydration: Hydration::Unhydrated,
            })),
        }
    }

    pub fn get_medium(&self) -> &str {
        self.storage.get_medium()
    }

    pub async fn hydration(&self) -> Hydration {
        self.snapshot.lock().await.hydration
    }

    pub async fn is_hydrated(&self) -> bool {
        self.hydration().await == Hydration::Hydrated
    }

    /// Re-reads the slot and replaces the snapshot with its contents.
    ///
    /// On a read or decode failure the snapshot keeps whatever it held
    /// before (the empty default on a first load).
    pub async fn load(&self) -> Result<ContactCollection> {
        let mut snapshot = self.snapshot.lock().await;

        let contacts = self.read_storage().await.inspect_err(|err| {
            error!(medium = self.get_medium(), %err, "failed to load contacts");
        })?;

        info!(count = contacts.len(), medium = self.get_medium(), "contacts loaded");
        snapshot.adopt(contacts.clone());
        Ok(contacts)
    }

    /// Current snapshot, hydrating first if nothing has been loaded yet.
    pub async fn contacts(&self) -> Result<ContactCollection> {
        let mut snapshot = self.snapshot.lock().await;
        self.ensure_hydrated(&mut snapshot).await?;
        Ok(snapshot.contacts.clone())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let mut snapshot = self.snapshot.lock().await;
        self.ensure_hydrated(&mut snapshot).await?;
        Ok(snapshot.contacts.get(id).cloned())
    }

    /// Saves `contact` under its id: a full replacement when the id is
    /// already stored, an append otherwise.
    ///
    /// The id must already be assigned; see [`Contact::new`].
    pub async fn upsert(&self, contact: Contact) -> Result<ContactCollection> {
        let mut snapshot = Arc::clone(&self.snapshot).lock_owned().await;
        self.ensure_hydrated(&mut snapshot).await?;

        let id = contact.id.clone();
        let replacing = snapshot.contacts.contains(&id);
        let candidate = snapshot.contacts.upserted(contact);

        let contacts = self.commit(snapshot, candidate).await.inspect_err(|err| {
            error!(%id, %err, "contact not saved, keeping previous state");
        })?;

        info!(%id, replacing, count = contacts.len(), "contact saved");
        Ok(contacts)
    }

    /// Replaces the stored contact with the same id, failing with
    /// [`AppError::NotFound`] when there is none. The existence check and
    /// the write happen under the same lock, so a contact deleted in the
    /// meantime is never brought back.
    pub async fn update(&self, contact: Contact) -> Result<ContactCollection> {
        let mut snapshot = Arc::clone(&self.snapshot).lock_owned().await;
        self.ensure_hydrated(&mut snapshot).await?;

        let id = contact.id.clone();
        if !snapshot.contacts.contains(&id) {
            debug!(%id, "update of unknown contact rejected");
            return Err(AppError::NotFound("Contact".to_string()));
        }
        let candidate = snapshot.contacts.upserted(contact);

        let contacts = self.commit(snapshot, candidate).await.inspect_err(|err| {
            error!(%id, %err, "contact not updated, keeping previous state");
        })?;

        info!(%id, count = contacts.len(), "contact updated");
        Ok(contacts)
    }

    /// Removes the contact with `id`. Deleting an id that is not stored
    /// succeeds without touching the slot.
    pub async fn delete(&self, id: &str) -> Result<ContactCollection> {
        let mut snapshot = Arc::clone(&self.snapshot).lock_owned().await;
        self.ensure_hydrated(&mut snapshot).await?;

        let Some(candidate) = snapshot.contacts.without(id) else {
            debug!(%id, "delete of unknown contact ignored");
            return Ok(snapshot.contacts.clone());
        };

        let contacts = self.commit(snapshot, candidate).await.inspect_err(|err| {
            error!(%id, %err, "contact not deleted, keeping previous state");
        })?;

        info!(%id, count = contacts.len(), "contact deleted");
        Ok(contacts)
    }

    pub async fn apply(&self, event: StoreEvent) -> Result<ContactCollection> {
        match event {
            StoreEvent::Upsert(contact) => self.upsert(contact).await,
            StoreEvent::Delete(id) => self.delete(&id).await,
        }
    }

    async fn ensure_hydrated(&self, snapshot: &mut Snapshot) -> Result<()> {
        if snapshot.hydration == Hydration::Hydrated {
            return Ok(());
        }

        let contacts = self.read_storage().await.inspect_err(|err| {
            warn!(medium = self.get_medium(), %err, "could not hydrate contact store");
        })?;

        debug!(count = contacts.len(), "store hydrated");
        snapshot.adopt(contacts);
        Ok(())
    }

    async fn read_storage(&self) -> Result<ContactCollection> {
        match self.storage.read().await? {
            Some(bytes) => helper::deserialize_contacts(&bytes),
            None => Ok(ContactCollection::new()),
        }
    }

    /// Writes `candidate` and adopts it on success, holding `snapshot` until
    /// both are done.
    async fn commit(
        &self,
        mut snapshot: OwnedMutexGuard<Snapshot>,
        candidate: ContactCollection,
    ) -> Result<ContactCollection> {
        let storage = Arc::clone(&self.storage);

        let task = tokio::spawn(async move {
            persist(storage.as_ref(), &candidate).await?;
            snapshot.adopt(candidate.clone());
            Ok::<_, AppError>(candidate)
        });

        task.await
            .map_err(|err| AppError::StorageWrite(std::io::Error::other(err)))?
    }
}

async fn persist(storage: &dyn DurableSlot, contacts: &ContactCollection) -> Result<()> {
    let bytes = helper::serialize_contacts(contacts)?;
    storage.write(&bytes).await
}
