pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    collection::ContactCollection,
    contact::{self, Contact, new_contact_id},
    manager::{ContactStore, Hydration, StoreEvent},
};
pub use crate::errors::{AppError, Result};
pub use crate::storage::{
    self, DurableSlot, StorageMediums, file::FileSlot, memory::MemorySlot,
};
