pub mod collection;
pub mod contact;
pub mod manager;

use crate::errors::{AppError, Result};
use crate::helper;
use crate::storage::DurableSlot;
