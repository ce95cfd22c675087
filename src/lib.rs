//! # pocket-rolodex
//!
//! A personal contact book. The core is [`ContactStore`](domain::manager::ContactStore),
//! which keeps the contact list in memory and persists the whole list to a
//! single durable slot before any change becomes visible.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod logging;
pub mod prelude;
pub mod storage;
