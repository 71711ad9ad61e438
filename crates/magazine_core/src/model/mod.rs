//! Domain model for readers and the article catalog.
//!
//! # Responsibility
//! - Define the records persisted as JSON blobs in the key-value store.
//! - Keep the persisted field names stable across releases.

pub mod catalog;
pub mod user;
