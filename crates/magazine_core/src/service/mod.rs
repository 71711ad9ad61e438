//! Core data-access services.
//!
//! # Responsibility
//! - Own reader accounts and the session (`UserManager`).
//! - Serve the seeded catalog and delegate reader mutations (`Database`).
//! - Keep presentation layers decoupled from storage keys and JSON shapes.

pub mod database;
pub mod user_manager;
