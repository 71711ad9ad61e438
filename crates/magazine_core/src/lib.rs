//! Core data layer for the magazine reader.
//! Readers register, pick topic preferences, browse and favorite articles,
//! and switch between light and dark themes; all state lives in a key-value store.

pub mod app;
pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use app::{
    format_date, ArticleCard, CategoryChoice, FormError, FormField, LoginForm, MagazineApp,
    ProfileView, RegisterForm, Section, SectionView,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::catalog::{Article, ArticleId, Category, CategoryId};
pub use model::user::{Theme, User, UserId};
pub use service::database::Database;
pub use service::user_manager::{AuthFailure, AuthResult, UserManager};
pub use store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};
