//! Article catalog seeding.

mod seed;

pub use seed::{sample_articles, sample_categories};
