//! Article and category catalog records.
//!
//! Both are seeded once and treated as immutable at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Small integer identifier of a topic category.
pub type CategoryId = u32;

/// Small integer identifier of an article.
pub type ArticleId = u32;

/// Topic a reader can opt into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Single glyph shown next to the name.
    pub icon: String,
    pub description: String,
}

/// Magazine article belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// Owning category id; not guaranteed to resolve to a known category.
    pub category: CategoryId,
    /// Publication date, persisted as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Single glyph used as the cover image.
    pub image: String,
}

impl Article {
    /// Returns whether this article passes a category filter.
    ///
    /// An empty filter matches every article.
    pub fn matches_categories(&self, category_ids: &[CategoryId]) -> bool {
        category_ids.is_empty() || category_ids.contains(&self.category)
    }
}
