//! Catalog access and reader pass-through operations.
//!
//! # Responsibility
//! - Seed the article/category catalog once per store.
//! - Serve catalog reads, including preference-based article filtering.
//! - Delegate favorite/preference/theme mutations to [`UserManager`].
//!
//! # Invariants
//! - Seeding never overwrites an existing `articles` or `categories` value.
//! - Catalog reads always go through the store, so a fresh instance over the
//!   same store observes identical data.

use crate::catalog::{sample_articles, sample_categories};
use crate::model::catalog::{Article, ArticleId, Category, CategoryId};
use crate::model::user::Theme;
use crate::service::user_manager::UserManager;
use crate::store::{read_json, write_json, KeyValueStore, StoreResult, ARTICLES_KEY, CATEGORIES_KEY};
use log::info;

/// Catalog facade over the key-value store and the user manager.
pub struct Database<S: KeyValueStore> {
    user_manager: UserManager<S>,
}

impl<S: KeyValueStore> Database<S> {
    /// Wraps `user_manager` and seeds missing catalog keys in its store.
    pub fn new(user_manager: UserManager<S>) -> StoreResult<Self> {
        let database = Self { user_manager };
        database.initialize_data()?;
        Ok(database)
    }

    pub fn user_manager(&self) -> &UserManager<S> {
        &self.user_manager
    }

    pub fn user_manager_mut(&mut self) -> &mut UserManager<S> {
        &mut self.user_manager
    }

    fn store(&self) -> &S {
        self.user_manager.store()
    }

    fn initialize_data(&self) -> StoreResult<()> {
        if self.store().get_item(ARTICLES_KEY)?.is_none() {
            let articles = sample_articles();
            write_json(self.store(), ARTICLES_KEY, &articles)?;
            info!(
                "event=catalog_seed module=catalog status=ok key={} items={}",
                ARTICLES_KEY,
                articles.len()
            );
        }

        if self.store().get_item(CATEGORIES_KEY)?.is_none() {
            let categories = sample_categories();
            write_json(self.store(), CATEGORIES_KEY, &categories)?;
            info!(
                "event=catalog_seed module=catalog status=ok key={} items={}",
                CATEGORIES_KEY,
                categories.len()
            );
        }

        Ok(())
    }

    /// Every category in catalog order; empty if the key was removed.
    pub fn get_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(read_json(self.store(), CATEGORIES_KEY)?.unwrap_or_default())
    }

    /// Every article in catalog order; empty if the key was removed.
    pub fn get_articles(&self) -> StoreResult<Vec<Article>> {
        Ok(read_json(self.store(), ARTICLES_KEY)?.unwrap_or_default())
    }

    pub fn get_article(&self, article_id: ArticleId) -> StoreResult<Option<Article>> {
        Ok(self
            .get_articles()?
            .into_iter()
            .find(|article| article.id == article_id))
    }

    pub fn get_category(&self, category_id: CategoryId) -> StoreResult<Option<Category>> {
        Ok(self
            .get_categories()?
            .into_iter()
            .find(|category| category.id == category_id))
    }

    /// Articles whose category is in `category_ids`, in catalog order.
    ///
    /// An empty filter returns the full catalog.
    pub fn get_filtered_articles(&self, category_ids: &[CategoryId]) -> StoreResult<Vec<Article>> {
        Ok(self
            .get_articles()?
            .into_iter()
            .filter(|article| article.matches_categories(category_ids))
            .collect())
    }

    /// Session user's favorite articles, in catalog order.
    pub fn get_favorite_articles(&self) -> StoreResult<Vec<Article>> {
        let favorites = self.user_manager.favorites();
        Ok(self
            .get_articles()?
            .into_iter()
            .filter(|article| favorites.contains(&article.id))
            .collect())
    }

    pub fn get_user_preferences(&self) -> Vec<CategoryId> {
        self.user_manager.preferences().to_vec()
    }

    pub fn save_user_preferences(&mut self, preferences: Vec<CategoryId>) -> StoreResult<()> {
        self.user_manager.update_user_preferences(preferences)
    }

    pub fn toggle_favorite(&mut self, article_id: ArticleId) -> StoreResult<bool> {
        self.user_manager.toggle_favorite(article_id)
    }

    pub fn is_favorite(&self, article_id: ArticleId) -> bool {
        self.user_manager.is_favorite(article_id)
    }

    pub fn get_theme(&self) -> Theme {
        self.user_manager.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.user_manager.set_theme(theme)
    }
}
