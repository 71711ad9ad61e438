//! Reader controller: section navigation and user actions.
//!
//! # Responsibility
//! - Track the active [`Section`] and build the data each section displays.
//! - Translate reader actions (login, favorites, preferences, theme) into
//!   `Database`/`UserManager` calls.
//!
//! # Invariants
//! - Protected sections are never rendered without a session; such requests
//!   resolve to the `Auth` section.
//! - Every action is synchronous and completes before the next view is built.

mod format;
mod forms;
mod section;

pub use format::format_date;
pub use forms::{FormError, FormField, LoginForm, RegisterForm, MIN_PASSWORD_LEN};
pub use section::{Section, UnknownSectionError};

use crate::model::catalog::{Article, ArticleId, Category, CategoryId};
use crate::model::user::Theme;
use crate::service::database::Database;
use crate::service::user_manager::UserManager;
use crate::store::{KeyValueStore, StoreResult};
use log::info;

/// Category label shown when an article points at an unknown category.
pub const UNCATEGORIZED_LABEL: &str = "Без категории";

/// Article prepared for display in a grid or the article modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub article: Article,
    pub category_name: String,
    pub is_favorite: bool,
    pub formatted_date: String,
}

/// Category card on the preferences screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChoice {
    pub category: Category,
    pub selected: bool,
}

/// Profile summary of the session user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub avatar_initial: Option<char>,
    pub preferences_count: usize,
    pub favorites_count: usize,
    pub selected_preferences: Vec<Category>,
}

/// Data shown by one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView {
    Home {
        selected_preferences: Vec<Category>,
        articles: Vec<ArticleCard>,
    },
    Categories {
        choices: Vec<CategoryChoice>,
    },
    Favorites {
        articles: Vec<ArticleCard>,
    },
    Profile(ProfileView),
    Auth,
}

impl SectionView {
    /// Section this view belongs to.
    pub fn section(&self) -> Section {
        match self {
            Self::Home { .. } => Section::Home,
            Self::Categories { .. } => Section::Categories,
            Self::Favorites { .. } => Section::Favorites,
            Self::Profile(_) => Section::Profile,
            Self::Auth => Section::Auth,
        }
    }
}

/// Reader application state over a key-value store.
pub struct MagazineApp<S: KeyValueStore> {
    db: Database<S>,
    current_section: Section,
}

impl<S: KeyValueStore> MagazineApp<S> {
    /// Loads users and session, seeds the catalog and picks the start section.
    ///
    /// Starts on `Home` when a session was persisted, otherwise on `Auth`.
    pub fn new(store: S) -> StoreResult<Self> {
        let db = Database::new(UserManager::load(store)?)?;
        let current_section = if db.user_manager().is_authenticated() {
            Section::Home
        } else {
            Section::Auth
        };
        info!(
            "event=app_init module=app status=ok section={}",
            current_section
        );
        Ok(Self {
            db,
            current_section,
        })
    }

    pub fn database(&self) -> &Database<S> {
        &self.db
    }

    pub fn database_mut(&mut self) -> &mut Database<S> {
        &mut self.db
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn theme(&self) -> Theme {
        self.db.get_theme()
    }

    /// Switches to `section` and builds its view.
    pub fn show_section(&mut self, section: Section) -> StoreResult<SectionView> {
        let target = if section.requires_session() && !self.db.user_manager().is_authenticated() {
            Section::Auth
        } else {
            section
        };
        self.current_section = target;

        let view = match target {
            Section::Home => self.load_home_page()?,
            Section::Categories => self.load_categories_page()?,
            Section::Favorites => self.load_favorites_page()?,
            Section::Profile => self.load_profile_page()?,
            Section::Auth => SectionView::Auth,
        };
        Ok(view)
    }

    /// Rebuilds the view of the current section.
    pub fn refresh(&mut self) -> StoreResult<SectionView> {
        self.show_section(self.current_section)
    }

    /// Validates the login form, authenticates and shows `Home`.
    ///
    /// Credential failures are reported on the password field.
    pub fn handle_login(
        &mut self,
        form: &LoginForm,
    ) -> StoreResult<Result<SectionView, FormError>> {
        if let Err(err) = form.validate() {
            return Ok(Err(err));
        }

        match self
            .db
            .user_manager_mut()
            .login(&form.email, &form.password)?
        {
            Ok(_) => Ok(Ok(self.show_section(Section::Home)?)),
            Err(failure) => Ok(Err(FormError::new(
                FormField::LoginPassword,
                failure.message(),
            ))),
        }
    }

    /// Validates the registration form, registers, logs in and shows `Home`.
    ///
    /// A taken email is reported on the email field.
    pub fn handle_register(
        &mut self,
        form: &RegisterForm,
    ) -> StoreResult<Result<SectionView, FormError>> {
        if let Err(err) = form.validate() {
            return Ok(Err(err));
        }

        let users = self.db.user_manager_mut();
        if let Err(failure) = users.register(&form.name, &form.email, &form.password)? {
            return Ok(Err(FormError::new(
                FormField::RegisterEmail,
                failure.message(),
            )));
        }
        if let Err(failure) = users.login(&form.email, &form.password)? {
            return Ok(Err(FormError::new(
                FormField::LoginPassword,
                failure.message(),
            )));
        }

        Ok(Ok(self.show_section(Section::Home)?))
    }

    /// Ends the session and returns to `Auth`.
    pub fn logout(&mut self) -> StoreResult<SectionView> {
        self.db.user_manager_mut().logout()?;
        self.show_section(Section::Auth)
    }

    /// Flips favorite state and returns whether the article is now a favorite.
    pub fn toggle_favorite(&mut self, article_id: ArticleId) -> StoreResult<bool> {
        self.db.toggle_favorite(article_id)
    }

    /// Replaces preferences with `selected` and shows the refreshed `Home` feed.
    ///
    /// Repeated ids and ids without a catalog category are dropped; the
    /// first occurrence order is kept.
    pub fn save_preferences(&mut self, selected: Vec<CategoryId>) -> StoreResult<SectionView> {
        let categories = self.db.get_categories()?;
        let preferences = known_unique_ids(&categories, selected);
        self.db.save_user_preferences(preferences)?;
        self.show_section(Section::Home)
    }

    /// Clears every preference so the feed shows the full catalog again.
    pub fn reset_preferences(&mut self) -> StoreResult<()> {
        self.db.save_user_preferences(Vec::new())
    }

    pub fn clear_favorites(&mut self) -> StoreResult<()> {
        self.db.user_manager_mut().clear_favorites()
    }

    /// Switches between light and dark and returns the applied theme.
    ///
    /// Without a session nothing is persisted and the theme stays light.
    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.db.get_theme().toggled();
        self.db.set_theme(next)?;
        Ok(self.db.get_theme())
    }

    /// Builds the article modal; `None` when the id is unknown.
    pub fn open_article(&self, article_id: ArticleId) -> StoreResult<Option<ArticleCard>> {
        let Some(article) = self.db.get_article(article_id)? else {
            return Ok(None);
        };
        let categories = self.db.get_categories()?;
        Ok(Some(self.article_card(article, &categories)))
    }

    fn load_home_page(&self) -> StoreResult<SectionView> {
        let preferences = self.db.get_user_preferences();
        let categories = self.db.get_categories()?;
        let articles = self.db.get_filtered_articles(&preferences)?;
        Ok(SectionView::Home {
            selected_preferences: selected_categories(&categories, &preferences),
            articles: self.article_cards(articles, &categories),
        })
    }

    fn load_categories_page(&self) -> StoreResult<SectionView> {
        let preferences = self.db.get_user_preferences();
        let choices = self
            .db
            .get_categories()?
            .into_iter()
            .map(|category| CategoryChoice {
                selected: preferences.contains(&category.id),
                category,
            })
            .collect();
        Ok(SectionView::Categories { choices })
    }

    fn load_favorites_page(&self) -> StoreResult<SectionView> {
        let categories = self.db.get_categories()?;
        let articles = self.db.get_favorite_articles()?;
        Ok(SectionView::Favorites {
            articles: self.article_cards(articles, &categories),
        })
    }

    fn load_profile_page(&self) -> StoreResult<SectionView> {
        let Some(user) = self.db.user_manager().current_user() else {
            return Ok(SectionView::Auth);
        };
        let categories = self.db.get_categories()?;
        Ok(SectionView::Profile(ProfileView {
            name: user.name.clone(),
            email: user.email.clone(),
            avatar_initial: user.avatar_initial(),
            preferences_count: user.preferences.len(),
            favorites_count: user.favorites.len(),
            selected_preferences: selected_categories(&categories, &user.preferences),
        }))
    }

    fn article_cards(&self, articles: Vec<Article>, categories: &[Category]) -> Vec<ArticleCard> {
        articles
            .into_iter()
            .map(|article| self.article_card(article, categories))
            .collect()
    }

    fn article_card(&self, article: Article, categories: &[Category]) -> ArticleCard {
        let category_name = categories
            .iter()
            .find(|category| category.id == article.category)
            .map_or_else(|| UNCATEGORIZED_LABEL.to_string(), |category| category.name.clone());
        ArticleCard {
            is_favorite: self.db.is_favorite(article.id),
            formatted_date: format_date(article.date),
            category_name,
            article,
        }
    }
}

/// Resolves preference ids to categories, keeping preference order and
/// skipping ids without a matching category.
fn selected_categories(categories: &[Category], preferences: &[CategoryId]) -> Vec<Category> {
    preferences
        .iter()
        .filter_map(|id| categories.iter().find(|category| category.id == *id))
        .cloned()
        .collect()
}

fn known_unique_ids(categories: &[Category], selected: Vec<CategoryId>) -> Vec<CategoryId> {
    let mut ids = Vec::with_capacity(selected.len());
    for id in selected {
        let known = categories.iter().any(|category| category.id == id);
        if known && !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
