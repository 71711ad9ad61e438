//! Reader accounts and session ownership.
//!
//! # Responsibility
//! - Register and authenticate readers against the persisted `users` list.
//! - Mirror the authenticated reader to the `currentUser` key.
//! - Apply preference/favorite/theme mutations and persist them.
//!
//! # Invariants
//! - Email uniqueness is checked at registration time only.
//! - The session is an independent copy of a list entry; every mutation goes
//!   through [`UserManager::save_user_data`] so the two never diverge on disk.
//! - Expected failures (duplicate email, bad credentials) are values, not errors.

use crate::model::catalog::{ArticleId, CategoryId};
use crate::model::user::{next_user_id, Theme, User};
use crate::store::{
    read_json, write_json, KeyValueStore, StoreResult, CURRENT_USER_KEY, USERS_KEY,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Expected authentication failure, carrying a reader-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// Registration attempted with an email that is already taken.
    EmailTaken,
    /// No user matches the email/password pair. Unknown email and wrong
    /// password are deliberately indistinguishable.
    InvalidCredentials,
}

impl AuthFailure {
    /// Reader-facing message in the interface language.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmailTaken => "Пользователь с таким email уже существует",
            Self::InvalidCredentials => "Неверный email или пароль",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::EmailTaken => "email_taken",
            Self::InvalidCredentials => "invalid_credentials",
        }
    }
}

impl Display for AuthFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for AuthFailure {}

/// Outcome of `register`/`login`: the affected user, or an expected failure.
pub type AuthResult = Result<User, AuthFailure>;

/// Owner of the registered user list and the current session.
pub struct UserManager<S: KeyValueStore> {
    store: S,
    users: Vec<User>,
    current_user: Option<User>,
}

impl<S: KeyValueStore> UserManager<S> {
    /// Loads users and the persisted session from `store`.
    ///
    /// Absent keys mean "no users" and "logged out".
    ///
    /// # Errors
    /// - Returns `StoreError::Serialization` when stored JSON is corrupt.
    pub fn load(store: S) -> StoreResult<Self> {
        let users: Vec<User> = read_json(&store, USERS_KEY)?.unwrap_or_default();
        let current_user: Option<User> = read_json(&store, CURRENT_USER_KEY)?;
        info!(
            "event=users_load module=users status=ok users={} session={}",
            users.len(),
            current_user.is_some()
        );
        Ok(Self {
            store,
            users,
            current_user,
        })
    }

    /// Backing store shared with the catalog.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every registered user, in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Mutable access to the session copy.
    ///
    /// Changes made here are not persisted until [`Self::save_user_data`].
    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        self.current_user.as_mut()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Registers a new reader.
    ///
    /// Does not log the reader in.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> StoreResult<AuthResult> {
        if self.users.iter().any(|user| user.email == email) {
            info!(
                "event=user_register module=users status=rejected reason={}",
                AuthFailure::EmailTaken.code()
            );
            return Ok(Err(AuthFailure::EmailTaken));
        }

        let user = User::new(next_user_id(&self.users), name, email, password);
        self.users.push(user.clone());
        self.save_users()?;

        info!(
            "event=user_register module=users status=ok user_id={} users={}",
            user.id,
            self.users.len()
        );
        Ok(Ok(user))
    }

    /// Authenticates by exact email + password match and persists the session.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<AuthResult> {
        let Some(user) = self
            .users
            .iter()
            .find(|user| user.has_credentials(email, password))
            .cloned()
        else {
            info!(
                "event=user_login module=users status=rejected reason={}",
                AuthFailure::InvalidCredentials.code()
            );
            return Ok(Err(AuthFailure::InvalidCredentials));
        };

        self.current_user = Some(user.clone());
        self.save_current_user()?;
        info!("event=user_login module=users status=ok user_id={}", user.id);
        Ok(Ok(user))
    }

    /// Clears the session and removes it from the store.
    pub fn logout(&mut self) -> StoreResult<()> {
        let user_id = self.current_user.take().map(|user| user.id);
        self.save_current_user()?;
        info!(
            "event=user_logout module=users status=ok user_id={}",
            user_id.as_deref().unwrap_or("none")
        );
        Ok(())
    }

    /// Preferred category ids of the session user; empty when logged out.
    pub fn preferences(&self) -> &[CategoryId] {
        self.current_user
            .as_ref()
            .map(|user| user.preferences.as_slice())
            .unwrap_or_default()
    }

    /// Favorite article ids of the session user; empty when logged out.
    pub fn favorites(&self) -> &[ArticleId] {
        self.current_user
            .as_ref()
            .map(|user| user.favorites.as_slice())
            .unwrap_or_default()
    }

    /// Replaces the session user's preferences. No-op when logged out.
    pub fn update_user_preferences(&mut self, preferences: Vec<CategoryId>) -> StoreResult<()> {
        let Some(user) = self.current_user.as_mut() else {
            return Ok(());
        };
        user.preferences = preferences;
        self.save_user_data()
    }

    /// Flips favorite membership and returns whether the article is now a favorite.
    ///
    /// Returns `false` without writing anything when logged out.
    pub fn toggle_favorite(&mut self, article_id: ArticleId) -> StoreResult<bool> {
        let Some(user) = self.current_user.as_mut() else {
            return Ok(false);
        };
        let added = user.toggle_favorite(article_id);
        self.save_user_data()?;
        Ok(added)
    }

    pub fn is_favorite(&self, article_id: ArticleId) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|user| user.is_favorite(article_id))
    }

    /// Empties the session user's favorites. No-op when logged out.
    pub fn clear_favorites(&mut self) -> StoreResult<()> {
        let Some(user) = self.current_user.as_mut() else {
            return Ok(());
        };
        user.favorites.clear();
        self.save_user_data()
    }

    /// Sets the session user's theme. No-op when logged out.
    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        let Some(user) = self.current_user.as_mut() else {
            return Ok(());
        };
        user.theme = theme;
        self.save_user_data()
    }

    /// Session user's theme; [`Theme::Light`] when logged out.
    pub fn theme(&self) -> Theme {
        self.current_user
            .as_ref()
            .map_or(Theme::default(), |user| user.theme)
    }

    /// Writes the session copy over its list entry and persists both keys.
    ///
    /// When the session id is missing from the list nothing is written.
    pub fn save_user_data(&mut self) -> StoreResult<()> {
        let Some(current) = self.current_user.as_ref() else {
            return Ok(());
        };
        let Some(entry) = self.users.iter_mut().find(|user| user.id == current.id) else {
            warn!(
                "event=user_save module=users status=skipped reason=session_not_in_list user_id={}",
                current.id
            );
            return Ok(());
        };

        *entry = current.clone();
        self.save_users()?;
        self.save_current_user()
    }

    fn save_users(&self) -> StoreResult<()> {
        write_json(&self.store, USERS_KEY, &self.users)
    }

    fn save_current_user(&self) -> StoreResult<()> {
        match &self.current_user {
            Some(user) => write_json(&self.store, CURRENT_USER_KEY, user),
            None => self.store.remove_item(CURRENT_USER_KEY),
        }
    }
}
