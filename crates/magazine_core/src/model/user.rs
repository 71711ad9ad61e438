//! Reader account model.
//!
//! # Invariants
//! - `email` is the login key; it is compared exactly, without case folding.
//! - `preferences` and `favorites` behave as sets; insertion order is kept for display only.
//! - `password` is stored and compared in plaintext. This is a known hazard of the
//!   persisted format, not a security boundary.

use crate::model::catalog::{ArticleId, CategoryId};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Time-based user identifier: epoch milliseconds rendered as a decimal string.
pub type UserId = String;

/// Reader color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable string id used in persisted records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parses `light|dark`, ignoring surrounding whitespace and case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Registered reader, persisted inside the `users` list and mirrored as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub preferences: Vec<CategoryId>,
    pub favorites: Vec<ArticleId>,
    pub theme: Theme,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub created_at: String,
}

impl User {
    /// Creates a user with empty preferences/favorites and the default theme.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            preferences: Vec::new(),
            favorites: Vec::new(),
            theme: Theme::default(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Returns whether credentials match exactly.
    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    pub fn is_favorite(&self, article_id: ArticleId) -> bool {
        self.favorites.contains(&article_id)
    }

    /// Flips favorite membership and returns whether the article is now a favorite.
    pub fn toggle_favorite(&mut self, article_id: ArticleId) -> bool {
        match self.favorites.iter().position(|id| *id == article_id) {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.push(article_id);
                true
            }
        }
    }

    /// Uppercased first character of the name, used as an avatar glyph.
    pub fn avatar_initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}

/// Generates a time-based id that does not collide with `existing`.
///
/// Ids follow wall-clock milliseconds; a collision inside the same
/// millisecond bumps the value past the largest taken id.
pub fn next_user_id<'a>(existing: impl IntoIterator<Item = &'a User>) -> UserId {
    let mut candidate = Utc::now().timestamp_millis();
    for user in existing {
        if let Ok(taken) = user.id.parse::<i64>() {
            if taken >= candidate {
                candidate = taken.saturating_add(1);
            }
        }
    }
    candidate.to_string()
}
