//! Navigable reader sections.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Named screen of the reader. Everything except `Auth` requires a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Categories,
    Favorites,
    Profile,
    Auth,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::Categories,
        Self::Favorites,
        Self::Profile,
        Self::Auth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Categories => "categories",
            Self::Favorites => "favorites",
            Self::Profile => "profile",
            Self::Auth => "auth",
        }
    }

    pub fn requires_session(self) -> bool {
        !matches!(self, Self::Auth)
    }

    /// Parses a lowercase section name.
    pub fn parse(value: &str) -> Result<Self, UnknownSectionError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == normalized)
            .ok_or_else(|| UnknownSectionError(normalized.to_string()))
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionError(pub String);

impl Display for UnknownSectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown section `{}`; expected home|categories|favorites|profile|auth",
            self.0
        )
    }
}

impl Error for UnknownSectionError {}
