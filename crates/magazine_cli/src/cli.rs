use std::path::PathBuf;

use clap::{Parser, Subcommand};
use magazine_core::{Section, Theme};

#[derive(Parser)]
#[command(name = "magazine", version, about = "Magazine reader over a local SQLite store")]
pub struct Cli {
    /// Database file holding users, session and catalog.
    #[arg(long, global = true, default_value = "magazine.sqlite3")]
    pub db: PathBuf,
    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long, global = true)]
    pub log_dir: Option<String>,
    /// Log level (trace|debug|info|warn|error). Defaults per build mode.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Password confirmation (defaults to --password).
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out.
    Logout,
    /// Open a section by name (home|categories|favorites|profile|auth).
    Show {
        #[arg(value_parser = Section::parse)]
        section: Section,
    },
    /// Show the feed filtered by your preferences.
    Home,
    /// List categories and mark the ones you follow.
    Categories,
    /// List favorite articles.
    Favorites,
    /// Show profile summary.
    Profile,
    /// Read one article.
    Article { id: u32 },
    /// Add or remove an article from favorites.
    Favorite { id: u32 },
    /// Remove every favorite.
    ClearFavorites,
    /// Manage topic preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Show, set or toggle the color theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Replace preferences with a comma-separated list of category ids.
    Set {
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<u32>,
    },
    /// Clear all preferences.
    Reset,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
    /// Apply `light` or `dark`.
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::parse(value).ok_or_else(|| format!("unknown theme `{value}`; expected light|dark"))
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, PrefsAction, ThemeAction};
    use clap::Parser;
    use magazine_core::{Section, Theme};

    #[test]
    fn prefs_set_parses_comma_separated_ids() {
        let cli = Cli::try_parse_from(["magazine", "prefs", "set", "1,3,8"]).unwrap();
        match cli.command {
            Commands::Prefs {
                action: PrefsAction::Set { ids },
            } => assert_eq!(ids, vec![1, 3, 8]),
            _ => panic!("expected prefs set"),
        }
    }

    #[test]
    fn global_db_flag_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["magazine", "home", "--db", "/tmp/reader.sqlite3"]).unwrap();
        assert_eq!(cli.db.to_str(), Some("/tmp/reader.sqlite3"));
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn show_parses_section_names() {
        let cli = Cli::try_parse_from(["magazine", "show", "favorites"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                section: Section::Favorites
            }
        ));
        assert!(Cli::try_parse_from(["magazine", "show", "settings"]).is_err());
    }

    #[test]
    fn theme_action_is_optional() {
        let cli = Cli::try_parse_from(["magazine", "theme"]).unwrap();
        assert!(matches!(cli.command, Commands::Theme { action: None }));

        let cli = Cli::try_parse_from(["magazine", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));
    }

    #[test]
    fn theme_set_accepts_light_or_dark_only() {
        let cli = Cli::try_parse_from(["magazine", "theme", "set", "Dark"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Set { theme: Theme::Dark })
            }
        ));
        assert!(Cli::try_parse_from(["magazine", "theme", "set", "sepia"]).is_err());
    }

    #[test]
    fn register_requires_email() {
        let parsed =
            Cli::try_parse_from(["magazine", "register", "--name", "A", "--password", "x"]);
        assert!(parsed.is_err());
    }
}
