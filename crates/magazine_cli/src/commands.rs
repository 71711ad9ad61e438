use anyhow::{bail, Context, Result};
use log::info;
use magazine_core::db::open_db;
use magazine_core::{
    FormError, KeyValueStore, LoginForm, MagazineApp, RegisterForm, Section, SectionView,
    SqliteKeyValueStore,
};

use crate::cli::{Cli, Commands, PrefsAction, ThemeAction};
use crate::render;

pub fn run(cli: Cli) -> Result<()> {
    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let mut app = MagazineApp::new(SqliteKeyValueStore::new(&conn))?;
    info!("event=cli_command module=cli status=start");

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                name,
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
            };
            let view = form_result(app.handle_register(&form)?)?;
            render::section(&app, &view);
        }
        Commands::Login { email, password } => {
            let view = form_result(app.handle_login(&LoginForm { email, password })?)?;
            render::section(&app, &view);
        }
        Commands::Logout => {
            let view = app.logout()?;
            render::section(&app, &view);
        }
        Commands::Show { section } => show(&mut app, section)?,
        Commands::Home => show(&mut app, Section::Home)?,
        Commands::Categories => show(&mut app, Section::Categories)?,
        Commands::Favorites => show(&mut app, Section::Favorites)?,
        Commands::Profile => show(&mut app, Section::Profile)?,
        Commands::Article { id } => {
            require_session(&app)?;
            match app.open_article(id)? {
                Some(card) => render::article(&card),
                None => bail!("article {id} not found"),
            }
        }
        Commands::Favorite { id } => {
            require_session(&app)?;
            if app.database().get_article(id)?.is_none() {
                bail!("article {id} not found");
            }
            let added = app.toggle_favorite(id)?;
            render::favorite_toggled(id, added);
        }
        Commands::ClearFavorites => {
            require_session(&app)?;
            app.clear_favorites()?;
            show(&mut app, Section::Favorites)?;
        }
        Commands::Prefs { action } => {
            require_session(&app)?;
            match action {
                PrefsAction::Set { ids } => {
                    let view = app.save_preferences(ids)?;
                    render::section(&app, &view);
                }
                PrefsAction::Reset => {
                    app.reset_preferences()?;
                    show(&mut app, Section::Profile)?;
                }
            }
        }
        Commands::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => render::theme(app.theme()),
            ThemeAction::Toggle => {
                require_session(&app)?;
                let theme = app.toggle_theme()?;
                render::theme(theme);
            }
            ThemeAction::Set { theme } => {
                require_session(&app)?;
                app.database_mut().set_theme(theme)?;
                render::theme(app.theme());
            }
        },
    }

    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn show<S: KeyValueStore>(app: &mut MagazineApp<S>, section: Section) -> Result<()> {
    let view = app.show_section(section)?;
    render::section(app, &view);
    Ok(())
}

fn require_session<S: KeyValueStore>(app: &MagazineApp<S>) -> Result<()> {
    if !app.database().user_manager().is_authenticated() {
        render::section(app, &SectionView::Auth);
        bail!("not signed in");
    }
    Ok(())
}

fn form_result(result: Result<SectionView, FormError>) -> Result<SectionView> {
    result.map_err(anyhow::Error::from)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::cli::Cli;
    use clap::Parser;
    use magazine_core::db::open_db;
    use magazine_core::{FormError, FormField, MagazineApp, Section, SqliteKeyValueStore, Theme};
    use std::path::Path;

    fn invoke(db: &Path, args: &[&str]) -> anyhow::Result<()> {
        let db = db.to_str().unwrap();
        let argv = ["magazine", "--db", db].into_iter().chain(args.iter().copied());
        run(Cli::try_parse_from(argv).unwrap())
    }

    fn register(db: &Path, email: &str) -> anyhow::Result<()> {
        invoke(
            db,
            &["register", "--name", "Анна", "--email", email, "--password", "secret1"],
        )
    }

    fn form_field(err: &anyhow::Error) -> FormField {
        err.downcast_ref::<FormError>().unwrap().field
    }

    #[test]
    fn session_persists_between_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("reader.sqlite3");

        register(&db, "anna@example.com").unwrap();
        invoke(&db, &["favorite", "3"]).unwrap();
        invoke(&db, &["prefs", "set", "2,2,99"]).unwrap();
        invoke(&db, &["theme", "set", "dark"]).unwrap();

        {
            let conn = open_db(&db).unwrap();
            let app = MagazineApp::new(SqliteKeyValueStore::new(&conn)).unwrap();
            assert_eq!(app.current_section(), Section::Home);
            assert!(app.database().is_favorite(3));
            assert_eq!(app.database().get_user_preferences(), vec![2]);
            assert_eq!(app.theme(), Theme::Dark);
        }

        invoke(&db, &["logout"]).unwrap();
        let err = invoke(&db, &["favorite", "3"]).unwrap_err();
        assert!(err.to_string().contains("not signed in"));
    }

    #[test]
    fn form_errors_fail_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("reader.sqlite3");
        register(&db, "anna@example.com").unwrap();

        let duplicate = register(&db, "anna@example.com").unwrap_err();
        assert_eq!(form_field(&duplicate), FormField::RegisterEmail);

        let bad_login = invoke(
            &db,
            &["login", "--email", "anna@example.com", "--password", "wrong12"],
        )
        .unwrap_err();
        assert_eq!(form_field(&bad_login), FormField::LoginPassword);

        let empty_password = invoke(
            &db,
            &["login", "--email", "anna@example.com", "--password", ""],
        )
        .unwrap_err();
        assert_eq!(form_field(&empty_password), FormField::LoginPassword);
    }
}
