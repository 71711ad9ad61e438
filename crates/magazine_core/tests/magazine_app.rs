use magazine_core::db::open_db_in_memory;
use magazine_core::{
    FormField, LoginForm, MagazineApp, MemoryKeyValueStore, RegisterForm, Section, SectionView,
    SqliteKeyValueStore, Theme,
};

fn register_form(email: &str) -> RegisterForm {
    RegisterForm {
        name: "светлана".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn signed_in_app(store: &MemoryKeyValueStore) -> MagazineApp<&MemoryKeyValueStore> {
    let mut app = MagazineApp::new(store).unwrap();
    app.handle_register(&register_form("sveta@example.com"))
        .unwrap()
        .unwrap();
    app
}

#[test]
fn registration_logs_in_and_shows_full_feed() {
    let store = MemoryKeyValueStore::new();
    let mut app = MagazineApp::new(&store).unwrap();

    let view = app
        .handle_register(&register_form("sveta@example.com"))
        .unwrap()
        .unwrap();

    assert_eq!(app.current_section(), Section::Home);
    match view {
        SectionView::Home {
            selected_preferences,
            articles,
        } => {
            assert!(selected_preferences.is_empty());
            assert_eq!(articles.len(), 8);
            assert_eq!(articles[0].formatted_date, "15 октября 2023 г.");
            assert_eq!(articles[0].category_name, "Технологии");
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn duplicate_registration_is_reported_on_email_field() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);
    app.logout().unwrap();

    let err = app
        .handle_register(&register_form("sveta@example.com"))
        .unwrap()
        .unwrap_err();

    assert_eq!(err.field, FormField::RegisterEmail);
    assert_eq!(err.message, "Пользователь с таким email уже существует");
    assert_eq!(app.current_section(), Section::Auth);
}

#[test]
fn failed_login_is_reported_on_password_field() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);
    app.logout().unwrap();

    let err = app
        .handle_login(&LoginForm {
            email: "sveta@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .unwrap()
        .unwrap_err();

    assert_eq!(err.field, FormField::LoginPassword);
    assert_eq!(err.message, "Неверный email или пароль");
}

#[test]
fn login_form_validation_runs_before_authentication() {
    let store = MemoryKeyValueStore::new();
    let mut app = MagazineApp::new(&store).unwrap();

    let err = app
        .handle_login(&LoginForm::default())
        .unwrap()
        .unwrap_err();

    assert_eq!(err.field, FormField::LoginEmail);
    assert_eq!(err.message, "Введите email");
}

#[test]
fn saved_preferences_filter_home_feed() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);

    let view = app.save_preferences(vec![1]).unwrap();

    match view {
        SectionView::Home {
            selected_preferences,
            articles,
        } => {
            assert_eq!(selected_preferences.len(), 1);
            assert_eq!(selected_preferences[0].name, "Технологии");
            let ids: Vec<_> = articles.iter().map(|card| card.article.id).collect();
            assert_eq!(ids, vec![1, 8]);
        }
        other => panic!("unexpected view: {other:?}"),
    }

    app.reset_preferences().unwrap();
    match app.show_section(Section::Home).unwrap() {
        SectionView::Home { articles, .. } => assert_eq!(articles.len(), 8),
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn saved_preferences_keep_one_entry_per_known_category() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);

    match app.save_preferences(vec![1, 1, 99]).unwrap() {
        SectionView::Home {
            selected_preferences,
            ..
        } => {
            let ids: Vec<_> = selected_preferences.iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![1]);
        }
        other => panic!("unexpected view: {other:?}"),
    }
    assert_eq!(app.database().get_user_preferences(), vec![1]);

    match app.show_section(Section::Profile).unwrap() {
        SectionView::Profile(profile) => {
            assert_eq!(profile.preferences_count, 1);
            assert_eq!(profile.selected_preferences.len(), 1);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn categories_page_marks_selected_preferences() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);
    app.save_preferences(vec![2, 5]).unwrap();

    match app.show_section(Section::Categories).unwrap() {
        SectionView::Categories { choices } => {
            let selected: Vec<_> = choices
                .iter()
                .filter(|choice| choice.selected)
                .map(|choice| choice.category.id)
                .collect();
            assert_eq!(choices.len(), 8);
            assert_eq!(selected, vec![2, 5]);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn favorites_and_profile_reflect_toggles_and_clear() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);
    app.save_preferences(vec![3]).unwrap();
    assert!(app.toggle_favorite(4).unwrap());
    assert!(app.toggle_favorite(2).unwrap());

    match app.show_section(Section::Favorites).unwrap() {
        SectionView::Favorites { articles } => {
            let ids: Vec<_> = articles.iter().map(|card| card.article.id).collect();
            assert_eq!(ids, vec![2, 4]);
            assert!(articles.iter().all(|card| card.is_favorite));
        }
        other => panic!("unexpected view: {other:?}"),
    }

    match app.show_section(Section::Profile).unwrap() {
        SectionView::Profile(profile) => {
            assert_eq!(profile.avatar_initial, Some('С'));
            assert_eq!(profile.email, "sveta@example.com");
            assert_eq!(profile.favorites_count, 2);
            assert_eq!(profile.preferences_count, 1);
            assert_eq!(profile.selected_preferences[0].id, 3);
        }
        other => panic!("unexpected view: {other:?}"),
    }

    app.clear_favorites().unwrap();
    match app.refresh().unwrap() {
        SectionView::Profile(profile) => assert_eq!(profile.favorites_count, 0),
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn open_article_reports_favorite_state_and_unknown_ids() {
    let store = MemoryKeyValueStore::new();
    let mut app = signed_in_app(&store);
    app.toggle_favorite(6).unwrap();

    let card = app.open_article(6).unwrap().unwrap();
    assert!(card.is_favorite);
    assert_eq!(card.category_name, "Экономика");
    assert_eq!(card.formatted_date, "3 октября 2023 г.");
    assert_eq!(app.open_article(404).unwrap(), None);
}

#[test]
fn session_and_theme_survive_app_restart() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut app = MagazineApp::new(SqliteKeyValueStore::new(&conn)).unwrap();
        app.handle_register(&register_form("sveta@example.com"))
            .unwrap()
            .unwrap();
        assert_eq!(app.toggle_theme().unwrap(), Theme::Dark);
    }

    let mut app = MagazineApp::new(SqliteKeyValueStore::new(&conn)).unwrap();
    assert_eq!(app.current_section(), Section::Home);
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.toggle_theme().unwrap(), Theme::Light);

    app.logout().unwrap();
    let app = MagazineApp::new(SqliteKeyValueStore::new(&conn)).unwrap();
    assert_eq!(app.current_section(), Section::Auth);
    assert_eq!(app.theme(), Theme::Light);
}

#[test]
fn toggle_theme_without_session_stays_light() {
    let store = MemoryKeyValueStore::new();
    let mut app = MagazineApp::new(&store).unwrap();

    assert_eq!(app.toggle_theme().unwrap(), Theme::Light);
}
