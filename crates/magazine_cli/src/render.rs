//! Plain-text rendering of section views.

use magazine_core::{
    ArticleCard, ArticleId, KeyValueStore, MagazineApp, Section, SectionView, Theme,
};

pub fn section<S: KeyValueStore>(app: &MagazineApp<S>, view: &SectionView) {
    match view {
        SectionView::Home {
            selected_preferences,
            articles,
        } => {
            if selected_preferences.is_empty() {
                println!("Вы еще не выбрали предпочтения. Выполните `magazine prefs set <ids>`, чтобы настроить ленту.");
            } else {
                let names: Vec<_> = selected_preferences
                    .iter()
                    .map(|category| category.name.as_str())
                    .collect();
                println!("Предпочтения: {}", names.join(", "));
            }
            println!();
            article_grid(articles);
        }
        SectionView::Categories { choices } => {
            for choice in choices {
                let mark = if choice.selected { "[x]" } else { "[ ]" };
                println!(
                    "{mark} {:>2} {} {} - {}",
                    choice.category.id,
                    choice.category.icon,
                    choice.category.name,
                    choice.category.description
                );
            }
        }
        SectionView::Favorites { articles } => article_grid(articles),
        SectionView::Profile(profile) => {
            let avatar = profile.avatar_initial.unwrap_or('?');
            println!("({avatar}) {} <{}>", profile.name, profile.email);
            println!("Предпочтения: {}", profile.preferences_count);
            println!("Избранное: {}", profile.favorites_count);
            for category in &profile.selected_preferences {
                println!("  {} {}", category.icon, category.name);
            }
        }
        SectionView::Auth => {
            println!("Войдите (`magazine login`) или зарегистрируйтесь (`magazine register`).");
        }
    }
    if view.section() != Section::Auth {
        println!();
        println!("Тема: {}", app.theme().as_str());
    }
}

fn article_grid(articles: &[ArticleCard]) {
    if articles.is_empty() {
        println!("Статьи не найдены. Попробуйте изменить ваши предпочтения.");
        return;
    }
    for card in articles {
        let heart = if card.is_favorite { "❤️" } else { "🤍" };
        println!(
            "{} #{} {} {}",
            card.article.image, card.article.id, card.article.title, heart
        );
        println!("   {} · {}", card.category_name, card.formatted_date);
        println!("   {}", card.article.excerpt);
    }
}

pub fn article(card: &ArticleCard) {
    println!("{} {}", card.article.image, card.article.title);
    println!("{} · {}", card.category_name, card.formatted_date);
    println!();
    println!("{}", card.article.content);
    println!();
    if card.is_favorite {
        println!("В избранном (`magazine favorite {}` чтобы убрать)", card.article.id);
    } else {
        println!("`magazine favorite {}` чтобы добавить в избранное", card.article.id);
    }
}

pub fn favorite_toggled(id: ArticleId, added: bool) {
    if added {
        println!("Статья #{id} добавлена в избранное ❤️");
    } else {
        println!("Статья #{id} удалена из избранного 🤍");
    }
}

pub fn theme(theme: Theme) {
    let icon = match theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };
    println!("Тема: {} {icon}", theme.as_str());
}
