//! Static sample catalog written to the store on first start.
//!
//! # Invariants
//! - Category and article ids are unique and stable.
//! - Every seeded article points at a seeded category; category 6 has no articles.

use crate::model::catalog::{Article, ArticleId, Category, CategoryId};
use chrono::NaiveDate;

const SAMPLE_CATEGORIES: &[(CategoryId, &str, &str, &str)] = &[
    (1, "Технологии", "💻", "Новости из мира технологий и IT"),
    (2, "Наука", "🔬", "Последние научные открытия и исследования"),
    (3, "Искусство", "🎨", "Творчество, культура и искусство"),
    (4, "Спорт", "⚽", "Спортивные события и новости"),
    (5, "Здоровье", "🏥", "Медицина, здоровый образ жизни"),
    (6, "Политика", "🏛️", "Политические события и аналитика"),
    (7, "Экономика", "📈", "Финансы, бизнес и экономика"),
    (8, "Путешествия", "✈️", "Туризм и интересные места"),
];

struct SampleArticle {
    id: ArticleId,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: CategoryId,
    date: NaiveDate,
    image: &'static str,
}

/// Evaluated in const context, so an invalid date fails the build.
const fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample article date"),
    }
}

const SAMPLE_ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        id: 1,
        title: "Искусственный интеллект в медицине: революция уже здесь",
        excerpt: "Как ИИ меняет диагностику и лечение заболеваний",
        content: "Искусственный интеллект становится неотъемлемой частью современной медицины. Алгоритмы машинного обучения уже сегодня помогают врачам ставить более точные диагнозы, предсказывать развитие заболеваний и подбирать персонализированные методы лечения. В этой статье мы рассмотрим самые перспективные применения ИИ в здравоохранении и то, как они меняют медицинскую практику.",
        category: 1,
        date: seed_date(2023, 10, 15),
        image: "🧠",
    },
    SampleArticle {
        id: 2,
        title: "Квантовые компьютеры: прорыв в вычислениях",
        excerpt: "Новые возможности квантовых технологий",
        content: "Квантовые компьютеры обещают революцию в области вычислений, решая задачи, которые недоступны даже самым мощным классическим суперкомпьютерам. В этой статье мы расскажем о принципах работы квантовых компьютеров, текущих достижениях и перспективах этой технологии.",
        category: 2,
        date: seed_date(2023, 10, 12),
        image: "⚛️",
    },
    SampleArticle {
        id: 3,
        title: "Цифровое искусство: NFT и будущее творчества",
        excerpt: "Как блокчейн меняет арт-индустрию",
        content: "NFT (невзаимозаменяемые токены) произвели революцию в мире цифрового искусства, предоставив художникам новые способы монетизации своих работ. В этой статье мы исследуем феномен NFT, его влияние на арт-рынок и перспективы развития цифрового искусства.",
        category: 3,
        date: seed_date(2023, 10, 10),
        image: "🖼️",
    },
    SampleArticle {
        id: 4,
        title: "Олимпийские игры 2024: что ждать от Парижа",
        excerpt: "Подготовка к главному спортивному событию",
        content: "Париж готовится к проведению летних Олимпийских игр 2024 года. В этой статье мы расскажем о нововведениях, которые ожидают зрителей, о подготовке города к мероприятию и о перспективах сборной России на этих играх.",
        category: 4,
        date: seed_date(2023, 10, 8),
        image: "🏅",
    },
    SampleArticle {
        id: 5,
        title: "Ментальное здоровье в цифровую эпоху",
        excerpt: "Как сохранить психологическое благополучие",
        content: "Современный ритм жизни, постоянное использование цифровых устройств и информационная перегрузка создают новые вызовы для нашего ментального здоровья. В этой статье мы рассмотрим стратегии поддержания психологического благополучия в цифровую эпоху.",
        category: 5,
        date: seed_date(2023, 10, 5),
        image: "🧘",
    },
    SampleArticle {
        id: 6,
        title: "Мировая экономика в условиях кризиса",
        excerpt: "Анализ текущей экономической ситуации",
        content: "Глобальная экономика сталкивается с множеством вызовов: инфляция, энергетический кризис, геополитическая напряженность. В этой статье мы проанализируем текущую экономическую ситуацию и возможные пути выхода из кризиса.",
        category: 7,
        date: seed_date(2023, 10, 3),
        image: "🌍",
    },
    SampleArticle {
        id: 7,
        title: "Устойчивый туризм: путешествия с заботой о планете",
        excerpt: "Как стать ответственным путешественником",
        content: "Устойчивый туризм становится все более популярным как среди путешественников, так и среди туроператоров. В этой статье мы расскажем, как можно минимизировать негативное воздействие на окружающую среду во время путешествий и как выбрать экологичные варианты отдыха.",
        category: 8,
        date: seed_date(2023, 10, 1),
        image: "🌱",
    },
    SampleArticle {
        id: 8,
        title: "Кибербезопасность в эпоху интернета вещей",
        excerpt: "Защита умных устройств от кибератак",
        content: "С ростом числа подключенных устройств в наших домах и офисах вопросы кибербезопасности становятся как никогда актуальными. В этой статье мы рассмотрим основные угрозы для интернета вещей и способы защиты ваших умных устройств.",
        category: 1,
        date: seed_date(2023, 9, 28),
        image: "🔒",
    },
];

/// Returns the seeded category catalog.
pub fn sample_categories() -> Vec<Category> {
    SAMPLE_CATEGORIES
        .iter()
        .map(|(id, name, icon, description)| Category {
            id: *id,
            name: (*name).to_string(),
            icon: (*icon).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

/// Returns the seeded article catalog, newest first.
pub fn sample_articles() -> Vec<Article> {
    SAMPLE_ARTICLES
        .iter()
        .map(|sample| Article {
            id: sample.id,
            title: sample.title.to_string(),
            excerpt: sample.excerpt.to_string(),
            content: sample.content.to_string(),
            category: sample.category,
            date: sample.date,
            image: sample.image.to_string(),
        })
        .collect()
}
