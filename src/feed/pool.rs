// Static content pools
// News candidates, card images and incidents. Compiled in, never configurable.

use serde::Serialize;

/// News category as shown on the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "События")]
    Events,
    #[serde(rename = "Новости")]
    News,
}

/// Candidate story in the news pool
#[derive(Debug, Clone, Copy)]
pub struct NewsItem {
    pub title: &'static str,
    pub category: Category,
    pub excerpt: &'static str,
    /// Editorial flag. Responses ignore it and feature only the lead story.
    #[allow(dead_code)]
    pub featured: bool,
}

/// Incident reported alongside the news
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Incident {
    pub id: u32,
    pub title: &'static str,
    pub time: &'static str,
}

pub const NEWS_POOL: [NewsItem; 10] = [
    NewsItem {
        title: "Хабаровск готовится к празднованию Дня города",
        category: Category::Events,
        excerpt: "В этом году День города пройдет с особым размахом. Запланированы концерты, фестивали и праздничный салют.",
        featured: true,
    },
    NewsItem {
        title: "Новый парк открылся в центре города",
        category: Category::News,
        excerpt: "Жители уже оценили современную зону отдыха с детскими площадками и велодорожками.",
        featured: false,
    },
    NewsItem {
        title: "Реконструкция набережной завершена досрочно",
        category: Category::News,
        excerpt: "Обновленная набережная Амура стала любимым местом прогулок горожан.",
        featured: false,
    },
    NewsItem {
        title: "Открытие нового моста через Амур запланировано",
        category: Category::Events,
        excerpt: "Строительство моста завершается, открытие намечено на следующий месяц.",
        featured: true,
    },
    NewsItem {
        title: "Городской транспорт переходит на новое расписание",
        category: Category::News,
        excerpt: "С понедельника автобусы будут ходить по обновленному графику с увеличенной частотой.",
        featured: false,
    },
    NewsItem {
        title: "Фестиваль уличной еды пройдет в выходные",
        category: Category::Events,
        excerpt: "На площади соберутся лучшие кулинары города с авторскими блюдами.",
        featured: false,
    },
    NewsItem {
        title: "Ремонт дорог в центре города завершен",
        category: Category::News,
        excerpt: "Основные магистрали приведены в порядок, движение восстановлено.",
        featured: false,
    },
    NewsItem {
        title: "Новая выставка в краеведческом музее",
        category: Category::Events,
        excerpt: "Экспозиция посвящена истории Дальнего Востока и привлекает множество посетителей.",
        featured: false,
    },
    NewsItem {
        title: "Открытие детского технопарка в школе №5",
        category: Category::News,
        excerpt: "Учащиеся смогут заниматься робототехникой и программированием на современном оборудовании.",
        featured: false,
    },
    NewsItem {
        title: "Спортивный марафон соберет тысячи участников",
        category: Category::Events,
        excerpt: "Забег пройдет по набережной Амура, зарегистрировано уже более 2000 спортсменов.",
        featured: false,
    },
];

/// Card images, assigned round-robin by position in the response
pub const IMAGES: [&str; 3] = [
    "/img/da67e97b-1254-401a-bae7-64a40dbfe1e2.jpg",
    "/img/6c937c6b-c878-4380-8a71-733b0ddc2680.jpg",
    "/img/f994bb22-48a1-42a6-8ca5-3eda862f7b57.jpg",
];

pub const INCIDENTS: [Incident; 3] = [
    Incident {
        id: 1,
        title: "ДТП на улице Ленина",
        time: "1 час назад",
    },
    Incident {
        id: 2,
        title: "Отключение электричества в районе",
        time: "3 часа назад",
    },
    Incident {
        id: 3,
        title: "Ремонт дороги на Амурском бульваре",
        time: "5 часов назад",
    },
];
