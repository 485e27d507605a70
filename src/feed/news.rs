//! News sampling
//!
//! Picks [`NEWS_COUNT`] distinct stories from the pool and dresses them as
//! response entries: position decides id, image, age and the featured flag.

use chrono::{NaiveDateTime, TimeDelta};
use rand::seq::index;
use rand::Rng;
use serde::Serialize;

use super::pool::{Category, NewsItem, IMAGES, NEWS_POOL};
use super::time::isoformat;

/// Number of stories returned per request
pub const NEWS_COUNT: usize = 6;

/// Story as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsEntry {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub time: String,
    pub excerpt: &'static str,
    pub featured: bool,
    pub timestamp: String,
}

/// Uniform sample without replacement, in draw order.
///
/// The n-th drawn story is presented as published n hours before `now`.
pub fn sample_news<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> Vec<NewsEntry> {
    index::sample(rng, NEWS_POOL.len(), NEWS_COUNT)
        .into_iter()
        .zip(1u32..)
        .map(|(pool_idx, hours_ago)| news_entry(&NEWS_POOL[pool_idx], hours_ago, now))
        .collect()
}

fn news_entry(item: &NewsItem, hours_ago: u32, now: NaiveDateTime) -> NewsEntry {
    let position = hours_ago as usize - 1;
    NewsEntry {
        id: hours_ago,
        title: item.title,
        category: item.category,
        image: IMAGES[position % IMAGES.len()],
        time: relative_time(hours_ago),
        excerpt: item.excerpt,
        featured: position == 0,
        timestamp: isoformat(&(now - TimeDelta::hours(i64::from(hours_ago)))),
    }
}

/// Russian "N hours ago" with the plural form picked by N.
pub fn relative_time(hours_ago: u32) -> String {
    match hours_ago {
        1 => "1 час назад".to_string(),
        2..=4 => format!("{hours_ago} часа назад"),
        _ => format!("{hours_ago} часов назад"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(14, 23, 0)
            .unwrap()
    }

    #[test]
    fn test_relative_time_tiers() {
        assert_eq!(relative_time(1), "1 час назад");
        assert_eq!(relative_time(2), "2 часа назад");
        assert_eq!(relative_time(3), "3 часа назад");
        assert_eq!(relative_time(4), "4 часа назад");
        assert_eq!(relative_time(5), "5 часов назад");
        assert_eq!(relative_time(6), "6 часов назад");
    }

    #[test]
    fn test_sample_is_distinct_and_sized() {
        let mut rng = StdRng::seed_from_u64(42);
        let news = sample_news(&mut rng, now());
        assert_eq!(news.len(), NEWS_COUNT);
        let titles: HashSet<_> = news.iter().map(|n| n.title).collect();
        assert_eq!(titles.len(), NEWS_COUNT);
    }

    #[test]
    fn test_positions_drive_entry_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let news = sample_news(&mut rng, now());

        let ids: Vec<u32> = news.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        assert!(news[0].featured);
        assert!(news[1..].iter().all(|n| !n.featured));

        assert_eq!(news[0].image, IMAGES[0]);
        assert_eq!(news[3].image, IMAGES[0]);
        assert_eq!(news[4].image, IMAGES[1]);
        assert_eq!(news[5].image, IMAGES[2]);

        assert_eq!(news[0].timestamp, "2024-06-01T13:23:00");
        assert_eq!(news[5].timestamp, "2024-06-01T08:23:00");
        assert_eq!(news[2].time, "3 часа назад");
        assert_eq!(news[5].time, "6 часов назад");
    }

    #[test]
    fn test_entries_come_from_pool() {
        let mut rng = StdRng::seed_from_u64(2_024_060_114);
        for entry in sample_news(&mut rng, now()) {
            let source = NEWS_POOL
                .iter()
                .find(|item| item.title == entry.title)
                .expect("entry must come from the pool");
            assert_eq!(source.category, entry.category);
            assert_eq!(source.excerpt, entry.excerpt);
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = sample_news(&mut StdRng::seed_from_u64(99), now());
        let b = sample_news(&mut StdRng::seed_from_u64(99), now());
        assert_eq!(a, b);
    }
}
