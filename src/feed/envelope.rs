//! Response envelope assembly

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use super::news::{sample_news, NewsEntry};
use super::pool::{Incident, INCIDENTS};
use super::seed::{hour_seed, hourly_rng};
use super::time::isoformat;
use super::weather::{generate_weather, WeatherData};
use crate::logger;

/// Top-level payload returned to the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub news: Vec<NewsEntry>,
    pub weather: WeatherData,
    pub incidents: &'static [Incident],
    pub last_update: String,
    pub next_update: String,
}

/// Build the payload for `now`.
///
/// Sampling and weather depend only on the hour of `now`; timestamps keep
/// full precision.
pub fn build_envelope(now: NaiveDateTime) -> ResponseEnvelope {
    logger::log_debug(&format!("Hour-seed {} for {}", hour_seed(&now), isoformat(&now)));

    let mut rng = hourly_rng(&now);
    let news = sample_news(&mut rng, now);
    let weather = generate_weather(&mut rng);

    ResponseEnvelope {
        news,
        weather,
        incidents: &INCIDENTS,
        last_update: isoformat(&now),
        next_update: isoformat(&(now + TimeDelta::hours(1))),
    }
}
