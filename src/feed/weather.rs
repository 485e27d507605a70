// Synthetic weather
// Drawn from the same hour-seeded stream as the news sample.

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    #[serde(rename = "Солнечно")]
    Sunny,
    #[serde(rename = "Облачно")]
    Cloudy,
    #[serde(rename = "Переменная облачность")]
    PartlyCloudy,
}

impl Condition {
    pub const ALL: [Self; 3] = [Self::Sunny, Self::Cloudy, Self::PartlyCloudy];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayForecast {
    pub day: &'static str,
    pub temp: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherData {
    pub temp: i32,
    pub condition: Condition,
    pub forecast: Vec<DayForecast>,
}

const CURRENT_TEMP: (i32, i32) = (18, 25);

// (label, min, max), inclusive
const FORECAST_DAYS: [(&str, i32, i32); 3] = [("Завтра", 18, 24), ("Ср", 19, 25), ("Чт", 18, 23)];

/// Draw order: current temp, condition, then each forecast day.
pub fn generate_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherData {
    let temp = rng.gen_range(CURRENT_TEMP.0..=CURRENT_TEMP.1);
    let condition = Condition::ALL[rng.gen_range(0..Condition::ALL.len())];
    let forecast = FORECAST_DAYS
        .iter()
        .map(|&(day, min, max)| DayForecast {
            day,
            temp: rng.gen_range(min..=max),
        })
        .collect();

    WeatherData {
        temp,
        condition,
        forecast,
    }
}
