use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use ureq::Agent;

use crate::{location::Coordinates, prelude::*, quantity::proportions::Percentage};

/// [Open-Meteo](https://open-meteo.com) current weather.
pub struct Api {
    client: Agent,
}

impl Api {
    pub const fn new(client: Agent) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(coordinates = %coordinates))]
    pub fn get_weather(&self, coordinates: Coordinates) -> Result<Weather> {
        info!("fetching…");
        let weather: Weather = self
            .client
            .get("https://api.open-meteo.com/v1/forecast")
            .query("latitude", coordinates.latitude.to_string())
            .query("longitude", coordinates.longitude.to_string())
            .query("current", "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code")
            .query("wind_speed_unit", "ms")
            .query("timeformat", "unixtime")
            .call()
            .context("failed to request the current weather")?
            .body_mut()
            .read_json::<Response>()
            .context("failed to deserialize the current weather")?
            .current
            .into();
        info!(weather.temperature, weather.description, "fetched");
        Ok(weather)
    }
}

#[derive(Deserialize)]
struct Response {
    current: Current,
}

#[serde_as]
#[derive(Deserialize)]
struct Current {
    #[serde_as(as = "serde_with::TimestampSeconds<i64>")]
    time: DateTime<Local>,

    #[serde(rename = "temperature_2m")]
    temperature: f64,

    #[serde(rename = "relative_humidity_2m")]
    relative_humidity: f64,

    #[serde(rename = "wind_speed_10m")]
    wind_speed: f64,

    weather_code: u8,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Weather {
    pub observed_at: DateTime<Local>,

    /// Degrees Celsius.
    pub temperature: f64,

    pub relative_humidity: Percentage,

    /// Meters per second.
    pub wind_speed: f64,

    pub description: &'static str,
}

impl From<Current> for Weather {
    fn from(current: Current) -> Self {
        Self {
            observed_at: current.time,
            temperature: current.temperature,
            relative_humidity: Percentage(current.relative_humidity),
            wind_speed: current.wind_speed,
            description: describe(current.weather_code),
        }
    }
}

/// Describe a [WMO weather code](https://open-meteo.com/en/docs#weather_variable_documentation).
const fn describe(code: u8) -> &'static str {
    match code {
        0 => "clear sky",
        1 => "mainly clear",
        2 => "partly cloudy",
        3 => "overcast",
        45 | 48 => "fog",
        51 | 53 | 55 | 56 | 57 => "drizzle",
        61 | 63 | 65 | 66 | 67 => "rain",
        71 | 73 | 75 | 77 => "snow",
        80..=82 => "rain showers",
        85 | 86 => "snow showers",
        95..=99 => "thunderstorm",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_deserialize_ok() -> Result {
        // language=json
        const RESPONSE: &str = r#"{
            "latitude": 28.625,
            "longitude": 77.25,
            "generationtime_ms": 0.04,
            "utc_offset_seconds": 0,
            "current_units": {"time": "unixtime", "interval": "seconds"},
            "current": {
                "time": 1748779200,
                "interval": 900,
                "temperature_2m": 38.4,
                "relative_humidity_2m": 21,
                "wind_speed_10m": 4.2,
                "weather_code": 2
            }
        }"#;
        let weather = Weather::from(serde_json::from_str::<Response>(RESPONSE)?.current);
        assert_eq!(weather.observed_at, Local.timestamp_opt(1_748_779_200, 0).unwrap());
        assert_eq!(weather.relative_humidity, Percentage(21.0));
        assert_eq!(weather.description, "partly cloudy");
        assert!((weather.wind_speed - 4.2).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(0), "clear sky");
        assert_eq!(describe(81), "rain showers");
        assert_eq!(describe(200), "unknown");
    }

    #[test]
    #[ignore = "makes the API request"]
    fn test_get_weather_ok() -> Result {
        Api::new(crate::api::new_client()).get_weather(Coordinates::try_new(28.6139, 77.2090)?)?;
        Ok(())
    }
}
