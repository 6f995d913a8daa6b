use serde::Deserialize;
use ureq::Agent;

use crate::{
    core::snapshot::Origin,
    location::{Coordinates, Location},
    prelude::*,
};

/// [ipapi](https://ipapi.co) IP geolocation.
pub struct Api {
    client: Agent,
}

impl Api {
    pub const fn new(client: Agent) -> Self {
        Self { client }
    }

    #[instrument(skip_all)]
    pub fn locate(&self) -> Result<Location> {
        info!("locating…");
        let response = self
            .client
            .get("https://ipapi.co/json/")
            .call()
            .context("failed to request the geolocation")?
            .body_mut()
            .read_json::<Response>()
            .context("failed to deserialize the geolocation")?;
        let location = response.try_into_location()?;
        info!(%location, "located");
        Ok(location)
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    error: bool,

    reason: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,

    #[serde(rename = "country_name")]
    country: Option<String>,
}

impl Response {
    fn try_into_location(self) -> Result<Location> {
        if self.error {
            bail!("geolocation failed: {}", self.reason.as_deref().unwrap_or("unknown reason"));
        }
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            bail!("geolocation returned no coordinates");
        };
        let name = match (self.city, self.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (city, country) => city.or(country),
        };
        Ok(Location {
            coordinates: Coordinates::try_new(latitude, longitude)?,
            name,
            origin: Origin::Live,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ok() -> Result {
        // language=json
        const RESPONSE: &str = r#"{
            "ip": "203.0.113.7",
            "city": "Jaipur",
            "region": "Rajasthan",
            "country_name": "India",
            "latitude": 26.9124,
            "longitude": 75.7873,
            "timezone": "Asia/Kolkata"
        }"#;
        let location = serde_json::from_str::<Response>(RESPONSE)?.try_into_location()?;
        assert_eq!(location.name.as_deref(), Some("Jaipur, India"));
        assert_eq!(location.origin, Origin::Live);
        assert!((location.coordinates.latitude - 26.9124).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_deserialize_error() -> Result {
        // language=json
        const RESPONSE: &str = r#"{"error": true, "reason": "RateLimited"}"#;
        let error = serde_json::from_str::<Response>(RESPONSE)?.try_into_location().unwrap_err();
        assert_eq!(error.to_string(), "geolocation failed: RateLimited");
        Ok(())
    }

    #[test]
    #[ignore = "makes the API request"]
    fn test_locate_ok() -> Result {
        Api::new(crate::api::new_client()).locate()?;
        Ok(())
    }
}
