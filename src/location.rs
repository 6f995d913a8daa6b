use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{core::snapshot::Origin, prelude::*};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        ensure!(
            latitude.is_finite() && (-90.0..=90.0).contains(&latitude),
            "latitude must be within -90 and 90, got {latitude}",
        );
        ensure!(
            longitude.is_finite() && (-180.0..=180.0).contains(&longitude),
            "longitude must be within -180 and 180, got {longitude}",
        );
        Ok(Self { latitude, longitude })
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parse `latitude,longitude`, for example `28.6139,77.2090`.
    fn from_str(coordinates: &str) -> Result<Self> {
        let (latitude, longitude) = coordinates
            .split_once(',')
            .with_context(|| format!("expected `latitude,longitude`, got `{coordinates}`"))?;
        let latitude = latitude.trim().parse().context("latitude is not a number")?;
        let longitude = longitude.trim().parse().context("longitude is not a number")?;
        Self::try_new(latitude, longitude)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinates: Coordinates,
    pub name: Option<String>,
    pub origin: Origin,
}

impl Location {
    pub const fn manual(coordinates: Coordinates) -> Self {
        Self { coordinates, name: None, origin: Origin::Manual }
    }

    /// Demo location used when geolocation fails.
    pub fn fallback() -> Self {
        Self {
            coordinates: Coordinates { latitude: 28.6139, longitude: 77.2090 },
            name: Some("New Delhi, India".to_owned()),
            origin: Origin::Fallback,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.coordinates),
            None => write!(f, "{}", self.coordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_ok() -> Result {
        let coordinates: Coordinates = " 28.6139 , 77.2090 ".parse()?;
        assert_abs_diff_eq!(coordinates.latitude, 28.6139);
        assert_abs_diff_eq!(coordinates.longitude, 77.2090);
        Ok(())
    }

    #[test]
    fn test_parse_err() {
        assert!("28.6139".parse::<Coordinates>().is_err());
        assert!("north,east".parse::<Coordinates>().is_err());
        assert!("91,0".parse::<Coordinates>().is_err());
        assert!("0,-181".parse::<Coordinates>().is_err());
        assert!("NaN,0".parse::<Coordinates>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::fallback().to_string(), "New Delhi, India (28.6139, 77.2090)");
    }
}
