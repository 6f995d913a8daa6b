//! Energy data acquisition with transparent fallbacks.
//!
//! Fetch failures never reach the engine: they are logged and replaced with the demo data.

use chrono::{Local, NaiveDate};

use crate::{
    api::{ipapi, nasa_power, new_client, open_meteo, open_meteo::Weather},
    core::snapshot::EnergySnapshot,
    location::{Coordinates, Location},
    prelude::*,
};

pub trait DataSource {
    fn locate(&self) -> Result<Location>;

    fn get_snapshot(&self, coordinates: Coordinates, today: NaiveDate) -> Result<EnergySnapshot>;

    fn get_weather(&self, coordinates: Coordinates) -> Result<Weather>;
}

/// Third-party APIs.
pub struct Live {
    ipapi: ipapi::Api,
    nasa_power: nasa_power::Api,
    open_meteo: open_meteo::Api,
}

impl Default for Live {
    fn default() -> Self {
        let client = new_client();
        Self {
            ipapi: ipapi::Api::new(client.clone()),
            nasa_power: nasa_power::Api::new(client.clone()),
            open_meteo: open_meteo::Api::new(client),
        }
    }
}

impl DataSource for Live {
    fn locate(&self) -> Result<Location> {
        self.ipapi.locate()
    }

    fn get_snapshot(&self, coordinates: Coordinates, today: NaiveDate) -> Result<EnergySnapshot> {
        self.nasa_power.get_snapshot(coordinates, today)
    }

    fn get_weather(&self, coordinates: Coordinates) -> Result<Weather> {
        self.open_meteo.get_weather(coordinates)
    }
}

/// Never reaches out to the network.
pub struct Offline;

impl DataSource for Offline {
    fn locate(&self) -> Result<Location> {
        bail!("offline mode")
    }

    fn get_snapshot(&self, _coordinates: Coordinates, _today: NaiveDate) -> Result<EnergySnapshot> {
        bail!("offline mode")
    }

    fn get_weather(&self, _coordinates: Coordinates) -> Result<Weather> {
        bail!("offline mode")
    }
}

pub struct Provider {
    source: Box<dyn DataSource>,
}

impl Provider {
    pub fn new(offline: bool) -> Self {
        if offline { Self::from_source(Offline) } else { Self::from_source(Live::default()) }
    }

    pub fn from_source(source: impl DataSource + 'static) -> Self {
        Self { source: Box::new(source) }
    }

    /// Requested coordinates win, then geolocation, then the demo location.
    #[instrument(skip_all)]
    pub fn location(&self, requested: Option<Coordinates>) -> Location {
        if let Some(coordinates) = requested {
            return Location::manual(coordinates);
        }
        self.source.locate().unwrap_or_else(|error| {
            warn!("geolocation is unavailable, using the demo location: {error:#}");
            Location::fallback()
        })
    }

    #[instrument(skip_all)]
    pub fn snapshot(&self, coordinates: Coordinates) -> EnergySnapshot {
        self.source.get_snapshot(coordinates, Local::now().date_naive()).unwrap_or_else(|error| {
            warn!("energy data is unavailable, using the demo week: {error:#}");
            EnergySnapshot::fallback()
        })
    }

    /// Weather is informational only, so there is no demo substitute.
    #[instrument(skip_all)]
    pub fn weather(&self, coordinates: Coordinates) -> Option<Weather> {
        self.source
            .get_weather(coordinates)
            .inspect_err(|error| warn!("weather is unavailable: {error:#}"))
            .ok()
    }
}
