use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Deserialize;
use ureq::Agent;

use crate::{
    core::snapshot::{EnergySnapshot, Origin, Resource, Sample},
    location::Coordinates,
    prelude::*,
};

/// [NASA POWER](https://power.larc.nasa.gov) daily solar and wind history.
pub struct Api {
    client: Agent,
}

impl Api {
    const URL: &'static str = "https://power.larc.nasa.gov/api/temporal/daily/point";

    /// The data is published with a lag of a few days, hence the longer window.
    const LOOKBACK_DAYS: u64 = 21;

    /// Number of the most recent days that make up the snapshot.
    const N_SAMPLES: usize = 7;

    pub const fn new(client: Agent) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(coordinates = %coordinates, today = %today))]
    pub fn get_snapshot(
        &self,
        coordinates: Coordinates,
        today: NaiveDate,
    ) -> Result<EnergySnapshot> {
        let end = today - Days::new(1);
        let start = today - Days::new(Self::LOOKBACK_DAYS);
        info!(%start, %end, "fetching…");
        let response = self
            .client
            .get(Self::URL)
            .query("parameters", "ALLSKY_SFC_SW_DWN,WS10M")
            .query("community", "RE")
            .query("latitude", coordinates.latitude.to_string())
            .query("longitude", coordinates.longitude.to_string())
            .query("start", start.format("%Y%m%d").to_string())
            .query("end", end.format("%Y%m%d").to_string())
            .query("format", "JSON")
            .call()
            .context("failed to request the solar and wind history")?
            .body_mut()
            .read_json::<Response>()
            .context("failed to deserialize the solar and wind history")?;
        let snapshot = response.try_into_snapshot()?;
        info!(
            solar.average = snapshot.solar.average,
            wind.average = snapshot.wind.average,
            "fetched"
        );
        Ok(snapshot)
    }
}

#[derive(Deserialize)]
struct Response {
    properties: Properties,
}

#[derive(Deserialize)]
struct Properties {
    parameter: Parameters,
}

/// Daily values keyed by `YYYYMMDD`.
#[derive(Deserialize)]
struct Parameters {
    /// All-sky surface shortwave downward irradiance, kWh/m²/day.
    #[serde(rename = "ALLSKY_SFC_SW_DWN")]
    solar: BTreeMap<String, f64>,

    /// Wind speed at 10 meters, m/s.
    #[serde(rename = "WS10M")]
    wind: BTreeMap<String, f64>,
}

impl Response {
    fn try_into_snapshot(self) -> Result<EnergySnapshot> {
        let parameters = self.properties.parameter;
        Ok(EnergySnapshot {
            solar: Self::resource(parameters.solar)?.context("no solar irradiance samples")?,
            wind: Self::resource(parameters.wind)?.context("no wind speed samples")?,
            origin: Origin::Live,
        })
    }

    fn resource(series: BTreeMap<String, f64>) -> Result<Option<Resource>> {
        let mut samples = series
            .into_iter()
            // Missing values are reported as `-999`:
            .filter(|(_, value)| *value >= 0.0)
            .map(|(date, value)| {
                let date = NaiveDate::parse_from_str(&date, "%Y%m%d")
                    .with_context(|| format!("invalid date `{date}`"))?;
                Ok(Sample::new(date.format("%b %d").to_string(), value))
            })
            .collect::<Result<Vec<_>>>()?;
        let n_stale = samples.len().saturating_sub(Api::N_SAMPLES);
        samples.drain(..n_stale);
        Ok(Resource::from_samples(samples))
    }
}
