//! Renewable resource availability as handed over to the engine.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Where a piece of input data came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Given explicitly by the user.
    Manual,

    /// Fetched from a third-party API.
    Live,

    /// Static demo data substituted after a failed fetch.
    Fallback,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Availability of a single resource: solar irradiance in kWh/m²/day or wind speed in m/s.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub current: f64,
    pub average: f64,
    pub peak: f64,

    /// Recent history, most recent last.
    pub data: Vec<Sample>,
}

impl Resource {
    /// Bare figures without the history.
    #[cfg(test)]
    pub const fn new(current: f64, average: f64, peak: f64) -> Self {
        Self { current, average, peak, data: Vec::new() }
    }

    /// Summarize the samples: the last one is current.
    ///
    /// Returns [`None`] when there are no samples.
    pub fn from_samples(data: Vec<Sample>) -> Option<Self> {
        let current = data.last()?.value;
        #[expect(clippy::cast_precision_loss)]
        let average = data.iter().map(|sample| sample.value).sum::<f64>() / data.len() as f64;
        let peak = data.iter().map(|sample| OrderedFloat(sample.value)).max()?.0;
        Some(Self { current, average, peak, data })
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnergySnapshot {
    pub solar: Resource,
    pub wind: Resource,
    pub origin: Origin,
}

impl EnergySnapshot {
    const FALLBACK_LABELS: [&'static str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    const FALLBACK_SOLAR: [f64; 7] = [4.2, 5.1, 6.3, 5.8, 4.9, 6.7, 5.5];
    const FALLBACK_WIND: [f64; 7] = [3.2, 4.1, 5.5, 4.8, 3.9, 6.2, 4.5];

    /// Demo week used whenever the live data cannot be fetched.
    pub fn fallback() -> Self {
        Self {
            solar: Self::fallback_resource(Self::FALLBACK_SOLAR),
            wind: Self::fallback_resource(Self::FALLBACK_WIND),
            origin: Origin::Fallback,
        }
    }

    fn fallback_resource(values: [f64; 7]) -> Resource {
        let data = Self::FALLBACK_LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| Sample::new(label, value))
            .collect();
        let current = values[values.len() - 1];
        #[expect(clippy::cast_precision_loss)]
        let average = values.iter().sum::<f64>() / values.len() as f64;
        let peak = values.into_iter().map(OrderedFloat).max().map_or(0.0, |peak| peak.0);
        Resource { current, average, peak, data }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_samples() {
        let resource = Resource::from_samples(vec![
            Sample::new("Jun 01", 3.0),
            Sample::new("Jun 02", 9.0),
            Sample::new("Jun 03", 6.0),
        ])
        .unwrap();
        assert_abs_diff_eq!(resource.current, 6.0);
        assert_abs_diff_eq!(resource.average, 6.0);
        assert_abs_diff_eq!(resource.peak, 9.0);
        assert_eq!(resource.data.len(), 3);
    }

    #[test]
    fn test_from_no_samples() {
        assert!(Resource::from_samples(Vec::new()).is_none());
    }

    #[test]
    fn test_fallback() {
        let snapshot = EnergySnapshot::fallback();
        assert_eq!(snapshot.origin, Origin::Fallback);

        assert_eq!(snapshot.solar.data.len(), 7);
        assert_eq!(snapshot.solar.data[0].label, "Mon");
        assert_abs_diff_eq!(snapshot.solar.current, 5.5);
        assert_abs_diff_eq!(snapshot.solar.average, 5.5, epsilon = 1e-9);
        assert_abs_diff_eq!(snapshot.solar.peak, 6.7);

        assert_abs_diff_eq!(snapshot.wind.current, 4.5);
        assert_abs_diff_eq!(snapshot.wind.average, 4.6, epsilon = 1e-9);
        assert_abs_diff_eq!(snapshot.wind.peak, 6.2);
    }

    #[test]
    fn test_fallback_matches_from_samples() {
        let snapshot = EnergySnapshot::fallback();
        let rebuilt = Resource::from_samples(snapshot.solar.data.clone()).unwrap();
        assert_abs_diff_eq!(rebuilt.average, snapshot.solar.average, epsilon = 1e-9);
        assert_abs_diff_eq!(rebuilt.peak, snapshot.solar.peak);
    }
}
