use bon::bon;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    api::open_meteo::Weather,
    core::{
        Assessment,
        Engine,
        battery::BatteryState,
        consumption::ConsumptionProfile,
        policy::Policy,
        snapshot::EnergySnapshot,
    },
    location::{Coordinates, Location},
    prelude::*,
    provider::Provider,
    quantity::{currency::KilowattHourRate, energy::KilowattHours},
};

/// Everything known about a planning scenario, as exported.
#[must_use]
#[derive(Serialize)]
pub struct Scenario {
    pub generated_at: DateTime<Local>,
    pub location: Location,
    pub snapshot: EnergySnapshot,
    pub weather: Option<Weather>,
    pub battery: BatteryState,
    pub consumption: ConsumptionProfile,
    pub policy: Policy,

    #[serde(flatten)]
    pub assessment: Assessment,
}

#[bon]
impl Scenario {
    /// Gather the data and run the engine over it.
    #[builder(finish_fn = evaluate)]
    pub fn new(
        provider: &Provider,
        location: Option<Coordinates>,
        battery_capacity: KilowattHours,
        battery_charge: KilowattHours,
        consumption: ConsumptionProfile,
        grid_rate: KilowattHourRate,
        policy: Policy,
    ) -> Result<Self> {
        // Validate before making any requests:
        ensure!(
            grid_rate.0.is_finite() && grid_rate.0 >= 0.0,
            "grid rate must be non-negative, got {grid_rate}",
        );
        policy.validate()?;
        let battery = BatteryState::try_new(
            battery_capacity,
            battery_charge,
            consumption.average_demand(None, policy.fallback_average_demand),
        )?;

        let location = provider.location(location);
        info!(%location, origin = ?location.origin, "using location");
        let snapshot = provider.snapshot(location.coordinates);
        let weather = provider.weather(location.coordinates);
        let battery = battery.with_average_demand(
            consumption.average_demand(Some(&snapshot), policy.fallback_average_demand),
        );
        let assessment = Engine::builder()
            .snapshot(&snapshot)
            .battery(&battery)
            .consumption(&consumption)
            .grid_rate(grid_rate)
            .policy(&policy)
            .build()
            .assess();
        Ok(Self {
            generated_at: Local::now(),
            location,
            snapshot,
            weather,
            battery,
            consumption,
            policy,
            assessment,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{feasibility::Status, snapshot::Origin},
        quantity::time::Years,
    };

    fn evaluate_with(battery_charge: f64, grid_rate: f64) -> Result<Scenario> {
        let consumption =
            ConsumptionProfile::try_new(KilowattHours(24.0), String::new(), Vec::new())?;
        Scenario::builder()
            .provider(&Provider::new(true))
            .battery_capacity(KilowattHours(100.0))
            .battery_charge(KilowattHours(battery_charge))
            .consumption(consumption)
            .grid_rate(KilowattHourRate(grid_rate))
            .policy(Policy::default())
            .evaluate()
    }

    fn evaluate(battery_charge: f64) -> Result<Scenario> {
        evaluate_with(battery_charge, 8.5)
    }

    #[test]
    fn test_offline_scenario() -> Result {
        let scenario = evaluate(36.0)?;
        assert_eq!(scenario.location.origin, Origin::Fallback);
        assert_eq!(scenario.snapshot.origin, Origin::Fallback);
        assert!(scenario.weather.is_none());

        // 24 kWh a day is 1 kW on average:
        assert_abs_diff_eq!(scenario.battery.runtime.0, 36.0, epsilon = 1e-9);

        // 25 + 20 + 20 + 10:
        let feasibility = scenario.assessment.feasibility.context("no feasibility")?;
        assert_eq!(feasibility.score, 75);
        assert_eq!(feasibility.status, Status::Moderate);
        Ok(())
    }

    #[test]
    fn test_overcharged_battery_err() {
        assert!(evaluate(101.0).is_err());
    }

    #[test]
    fn test_invalid_grid_rate_err() {
        for grid_rate in [f64::NAN, f64::INFINITY, -5.0] {
            assert!(evaluate_with(50.0, grid_rate).is_err(), "{grid_rate}");
        }
    }

    #[test]
    fn test_free_grid_never_pays_back() -> Result {
        let scenario = evaluate_with(50.0, 0.0)?;
        let cost = scenario.assessment.cost.context("no cost analysis")?;
        assert_eq!(cost.payback_period, Years::ZERO);
        Ok(())
    }
}
