use clap::Parser;

use crate::{
    cli::policy::PolicyArgs,
    core::consumption::{Appliance, ConsumptionProfile},
    location::Coordinates,
    prelude::*,
    provider::Provider,
    quantity::{currency::KilowattHourRate, energy::KilowattHours},
    scenario::Scenario,
};

#[must_use]
#[derive(Parser)]
pub struct ScenarioArgs {
    /// Coordinates as `latitude,longitude`, looked up by the IP address otherwise.
    #[clap(long, env = "KIRAN_LOCATION", allow_hyphen_values = true)]
    pub location: Option<Coordinates>,

    /// Do not make any HTTP requests and use the demo data instead.
    #[clap(long, env = "KIRAN_OFFLINE")]
    pub offline: bool,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    #[clap(flatten)]
    pub consumption: ConsumptionArgs,

    /// Grid electricity rate per kilowatt-hour.
    #[clap(long = "grid-rate", default_value = "8.5", env = "KIRAN_GRID_RATE")]
    pub grid_rate: KilowattHourRate,

    #[clap(flatten)]
    pub policy: PolicyArgs,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Battery capacity in kilowatt-hours.
    #[clap(long = "battery-capacity-kwh", default_value = "10", env = "KIRAN_BATTERY_CAPACITY_KWH")]
    pub capacity: KilowattHours,

    /// Energy currently stored in the battery, in kilowatt-hours.
    #[clap(long = "battery-charge-kwh", default_value = "5", env = "KIRAN_BATTERY_CHARGE_KWH")]
    pub charge: KilowattHours,
}

#[must_use]
#[derive(Clone, Parser)]
pub struct ConsumptionArgs {
    /// Daily household demand in kilowatt-hours.
    #[clap(long = "daily-demand-kwh", default_value = "24", env = "KIRAN_DAILY_DEMAND_KWH")]
    pub daily_demand: KilowattHours,

    /// Free-form description of the peak consumption hours.
    #[clap(long = "peak-hours", default_value = "18:00-22:00", env = "KIRAN_PEAK_HOURS")]
    pub peak_hours: String,

    /// Appliance as `name:kilowatts:hours-per-day`, may be repeated.
    #[clap(long = "appliance", env = "KIRAN_APPLIANCES", value_delimiter = ';')]
    pub appliances: Vec<Appliance>,
}

impl ConsumptionArgs {
    pub fn profile(&self) -> Result<ConsumptionProfile> {
        ConsumptionProfile::try_new(
            self.daily_demand,
            self.peak_hours.clone(),
            self.appliances.clone(),
        )
    }
}

impl ScenarioArgs {
    #[instrument(skip_all, fields(offline = self.offline))]
    pub fn evaluate(&self) -> Result<Scenario> {
        Scenario::builder()
            .provider(&Provider::new(self.offline))
            .maybe_location(self.location)
            .battery_capacity(self.battery.capacity)
            .battery_charge(self.battery.charge)
            .consumption(self.consumption.profile()?)
            .grid_rate(self.grid_rate)
            .policy(self.policy.load()?)
            .evaluate()
    }
}
