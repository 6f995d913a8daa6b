use serde::Serialize;

use crate::{
    core::{consumption::ConsumptionProfile, policy::Policy, snapshot::EnergySnapshot},
    quantity::{
        currency::{Cost, KilowattHourRate},
        energy::KilowattHours,
        mass::Kilograms,
        time::Years,
    },
};

const DAYS_PER_YEAR: f64 = 365.0;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CostAnalysis {
    pub grid_rate: KilowattHourRate,
    pub daily_renewable_generation: KilowattHours,
    pub daily_grid_usage: KilowattHours,
    pub daily_savings: Cost,
    pub annual_savings: Cost,

    /// Zero when the system never pays back.
    pub payback_period: Years,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CarbonFootprint {
    /// Daily emissions if all the demand were drawn from the grid.
    pub current_emissions: Kilograms,

    pub daily_reduction: Kilograms,
    pub annual_savings: Kilograms,
    pub trees_equivalent: f64,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub cost: CostAnalysis,
    pub carbon: CarbonFootprint,
}

pub fn project(
    snapshot: &EnergySnapshot,
    consumption: &ConsumptionProfile,
    grid_rate: KilowattHourRate,
    policy: &Policy,
) -> Projection {
    let daily_renewable_generation =
        KilowattHours(snapshot.solar.average + snapshot.wind.average) * policy.derating_factor;
    let daily_grid_usage =
        (consumption.daily_demand - daily_renewable_generation).max(KilowattHours::ZERO);
    let daily_savings = (consumption.daily_demand - daily_grid_usage) * grid_rate;
    let annual_savings = daily_savings * DAYS_PER_YEAR;
    let cost = CostAnalysis {
        grid_rate,
        daily_renewable_generation,
        daily_grid_usage,
        daily_savings,
        annual_savings,
        payback_period: policy.system_cost.payback_period(annual_savings),
    };

    let daily_reduction = daily_renewable_generation * policy.grid_emission_factor;
    let annual_carbon_savings = daily_reduction * DAYS_PER_YEAR;
    let carbon = CarbonFootprint {
        current_emissions: consumption.daily_demand * policy.grid_emission_factor,
        daily_reduction,
        annual_savings: annual_carbon_savings,
        trees_equivalent: annual_carbon_savings / policy.tree_absorption,
    };

    Projection { cost, carbon }
}
