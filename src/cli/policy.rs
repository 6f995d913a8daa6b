//! Regional policy: an optional TOML file with individual overrides on top.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::policy::Policy,
    prelude::*,
    quantity::{
        currency::Cost,
        mass::{EmissionFactor, Kilograms},
        power::Kilowatts,
    },
};

#[must_use]
#[derive(Clone, Parser)]
pub struct PolicyArgs {
    /// TOML file with the policy constants, built-in defaults otherwise.
    #[clap(long = "policy", env = "KIRAN_POLICY_PATH")]
    pub path: Option<PathBuf>,

    /// Share of the theoretical renewable generation that is actually usable.
    #[clap(long = "derating-factor", env = "KIRAN_DERATING_FACTOR")]
    pub derating_factor: Option<f64>,

    /// Grid emission factor in kilograms of CO₂ per kilowatt-hour.
    #[clap(long = "grid-emission-factor", env = "KIRAN_GRID_EMISSION_FACTOR")]
    pub grid_emission_factor: Option<EmissionFactor>,

    /// CO₂ absorbed by a tree in a year, in kilograms.
    #[clap(long = "tree-absorption-kg", env = "KIRAN_TREE_ABSORPTION_KG")]
    pub tree_absorption: Option<Kilograms>,

    /// Up-front cost of the renewable installation.
    #[clap(long = "system-cost", env = "KIRAN_SYSTEM_COST")]
    pub system_cost: Option<Cost>,

    /// Average demand in kilowatts assumed when there is no energy snapshot.
    #[clap(long = "fallback-average-demand-kw", env = "KIRAN_FALLBACK_AVERAGE_DEMAND_KW")]
    pub fallback_average_demand: Option<Kilowatts>,
}

impl PolicyArgs {
    pub fn load(&self) -> Result<Policy> {
        let mut policy = match &self.path {
            Some(path) => Policy::read_from(path)?,
            None => Policy::default(),
        };
        if let Some(derating_factor) = self.derating_factor {
            policy.derating_factor = derating_factor;
        }
        if let Some(grid_emission_factor) = self.grid_emission_factor {
            policy.grid_emission_factor = grid_emission_factor;
        }
        if let Some(tree_absorption) = self.tree_absorption {
            policy.tree_absorption = tree_absorption;
        }
        if let Some(system_cost) = self.system_cost {
            policy.system_cost = system_cost;
        }
        if let Some(fallback_average_demand) = self.fallback_average_demand {
            policy.fallback_average_demand = fallback_average_demand;
        }
        policy.validate()?;
        Ok(policy)
    }

    pub fn run(&self) -> Result {
        print!("{}", self.load()?.to_toml()?);
        Ok(())
    }
}
