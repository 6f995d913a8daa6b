use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        currency::Cost,
        mass::{EmissionFactor, Kilograms},
        power::Kilowatts,
    },
};

/// Regional constants the engine applies.
///
/// Defaults describe a rural installation in India.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Share of the theoretical renewable generation that is actually usable.
    pub derating_factor: f64,

    #[serde(rename = "grid_emission_factor_kg_per_kwh")]
    pub grid_emission_factor: EmissionFactor,

    /// CO₂ absorbed by a single tree in a year.
    #[serde(rename = "tree_absorption_kg_per_year")]
    pub tree_absorption: Kilograms,

    /// Up-front cost of the renewable installation.
    pub system_cost: Cost,

    /// Demand to estimate the battery runtime against when there is no energy snapshot.
    #[serde(rename = "fallback_average_demand_kw")]
    pub fallback_average_demand: Kilowatts,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            derating_factor: 0.8,
            grid_emission_factor: EmissionFactor(0.82),
            tree_absorption: Kilograms(22.0),
            system_cost: Cost(80_000.0),
            fallback_average_demand: Kilowatts(5.0),
        }
    }
}

impl Policy {
    #[instrument(skip_all, fields(path = ?path))]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the policy from `{}`", path.display()))?;
        let policy: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the policy from `{}`", path.display()))?;
        policy.validate()?;
        info!(?policy.derating_factor, ?policy.grid_emission_factor, "loaded");
        Ok(policy)
    }

    pub fn validate(&self) -> Result {
        ensure!(
            (0.0..=1.0).contains(&self.derating_factor),
            "derating factor must be within 0 and 1, got {}",
            self.derating_factor,
        );
        ensure!(
            self.grid_emission_factor.0.is_finite() && self.grid_emission_factor.0 >= 0.0,
            "grid emission factor must be non-negative, got {}",
            self.grid_emission_factor,
        );
        ensure!(
            self.tree_absorption.0.is_finite() && self.tree_absorption.0 > 0.0,
            "tree absorption must be positive, got {}",
            self.tree_absorption,
        );
        ensure!(
            self.system_cost.0.is_finite() && self.system_cost.0 >= 0.0,
            "system cost must be non-negative, got {}",
            self.system_cost,
        );
        ensure!(
            self.fallback_average_demand.0.is_finite() && self.fallback_average_demand.0 > 0.0,
            "fallback average demand must be positive, got {}",
            self.fallback_average_demand,
        );
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() -> Result {
        Policy::default().validate()
    }

    #[test]
    fn test_partial_override() -> Result {
        // language=toml
        const POLICY: &str = r"
            grid_emission_factor_kg_per_kwh = 0.4
            system_cost = 5000.0
        ";
        let policy: Policy = toml::from_str(POLICY)?;
        assert_eq!(policy.grid_emission_factor, EmissionFactor(0.4));
        assert_eq!(policy.system_cost, Cost(5000.0));
        assert_eq!(policy.tree_absorption, Kilograms(22.0));
        assert!((policy.derating_factor - 0.8).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_toml_roundtrip() -> Result {
        let policy = Policy::default();
        assert_eq!(toml::from_str::<Policy>(&policy.to_toml()?)?, policy);
        Ok(())
    }

    #[test]
    fn test_invalid_derating_factor() {
        let policy = Policy { derating_factor: 1.5, ..Policy::default() };
        assert!(policy.validate().is_err());
        let policy = Policy { derating_factor: f64::NAN, ..Policy::default() };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_non_finite_constants() {
        for policy in [
            Policy { system_cost: Cost(f64::NAN), ..Policy::default() },
            Policy { system_cost: Cost(f64::INFINITY), ..Policy::default() },
            Policy { grid_emission_factor: EmissionFactor(f64::NAN), ..Policy::default() },
            Policy { tree_absorption: Kilograms(f64::NAN), ..Policy::default() },
            Policy { fallback_average_demand: Kilowatts(f64::INFINITY), ..Policy::default() },
        ] {
            assert!(policy.validate().is_err(), "{policy:?}");
        }
    }

    #[test]
    fn test_negative_constants() {
        let policy = Policy { system_cost: Cost(-1.0), ..Policy::default() };
        assert!(policy.validate().is_err());
        let policy = Policy { tree_absorption: Kilograms::ZERO, ..Policy::default() };
        assert!(policy.validate().is_err());
    }
}
