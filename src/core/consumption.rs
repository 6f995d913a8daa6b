use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    core::snapshot::EnergySnapshot,
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, time::Hours},
};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: String,
    pub power: Kilowatts,
    pub hours_per_day: Hours,
}

impl Appliance {
    pub fn daily_energy(&self) -> KilowattHours {
        self.power * self.hours_per_day
    }
}

impl FromStr for Appliance {
    type Err = Error;

    /// Parse `name:kilowatts:hours`, for example `Water pump:0.75:4`.
    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.rsplitn(3, ':');
        let (Some(hours), Some(power), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            bail!("expected `name:kilowatts:hours`, got `{value}`");
        };
        let name = name.trim();
        ensure!(!name.is_empty(), "appliance name must not be empty");
        let power: f64 =
            power.trim().parse().with_context(|| format!("invalid power of `{name}`"))?;
        let hours: f64 =
            hours.trim().parse().with_context(|| format!("invalid hours of `{name}`"))?;
        ensure!(power.is_finite() && power >= 0.0, "power of `{name}` must be non-negative");
        ensure!(
            hours.is_finite() && (0.0..=24.0).contains(&hours),
            "hours of `{name}` must be within a day",
        );
        Ok(Self { name: name.to_owned(), power: Kilowatts(power), hours_per_day: Hours(hours) })
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionProfile {
    pub daily_demand: KilowattHours,

    /// Free-form description such as `18:00-22:00`, never parsed.
    pub peak_hours: String,

    pub appliances: Vec<Appliance>,
}

impl ConsumptionProfile {
    pub fn try_new(
        daily_demand: KilowattHours,
        peak_hours: String,
        appliances: Vec<Appliance>,
    ) -> Result<Self> {
        ensure!(
            daily_demand.0.is_finite() && daily_demand > KilowattHours::ZERO,
            "daily demand must be positive, got {daily_demand}",
        );
        Ok(Self { daily_demand, peak_hours, appliances })
    }

    /// Sum of the appliance daily energies.
    pub fn total_load(&self) -> KilowattHours {
        self.appliances.iter().map(Appliance::daily_energy).sum()
    }

    /// Average draw to estimate the battery runtime against.
    ///
    /// Without a snapshot there is nothing to plan against, so the fallback demand is used.
    pub fn average_demand(
        &self,
        snapshot: Option<&EnergySnapshot>,
        fallback: Kilowatts,
    ) -> Kilowatts {
        snapshot.map_or(fallback, |_| self.daily_demand / Hours::DAY)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_appliance_ok() -> Result {
        let appliance: Appliance = "Water pump: 0.75 : 4".parse()?;
        assert_eq!(appliance.name, "Water pump");
        assert_eq!(appliance.power, Kilowatts(0.75));
        assert_eq!(appliance.hours_per_day, Hours(4.0));
        assert_abs_diff_eq!(appliance.daily_energy().0, 3.0);
        Ok(())
    }

    #[test]
    fn test_parse_appliance_with_colon_in_name_ok() -> Result {
        let appliance: Appliance = "Fridge: kitchen:0.15:24".parse()?;
        assert_eq!(appliance.name, "Fridge: kitchen");
        Ok(())
    }

    #[test]
    fn test_parse_appliance_err() {
        assert!("Lights".parse::<Appliance>().is_err());
        assert!("Lights:abc:5".parse::<Appliance>().is_err());
        assert!("Lights:-0.1:5".parse::<Appliance>().is_err());
        assert!("Lights:0.1:25".parse::<Appliance>().is_err());
        assert!(":0.1:5".parse::<Appliance>().is_err());
    }

    #[test]
    fn test_total_load() -> Result {
        let profile = ConsumptionProfile::try_new(
            KilowattHours(25.0),
            "18:00-22:00".to_owned(),
            vec!["Lights:0.1:6".parse()?, "Fan:0.075:8".parse()?],
        )?;
        assert_abs_diff_eq!(profile.total_load().0, 1.2, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_empty_total_load() -> Result {
        let profile = ConsumptionProfile::try_new(KilowattHours(1.0), String::new(), Vec::new())?;
        assert_eq!(profile.total_load(), KilowattHours::ZERO);
        Ok(())
    }

    #[test]
    fn test_non_positive_demand_err() {
        assert!(
            ConsumptionProfile::try_new(KilowattHours::ZERO, String::new(), Vec::new()).is_err()
        );
        assert!(
            ConsumptionProfile::try_new(KilowattHours(f64::NAN), String::new(), Vec::new()).is_err()
        );
    }

    #[test]
    fn test_average_demand() -> Result {
        let profile = ConsumptionProfile::try_new(KilowattHours(24.0), String::new(), Vec::new())?;
        let snapshot = EnergySnapshot::fallback();
        assert_eq!(profile.average_demand(Some(&snapshot), Kilowatts(5.0)), Kilowatts(1.0));
        assert_eq!(profile.average_demand(None, Kilowatts(5.0)), Kilowatts(5.0));
        Ok(())
    }
}
