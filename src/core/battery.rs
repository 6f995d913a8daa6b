use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, proportions::Percentage, time::Hours},
};

/// Battery state with the derived fields recomputed on every change.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryState {
    pub capacity: KilowattHours,
    pub current_charge: KilowattHours,

    /// Draw the runtime is estimated against.
    pub average_demand: Kilowatts,

    pub percentage: Percentage,
    pub runtime: Hours,
}

impl BatteryState {
    /// Validate the input and compute the derived fields.
    pub fn try_new(
        capacity: KilowattHours,
        current_charge: KilowattHours,
        average_demand: Kilowatts,
    ) -> Result<Self> {
        ensure!(
            capacity.0.is_finite() && capacity > KilowattHours::ZERO,
            "battery capacity must be positive, got {capacity}",
        );
        ensure!(
            current_charge.0.is_finite()
                && (KilowattHours::ZERO..=capacity).contains(&current_charge),
            "battery charge must be within 0 and {capacity}, got {current_charge}",
        );
        Ok(Self::new(capacity, current_charge, average_demand))
    }

    fn new(
        capacity: KilowattHours,
        current_charge: KilowattHours,
        average_demand: Kilowatts,
    ) -> Self {
        Self {
            capacity,
            current_charge,
            average_demand,
            percentage: Percentage::from_ratio(current_charge / capacity),
            runtime: current_charge / average_demand.max(Kilowatts::ONE_WATT),
        }
    }

    /// Re-estimate the runtime against another demand, the stored energy stays the same.
    pub fn with_average_demand(self, average_demand: Kilowatts) -> Self {
        Self::new(self.capacity, self.current_charge, average_demand)
    }
}
