pub mod battery;
pub mod consumption;
pub mod feasibility;
pub mod policy;
pub mod projection;
pub mod recommendation;
pub mod snapshot;

use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        battery::BatteryState,
        consumption::ConsumptionProfile,
        feasibility::Feasibility,
        policy::Policy,
        projection::{CarbonFootprint, CostAnalysis, project},
        recommendation::{Recommendation, generate},
        snapshot::EnergySnapshot,
    },
    prelude::*,
    quantity::currency::KilowattHourRate,
};

/// Single scoring pass over the current inputs.
#[derive(Builder)]
pub struct Engine<'a> {
    /// Nothing is scored without a snapshot.
    snapshot: Option<&'a EnergySnapshot>,

    battery: &'a BatteryState,
    consumption: &'a ConsumptionProfile,
    grid_rate: KilowattHourRate,
    policy: &'a Policy,
}

impl Engine<'_> {
    #[instrument(skip_all)]
    pub fn assess(self) -> Assessment {
        let Some(snapshot) = self.snapshot else {
            warn!("no energy snapshot, skipping the assessment");
            return Assessment::default();
        };
        let projection = project(snapshot, self.consumption, self.grid_rate, self.policy);
        let recommendations =
            generate(snapshot, self.battery, self.consumption, &projection.cost, self.policy);
        let feasibility = Feasibility::score(snapshot, self.battery);
        info!(
            n_recommendations = recommendations.len(),
            score = feasibility.score,
            status = %feasibility.status,
            "assessed"
        );
        Assessment {
            recommendations,
            feasibility: Some(feasibility),
            cost: Some(projection.cost),
            carbon: Some(projection.carbon),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Assessment {
    pub recommendations: Vec<Recommendation>,
    pub feasibility: Option<Feasibility>,
    pub cost: Option<CostAnalysis>,
    pub carbon: Option<CarbonFootprint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::feasibility::Status,
        quantity::{energy::KilowattHours, power::Kilowatts},
    };

    fn inputs() -> Result<(BatteryState, ConsumptionProfile)> {
        let battery =
            BatteryState::try_new(KilowattHours(100.0), KilowattHours::ZERO, Kilowatts(5.0))?;
        let consumption =
            ConsumptionProfile::try_new(KilowattHours(25.0), String::new(), Vec::new())?;
        Ok((battery, consumption))
    }

    #[test]
    fn test_without_snapshot() -> Result {
        let (battery, consumption) = inputs()?;
        let policy = Policy::default();
        let assessment = Engine::builder()
            .battery(&battery)
            .consumption(&consumption)
            .grid_rate(KilowattHourRate(8.5))
            .policy(&policy)
            .build()
            .assess();
        assert_eq!(assessment, Assessment::default());
        Ok(())
    }

    #[test]
    fn test_fallback_snapshot() -> Result {
        let (battery, consumption) = inputs()?;
        let policy = Policy::default();
        let snapshot = EnergySnapshot::fallback();
        let assessment = Engine::builder()
            .snapshot(&snapshot)
            .battery(&battery)
            .consumption(&consumption)
            .grid_rate(KilowattHourRate(8.5))
            .policy(&policy)
            .build()
            .assess();

        // 25 (solar average 5.5) + 20 (wind average 4.6) + 5 (empty battery) + 10 (wind peak 6.2):
        let feasibility = assessment.feasibility.unwrap();
        assert_eq!(feasibility.score, 60);
        assert_eq!(feasibility.status, Status::Moderate);

        // Solar and battery warnings plus the economic advice:
        assert_eq!(assessment.recommendations.len(), 3);
        assert!(assessment.cost.is_some());
        assert!(assessment.carbon.is_some());
        Ok(())
    }
}
