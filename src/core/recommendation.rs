//! Rule-based advice on the current energy situation.
//!
//! Rules are independent: several may fire at once, and the output follows the rule order.
//! Sorting by priority is left to the presentation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        battery::BatteryState,
        consumption::ConsumptionProfile,
        policy::Policy,
        projection::CostAnalysis,
        snapshot::EnergySnapshot,
    },
    quantity::{currency::Cost, energy::KilowattHours, proportions::Percentage},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Solar,
    Wind,
    Battery,
    Grid,
    Economic,
    Environmental,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar => write!(f, "Solar"),
            Self::Wind => write!(f, "Wind"),
            Self::Battery => write!(f, "Battery"),
            Self::Grid => write!(f, "Grid"),
            Self::Economic => write!(f, "Economic"),
            Self::Environmental => write!(f, "Environmental"),
        }
    }
}

/// Ordered from the most urgent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub priority: Priority,
    pub message: String,
    pub action: String,

    /// `0..=100`.
    pub impact_score: u8,

    /// `0..=100`.
    pub confidence_score: u8,
}

pub fn generate(
    snapshot: &EnergySnapshot,
    battery: &BatteryState,
    consumption: &ConsumptionProfile,
    cost: &CostAnalysis,
    policy: &Policy,
) -> Vec<Recommendation> {
    let solar = &snapshot.solar;
    let wind = &snapshot.wind;
    let mut recommendations = Vec::new();

    if solar.current > 5.0 && battery.percentage < Percentage(50.0) {
        recommendations.push(Recommendation {
            category: Category::Solar,
            priority: Priority::Critical,
            message: format!(
                "Strong sunshine ({:.1} kWh/m²) while the battery is only at {}",
                solar.current, battery.percentage,
            ),
            action: "Charge the battery from solar now and shift heavy loads to daylight hours"
                .to_owned(),
            impact_score: 85,
            confidence_score: 92,
        });
    }

    if wind.current > 5.0 && battery.percentage < Percentage(70.0) {
        recommendations.push(Recommendation {
            category: Category::Wind,
            priority: Priority::High,
            message: format!(
                "Good wind ({:.1} m/s) with the battery at {}",
                wind.current, battery.percentage,
            ),
            action: "Run the wind turbine at full output to top up the battery".to_owned(),
            impact_score: 70,
            confidence_score: 88,
        });
    }

    if solar.average > 4.0 && wind.average > 3.0 {
        let savings: Cost = KilowattHours(solar.average + wind.average)
            * cost.grid_rate
            * policy.derating_factor;
        recommendations.push(Recommendation {
            category: Category::Economic,
            priority: Priority::Medium,
            message: format!("A hybrid solar and wind setup could save about {savings} per day"),
            action: "Install a hybrid system to combine both resources".to_owned(),
            impact_score: 60,
            confidence_score: 85,
        });
    }

    // The value is in tonnes, yet the message reports kilograms:
    let carbon_reduction = (consumption.daily_demand * policy.grid_emission_factor).0 / 1000.0;
    if carbon_reduction > 0.5 {
        recommendations.push(Recommendation {
            category: Category::Environmental,
            priority: Priority::Medium,
            message: format!(
                "Switching to renewables could cut {carbon_reduction} kg of CO₂ per day"
            ),
            action: "Plan a full switch to renewable supply".to_owned(),
            impact_score: 90,
            confidence_score: 95,
        });
    }

    if battery.percentage < Percentage(20.0) {
        recommendations.push(Recommendation {
            category: Category::Battery,
            priority: Priority::Critical,
            message: format!("Battery is critically low at {}", battery.percentage),
            action: "Switch off non-essential loads and prioritise charging".to_owned(),
            impact_score: 100,
            confidence_score: 100,
        });
    }

    if solar.current < 3.0 && wind.current < 3.0 {
        recommendations.push(Recommendation {
            category: Category::Grid,
            priority: Priority::High,
            message: format!(
                "Low renewable availability: {:.1} kWh/m² of sun and {:.1} m/s of wind",
                solar.current, wind.current,
            ),
            action: "Keep the grid connection or a backup generator ready".to_owned(),
            impact_score: 45,
            confidence_score: 80,
        });
    }

    recommendations
}
