//! Additive site suitability score.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    core::{battery::BatteryState, snapshot::EnergySnapshot},
    quantity::time::Hours,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Optimal,
    Moderate,
    NotRecommended,
}

impl Status {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Optimal,
            60..80 => Self::Moderate,
            _ => Self::NotRecommended,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::Moderate => write!(f, "Moderate"),
            Self::NotRecommended => write!(f, "Not recommended"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Feasibility {
    pub status: Status,

    /// Sum of the sub-scores, `20..=100`.
    pub score: u8,

    /// Contributing factors in the scoring order.
    pub reasons: Vec<&'static str>,
}

impl Feasibility {
    pub fn score(snapshot: &EnergySnapshot, battery: &BatteryState) -> Self {
        let (solar_score, solar_reason) = Self::solar(snapshot.solar.average);
        let (wind_score, wind_reason) = Self::wind(snapshot.wind.average);
        let (battery_score, battery_reason) = Self::battery(battery.runtime);
        let mut reasons = vec![solar_reason, wind_reason, battery_reason];
        let mut score = solar_score + wind_score + battery_score;
        if snapshot.solar.peak > 7.0 || snapshot.wind.peak > 6.0 {
            score += 10;
            reasons.push("reliable energy peaks");
        }
        Self { status: Status::from_score(score), score, reasons }
    }

    /// Reasons joined into a sentence fragment.
    #[must_use]
    pub fn summary(&self) -> String {
        self.reasons.join(", ")
    }

    fn solar(average: f64) -> (u8, &'static str) {
        if average > 6.0 {
            (40, "excellent solar availability")
        } else if average > 4.0 {
            (25, "good solar potential")
        } else {
            (10, "limited solar resources")
        }
    }

    fn wind(average: f64) -> (u8, &'static str) {
        if average > 5.0 {
            (30, "strong wind resources")
        } else if average > 3.0 {
            (20, "moderate wind potential")
        } else {
            (5, "low wind availability")
        }
    }

    fn battery(runtime: Hours) -> (u8, &'static str) {
        if runtime > Hours(12.0) {
            (20, "sufficient battery capacity")
        } else if runtime > Hours(6.0) {
            (15, "adequate battery runtime")
        } else {
            (5, "limited battery capacity")
        }
    }
}
