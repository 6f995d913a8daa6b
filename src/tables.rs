use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::{EitherOrBoth, Itertools};

use crate::{
    api::open_meteo::Weather,
    core::{
        battery::BatteryState,
        consumption::ConsumptionProfile,
        feasibility::{Feasibility, Status},
        projection::{CarbonFootprint, CostAnalysis},
        recommendation::{Priority, Recommendation},
        snapshot::{EnergySnapshot, Origin, Sample},
    },
    location::Location,
    quantity::{
        proportions::Percentage,
        time::{Hours, Years},
    },
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn origin_color(origin: Origin) -> Color {
    match origin {
        Origin::Manual | Origin::Live => Color::Green,
        Origin::Fallback => Color::DarkYellow,
    }
}

pub fn build_overview_table(location: &Location, weather: Option<&Weather>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Location", "Source", "Weather"]);
    table.add_row(vec![
        Cell::new(location),
        Cell::new(format!("{:?}", location.origin).to_lowercase())
            .fg(origin_color(location.origin)),
        weather.map_or_else(
            || Cell::new("unavailable").add_attribute(Attribute::Dim),
            |weather| {
                Cell::new(format!(
                    "{}, {:.1} °C, {} humidity, wind {:.1} m/s",
                    weather.description,
                    weather.temperature,
                    weather.relative_humidity,
                    weather.wind_speed,
                ))
            },
        ),
    ]);
    table
}

pub fn build_snapshot_table(snapshot: &EnergySnapshot) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Day"),
        Cell::new("Solar\nkWh/m²").set_alignment(CellAlignment::Right).fg(Color::DarkYellow),
        Cell::new("Wind\nm/s").set_alignment(CellAlignment::Right).fg(Color::Cyan),
    ]);
    for pair in snapshot.solar.data.iter().zip_longest(&snapshot.wind.data) {
        let (label, solar, wind) = match pair {
            EitherOrBoth::Both(solar, wind) => (&solar.label, Some(solar), Some(wind)),
            EitherOrBoth::Left(solar) => (&solar.label, Some(solar), None),
            EitherOrBoth::Right(wind) => (&wind.label, None, Some(wind)),
        };
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Dim),
            sample_cell(solar),
            sample_cell(wind),
        ]);
    }
    for (name, solar, wind) in [
        ("Current", snapshot.solar.current, snapshot.wind.current),
        ("Average", snapshot.solar.average, snapshot.wind.average),
        ("Peak", snapshot.solar.peak, snapshot.wind.peak),
    ] {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{solar:.1}")).set_alignment(CellAlignment::Right),
            Cell::new(format!("{wind:.1}")).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn sample_cell(sample: Option<&Sample>) -> Cell {
    sample.map_or_else(
        || Cell::new("–").add_attribute(Attribute::Dim),
        |sample| Cell::new(format!("{:.1}", sample.value)).set_alignment(CellAlignment::Right),
    )
}

pub fn build_battery_table(battery: &BatteryState, consumption: &ConsumptionProfile) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Capacity",
        "Charge",
        "Level",
        "Runtime",
        "Daily demand",
        "Appliance load",
        "Peak hours",
    ]);
    table.add_row(vec![
        Cell::new(battery.capacity).set_alignment(CellAlignment::Right),
        Cell::new(battery.current_charge).set_alignment(CellAlignment::Right),
        Cell::new(battery.percentage).set_alignment(CellAlignment::Right).fg(
            if battery.percentage < Percentage(20.0) {
                Color::Red
            } else if battery.percentage < Percentage(50.0) {
                Color::DarkYellow
            } else {
                Color::Green
            },
        ),
        Cell::new(battery.runtime).set_alignment(CellAlignment::Right).fg(
            if battery.runtime > Hours(12.0) { Color::Green } else { Color::Reset },
        ),
        Cell::new(consumption.daily_demand).set_alignment(CellAlignment::Right),
        Cell::new(consumption.total_load()).set_alignment(CellAlignment::Right).fg(
            if consumption.total_load() > consumption.daily_demand {
                Color::Red
            } else {
                Color::Reset
            },
        ),
        Cell::new(&consumption.peak_hours).add_attribute(Attribute::Dim),
    ]);
    table
}

const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Critical => Color::Red,
        Priority::High => Color::DarkYellow,
        Priority::Medium => Color::Blue,
        Priority::Low => Color::Reset,
    }
}

/// Most urgent first.
pub fn build_recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Priority", "Category", "Message", "Action", "Impact", "Confidence"]);
    for recommendation in
        recommendations.iter().sorted_by_key(|recommendation| recommendation.priority)
    {
        table.add_row(vec![
            Cell::new(recommendation.priority).fg(priority_color(recommendation.priority)),
            Cell::new(recommendation.category),
            Cell::new(&recommendation.message),
            Cell::new(&recommendation.action).add_attribute(Attribute::Italic),
            Cell::new(recommendation.impact_score).set_alignment(CellAlignment::Right),
            Cell::new(recommendation.confidence_score)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

const fn status_color(status: Status) -> Color {
    match status {
        Status::Optimal => Color::Green,
        Status::Moderate => Color::DarkYellow,
        Status::NotRecommended => Color::Red,
    }
}

pub fn build_feasibility_table(feasibility: &Feasibility) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Status", "Score", "Reasons"]);
    table.add_row(vec![
        Cell::new(feasibility.status)
            .fg(status_color(feasibility.status))
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}/100", feasibility.score)).set_alignment(CellAlignment::Right),
        Cell::new(feasibility.summary()),
    ]);
    table
}

pub fn build_projection_table(cost: &CostAnalysis, carbon: &CarbonFootprint) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Daily", "Annual", "Notes"]);
    table.add_row(vec![
        Cell::new("Renewable generation"),
        Cell::new(cost.daily_renewable_generation).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(format!("grid usage {}", cost.daily_grid_usage)).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("Savings"),
        Cell::new(cost.daily_savings).set_alignment(CellAlignment::Right).fg(Color::Green),
        Cell::new(cost.annual_savings).set_alignment(CellAlignment::Right).fg(Color::Green),
        if cost.payback_period > Years::ZERO {
            Cell::new(format!("pays back in {} at {}", cost.payback_period, cost.grid_rate))
        } else {
            Cell::new("never pays back").fg(Color::Red)
        },
    ]);
    table.add_row(vec![
        Cell::new("Grid emissions"),
        Cell::new(carbon.current_emissions).set_alignment(CellAlignment::Right).fg(Color::Red),
        Cell::new(""),
        Cell::new("if all demand came from the grid").add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new("CO₂ reduction"),
        Cell::new(carbon.daily_reduction).set_alignment(CellAlignment::Right).fg(Color::Green),
        Cell::new(carbon.annual_savings).set_alignment(CellAlignment::Right).fg(Color::Green),
        Cell::new(format!("as much as {:.0} trees absorb", carbon.trees_equivalent)),
    ]);
    table
}
