use crate::{
    cli::scenario::ScenarioArgs,
    prelude::*,
    tables::{
        build_battery_table,
        build_feasibility_table,
        build_overview_table,
        build_projection_table,
        build_recommendations_table,
        build_snapshot_table,
    },
};

#[instrument(skip_all)]
pub fn assess(args: &ScenarioArgs) -> Result {
    let scenario = args.evaluate()?;
    let assessment = &scenario.assessment;

    println!("{}", build_overview_table(&scenario.location, scenario.weather.as_ref()));
    println!("{}", build_snapshot_table(&scenario.snapshot));
    println!("{}", build_battery_table(&scenario.battery, &scenario.consumption));
    if let Some(feasibility) = &assessment.feasibility {
        println!("{}", build_feasibility_table(feasibility));
    }
    if let (Some(cost), Some(carbon)) = (&assessment.cost, &assessment.carbon) {
        println!("{}", build_projection_table(cost, carbon));
    }
    if assessment.recommendations.is_empty() {
        info!("nothing to recommend");
    } else {
        println!("{}", build_recommendations_table(&assessment.recommendations));
    }
    Ok(())
}
