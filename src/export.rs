use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::Path,
};

use crate::{prelude::*, scenario::Scenario};

/// Write the scenario as a single JSON document, to stdout when there is no path.
#[instrument(skip_all, fields(path = ?path))]
pub fn write_json(scenario: &Scenario, path: Option<&Path>) -> Result {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            write_to(scenario, BufWriter::new(file))?;
            info!("exported");
        }
        None => write_to(scenario, stdout().lock())?,
    }
    Ok(())
}

fn write_to(scenario: &Scenario, mut writer: impl Write) -> Result {
    serde_json::to_writer_pretty(&mut writer, scenario)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{
        core::{consumption::ConsumptionProfile, policy::Policy},
        provider::Provider,
        quantity::{currency::KilowattHourRate, energy::KilowattHours},
    };

    #[test]
    fn test_export_document() -> Result {
        let scenario = Scenario::builder()
            .provider(&Provider::new(true))
            .battery_capacity(KilowattHours(100.0))
            .battery_charge(KilowattHours(10.0))
            .consumption(ConsumptionProfile::try_new(
                KilowattHours(25.0),
                "18:00-22:00".to_owned(),
                vec!["Lights:0.1:6".parse()?],
            )?)
            .grid_rate(KilowattHourRate(8.5))
            .policy(Policy::default())
            .evaluate()?;

        let mut buffer = Vec::new();
        write_to(&scenario, &mut buffer)?;
        let document: Value = serde_json::from_slice(&buffer)?;

        for key in [
            "generated_at",
            "location",
            "snapshot",
            "weather",
            "battery",
            "consumption",
            "policy",
            "recommendations",
            "feasibility",
            "cost",
            "carbon",
        ] {
            assert!(document.get(key).is_some(), "missing `{key}`");
        }
        assert_eq!(document["weather"], Value::Null);
        assert_eq!(document["location"]["origin"], "fallback");
        assert_eq!(document["snapshot"]["solar"]["data"][0]["label"], "Mon");
        assert_eq!(document["consumption"]["peak_hours"], "18:00-22:00");
        assert_eq!(document["consumption"]["appliances"][0]["power"], 0.1);
        assert_eq!(document["battery"]["percentage"], 10.0);
        assert_eq!(document["recommendations"][0]["category"], "solar");
        assert_eq!(document["recommendations"][0]["priority"], "critical");
        assert_eq!(document["cost"]["grid_rate"], 8.5);
        Ok(())
    }
}
