pub mod ipapi;
pub mod nasa_power;
pub mod open_meteo;

use std::time::Duration;

use ureq::Agent;

/// Build a default client.
pub fn new_client() -> Agent {
    Agent::config_builder().timeout_global(Some(Duration::from_secs(10))).build().into()
}
