#[macro_use]
mod macros;

pub mod currency;
pub mod energy;
pub mod mass;
pub mod power;
pub mod proportions;
pub mod time;
