mod assess;
mod policy;
mod scenario;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::assess::assess;
use crate::cli::{policy::PolicyArgs, scenario::ScenarioArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: gather the data, score the scenario, and print the tables.
    #[clap(name = "assess")]
    Assess(Box<ScenarioArgs>),

    /// Score the scenario and export it as a JSON document.
    #[clap(name = "export")]
    Export(Box<ExportArgs>),

    /// Print the effective policy as TOML.
    #[clap(name = "policy")]
    Policy(PolicyArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output file, standard output by default.
    #[clap(long, short, env = "KIRAN_EXPORT_PATH")]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,
}
