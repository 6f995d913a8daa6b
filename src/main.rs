#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod export;
mod location;
mod prelude;
mod provider;
mod quantity;
mod scenario;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, assess},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Assess(args) => {
            assess(&args)?;
        }
        Command::Export(args) => {
            let scenario = args.scenario.evaluate()?;
            export::write_json(&scenario, args.output.as_deref())?;
        }
        Command::Policy(args) => {
            args.run()?;
        }
    }

    info!("done!");
    Ok(())
}
