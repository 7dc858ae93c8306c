mod cli;
mod config;
mod convert;
mod evaluate_cmd;
mod examples_cmd;
mod generate;
mod grid_cmd;
mod inspect_cmd;
mod logging;
mod predict_cmd;
mod presets;
mod setup;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Predict(args) => predict_cmd::run(args),
        Command::Inspect(args) => inspect_cmd::run(args),
        Command::Evaluate(args) => evaluate_cmd::run(args),
        Command::Grid(args) => grid_cmd::run(args),
        Command::Examples => examples_cmd::run(),
    }
}
