//! Fleetbook - record and edit a small catalog of vehicles
//!
//! A CLI front end over the vehicle store in vehicles.json.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use fleetbook_app::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match commands::execute(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
