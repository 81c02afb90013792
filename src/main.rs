mod cli;
mod display;
mod footer;
mod models;
mod telemetry;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    telemetry::init_tracing();
    let cli = Cli::parse();
    cli::run(cli);
}
