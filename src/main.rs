use clap::Parser;
use log::warn;
use snafu::ErrorCompat;

mod args;
mod demo;

fn main() {
    let parsed = args::Args::parse();
    if parsed.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let res = demo::run_scenario(parsed.config, parsed.scenario, parsed.reference, parsed.out);
    if let Err(e) = res {
        warn!("Error occured {:?}", e);
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
