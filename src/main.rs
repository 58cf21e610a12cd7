/* 3rd party libraries */
use clap::{Arg, Command};
use log::{debug, error, info};

/* Custom libraries */
use simulation::Simulation;

/* Modules */
mod config;
mod elevator;
mod shared;
mod simulation;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Discrete-tick simulation of a single elevator car")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .value_parser(clap::value_parser!(String))
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("ticks")
                .short('t')
                .long("ticks")
                .takes_value(true)
                .value_parser(clap::value_parser!(u32))
                .help("Tick limit, overrides simulation.max_ticks"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the car status as a JSON line after every tick"),
        )
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.toml");
    let json = matches.is_present("json");

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(config_path));
    let max_ticks = matches
        .get_one::<u32>("ticks")
        .copied()
        .unwrap_or(config.simulation.max_ticks);

    info!(
        "Starting simulation: top floor {}, {} passengers, tick limit {}",
        config.car.max_floor,
        config.passengers.len(),
        max_ticks
    );

    let mut simulation = unwrap_or_exit!(Simulation::new(&config));
    let outcome = simulation.run(max_ticks, |sim| report(sim, json));
    let ticks = unwrap_or_exit!(outcome.into_result(), 2);
    info!("Simulation finished in {} ticks", ticks);
}

fn report(simulation: &Simulation, json: bool) {
    let status = simulation.car().status();
    if !json {
        let car = simulation.car();
        debug!(
            "Tick {}: height {} towards {} going {}, {} of {} passengers travelling\n{}",
            simulation.ticks(),
            car.height(),
            car.target_floor(),
            car.direction(),
            simulation.travelling(),
            simulation.persons().len(),
            status
        );
        return;
    }

    match serde_json::to_string(&status) {
        Ok(line) => println!("{}", line),
        Err(e) => error!("Failed to serialize car status: {}", e),
    }
}
