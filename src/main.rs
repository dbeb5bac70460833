/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::info;
use std::io;
use std::path::Path;

/* Custom libraries */
use console::Console;

/* Modules */
mod config;
mod console;
mod dispatcher;
mod elevator;
mod shared;

fn cli() -> Command<'static> {
    Command::new("elevator_bank")
        .about("Step-by-step simulation of a bank of elevators")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .short('n')
                .takes_value(true)
                .help("Number of elevators, skips the prompt"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print elevator status as JSON lines"),
        )
}

/* Main */
fn main() -> io::Result<()> {
    let matches = cli().get_matches();

    // Load the configuration
    let config_path = Path::new(matches.value_of("config").unwrap_or("config.toml"));
    let mut config = unwrap_or_exit!(config::load_config(config_path), "Configuration");

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if !config_path.exists() {
        info!(
            "No configuration file at {}, using default settings",
            config_path.display()
        );
    }

    // Command line overrides
    if matches.is_present("json") {
        config.console.json_status = true;
    }
    let fleet_size = match matches.value_of("elevators") {
        Some(value) => Some(unwrap_or_exit!(
            console::input::parse_fleet_size(value),
            "--elevators"
        )),
        None => config.simulation.n_elevators.map(|n_elevators| {
            unwrap_or_exit!(
                console::validate_fleet_size(n_elevators),
                "simulation.n_elevators"
            )
        }),
    };

    // Start the console input thread
    let (input_tx, input_rx) = cbc::unbounded::<String>();
    let _input_thread = console::spawn_stdin_reader(input_tx)?;

    // Run the simulation on this thread
    let stdout = io::stdout();
    let mut console = Console::new(&config.console, input_rx, stdout.lock());
    console.run(fleet_size)?;

    Ok(())
}
