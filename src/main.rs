use std::process;

use geodeck::cli::build_render_cli;
use geodeck::commands::{CommandFactory, GeoDeckCommandFactory};
use geodeck::utils::logger::Logger;

fn main() {
    let matches = build_render_cli().get_matches();

    if let Err(e) = Logger::init_global_logger(matches.get_flag("verbose")) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let logger = match Logger::from_option(matches.get_one::<String>("log-file").map(String::as_str)) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = GeoDeckCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
