extern crate env_logger;
#[macro_use]
extern crate log;
extern crate polycalc;

use log::LevelFilter;
use polycalc::cli;
use polycalc::menu::Menu;
use std::env;
use std::io;
use std::process;

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter(None, level);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();
}

fn main() {
    let matches = cli::app().get_matches();

    init_logger(matches.occurrences_of("v"));

    match matches.values_of("EXPRESSION") {
        Some(expressions) => {
            let stdout = io::stdout();
            let stderr = io::stderr();
            match cli::sum_expressions(expressions, &mut stdout.lock(), &mut stderr.lock()) {
                Ok(0) => {}
                Ok(status) => process::exit(status),
                Err(e) => {
                    eprintln!("I/O error: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            info!("Starting interactive menu");
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut menu = Menu::new(stdin.lock(), stdout.lock());
            if let Err(e) = menu.run() {
                eprintln!("I/O error: {}", e);
                process::exit(1);
            }
        }
    }
}
