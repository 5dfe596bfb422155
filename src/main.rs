use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{error, info};

use most_active_cookie::utils::setup_logging;
use most_active_cookie::{analyze_cookie_log, print_most_active, Args, RunConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RunConfig::from(&args);
    setup_logging(&config.logging)?;

    info!(action = "parse", component = "cli", arguments = ?args, "Provided cli arguments");

    match analyze_cookie_log(&config) {
        Ok(cookies) => {
            print_most_active(&mut io::stdout().lock(), &cookies)?;
            Ok(())
        }
        Err(e) => {
            let format_error = e.is_format();
            let e = anyhow::Error::from(e);
            error!(format_error, "Error: {:#}", e);
            // with logging off the error! above goes nowhere
            if !config.logging.level.is_enabled() {
                eprintln!("Error: {:#}", e);
            }
            std::process::exit(1);
        }
    }
}
