use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use artisan_pricing::cli::{Cli, Outcome, run_command};
use artisan_pricing::config::Settings;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    match run_command(cli.command, &settings, cli.json) {
        Ok((out, Outcome::Priced)) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Ok((out, Outcome::Unsolvable)) => {
            println!("{}", out);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
