mod args;
mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    cli::run(args).unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        ExitCode::FAILURE
    })
}
