use std::process::ExitCode;

use clap::Parser;
use shopfront_cli::cli::Cli;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    shopfront_cli::init_tracing(cli.verbose);

    match shopfront_cli::run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("{}", shopfront_cli::failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
