//! Binary entrypoint for the `ltc` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Variables from a local .env behave like exported ones.
    dotenvy::dotenv().ok();
    ltc::logging::init();

    match ltc::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
