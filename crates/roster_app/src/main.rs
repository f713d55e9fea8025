use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = roster_app::Args::parse();
    match roster_app::run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("roster: {err:#}");
            ExitCode::FAILURE
        }
    }
}
