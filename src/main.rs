//! rfcs - RFC index queries with a local cache

use std::process::ExitCode;

use rfcs::cli::is_broken_pipe;

fn main() -> ExitCode {
    match rfcs::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // The reader went away (`rfcs list | head`); nothing left to report
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
