use pocket_rolodex::{logging, prelude::run_app};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    match run_app().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
