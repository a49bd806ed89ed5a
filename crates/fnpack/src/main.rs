use clap::Parser;

mod cli;
mod deploy;
mod error;
mod logging;
mod manifest;

use cli::Args;
use deploy::run_packaging;
use logging::{log_error, log_section, log_success};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let out_dir = args.resolved_out_dir();

    log_section("Preparing deployment bundle");

    match run_packaging(&args.project_dir, &out_dir).await {
        Ok(_) => log_success("Build and deployment preparation completed."),
        Err(error) => {
            log_error(&error.to_string());
            std::process::exit(1);
        }
    }
}
