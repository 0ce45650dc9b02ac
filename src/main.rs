//! Langbridge binary entrypoint kept minimal. The client lives in the library.

mod args;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    let log_level = args::determine_log_level(&args);
    langbridge::logging::init_logging(&log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Langbridge starting");
    let code = match args::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            if let Some(api) = err.downcast_ref::<langbridge::ApiError>() {
                eprintln!("error [{}/{}]: {api}", api.code(), api.status_code());
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::FAILURE
        }
    };
    tracing::info!("Langbridge exited");
    code
}
