use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use naimat_exporter::config::{load_config, print_schema};
use naimat_exporter::startup;
use naimat_exporter::utils::logger::init_logging;

/// Synthetic meal-rescue metrics exporter and inference gateway.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, env = "NAIMAT_CONFIG", default_value = "./config.yaml")]
    config: String,

    /// Print the configuration JSON schema and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.print_schema {
        return match print_schema() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error rendering configuration schema: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match load_config(&args.config) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!(
        service = %config.logging.service_name,
        version = %config.logging.service_version,
        "Starting"
    );

    match startup::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error, shutting down");
            ExitCode::FAILURE
        }
    }
}
