//! `schedshot` - `Planning Center` schedule to image generator.

use std::env;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use schedshot::config::Config;
use schedshot::error::Result;
use schedshot::planning_center::PlanningCenterClient;
use schedshot::{export, render, schedule};

/// One-line usage hint, printed when credentials or arguments are missing
const USAGE: &str =
    "PC_ID=\"applicationid\" PC_SECRET=\"applicationsecret\" schedshot audio out.png";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let args: Vec<String> = env::args().skip(1).collect();

    // No fancy argument handling: two positionals and both credentials,
    // or a usage line and a clean exit.
    if args.len() != 2 || !config.has_credentials() {
        println!("{USAGE}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let position_filter = &args[0];
    let output_path = PathBuf::from(&args[1]);

    run(&config, position_filter, &output_path).await
}

/// Run the fetch, render, export pipeline
async fn run(config: &Config, position_filter: &str, output_path: &Path) -> Result<()> {
    let client = PlanningCenterClient::new(config);

    let services = schedule::build_schedule(&client, position_filter).await?;
    info!("Fetched {} upcoming services", services.len());

    let generated_at = Local::now().format("%m/%d/%Y %H:%M:%S").to_string();
    let html = render::render_schedule(&services, &generated_at)?;

    export::write_image(&html, output_path).await?;
    info!("Schedule image written to {}", output_path.display());

    Ok(())
}
