use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dash::{api, dataset::Dataset};

const DEFAULT_DATA: &str = "data/spacex_launch_dash.csv";

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard for historical launch-outcome data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value = "8050", env = "LAUNCH_DASH_PORT")]
        port: u16,

        /// Path to the launch-records CSV
        #[arg(short, long, default_value = DEFAULT_DATA, env = "LAUNCH_DASH_DATA")]
        data: PathBuf,
    },
    /// Load the dataset and print a summary without serving
    Check {
        /// Path to the launch-records CSV
        #[arg(short, long, default_value = DEFAULT_DATA, env = "LAUNCH_DASH_DATA")]
        data: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "launch_dash=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16, data: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Loading launch records from {}", data.display());
    let dataset = Dataset::load(&data)?;
    tracing::info!(
        "Loaded {} records across {} sites",
        dataset.len(),
        dataset.sites().len()
    );

    let app = api::create_router(dataset);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("LaunchDash listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn check(data: PathBuf) -> anyhow::Result<()> {
    let dataset = Dataset::load(&data)?;
    let (min, max) = dataset.payload_bounds();

    println!("Dataset: {}", data.display());
    println!("Records: {}", dataset.len());
    println!("Payload range: {} - {} kg", min, max);
    println!("Sites:");
    for site in dataset.sites() {
        println!("  {}", site);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, data }) => serve(port, data).await?,
        Some(Commands::Check { data }) => check(data)?,
        // Default: start the server
        None => serve(8050, PathBuf::from(DEFAULT_DATA)).await?,
    }

    Ok(())
}
