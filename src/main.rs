//! Flashcards - REST backend for the flashcard study tool

use std::net::SocketAddr;
use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flashcards::{
    api::{build_router, AppState},
    config::{default_config_path, get_data_dir, load_config, load_config_from, Config},
    db::{count_flashcards, init_database},
};

#[derive(Parser)]
#[command(name = "flashcards")]
#[command(version)]
#[command(about = "REST backend for the flashcard study tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Host to bind to
    #[arg(short = 'H', long, env = "FLASHCARDS_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FLASHCARDS_PORT")]
    port: Option<u16>,

    /// Database path (defaults to the platform data directory)
    #[arg(short, long, env = "FLASHCARDS_DATABASE")]
    database: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "FLASHCARDS_CONFIG")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve,
    /// Initialize the database
    Init,
    /// Show configuration info
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flashcards=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config_from(Path::new(path))?,
        None => load_config(),
    };

    let host = cli.host.clone().unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database.get_path().to_string_lossy().to_string());

    match &cli.command {
        Some(Commands::Init) => {
            println!("Initializing database at: {}", db_path);
            let pool = init_database(&db_path).await?;
            let count = count_flashcards(&pool).await?;
            println!("Database ready ({} flashcards)", count);
            Ok(())
        }
        Some(Commands::Config) => {
            print_config(&cli, &config, &host, port, &db_path);
            Ok(())
        }
        Some(Commands::Serve) | None => run_server(&host, port, &db_path).await,
    }
}

async fn run_server(host: &str, port: u16, db_path: &str) -> anyhow::Result<()> {
    tracing::info!("Initializing database at: {}", db_path);
    let pool = init_database(db_path).await?;

    let app = build_router(AppState::new(pool.clone()));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    tracing::info!("Server running on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn print_config(cli: &Cli, config: &Config, host: &str, port: u16, db_path: &str) {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| default_config_path().to_string_lossy().to_string());

    println!("Flashcards Configuration");
    println!("========================");
    println!("Config file:    {}", config_path);
    println!("Data directory: {}", get_data_dir().display());
    println!("Database path:  {}", db_path);
    println!("Server:         {}:{}", host, port);
    if let Ok(toml) = toml::to_string_pretty(config) {
        println!();
        println!("{}", toml.trim_end());
    }
}
