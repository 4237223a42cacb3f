use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Usuarios service.
#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command. Any startup failure is fatal.
    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => handle_serve(cli.config).await,
        Commands::Migrate => handle_migrate(cli.config).await,
        Commands::Openapi => handle_openapi(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Fatal error.");
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A CRUD HTTP API for the user resource.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file (defaults to an optional `config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (the default).
    Serve,
    /// Apply database migrations and exit.
    Migrate,
    /// Print the OpenAPI document as JSON.
    Openapi,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn handle_serve(config: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = configuration::load_settings(config.as_deref())?;
    web_server::run_server(&settings).await
}

async fn handle_migrate(config: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = configuration::load_settings(config.as_deref())?;
    let db_pool = database::connect(&settings.database).await?;
    database::run_migrations(&db_pool).await?;
    db_pool.close().await;
    Ok(())
}

fn handle_openapi() -> anyhow::Result<()> {
    println!("{}", web_server::doc::openapi_json()?);
    Ok(())
}
