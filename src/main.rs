use anyhow::Context;
use clap::Parser;
use configuration::LogFormat;
use database::DbRepository;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

/// REST backend for collecting health questionnaires.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file (defaults to ./config.toml when present).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Port to listen on. Overrides PORT and the settings file.
    #[arg(long, short)]
    port: Option<u16>,

    /// Console log format. Overrides LOG_FORMAT and the settings file.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

/// The main entry point for the healthcare questionnaire API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = configuration::load_config(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(format) = cli.log_format {
        settings.logging.format = format;
    }

    // Held until exit so buffered file logs are flushed.
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server host '{}'", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!(
        %addr,
        db_host = %settings.database.host,
        db_name = %settings.database.database,
        url_configured = settings.database.url.is_some(),
        max_connections = settings.database.max_connections,
        "Configuration loaded."
    );

    // An unreachable store at boot is fatal.
    let pool = database::connect(&settings.database)
        .await
        .context("failed to connect to the database")?;
    let store = Arc::new(DbRepository::new(pool));
    tracing::info!("Database pool ready; starting web server.");

    web_server::run_server(addr, store).await
}
