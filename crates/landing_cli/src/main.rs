//! Landing page API server entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment variables.
//! - Initialize logging, open the database, and serve the RPC router.
//! - Optionally persist the built-in branding before serving.

use clap::Parser;
use landing_core::db::open_db;
use landing_core::{default_log_level, init_logging, SqliteLandingPageService};
use landing_rpc::{serve, ServerConfig, DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "landing-server", version, about = "Coin landing page content API")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "SERVER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// SQLite database file; created and migrated on first start.
    #[arg(long, env = "LANDING_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "LANDING_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "LANDING_LOG_DIR")]
    log_dir: Option<String>,

    /// Persist the built-in branding when the store has none.
    #[arg(long, env = "LANDING_SEED_BRANDING")]
    seed_branding: bool,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            db_path: self.db_path.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, args.log_dir.as_deref()) {
        eprintln!("landing-server: {err}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("landing-server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.server_config();
    let conn = open_db(&config.db_path)?;

    if args.seed_branding {
        let service = SqliteLandingPageService::try_from_connection(&conn)?;
        let branding = service.seed_default_branding()?;
        info!(
            "event=branding_seed module=cli status=ok id={} coin_symbol={}",
            branding.id, branding.coin_symbol
        );
    }

    serve(&config, conn).await?;
    Ok(())
}
