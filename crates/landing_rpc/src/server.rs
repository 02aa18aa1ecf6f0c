//! Router assembly and server startup.

use crate::config::ServerConfig;
use crate::procedures;
use axum::routing::{get, post};
use axum::Router;
use log::{error, info};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state: the single store connection.
pub struct AppState {
    pub(crate) conn: Mutex<Connection>,
}

impl AppState {
    /// Wraps a migrated connection for use by procedure handlers.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind `{addr}`: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped with error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Builds the procedure router with permissive CORS.
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Queries
        .route("/healthcheck", get(procedures::healthcheck))
        .route("/getLandingPageData", get(procedures::get_landing_page_data))
        .route("/getBrandingConfig", get(procedures::get_branding_config))
        // Mutations
        .route(
            "/createLandingPageContent",
            post(procedures::create_landing_page_content),
        )
        .route(
            "/updateBrandingConfig",
            post(procedures::update_branding_config),
        )
        .route("/createTeamMember", post(procedures::create_team_member))
        .route("/createRoadmapItem", post(procedures::create_roadmap_item))
        .fallback(procedures::unknown_procedure)
        .layer(cors)
        .with_state(state)
}

/// Serves the procedure router until Ctrl+C.
pub async fn serve(config: &ServerConfig, conn: Connection) -> Result<(), ServerError> {
    let app = router(Arc::new(AppState::new(conn)));
    let addr = config.listen_label();

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| {
            error!("event=server_start module=rpc status=error addr={addr} error={source}");
            ServerError::Bind {
                addr: addr.clone(),
                source,
            }
        })?;

    info!(
        "event=server_start module=rpc status=ok addr={} db_path={} version={}",
        addr,
        config.db_path.display(),
        landing_core::core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=rpc status=ok addr={addr}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until the process is killed.
        error!("event=shutdown_signal module=rpc status=error error={err}");
        std::future::pending::<()>().await;
    }
}
