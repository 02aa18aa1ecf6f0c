//! Procedure handlers.
//!
//! Queries answer `GET /<name>`, mutations answer `POST /<name>` with a JSON
//! body. Successful calls return `{"result":{"data": ...}}`.

use crate::error::RpcError;
use crate::server::SharedState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use chrono::Utc;
use landing_core::{
    BrandingConfig, BrandingConfigPatch, ContentSection, LandingPageData, NewContentSection,
    NewRoadmapItem, NewTeamMember, RoadmapItem, ServiceResult, SqliteLandingPageService,
    TeamMember, Timestamp,
};
use log::{info, warn};
use serde::Serialize;
use std::time::Instant;

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct RpcEnvelope<T> {
    pub result: RpcData<T>,
}

#[derive(Debug, Serialize)]
pub struct RpcData<T> {
    pub data: T,
}

impl<T> RpcEnvelope<T> {
    fn new(data: T) -> Self {
        Self {
            result: RpcData { data },
        }
    }
}

pub type RpcResponse<T> = Result<Json<RpcEnvelope<T>>, RpcError>;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: Timestamp,
}

pub async fn healthcheck() -> Json<RpcEnvelope<Health>> {
    Json(RpcEnvelope::new(Health {
        status: "ok",
        timestamp: Utc::now(),
    }))
}

pub async fn get_landing_page_data(
    State(state): State<SharedState>,
) -> RpcResponse<LandingPageData> {
    with_landing_service(state, "getLandingPageData", |service| {
        service.get_landing_page_data()
    })
    .await
}

pub async fn get_branding_config(State(state): State<SharedState>) -> RpcResponse<BrandingConfig> {
    with_landing_service(state, "getBrandingConfig", |service| {
        service.get_branding_config()
    })
    .await
}

pub async fn create_landing_page_content(
    State(state): State<SharedState>,
    payload: Result<Json<NewContentSection>, JsonRejection>,
) -> RpcResponse<ContentSection> {
    let Json(input) = decode("createLandingPageContent", payload)?;
    with_landing_service(state, "createLandingPageContent", move |service| {
        service.create_landing_page_content(&input)
    })
    .await
}

pub async fn update_branding_config(
    State(state): State<SharedState>,
    payload: Result<Json<BrandingConfigPatch>, JsonRejection>,
) -> RpcResponse<BrandingConfig> {
    let Json(patch) = decode("updateBrandingConfig", payload)?;
    with_landing_service(state, "updateBrandingConfig", move |service| {
        service.update_branding_config(&patch)
    })
    .await
}

pub async fn create_team_member(
    State(state): State<SharedState>,
    payload: Result<Json<NewTeamMember>, JsonRejection>,
) -> RpcResponse<TeamMember> {
    let Json(input) = decode("createTeamMember", payload)?;
    with_landing_service(state, "createTeamMember", move |service| {
        service.create_team_member(&input)
    })
    .await
}

pub async fn create_roadmap_item(
    State(state): State<SharedState>,
    payload: Result<Json<NewRoadmapItem>, JsonRejection>,
) -> RpcResponse<RoadmapItem> {
    let Json(input) = decode("createRoadmapItem", payload)?;
    with_landing_service(state, "createRoadmapItem", move |service| {
        service.create_roadmap_item(&input)
    })
    .await
}

pub async fn unknown_procedure(uri: Uri) -> RpcError {
    warn!(
        "event=rpc_call module=rpc status=error procedure=unknown path={}",
        uri.path()
    );
    RpcError::NotFound(format!("no procedure on path `{}`", uri.path()))
}

fn decode<T>(
    procedure: &'static str,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, RpcError> {
    payload.map_err(|rejection| {
        warn!(
            "event=rpc_call module=rpc status=error procedure={procedure} error_code=bad_input error={}",
            rejection.body_text()
        );
        RpcError::from(rejection)
    })
}

/// Runs one use-case against the shared connection on the blocking pool.
async fn with_landing_service<T, F>(
    state: SharedState,
    procedure: &'static str,
    call: F,
) -> RpcResponse<T>
where
    T: Send + 'static,
    F: for<'conn> FnOnce(&SqliteLandingPageService<'conn>) -> ServiceResult<T> + Send + 'static,
{
    let started_at = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || -> ServiceResult<T> {
        let conn = state.conn.lock();
        let service = SqliteLandingPageService::try_from_connection(&conn)?;
        call(&service)
    })
    .await
    .map_err(|err| RpcError::Internal(format!("procedure task failed: {err}")))?;

    match outcome {
        Ok(data) => {
            info!(
                "event=rpc_call module=rpc status=ok procedure={} duration_ms={}",
                procedure,
                started_at.elapsed().as_millis()
            );
            Ok(Json(RpcEnvelope::new(data)))
        }
        Err(err) => {
            let err = RpcError::from(err);
            warn!(
                "event=rpc_call module=rpc status=error procedure={} duration_ms={} error_code={}",
                procedure,
                started_at.elapsed().as_millis(),
                err.code()
            );
            Err(err)
        }
    }
}
