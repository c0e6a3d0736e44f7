//! HTTP gateway: routing, health check, server startup.

pub mod openapi;
pub mod state;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use serde::Serialize;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::jwt_auth_middleware;
use crate::config::GatewayConfig;
use state::AppState;

/// Health check response
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "a1b2c3d")]
    pub version: String,
}

/// Service health and build version
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthData)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    let status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::error!("database health check failed: {}", e);
            "degraded"
        }
    };
    Json(HealthData {
        status: status.to_string(),
        version: env!("GIT_HASH").to_string(),
    })
}

/// Assemble the complete application router.
///
/// Everything except `/auth/login`, `/health` and the docs requires a valid
/// bearer token.
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new().route("/login", post(crate::auth::handlers::login));

    let account_routes = Router::new()
        .route("/{id}", get(crate::account::handlers::get_account))
        .route("/deposit/{id}", post(crate::account::handlers::deposit))
        .route("/withdraw/{id}", post(crate::account::handlers::withdraw));

    let user_routes = Router::new()
        .route("/", post(crate::user::handlers::create_user))
        .route("/list", get(crate::user::handlers::list_users))
        .route("/me", get(crate::user::handlers::me));

    let transfer_routes = Router::new().route("/", post(crate::transfer::handlers::transfer));

    let protected = Router::new()
        .nest("/account", account_routes)
        .nest("/user", user_routes)
        .nest("/transfer", transfer_routes)
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth_routes)
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("api docs at http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
