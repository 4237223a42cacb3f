//! # Usuarios Web Server
//!
//! The HTTP face of the `/usuarios` resource. Each handler validates its input
//! through an extractor, issues exactly one `UserStore` call, and maps the
//! outcome to a status code and JSON body.

use axum::{
    routing::{get, put},
    Router,
};
use configuration::Settings;
use database::{PgUserStore, UserStore};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod doc;
pub mod error;
pub mod handlers;
pub mod schemas;
pub mod validation;

pub use doc::ApiDoc;

/// The shared application state that all handlers can access.
///
/// Built once at startup and handed to the router; there is no global server
/// instance.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// Assembles the routes, documentation and middleware around `state`.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/usuarios",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/usuarios/:id",
            put(handlers::update_user).delete(handlers::delete_user),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Connects to PostgreSQL, applies migrations if configured, and serves until
/// Ctrl-C. The pool is closed once the server has stopped.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;

    let db_pool = database::connect(&settings.database).await?;
    if settings.database.run_migrations {
        database::run_migrations(&db_pool).await?;
    }
    let store = Arc::new(PgUserStore::new(db_pool));
    let app = build_router(AppState::new(store.clone()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped, closing database pool.");
    store.pool().close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
