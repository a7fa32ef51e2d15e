use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use database::QuestionnaireStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// Questionnaires are small; anything bigger is rejected before parsing.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionnaireStore>,
}

/// Builds the application router with its middleware stack.
pub fn router(store: Arc<dyn QuestionnaireStore>) -> Router {
    let app_state = Arc::new(AppState { store });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::api_running))
        .route("/questionnaires", get(handlers::get_questionnaires))
        .route("/submit-questionnaire", post(handlers::submit_questionnaire))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}

/// Serves the API on `addr` until Ctrl-C or SIGTERM.
pub async fn run_server(addr: SocketAddr, store: Arc<dyn QuestionnaireStore>) -> anyhow::Result<()> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received.");
}
