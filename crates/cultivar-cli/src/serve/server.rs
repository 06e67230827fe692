//! HTTP surface: `GET /` renders the empty form, `POST /` handles a
//! submission and re-renders the same page with its outcome.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use cultivar_classifiers::artifact::ArtifactBundle;
use cultivar_classifiers::handler::{RequestHandler, RequestState};

use crate::serve::input::ServerConfig;
use crate::serve::page::render_page;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    handler: RequestHandler,
}

impl AppState {
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self {
            handler: RequestHandler::new(bundle),
        }
    }
}

/// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let features = state.handler.bundle().features();
    Html(render_page(features, &HashMap::new(), &RequestState::AwaitingInput).into_string())
}

async fn submit_handler(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let features = state.handler.bundle().features();
    let (values, outcome) = match form {
        Ok(Form(values)) => {
            let outcome = state.handler.submit(&values);
            (values, outcome)
        }
        Err(rejection) => {
            log::warn!("Unreadable form submission: {rejection}");
            (
                HashMap::new(),
                RequestState::Failed(format!("Invalid form submission: {}", rejection.body_text())),
            )
        }
    };
    Html(render_page(features, &values, &outcome).into_string())
}

/// Bind to the configured port and serve until Ctrl+C / SIGTERM.
pub async fn serve(config: &ServerConfig, bundle: Arc<ArtifactBundle>) -> Result<()> {
    let app = create_router(AppState::new(bundle));
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {e}");
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
}
