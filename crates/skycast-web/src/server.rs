//! Web server for the Skycast dashboard.
//!
//! The fallback handler plays the bootstrap role: any method on any path
//! is answered with the fixed HTML shell. The view itself lives behind
//! `/view`, which the shell's glue module calls into.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use parking_lot::Mutex;
use serde::Deserialize;

use skycast_core::Config;
use skycast_dashboard::{render, Dashboard};
use skycast_weather::OpenMeteoClient;

use crate::shell::{BOOTSTRAP_SHELL, DASHBOARD_MODULE};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Mutex<Dashboard>>,
    client: Arc<OpenMeteoClient>,
}

impl AppState {
    pub fn new(client: OpenMeteoClient) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(Dashboard::new())),
            client: Arc::new(client),
        }
    }
}

/// Create the router: the view routes plus the bootstrap fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/view", get(view_handler))
        .route("/dashboard.js", get(module_handler))
        .fallback(shell_handler)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let client = OpenMeteoClient::with_base_url(&config.weather.forecast_url);
    let state = AppState::new(client);
    let app = create_router(state);

    let addr = config.server.bind_addr();
    tracing::info!("Skycast dashboard starting at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct ViewParams {
    location: Option<String>,
}

/// Serve the rendered dashboard.
///
/// `?location=` carries the raw text of the coordinate field; the first
/// request without one plays the part of the view mounting. Either way a
/// triggered fetch completes before the response is rendered, and the lock
/// is never held across the await.
async fn view_handler(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Html<String> {
    let request = {
        let mut dashboard = state.dashboard.lock();
        match params.location.as_deref() {
            Some(raw) => Some(dashboard.set_location_input(raw)),
            None if !dashboard.has_fetched() => Some(dashboard.initial_fetch()),
            None => None,
        }
    };

    if let Some(request) = request {
        skycast_dashboard::refresh(&state.dashboard, &state.client, request).await;
    }

    Html(render(&state.dashboard.lock()))
}

/// Serve the glue module the shell references.
async fn module_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript")],
        DASHBOARD_MODULE,
    )
}

/// Bootstrap responder: any method, any path, one fixed document.
async fn shell_handler() -> Html<&'static str> {
    Html(BOOTSTRAP_SHELL)
}
