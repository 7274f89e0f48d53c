use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    response::Html,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::constants::RELAY_PATH;
use crate::relay;
use crate::sheets::SheetsClient;

/// Shared, read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sheets: SheetsClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            sheets: SheetsClient::new(config.sheets_url.clone()),
        }
    }
}

pub fn router(config: &Config) -> Router {
    let state = AppState::from_config(config);

    let mut app = Router::new()
        .route("/", get(root))
        .route(RELAY_PATH, post(relay::submit_movement))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.allowed_origin {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods([Method::POST])
                .allow_headers([CONTENT_TYPE]),
        );
    }

    app.with_state(state)
}

async fn root() -> Html<&'static str> {
    Html("<h1>Fini</h1><p>Registra tus movimientos al instante.</p>")
}
