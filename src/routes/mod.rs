use axum::Router;
use tower_http::services::ServeDir;

use crate::{config::AppConfig, state::AppState};

pub mod doc;
pub mod health;
pub mod productos;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .merge(productos::router(&config.productos_path()))
        .nest_service(&config.files_path(), ServeDir::new(&config.upload_dir))
}
