pub mod status;

use axum::{Router, routing::any};

use crate::AppState;

/// Build the status routes
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", any(status::report))
        .route("/index.php", any(status::report))
}
