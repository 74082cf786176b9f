//! # calc_web - Estimator Web Form
//!
//! A single form page posting to `/report`, which answers with the plot,
//! rooms and earthwork text blocks rendered by calc_core.
//!
//! ## Routes
//!
//! - `GET /` - input form
//! - `POST /report` - report page
//! - `GET /health` - `{"status":"ok"}`

pub mod config;
pub mod form;
pub mod handlers;
pub mod html;
pub mod logger;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use config::WebConfig;

/// Build the application router.
pub fn app() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/report", post(handlers::report))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
}
