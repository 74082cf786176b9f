//! HTTP handlers
//!
//! The router carries no state: every request builds its own estimate and
//! the catalogs are process-wide statics.

use axum::{extract::rejection::FormRejection, response::Html, Form, Json};
use serde::Serialize;

use calc_core::materials::DEFAULT_CATALOG;

use crate::form::ReportForm;
use crate::html::{render_index, render_report};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
}

/// `GET /` - the input form
pub async fn index() -> Html<String> {
    Html(render_index(&DEFAULT_CATALOG))
}

/// `POST /report` - run the estimate and render the three report blocks
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/report \
///   -d largura=20 -d comprimento=30 \
///   --data-urlencode $'comodos_text=quarto 3x3\nsala 4x3' \
///   -d do_terraplenagem=on -d profundidade=0.5 -d material=areia \
///   -d custo_mao_obra=30 -d contingencia=10
/// ```
pub async fn report(body: Result<Form<Vec<(String, String)>>, FormRejection>) -> Html<String> {
    let pairs = match body {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable form body, using defaults");
            Vec::new()
        }
    };
    let request = ReportForm::from_pairs(pairs).to_request();
    tracing::info!(
        width_m = request.plot.width_m,
        length_m = request.plot.length_m,
        rooms = request.rooms.len(),
        earthwork = request.earthwork.is_some(),
        "Report requested"
    );

    let report = request.run();
    Html(render_report(&report))
}

/// `GET /health`
pub async fn health_check() -> Json<HealthCheckResponse> {
    tracing::debug!("Health check requested");
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
