use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::charts::{self, ChartKind, ChartSeries};
use crate::error::ChartError;
use crate::state::AppState;

/// Logical route names and the paths they resolve to.
///
/// The dashboard and the test suite look paths up by name instead of
/// hard-coding URLs.
pub const NAMED_ROUTES: &[(&str, &str)] = &[
    ("candlestick-data", "/api/candlestick-data"),
    ("line-chart-data", "/api/line-chart-data"),
    ("bar-chart-data", "/api/bar-chart-data"),
    ("pie-chart-data", "/api/pie-chart-data"),
];

/// Resolve a logical route name to its URL path.
pub fn url_for(name: &str) -> Option<&'static str> {
    NAMED_ROUTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, path)| *path)
}

// ── Route definitions ────────────────────────────────────────────────────

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(api_health))
        .route("/api/candlestick-data", get(api_candlestick_data))
        .route("/api/line-chart-data", get(api_line_chart_data))
        .route("/api/bar-chart-data", get(api_bar_chart_data))
        .route("/api/pie-chart-data", get(api_pie_chart_data))
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn api_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "db_connected": state.db_pool().is_some(),
    }))
}

async fn api_candlestick_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ChartError> {
    let pool = state
        .db_pool()
        .ok_or_else(|| ChartError::Db("chart db not available".to_string()))?;
    let conn = pool.get()?;
    let data = charts::fetch_candles(&conn)?;
    Ok(Json(json!({ "data": data })))
}

async fn api_line_chart_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartSeries>, ChartError> {
    series_response(&state, ChartKind::Line)
}

async fn api_bar_chart_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartSeries>, ChartError> {
    series_response(&state, ChartKind::Bar)
}

async fn api_pie_chart_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartSeries>, ChartError> {
    series_response(&state, ChartKind::Pie)
}

/// Shared body of the three `{labels, data}` endpoints.
fn series_response(state: &AppState, kind: ChartKind) -> Result<Json<ChartSeries>, ChartError> {
    let pool = state
        .db_pool()
        .ok_or_else(|| ChartError::Db("chart db not available".to_string()))?;
    let conn = pool.get()?;
    let series = charts::fetch_series(&conn, kind)?;
    Ok(Json(series))
}
