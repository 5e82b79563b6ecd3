use std::sync::Arc;

use crate::config::ChartHubConfig;
use crate::db::pool::{open_ro_pool, DbPool};

/// Shared application state, passed to all route handlers via `axum::extract::State`.
pub struct AppState {
    pub config: ChartHubConfig,

    /// Read-only pool over the chart DB (None if the file does not exist yet).
    pub chart_pool: Option<DbPool>,
}

impl AppState {
    pub fn new(config: ChartHubConfig) -> Arc<Self> {
        let chart_pool = open_ro_pool(&config.db_path, 4);
        Arc::new(Self { config, chart_pool })
    }

    pub fn db_pool(&self) -> Option<&DbPool> {
        self.chart_pool.as_ref()
    }
}
