//! `GET /health`, mounted outside the versioned API.
//!
//! The report is `"ok"` only when the database answers and its
//! `_sqlx_migrations` table holds every migration this binary embeds. Pool
//! occupancy is included next to the configured connection limit.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the database is reachable and the schema is current,
    /// `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
    /// Absent when the migrations table could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrations: Option<MigrationHealth>,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    pub open_connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

#[derive(Debug, Serialize)]
pub struct MigrationHealth {
    pub applied: i64,
    pub embedded: i64,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let reachable = catalog_db::health_check(&state.pool).await.is_ok();

    let migrations = if reachable {
        match catalog_db::migration_status(&state.pool).await {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read migration status");
                None
            }
        }
    } else {
        None
    };

    let schema_current = migrations.is_some_and(|m| m.is_current());
    let status = if reachable && schema_current {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            open_connections: state.pool.size(),
            idle_connections: state.pool.num_idle(),
            max_connections: state.config.db_max_connections,
        },
        migrations: migrations.map(|m| MigrationHealth {
            applied: m.applied,
            embedded: m.embedded,
        }),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
