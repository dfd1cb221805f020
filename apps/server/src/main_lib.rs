//! Alcancía HTTP server library.
//!
//! Wires the SQLite repositories into the core services and exposes the
//! axum router. The binary in `main.rs` reads configuration and serves.

pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use alcancia_core::contributions::{ContributionService, ContributionServiceTrait};
use alcancia_core::goals::{GoalService, GoalServiceTrait};
use alcancia_core::progress::{ProgressService, ProgressServiceTrait};
use alcancia_storage_sqlite::contributions::ContributionRepository;
use alcancia_storage_sqlite::goals::GoalRepository;
use alcancia_storage_sqlite::{create_pool, init, spawn_writer};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Shared application state handed to every request handler.
///
/// Services are trait objects so handlers stay decoupled from the
/// storage backend.
pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub contribution_service: Arc<dyn ContributionServiceTrait>,
    pub progress_service: Arc<dyn ProgressServiceTrait>,
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Opens the database, runs migrations, and builds the service graph.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    init(&config.db_path)?;
    let pool = create_pool(&config.db_path)?;
    let writer = spawn_writer(pool.clone());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let contribution_repository = Arc::new(ContributionRepository::new(pool, writer));

    let goal_service = Arc::new(GoalService::new(
        goal_repository.clone(),
        contribution_repository.clone(),
    ));
    let contribution_service = Arc::new(ContributionService::new(
        contribution_repository.clone(),
        goal_repository.clone(),
    ));
    let progress_service = Arc::new(ProgressService::new(
        goal_repository,
        contribution_repository,
    ));

    Ok(Arc::new(AppState {
        goal_service,
        contribution_service,
        progress_service,
    }))
}
