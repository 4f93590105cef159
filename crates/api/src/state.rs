use std::sync::Arc;

use alumnet_db::DbPool;
use alumnet_services::{AlumniService, EventService, MentorshipService, StudentService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Services are constructed once here and handed down explicitly; handlers
/// never reach for globals. Cheaply cloneable: every field clones a pool
/// handle or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub alumni: AlumniService,
    pub students: StudentService,
    pub events: EventService,
    pub mentorship: MentorshipService,
}

impl AppState {
    /// Build the full state from a pool and configuration.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            alumni: AlumniService::new(pool.clone()),
            students: StudentService::new(pool.clone()),
            events: EventService::new(pool.clone()),
            mentorship: MentorshipService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
