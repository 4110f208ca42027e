pub mod memory;
pub mod postgres;

pub use memory::MemoryRouteStore;
pub use postgres::PgRouteStore;

use async_trait::async_trait;
use sqlx::FromRow;

/// A persisted route record.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Route {
    pub id: i32,
    pub name: String,
}

/// A route that has not been persisted yet. The store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoute {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for route records.
///
/// Absence on single-record reads is reported as `Ok(None)`, never as an
/// error. Update and delete report only backing-store faults; both are no-ops
/// for ids that do not exist.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Inserts a new route and returns its assigned id.
    async fn create_route(&self, route: NewRoute) -> Result<i32, StorageError>;

    /// Fetches a single route, or `None` when no record matches.
    async fn get_route(&self, id: i32) -> Result<Option<Route>, StorageError>;

    /// Fetches all routes in id order.
    async fn list_routes(&self) -> Result<Vec<Route>, StorageError>;

    /// Replaces the name of the route with the given id.
    async fn update_route(&self, route: &Route) -> Result<(), StorageError>;

    /// Removes the route with the given id.
    async fn delete_route(&self, id: i32) -> Result<(), StorageError>;
}
