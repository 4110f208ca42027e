use async_trait::async_trait;
use sqlx::PgPool;

use super::{NewRoute, Route, RouteStore, StorageError};

/// Route store backed by a shared PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgRouteStore {
    pool: PgPool,
}

impl PgRouteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteStore for PgRouteStore {
    async fn create_route(&self, route: NewRoute) -> Result<i32, StorageError> {
        let (id,): (i32,) = sqlx::query_as("INSERT INTO routes (name) VALUES ($1) RETURNING id")
            .bind(&route.name)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn get_route(&self, id: i32) -> Result<Option<Route>, StorageError> {
        let route: Option<Route> = sqlx::query_as("SELECT id, name FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    async fn list_routes(&self) -> Result<Vec<Route>, StorageError> {
        let routes: Vec<Route> = sqlx::query_as("SELECT id, name FROM routes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(routes)
    }

    async fn update_route(&self, route: &Route) -> Result<(), StorageError> {
        sqlx::query("UPDATE routes SET name = $2 WHERE id = $1")
            .bind(route.id)
            .bind(&route.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_route(&self, id: i32) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
