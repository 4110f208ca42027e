use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{NewRoute, Route, RouteStore, StorageError};

/// Route store keeping all records in process memory.
///
/// Stands in for [`super::PgRouteStore`] in tests and local development.
/// Records live in a `BTreeMap` so listing order matches id order, and a
/// health toggle lets callers exercise storage-failure paths.
#[derive(Clone, Default)]
pub struct MemoryRouteStore {
    data: Arc<RwLock<MemoryData>>,
}

struct MemoryData {
    routes: BTreeMap<i32, String>,
    next_id: i32,
    healthy: bool,
}

impl Default for MemoryData {
    fn default() -> Self {
        Self {
            routes: BTreeMap::new(),
            next_id: 1,
            healthy: true,
        }
    }
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set to false, every subsequent operation fails with
    /// [`StorageError::Unavailable`].
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().expect("route store lock poisoned").healthy = healthy;
    }

    fn check(data: &MemoryData) -> Result<(), StorageError> {
        if data.healthy {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "memory store marked unhealthy".to_string(),
            ))
        }
    }
}

#[async_trait]
impl RouteStore for MemoryRouteStore {
    async fn create_route(&self, route: NewRoute) -> Result<i32, StorageError> {
        let mut data = self.data.write().expect("route store lock poisoned");
        Self::check(&data)?;

        let id = data.next_id;
        data.next_id += 1;
        data.routes.insert(id, route.name);

        Ok(id)
    }

    async fn get_route(&self, id: i32) -> Result<Option<Route>, StorageError> {
        let data = self.data.read().expect("route store lock poisoned");
        Self::check(&data)?;

        Ok(data.routes.get(&id).map(|name| Route {
            id,
            name: name.clone(),
        }))
    }

    async fn list_routes(&self) -> Result<Vec<Route>, StorageError> {
        let data = self.data.read().expect("route store lock poisoned");
        Self::check(&data)?;

        Ok(data
            .routes
            .iter()
            .map(|(&id, name)| Route {
                id,
                name: name.clone(),
            })
            .collect())
    }

    async fn update_route(&self, route: &Route) -> Result<(), StorageError> {
        let mut data = self.data.write().expect("route store lock poisoned");
        Self::check(&data)?;

        // Same semantics as SQL UPDATE: a missing id is a no-op, not an error.
        if let Some(name) = data.routes.get_mut(&route.id) {
            *name = route.name.clone();
        }

        Ok(())
    }

    async fn delete_route(&self, id: i32) -> Result<(), StorageError> {
        let mut data = self.data.write().expect("route store lock poisoned");
        Self::check(&data)?;

        data.routes.remove(&id);

        Ok(())
    }
}
