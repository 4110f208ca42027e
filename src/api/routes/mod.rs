pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use serde::Serialize;
use utoipa::ToSchema;

use crate::storage::Route;

/// Wire representation of a stored route.
#[derive(Debug, Serialize, ToSchema)]
pub struct RouteBody {
    pub id: i32,
    pub name: String,
}

impl From<Route> for RouteBody {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            name: route.name,
        }
    }
}
