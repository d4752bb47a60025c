pub mod models;
pub mod repositories;

pub use models::{FixedRoute, ZoneId, ZoneRoute, ZoneRoutePrice};
pub use repositories::{
    FixedRouteLookup, InMemoryRouteIndex, PostcodePrefixDirectory, ZoneDirectory, ZoneRouteLookup,
};
