pub mod fixed_route;
pub mod zone_route;

pub use fixed_route::FixedRoute;
pub use zone_route::{ZoneId, ZoneRoute, ZoneRoutePrice};
