pub mod route_index;
pub mod zone_directory;

pub use route_index::{FixedRouteLookup, InMemoryRouteIndex, ZoneRouteLookup};
pub use zone_directory::{PostcodePrefixDirectory, ZoneDirectory};
