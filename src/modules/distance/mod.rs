pub mod models;
pub mod services;

pub use models::RouteEstimate;
pub use services::DistanceOracle;
