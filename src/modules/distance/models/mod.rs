pub mod route_estimate;

pub use route_estimate::RouteEstimate;
