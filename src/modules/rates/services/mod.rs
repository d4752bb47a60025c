pub mod rate_service;

pub use rate_service::{fallback_catalog, RateService};
