pub mod models;
pub mod repositories;
pub mod services;

pub use models::{RateCard, VehicleClassId};
pub use repositories::{InMemoryRateCatalog, RateCatalog};
pub use services::RateService;
