pub mod cache;
pub mod civil;
pub mod error;
pub mod money;
pub mod place;

pub use civil::CivilInstant;
pub use error::{DistanceOracleError, PricingError, Result};
pub use money::Pence;
pub use place::{Place, PlaceId};
