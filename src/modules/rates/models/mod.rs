pub mod rate_card;

pub use rate_card::{RateCard, VehicleClassId};
