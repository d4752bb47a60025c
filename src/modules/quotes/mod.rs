pub mod models;
pub mod services;

pub use models::{BookingType, PriceBreakdown, PricingMode, QuoteRequest, Waypoint};
pub use services::{ModeCharge, ModeSelector, QuoteEngine};
