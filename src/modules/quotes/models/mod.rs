pub mod price_breakdown;
pub mod quote_request;

pub use price_breakdown::{PriceBreakdown, PricingMode};
pub use quote_request::{BookingType, QuoteRequest, Waypoint};
