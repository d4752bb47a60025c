//! Farecast Quote Pricing Engine
//!
//! Deterministic pricing core for a transfer/taxi booking platform:
//! pricing-mode resolution (fixed route, zone flat price, variable,
//! hourly), time-window surge evaluation, and corporate/return discount
//! composition, all in integer pence. Transport, persistence and the
//! mapping provider are external collaborators consumed through the
//! narrow trait interfaces in each module's `repositories` and the
//! distance oracle trait.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::accounts;
pub use modules::distance;
pub use modules::quotes;
pub use modules::rates;
pub use modules::routes;
pub use modules::surge;
