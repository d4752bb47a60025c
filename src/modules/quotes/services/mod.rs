pub mod charge_composer;
pub mod mode_selector;
pub mod quote_engine;

pub use charge_composer::compose;
pub use mode_selector::{ModeCharge, ModeSelector};
pub use quote_engine::QuoteEngine;
