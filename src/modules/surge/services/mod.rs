pub mod surge_evaluator;
pub mod surge_service;

pub use surge_evaluator::{evaluate, SurgeOutcome};
pub use surge_service::SurgeService;
