pub mod models;
pub mod repositories;
pub mod services;

pub use models::{SurgePredicate, SurgeRule};
pub use repositories::{InMemorySurgeSource, SurgeRuleSource};
pub use services::{SurgeOutcome, SurgeService};
