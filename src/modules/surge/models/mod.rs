pub mod surge_rule;

pub use surge_rule::{SurgePredicate, SurgeRule};
