pub mod surge_source;

pub use surge_source::{InMemorySurgeSource, SurgeRuleSource};
