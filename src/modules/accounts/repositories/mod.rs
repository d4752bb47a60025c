pub mod account_source;

pub use account_source::{CorporateAccountSource, InMemoryAccountSource};
