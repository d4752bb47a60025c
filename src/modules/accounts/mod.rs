pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AccountStatus, CorporateAccount};
pub use repositories::{CorporateAccountSource, InMemoryAccountSource};
pub use services::DiscountResolver;
