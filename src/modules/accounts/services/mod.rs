pub mod discount_resolver;

pub use discount_resolver::DiscountResolver;
