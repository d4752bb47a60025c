pub mod accounts;
pub mod distance;
pub mod quotes;
pub mod rates;
pub mod routes;
pub mod surge;
