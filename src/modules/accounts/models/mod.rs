pub mod corporate_account;

pub use corporate_account::{
    AccountStatus, CorporateAccount, MAX_CORPORATE_DISCOUNT_PERCENT,
};
