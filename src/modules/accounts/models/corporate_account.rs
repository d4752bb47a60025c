use serde::{Deserialize, Serialize};

use crate::core::{PricingError, Result};

/// Highest discount an administrator may grant a corporate account.
pub const MAX_CORPORATE_DISCOUNT_PERCENT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
    Closed,
}

/// A corporate booking account. Its discount applies only while the
/// account is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateAccount {
    pub id: String,
    pub name: String,
    pub status: AccountStatus,
    /// 0-50
    pub discount_percent: u32,
}

impl CorporateAccount {
    pub fn validate(&self) -> Result<()> {
        if self.discount_percent > MAX_CORPORATE_DISCOUNT_PERCENT {
            return Err(PricingError::configuration(format!(
                "Corporate account '{}' discount must be 0-{}, got {}",
                self.id, MAX_CORPORATE_DISCOUNT_PERCENT, self.discount_percent
            )));
        }
        Ok(())
    }
}
