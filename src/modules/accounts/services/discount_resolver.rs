use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::accounts::models::{
    AccountStatus, MAX_CORPORATE_DISCOUNT_PERCENT,
};
use crate::modules::accounts::repositories::CorporateAccountSource;

/// Resolves a corporate account id to its discount percentage.
///
/// Fails closed: a lookup error, a missing account, a non-active status
/// or an out-of-range stored discount all yield `None`. A quote never
/// gains a discount because something went wrong.
pub struct DiscountResolver {
    source: Arc<dyn CorporateAccountSource>,
}

impl DiscountResolver {
    pub fn new(source: Arc<dyn CorporateAccountSource>) -> Self {
        Self { source }
    }

    pub async fn resolve(&self, account_id: Option<&str>) -> Option<u32> {
        let account_id = account_id?;

        let account = match self.source.find(account_id).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                debug!(account = account_id, "corporate account not found");
                return None;
            }
            Err(err) => {
                warn!(account = account_id, error = %err, "corporate account lookup failed, quoting without discount");
                return None;
            }
        };

        if account.status != AccountStatus::Active {
            debug!(account = account_id, status = ?account.status, "corporate account not active");
            return None;
        }

        if account.discount_percent > MAX_CORPORATE_DISCOUNT_PERCENT {
            warn!(
                account = account_id,
                discount = account.discount_percent,
                "corporate discount outside legal range, treating as absent"
            );
            return None;
        }

        Some(account.discount_percent)
    }
}
