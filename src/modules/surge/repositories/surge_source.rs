use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::surge::models::SurgeRule;

/// External source of surge rules. Only active rules participate in
/// evaluation, so sources return the active set.
#[async_trait]
pub trait SurgeRuleSource: Send + Sync {
    async fn active_rules(&self) -> Result<Vec<SurgeRule>>;
}

/// In-memory rule set, used as the reference implementation and in tests.
pub struct InMemorySurgeSource {
    rules: RwLock<Vec<SurgeRule>>,
}

impl InMemorySurgeSource {
    pub fn new(rules: Vec<SurgeRule>) -> Self {
        Self {
            rules: RwLock::new(rules),
        }
    }

    pub async fn replace(&self, rules: Vec<SurgeRule>) -> Result<()> {
        for rule in &rules {
            rule.validate()?;
        }
        let mut current = self.rules.write().await;
        *current = rules;
        Ok(())
    }
}

#[async_trait]
impl SurgeRuleSource for InMemorySurgeSource {
    async fn active_rules(&self) -> Result<Vec<SurgeRule>> {
        let rules = self.rules.read().await;
        Ok(rules.iter().filter(|rule| rule.active).cloned().collect())
    }
}
