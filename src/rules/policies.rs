//! Cache and origin request policy rule

use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// Policies rule - each policy id is set only when configured
pub struct PoliciesRule;

impl Rule for PoliciesRule {
    fn name(&self) -> &'static str {
        "policies"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        let behavior = &mut distribution.default_cache_behavior;
        if let Some(id) = &context.config.cache_policy_id {
            behavior.cache_policy_id = Some(id.clone());
        }
        if let Some(id) = &context.config.origin_request_policy_id {
            behavior.origin_request_policy_id = Some(id.clone());
        }
    }
}
