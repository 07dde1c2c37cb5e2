//! TTL rule

use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// TTL rule - a `ttl` block replaces all three TTLs, no block keeps the template's
pub struct TtlRule;

impl Rule for TtlRule {
    fn name(&self) -> &'static str {
        "ttl"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        let Some(ttl) = &context.config.ttl else {
            return;
        };
        let behavior = &mut distribution.default_cache_behavior;
        behavior.default_ttl = ttl.default;
        behavior.max_ttl = ttl.max;
        behavior.min_ttl = ttl.min;
    }
}
