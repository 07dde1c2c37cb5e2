//! WAF rule

use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// WAF rule - attaches the web ACL, or removes the placeholder
pub struct WafRule;

impl Rule for WafRule {
    fn name(&self) -> &'static str {
        "waf"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        distribution.web_acl_id = context.config.waf.clone();
    }
}
