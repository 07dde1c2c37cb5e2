//! Comment rule

use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// Comment rule - names the API Gateway the distribution fronts
pub struct CommentRule;

impl Rule for CommentRule {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        distribution.comment = format!("Serverless Managed {}", context.naming.api_gateway_name());
    }
}
