//! Compression rule

use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// Compress rule - on only for a literal boolean `true`
pub struct CompressRule;

impl Rule for CompressRule {
    fn name(&self) -> &'static str {
        "compress"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        distribution.default_cache_behavior.compress = context.config.compress;
    }
}
