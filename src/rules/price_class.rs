//! Price class rule

use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// PriceClass rule - always set, `PriceClass_All` unless configured
pub struct PriceClassRule;

impl Rule for PriceClassRule {
    fn name(&self) -> &'static str {
        "price-class"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        distribution.price_class = context.config.price_class.clone();
    }
}
