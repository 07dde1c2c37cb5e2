//! Access logging rule

use crate::rules::{Rule, RuleContext};
use crate::template::{DistributionConfig, Logging};

/// Logging rule - `logging.bucket` enables access logs, otherwise the block is dropped
pub struct LoggingRule;

impl Rule for LoggingRule {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        match &context.config.logging {
            Some(settings) => {
                let logging = distribution.logging.get_or_insert_with(Logging::default);
                logging.bucket = settings.bucket.clone();
                logging.prefix = settings.prefix.clone();
            }
            None => distribution.logging = None,
        }
    }
}
