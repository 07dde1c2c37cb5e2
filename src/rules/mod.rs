//! @acp:module "Distribution Rules"
//! @acp:summary "Ordered rules that rewrite the distribution config"
//! @acp:domain cdn
//! @acp:layer service
//!
//! Each rule owns one region of [`DistributionConfig`] and reads the typed
//! settings through a [`RuleContext`]. Rules do not talk to each other; the
//! only coupling is their position in [`standard_rules`].
//!
//! ## Order
//!
//! 1. Logging
//! 2. Domain (aliases + origin domain name)
//! 3. PriceClass
//! 4. Origins (custom headers + origin path)
//! 5. Cookies
//! 6. Headers
//! 7. Policies
//! 8. TTL
//! 9. QueryString
//! 10. Comment
//! 11. Certificate
//! 12. WAF
//! 13. Compress
//! 14. MinimumProtocolVersion (writes into the block rule 11 keeps or drops)

mod certificate;
mod comment;
mod compress;
mod domain;
mod forwarding;
mod logging;
mod origins;
mod policies;
mod price_class;
mod ttl;
mod waf;

pub use certificate::{CertificateRule, MinimumProtocolVersionRule};
pub use comment::CommentRule;
pub use compress::CompressRule;
pub use domain::{api_gateway_domain, DomainRule};
pub use forwarding::{CookiesRule, HeadersRule, QueryStringRule};
pub use logging::LoggingRule;
pub use origins::OriginsRule;
pub use policies::PoliciesRule;
pub use price_class::PriceClassRule;
pub use ttl::TtlRule;
pub use waf::WafRule;

use crate::config::{CloudFrontConfig, InvocationContext};
use crate::naming::ApiNaming;
use crate::template::DistributionConfig;

/// Inputs shared by every rule of one pipeline run
pub struct RuleContext<'a> {
    pub config: &'a CloudFrontConfig,
    pub invocation: &'a InvocationContext,
    pub naming: &'a dyn ApiNaming,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        config: &'a CloudFrontConfig,
        invocation: &'a InvocationContext,
        naming: &'a dyn ApiNaming,
    ) -> Self {
        Self {
            config,
            invocation,
            naming,
        }
    }
}

/// Rule trait - implement once per region of the distribution config
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Rewrite this rule's region of `distribution`
    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig);
}

/// @acp:summary "The fourteen built-in rules in application order"
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(LoggingRule),
        Box::new(DomainRule),
        Box::new(PriceClassRule),
        Box::new(OriginsRule),
        Box::new(CookiesRule),
        Box::new(HeadersRule),
        Box::new(PoliciesRule),
        Box::new(TtlRule),
        Box::new(QueryStringRule),
        Box::new(CommentRule),
        Box::new(CertificateRule),
        Box::new(WafRule),
        Box::new(CompressRule),
        Box::new(MinimumProtocolVersionRule),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Fixed API name so comment assertions stay readable
    pub struct FixedNaming(pub &'static str);

    impl ApiNaming for FixedNaming {
        fn api_gateway_name(&self) -> String {
            self.0.to_string()
        }
    }

    /// Run one rule against `distribution` with settings parsed from `raw`
    pub fn apply_with(
        rule: &dyn Rule,
        raw: serde_json::Value,
        stage: &str,
        distribution: &mut DistributionConfig,
    ) {
        let config = CloudFrontConfig::from_value(&raw);
        let invocation = InvocationContext::new(stage, "us-east-1");
        let naming = FixedNaming("dev-orders");
        let context = RuleContext::new(&config, &invocation, &naming);
        rule.apply(&context, distribution);
    }
}
