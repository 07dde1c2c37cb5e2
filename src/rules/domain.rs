//! Custom domain rule

use serde_json::{json, Value};

use crate::rules::{Rule, RuleContext};
use crate::template::{DistributionConfig, HTTP_API_LOGICAL_ID, REST_API_LOGICAL_ID};

/// Domain rule - sets `Aliases` and points the origin at the API Gateway
pub struct DomainRule;

impl Rule for DomainRule {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        distribution.aliases = context.config.domain.clone();

        // Recomputed regardless of `domain`
        distribution.primary_origin_mut().domain_name = api_gateway_domain(context.config.http_api);
    }
}

/// `<api id>.execute-api.<region>.amazonaws.com` as a CloudFormation join
pub fn api_gateway_domain(http_api: bool) -> Value {
    let api = if http_api {
        HTTP_API_LOGICAL_ID
    } else {
        REST_API_LOGICAL_ID
    };
    json!({
        "Fn::Join": [
            ".",
            [
                {"Ref": api},
                "execute-api",
                {"Ref": "AWS::Region"},
                "amazonaws.com"
            ]
        ]
    })
}
