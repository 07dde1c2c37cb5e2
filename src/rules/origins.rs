//! Origin rule

use crate::rules::{Rule, RuleContext};
use crate::template::{DistributionConfig, OriginCustomHeader};

/// Origins rule - custom headers and the stage-scoped origin path
pub struct OriginsRule;

impl Rule for OriginsRule {
    fn name(&self) -> &'static str {
        "origins"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        let origin = distribution.primary_origin_mut();

        origin.origin_custom_headers = context
            .config
            .origin_custom_headers
            .iter()
            .map(|header| OriginCustomHeader {
                header_name: header.name.clone(),
                header_value: header.value.clone(),
            })
            .collect();

        // HTTP APIs serve the $default stage at the root
        origin.origin_path = if context.config.http_api {
            String::new()
        } else {
            format!("/{}", context.invocation.stage)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::apply_with;
    use serde_json::json;

    #[test]
    fn test_rest_api_path_uses_stage() {
        let mut distribution = DistributionConfig::default();
        apply_with(&OriginsRule, json!({}), "prod", &mut distribution);
        assert_eq!(distribution.origins[0].origin_path, "/prod");
        assert!(distribution.origins[0].origin_custom_headers.is_empty());
    }

    #[test]
    fn test_http_api_path_is_empty() {
        let mut distribution = DistributionConfig::default();
        apply_with(&OriginsRule, json!({"httpApi": true}), "prod", &mut distribution);
        assert_eq!(distribution.origins[0].origin_path, "");
    }

    #[test]
    fn test_custom_headers_in_order() {
        let mut distribution = DistributionConfig::default();
        apply_with(
            &OriginsRule,
            json!({"originCustomHeaders": [{"X-Api-Key": "secret"}, {"X-Source": "cdn"}]}),
            "dev",
            &mut distribution,
        );

        let headers = &distribution.origins[0].origin_custom_headers;
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].header_name, "X-Api-Key");
        assert_eq!(headers[0].header_value, "secret");
        assert_eq!(headers[1].header_name, "X-Source");
    }
}
