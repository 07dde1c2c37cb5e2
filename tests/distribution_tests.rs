//! Distribution integration tests
//!
//! Drives the plugin end to end: deployment config in, merged
//! CloudFormation template out.

use api_cloudfront::{
    merge, ApiCloudFront, DeploymentConfig, GatheredOutputs, InvocationContext, PluginRegistry,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn plugin(yaml: &str, stage: Option<&str>) -> ApiCloudFront {
    let deployment = DeploymentConfig::from_yaml_str(yaml).unwrap();
    let invocation = InvocationContext::resolve(&deployment, stage, None);
    ApiCloudFront::new(deployment, invocation)
}

fn render(section: &str, stage: Option<&str>) -> Value {
    let yaml = format!("service: orders\ncustom:\n  apiCloudFront:\n{}", section);
    plugin(&yaml, stage).render().unwrap()
}

fn distribution_config(fragment: &Value) -> &Value {
    &fragment["Resources"]["ApiDistribution"]["Properties"]["DistributionConfig"]
}

// =============================================================================
// Pipeline output
// =============================================================================

mod pipeline_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_is_deterministic() {
        let section = "    domain: [a.example.com, b.example.com]\n    cookies: [session]\n    compress: true\n";
        let first = render(section, Some("prod"));
        let second = render(section, Some("prod"));

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_aliases_follow_domain() {
        let absent = render("    priceClass: PriceClass_100\n", None);
        assert!(distribution_config(&absent).get("Aliases").is_none());

        let scalar = render("    domain: api.example.com\n", None);
        assert_eq!(distribution_config(&scalar)["Aliases"], json!(["api.example.com"]));

        let list = render("    domain:\n      - a.example.com\n      - b.example.com\n", None);
        assert_eq!(
            distribution_config(&list)["Aliases"],
            json!(["a.example.com", "b.example.com"])
        );
    }

    #[test]
    fn test_origin_targets_rest_api_by_stage() {
        let fragment = render("    priceClass: PriceClass_100\n", Some("prod"));
        let origin = &distribution_config(&fragment)["Origins"][0];

        assert_eq!(origin["OriginPath"], "/prod");
        assert_eq!(origin["DomainName"]["Fn::Join"][1][0], json!({"Ref": "ApiGatewayRestApi"}));
        assert_eq!(distribution_config(&fragment)["PriceClass"], "PriceClass_100");
    }

    #[test]
    fn test_origin_targets_http_api_at_root() {
        let fragment = render("    httpApi: true\n", Some("prod"));
        let origin = &distribution_config(&fragment)["Origins"][0];

        assert_eq!(origin["OriginPath"], "");
        assert_eq!(
            origin["DomainName"],
            json!({"Fn::Join": [".", [
                {"Ref": "HttpApi"},
                "execute-api",
                {"Ref": "AWS::Region"},
                "amazonaws.com"
            ]]})
        );
    }

    #[test]
    fn test_cookie_forwarding() {
        let whitelist = render("    cookies: [session, locale]\n", None);
        assert_eq!(
            distribution_config(&whitelist)["DefaultCacheBehavior"]["ForwardedValues"]["Cookies"],
            json!({"Forward": "whitelist", "WhitelistedNames": ["session", "locale"]})
        );

        let none = render("    cookies: none\n", None);
        assert_eq!(
            distribution_config(&none)["DefaultCacheBehavior"]["ForwardedValues"]["Cookies"],
            json!({"Forward": "none"})
        );
    }

    #[test]
    fn test_query_string_forwarding() {
        let keys = render("    querystring: [page, limit]\n", None);
        let forwarded = &distribution_config(&keys)["DefaultCacheBehavior"]["ForwardedValues"];
        assert_eq!(forwarded["QueryString"], true);
        assert_eq!(forwarded["QueryStringCacheKeys"], json!(["page", "limit"]));

        let disabled = render("    querystring: none\n", None);
        let forwarded = &distribution_config(&disabled)["DefaultCacheBehavior"]["ForwardedValues"];
        assert_eq!(forwarded["QueryString"], false);
        assert!(forwarded.get("QueryStringCacheKeys").is_none());
    }

    #[test]
    fn test_certificate_with_minimum_protocol_version() {
        let fragment = render(
            "    certificate: arn:aws:acm:us-east-1:123:certificate/abc\n    minimumProtocolVersion: TLSv1.2_2021\n",
            None,
        );
        let certificate = &distribution_config(&fragment)["ViewerCertificate"];

        assert_eq!(certificate["AcmCertificateArn"], "arn:aws:acm:us-east-1:123:certificate/abc");
        assert_eq!(certificate["SslSupportMethod"], "sni-only");
        assert_eq!(certificate["MinimumProtocolVersion"], "TLSv1.2_2021");
    }

    #[test]
    fn test_minimum_protocol_version_without_certificate_is_dropped() {
        let fragment = render("    minimumProtocolVersion: TLSv1.2_2021\n", None);
        assert!(distribution_config(&fragment).get("ViewerCertificate").is_none());
    }

    #[test]
    fn test_compress_requires_literal_true() {
        let on = render("    compress: true\n", None);
        assert_eq!(distribution_config(&on)["DefaultCacheBehavior"]["Compress"], true);

        let quoted = render("    compress: \"true\"\n", None);
        assert_eq!(distribution_config(&quoted)["DefaultCacheBehavior"]["Compress"], false);
    }

    #[test]
    fn test_missing_plugin_section_uses_defaults() {
        let fragment = plugin("service: orders\n", None).render().unwrap();
        let config = distribution_config(&fragment);

        assert_eq!(config["Comment"], "Serverless Managed dev-orders");
        assert_eq!(config["Origins"][0]["OriginPath"], "/dev");
        assert_eq!(config["PriceClass"], "PriceClass_All");
        assert!(config.get("Logging").is_none());
        assert!(config.get("WebACLId").is_none());
    }
}

// =============================================================================
// Package hook
// =============================================================================

mod package_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_package_into_empty_template() {
        let plugin = plugin(
            "service: orders\nprovider:\n  stackTags:\n    team: payments\n",
            Some("prod"),
        );
        let mut template = json!({});

        plugin.package(&mut template).unwrap();

        let resources = template["Resources"].as_object().unwrap();
        assert_eq!(resources.len(), 1);
        assert!(resources.contains_key("ApiDistribution"));
        assert_eq!(
            template["Resources"]["ApiDistribution"]["Properties"]["Tags"],
            json!([{"Key": "team", "Value": "payments"}])
        );
        assert_eq!(
            template["Outputs"]["ApiDistribution"]["Value"],
            json!({"Fn::GetAtt": ["ApiDistribution", "DomainName"]})
        );
    }

    #[test]
    fn test_package_overwrites_previous_distribution() {
        let plugin = plugin("service: orders\ncustom:\n  apiCloudFront:\n    domain: new.example.com\n", None);
        let mut template = json!({});
        merge(
            &mut template,
            json!({"Resources": {"ApiDistribution": {"Properties": {"DistributionConfig": {
                "Aliases": ["old.example.com", "older.example.com"]
            }}}}}),
        );

        plugin.package(&mut template).unwrap();

        assert_eq!(
            distribution_config(&template)["Aliases"],
            json!(["new.example.com"])
        );
    }
}

// =============================================================================
// Info hook
// =============================================================================

mod info_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_from_describe_stacks() {
        let plugin = plugin(
            "service: orders\ncustom:\n  apiCloudFront:\n    domain: [a.example.com, b.example.com]\n",
            None,
        );
        let outputs = GatheredOutputs::from_json(
            r#"{"Stacks": [{"Outputs": [
                {"OutputKey": "ApiDistribution", "OutputValue": "d1.cloudfront.net"}
            ]}]}"#,
        )
        .unwrap();
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(outputs));

        let summary = plugin.info(&registry).unwrap();
        assert_eq!(summary.to_string(), "d1.cloudfront.net (CNAME: a.example.com,b.example.com)");
    }

    #[test]
    fn test_summary_skipped_before_outputs_are_gathered() {
        let plugin = plugin("service: orders\n", None);
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(GatheredOutputs::pending()));

        assert_eq!(plugin.info(&registry), None);
    }
}
