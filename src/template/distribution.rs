//! @acp:module "Distribution Model"
//! @acp:summary "Typed view of AWS::CloudFront::Distribution DistributionConfig"
//! @acp:domain cdn
//! @acp:layer model
//!
//! Only the properties the rules touch are modelled. Everything else in the
//! template (`Enabled`, `AllowedMethods`, `CustomOriginConfig`, ...) rides
//! along in the flattened `extra` maps and is written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// @acp:summary "DistributionConfig block of the distribution resource"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionConfig {
    /// Absent means access logging is off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    #[serde(default)]
    pub origins: Vec<Origin>,

    #[serde(default)]
    pub default_cache_behavior: DefaultCacheBehavior,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price_class: String,

    /// Absent means the default *.cloudfront.net certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer_certificate: Option<ViewerCertificate>,

    #[serde(rename = "WebACLId", default, skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DistributionConfig {
    /// The origin every rule targets, created when the template has none
    pub fn primary_origin_mut(&mut self) -> &mut Origin {
        if self.origins.is_empty() {
            self.origins.push(Origin::default());
        }
        &mut self.origins[0]
    }

    pub fn forwarded_values_mut(&mut self) -> &mut ForwardedValues {
        &mut self.default_cache_behavior.forwarded_values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Logging {
    pub bucket: String,

    #[serde(default)]
    pub prefix: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Origin {
    /// Intrinsic-function expression resolving to the API endpoint host
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub domain_name: Value,

    #[serde(default)]
    pub origin_path: String,

    #[serde(default)]
    pub origin_custom_headers: Vec<OriginCustomHeader>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginCustomHeader {
    pub header_name: String,
    pub header_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultCacheBehavior {
    #[serde(default)]
    pub forwarded_values: ForwardedValues,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_policy_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_request_policy_id: Option<String>,

    #[serde(rename = "DefaultTTL", default, skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<u64>,

    #[serde(rename = "MaxTTL", default, skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<u64>,

    #[serde(rename = "MinTTL", default, skip_serializing_if = "Option::is_none")]
    pub min_ttl: Option<u64>,

    #[serde(default)]
    pub compress: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardedValues {
    #[serde(default)]
    pub cookies: Cookies,

    #[serde(default)]
    pub headers: Vec<String>,

    #[serde(default)]
    pub query_string: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_cache_keys: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Cookies {
    pub forward: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelisted_names: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Cookies {
    fn default() -> Self {
        Self {
            forward: "all".to_string(),
            whitelisted_names: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewerCertificate {
    pub acm_certificate_arn: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_protocol_version: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewerCertificate {
    /// ACM certificate served over SNI
    pub fn sni(arn: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("SslSupportMethod".into(), Value::String("sni-only".into()));
        Self {
            acm_certificate_arn: arn.into(),
            minimum_protocol_version: None,
            extra,
        }
    }
}

/// Resource-level `{Key, Value}` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}
