//! @acp:module "Configuration"
//! @acp:summary "Deployment config loading and the typed CloudFront settings"
//! @acp:domain cdn
//! @acp:layer config
//!
//! The raw `custom.apiCloudFront` map is read exactly once, here, through
//! [`ConfigAccessor`]. Everything downstream works on [`CloudFrontConfig`].

pub mod accessor;
pub mod context;

pub use accessor::{scalar_to_string, ConfigAccessor};
pub use context::InvocationContext;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Key of the plugin section under `custom`
pub const CONFIG_SECTION: &str = "apiCloudFront";

fn default_price_class() -> String {
    "PriceClass_All".to_string()
}

/// @acp:summary "Deployment configuration (serverless.yml subset)"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Service name, either a plain string or `{ name: ... }`
    #[serde(default)]
    pub service: ServiceDefinition,

    #[serde(default)]
    pub provider: ProviderConfig,

    /// Plugin-scoped settings, keyed by plugin section name
    #[serde(default)]
    pub custom: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceDefinition {
    Name(String),
    Detailed { name: String },
}

impl Default for ServiceDefinition {
    fn default() -> Self {
        ServiceDefinition::Name(String::new())
    }
}

impl ServiceDefinition {
    pub fn name(&self) -> &str {
        match self {
            ServiceDefinition::Name(name) => name,
            ServiceDefinition::Detailed { name } => name,
        }
    }
}

/// @acp:summary "Provider block: stage, region, API naming and stack tags"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Overrides the generated API Gateway name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,

    /// Tags applied to every taggable resource in the stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_tags: Option<Map<String, Value>>,
}

impl DeploymentConfig {
    /// @acp:summary "Load from a YAML or JSON file, chosen by extension"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Self::from_yaml_str(&content),
        }
    }

    pub fn from_yaml_str(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn service_name(&self) -> &str {
        self.service.name()
    }

    /// The raw plugin section, `null` when the section is missing
    pub fn plugin_section(&self) -> &Value {
        static EMPTY: Value = Value::Null;
        self.custom.get(CONFIG_SECTION).unwrap_or(&EMPTY)
    }

    /// @acp:summary "Parse the plugin section into typed settings"
    pub fn cloudfront_config(&self) -> CloudFrontConfig {
        CloudFrontConfig::from_value(self.plugin_section())
    }
}

/// @acp:summary "Typed CloudFront settings with their documented defaults"
#[derive(Debug, Clone, PartialEq)]
pub struct CloudFrontConfig {
    /// Custom domain names (`domain`); a scalar becomes a one-element list
    pub domain: Option<Vec<String>>,
    /// Target the HTTP API instead of the REST API (`httpApi`)
    pub http_api: bool,
    pub logging: Option<LoggingSettings>,
    pub price_class: String,
    pub origin_custom_headers: Vec<OriginHeader>,
    pub cookies: CookieForwarding,
    pub headers: HeaderForwarding,
    pub cache_policy_id: Option<String>,
    pub origin_request_policy_id: Option<String>,
    pub ttl: Option<TtlSettings>,
    pub query_string: QueryStringForwarding,
    /// ARN and minimum protocol version travel together
    pub certificate: Option<CertificateSettings>,
    pub waf: Option<String>,
    pub compress: bool,
}

impl Default for CloudFrontConfig {
    fn default() -> Self {
        Self {
            domain: None,
            http_api: false,
            logging: None,
            price_class: default_price_class(),
            origin_custom_headers: Vec::new(),
            cookies: CookieForwarding::default(),
            headers: HeaderForwarding::default(),
            cache_policy_id: None,
            origin_request_policy_id: None,
            ttl: None,
            query_string: QueryStringForwarding::default(),
            certificate: None,
            waf: None,
            compress: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub bucket: String,
    pub prefix: String,
}

/// One `{ Name: value }` entry of `originCustomHeaders`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginHeader {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieForwarding {
    /// `all`, `none` or `whitelist`, passed through verbatim
    Forward(String),
    Whitelist(Vec<String>),
}

impl Default for CookieForwarding {
    fn default() -> Self {
        CookieForwarding::Forward("all".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeaderForwarding {
    #[default]
    Nothing,
    Everything,
    Named(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryStringForwarding {
    #[default]
    All,
    Disabled,
    CacheKeys(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TtlSettings {
    pub default: Option<u64>,
    pub max: Option<u64>,
    pub min: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSettings {
    pub arn: String,
    pub minimum_protocol_version: Option<String>,
}

impl CloudFrontConfig {
    /// @acp:summary "Build typed settings from the raw plugin section"
    ///
    /// Never fails. Missing keys take their defaults; values of an
    /// unexpected shape are read on a best-effort basis.
    pub fn from_value(raw: &Value) -> Self {
        let config = ConfigAccessor::new(raw);
        let defaults = Self::default();

        let logging = config.get_string("logging.bucket").map(|bucket| LoggingSettings {
            bucket,
            prefix: config.get_string("logging.prefix").unwrap_or_default(),
        });

        let minimum_protocol_version = config.get_string("minimumProtocolVersion");
        let certificate = match config.get_string("certificate") {
            Some(arn) => Some(CertificateSettings {
                arn,
                minimum_protocol_version,
            }),
            None => {
                if let Some(version) = minimum_protocol_version {
                    tracing::warn!(
                        "minimumProtocolVersion {} ignored: it requires certificate to be set",
                        version
                    );
                }
                None
            }
        };

        Self {
            domain: config.get("domain").map(string_list),
            http_api: config.get("httpApi").and_then(Value::as_bool).unwrap_or(false),
            logging,
            price_class: scalar_to_string(
                config.get_or("priceClass", &Value::String(defaults.price_class)),
            ),
            origin_custom_headers: config
                .get("originCustomHeaders")
                .map(origin_headers)
                .unwrap_or_default(),
            cookies: match config.get("cookies") {
                Some(Value::Array(names)) => CookieForwarding::Whitelist(strings(names)),
                Some(other) => CookieForwarding::Forward(scalar_to_string(other)),
                None => defaults.cookies,
            },
            headers: match config.get("headers") {
                Some(Value::Array(names)) => HeaderForwarding::Named(strings(names)),
                Some(Value::String(s)) if s == "none" => HeaderForwarding::Nothing,
                Some(_) => HeaderForwarding::Everything,
                None => defaults.headers,
            },
            cache_policy_id: config.get_string("cachePolicyId"),
            origin_request_policy_id: config.get_string("originRequestPolicyId"),
            ttl: config.contains("ttl").then(|| TtlSettings {
                default: config.get("ttl.default").and_then(ttl_seconds),
                max: config.get("ttl.max").and_then(ttl_seconds),
                min: config.get("ttl.min").and_then(ttl_seconds),
            }),
            query_string: match config.get("querystring") {
                Some(Value::Array(keys)) => QueryStringForwarding::CacheKeys(strings(keys)),
                Some(Value::String(s)) if s == "all" => QueryStringForwarding::All,
                Some(_) => QueryStringForwarding::Disabled,
                None => defaults.query_string,
            },
            certificate,
            waf: config.get_string("waf"),
            compress: matches!(config.get("compress"), Some(Value::Bool(true))),
        }
    }

    /// Configured domain for display, `-` when none
    pub fn cname(&self) -> String {
        match &self.domain {
            Some(domains) => domains.join(","),
            None => "-".to_string(),
        }
    }
}

fn strings(values: &[Value]) -> Vec<String> {
    values.iter().map(scalar_to_string).collect()
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => strings(items),
        scalar => vec![scalar_to_string(scalar)],
    }
}

fn origin_headers(value: &Value) -> Vec<OriginHeader> {
    let Value::Array(entries) = value else {
        tracing::debug!("originCustomHeaders is not a list, ignoring");
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let (name, value) = entry.as_object()?.iter().next()?;
            Some(OriginHeader {
                name: name.clone(),
                value: scalar_to_string(value),
            })
        })
        .collect()
}

fn ttl_seconds(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}
