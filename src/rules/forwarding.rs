//! Forwarded values rules (cookies, headers, query string)

use crate::config::{CookieForwarding, HeaderForwarding, QueryStringForwarding};
use crate::rules::{Rule, RuleContext};
use crate::template::DistributionConfig;

/// Cookies rule - a list whitelists cookie names, a scalar is the forward mode
pub struct CookiesRule;

impl Rule for CookiesRule {
    fn name(&self) -> &'static str {
        "cookies"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        let cookies = &mut distribution.forwarded_values_mut().cookies;
        match &context.config.cookies {
            CookieForwarding::Whitelist(names) => {
                cookies.forward = "whitelist".to_string();
                cookies.whitelisted_names = Some(names.clone());
            }
            CookieForwarding::Forward(mode) => {
                cookies.forward = mode.clone();
                cookies.whitelisted_names = None;
            }
        }
    }
}

/// Headers rule - `none` forwards nothing, a list is used as-is, anything else forwards all
pub struct HeadersRule;

impl Rule for HeadersRule {
    fn name(&self) -> &'static str {
        "headers"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        distribution.forwarded_values_mut().headers = match &context.config.headers {
            HeaderForwarding::Nothing => Vec::new(),
            HeaderForwarding::Everything => vec!["*".to_string()],
            HeaderForwarding::Named(names) => names.clone(),
        };
    }
}

/// QueryString rule - a list also becomes the cache keys
pub struct QueryStringRule;

impl Rule for QueryStringRule {
    fn name(&self) -> &'static str {
        "query-string"
    }

    fn apply(&self, context: &RuleContext<'_>, distribution: &mut DistributionConfig) {
        let forwarded = distribution.forwarded_values_mut();
        match &context.config.query_string {
            QueryStringForwarding::All => {
                forwarded.query_string = true;
                forwarded.query_string_cache_keys = None;
            }
            QueryStringForwarding::Disabled => {
                forwarded.query_string = false;
                forwarded.query_string_cache_keys = None;
            }
            QueryStringForwarding::CacheKeys(keys) => {
                forwarded.query_string = true;
                forwarded.query_string_cache_keys = Some(keys.clone());
            }
        }
    }
}
