//! @acp:module "Config Accessor"
//! @acp:summary "Dotted-path lookups with defaults over the raw configuration map"
//! @acp:domain cdn
//! @acp:layer config

use serde_json::Value;

/// Read-only view over a nested configuration map.
///
/// Paths are dot separated (`logging.bucket`). A segment that is missing,
/// a parent that is not a container, or an explicit `null` all resolve to
/// "absent". Numeric segments index into arrays.
#[derive(Debug, Clone, Copy)]
pub struct ConfigAccessor<'a> {
    root: &'a Value,
}

impl<'a> ConfigAccessor<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// @acp:summary "Value at `path`, or None when absent or null"
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        let mut current = self.root;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }

    /// @acp:summary "Value at `path`, or `default` when absent or null"
    pub fn get_or<'b>(&self, path: &str, default: &'b Value) -> &'b Value
    where
        'a: 'b,
    {
        self.get(path).unwrap_or(default)
    }

    /// Scalar at `path` rendered as a string
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).map(scalar_to_string)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }
}

/// Render a config scalar the way it would appear when interpolated.
///
/// Strings come back without quotes; everything else uses its JSON text.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
