//! @acp:module "Template Merge"
//! @acp:summary "Deep merge of the distribution fragment into the caller's template"
//! @acp:domain cdn
//! @acp:layer service

use serde_json::Value;

/// Deep merge `source` into `target`.
///
/// Objects present on both sides merge key by key; any other value from
/// `source` (scalars, arrays, objects over non-objects) replaces the
/// value in `target`. Keys only in `target` are kept.
pub fn merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_obj), Value::Object(source_obj)) => {
            for (key, value) in source_obj {
                match target_obj.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target_obj.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_merge_into_empty_template() {
        let mut target = json!({});
        merge(&mut target, json!({"Resources": {"ApiDistribution": {"Type": "AWS::CloudFront::Distribution"}}}));
        assert_eq!(
            target,
            json!({"Resources": {"ApiDistribution": {"Type": "AWS::CloudFront::Distribution"}}})
        );
    }

    #[test]
    fn test_merge_keeps_existing_resources() {
        let mut target = json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Resources": {"ApiGatewayRestApi": {"Type": "AWS::ApiGateway::RestApi"}},
            "Outputs": {"ServiceEndpoint": {"Value": "x"}}
        });
        merge(
            &mut target,
            json!({
                "Resources": {"ApiDistribution": {"Type": "AWS::CloudFront::Distribution"}},
                "Outputs": {"ApiDistribution": {"Value": "y"}}
            }),
        );

        assert_eq!(target["AWSTemplateFormatVersion"], "2010-09-09");
        assert_eq!(target["Resources"]["ApiGatewayRestApi"]["Type"], "AWS::ApiGateway::RestApi");
        assert_eq!(target["Resources"]["ApiDistribution"]["Type"], "AWS::CloudFront::Distribution");
        assert_eq!(target["Outputs"]["ServiceEndpoint"]["Value"], "x");
        assert_eq!(target["Outputs"]["ApiDistribution"]["Value"], "y");
    }

    #[test]
    fn test_arrays_and_scalars_are_replaced() {
        let mut target = json!({"Aliases": ["old.com", "older.com"], "Compress": true, "Nested": 1});
        merge(&mut target, json!({"Aliases": ["new.com"], "Compress": false, "Nested": {"a": 1}}));
        assert_eq!(
            target,
            json!({"Aliases": ["new.com"], "Compress": false, "Nested": {"a": 1}})
        );
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let mut target = json!({"A": {"B": {"C": 1, "D": 2}}});
        merge(&mut target, json!({"A": {"B": {"D": 3, "E": 4}}}));
        assert_eq!(target, json!({"A": {"B": {"C": 1, "D": 3, "E": 4}}}));
    }
}
