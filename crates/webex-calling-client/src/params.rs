//! Query string construction.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Ordered query parameters. Keys appear in insertion order and absent
/// optional values are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters holding only `orgId`, if given.
    pub fn org_id(org_id: Option<&str>) -> Self {
        let mut params = Self::new();
        params.push_opt("orgId", org_id);
        params
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Add the pair only when `value` is present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn with_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Flatten a serde struct into pairs.
    ///
    /// Null fields are skipped, booleans render as `true`/`false` and arrays
    /// are comma-joined. Nested objects are sent as compact JSON.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let Value::Object(map) = serde_json::to_value(value)? else {
            return Err(ClientError::InvalidConfig(
                "query parameters must serialize to an object".to_string(),
            ));
        };
        let mut params = Self::new();
        for (key, value) in map {
            params.push_opt(&key, render(&value));
        }
        Ok(params)
    }

    /// Append all pairs of `other`.
    pub fn extend(&mut self, other: QueryParams) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render).collect();
            Some(parts.join(","))
        },
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_with::skip_serializing_none;

    #[skip_serializing_none]
    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Filters {
        location_id: Option<String>,
        toll_free_numbers: Option<bool>,
        max: Option<u32>,
        extensions: Option<Vec<String>>,
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("orgId", None::<&str>).push("max", 10).push_opt("name", Some("HQ"));
        assert_eq!(
            params.pairs(),
            &[("max".to_string(), "10".to_string()), ("name".to_string(), "HQ".to_string())]
        );
    }

    #[test]
    fn test_from_serializable_renders_scalars_and_lists() {
        let filters = Filters {
            location_id: Some("loc1".to_string()),
            toll_free_numbers: Some(false),
            max: None,
            extensions: Some(vec!["1000".to_string(), "1001".to_string()]),
        };
        let params = QueryParams::from_serializable(&filters).unwrap();

        assert_eq!(params.get("locationId"), Some("loc1"));
        assert_eq!(params.get("tollFreeNumbers"), Some("false"));
        assert_eq!(params.get("extensions"), Some("1000,1001"));
        assert_eq!(params.get("max"), None);
    }

    #[test]
    fn test_empty_filters_give_empty_query() {
        let params = QueryParams::from_serializable(&Filters::default()).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(QueryParams::from_serializable(&42).is_err());
    }
}
