use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// Insertion-ordered mapping used for nested theme sections.
pub type ThemeMap = IndexMap<String, ThemeValue>;

/// A node of a theme tree.
///
/// Keys are open-ended: consumers address tokens with dotted paths such as
/// `colors.primary`. Lists are opaque leaves and are never merged element-wise.
/// Numbers keep their JSON form, so `400` serializes back as `400`, not `400.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<ThemeValue>),
    Map(ThemeMap),
}

impl Default for ThemeValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl ThemeValue {
    /// An empty mapping. Merging it onto anything is a no-op.
    pub fn empty() -> Self {
        ThemeValue::Map(ThemeMap::new())
    }

    pub fn from_json<S: AsRef<str>>(str: S) -> Result<ThemeValue, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn to_json(&self) -> String {
        // Serializing an in-memory tree with string keys cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ThemeValue::Null => "null",
            ThemeValue::Bool(_) => "bool",
            ThemeValue::Number(_) => "number",
            ThemeValue::String(_) => "string",
            ThemeValue::List(_) => "list",
            ThemeValue::Map(_) => "map",
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, ThemeValue::Map(_))
    }

    pub fn as_map(&self) -> Option<&ThemeMap> {
        match self {
            ThemeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ThemeValue::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ThemeValue::Bool(bool) => Some(*bool),
            _ => None,
        }
    }

    /// Looks up a dotted path, e.g. `colors.platform.ios.primary`.
    ///
    /// An empty path returns the value itself.
    pub fn get(&self, path: &str) -> Option<&ThemeValue> {
        if path.is_empty() {
            return Some(self);
        }

        path.split('.').try_fold(self, |node, key| node.as_map()?.get(key))
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn str_at(&self, path: &str) -> Result<&str, ThemeError> {
        let value = self.require(path)?;
        value.as_str().ok_or_else(|| mismatch(path, "string", value))
    }

    pub fn number_at(&self, path: &str) -> Result<f64, ThemeError> {
        let value = self.require(path)?;
        value.as_f64().ok_or_else(|| mismatch(path, "number", value))
    }

    fn require(&self, path: &str) -> Result<&ThemeValue, ThemeError> {
        self.get(path)
            .ok_or_else(|| ThemeError::Missing(path.to_string()))
    }

    /// Dotted paths of every non-map leaf, in insertion order.
    ///
    /// Empty maps count as leaves so that they are not lost when comparing
    /// the key sets of two trees.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, String::new(), &mut paths);
        paths
    }
}

fn mismatch(path: &str, expected: &'static str, found: &ThemeValue) -> ThemeError {
    ThemeError::Mismatch {
        path: path.to_string(),
        expected,
        found: found.kind(),
    }
}

fn collect_leaf_paths(value: &ThemeValue, prefix: String, paths: &mut Vec<String>) {
    match value {
        ThemeValue::Map(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaf_paths(child, path, paths);
            }
        }
        _ => {
            if !prefix.is_empty() {
                paths.push(prefix);
            }
        }
    }
}

impl From<bool> for ThemeValue {
    fn from(value: bool) -> Self {
        ThemeValue::Bool(value)
    }
}

/// Non-finite values have no JSON form and become `Null`.
impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(ThemeValue::Null, ThemeValue::Number)
    }
}

impl From<f32> for ThemeValue {
    fn from(value: f32) -> Self {
        ThemeValue::from(value as f64)
    }
}

impl From<i32> for ThemeValue {
    fn from(value: i32) -> Self {
        ThemeValue::Number(value.into())
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::String(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::String(value)
    }
}

impl From<ThemeMap> for ThemeValue {
    fn from(value: ThemeMap) -> Self {
        ThemeValue::Map(value)
    }
}

impl<T: Into<ThemeValue>> From<Vec<T>> for ThemeValue {
    fn from(value: Vec<T>) -> Self {
        ThemeValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ThemeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ThemeValue::Null,
            serde_json::Value::Bool(bool) => ThemeValue::Bool(bool),
            serde_json::Value::Number(number) => ThemeValue::Number(number),
            serde_json::Value::String(string) => ThemeValue::String(string),
            serde_json::Value::Array(list) => {
                ThemeValue::List(list.into_iter().map(ThemeValue::from).collect())
            }
            serde_json::Value::Object(map) => ThemeValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, ThemeValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> FromIterator<(K, V)> for ThemeValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ThemeValue::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_get_nested_path() {
        let theme = ThemeValue::from(json!({
            "colors": { "platform": { "ios": { "primary": "#007aff" } } }
        }));

        assert_eq!(
            theme.get("colors.platform.ios.primary"),
            Some(&ThemeValue::from("#007aff"))
        );
        assert!(theme.get("colors.platform.android").is_none());
        assert!(theme.get("colors.platform.ios.primary.deeper").is_none());
        assert_eq!(theme.get(""), Some(&theme));
    }

    #[test]
    fn test_typed_readers_report_mismatch() {
        let theme = ThemeValue::from(json!({ "sizes": { "icon": 24 }, "name": "light" }));

        assert_eq!(theme.number_at("sizes.icon").unwrap(), 24.0);
        assert_eq!(theme.str_at("name").unwrap(), "light");

        match theme.str_at("sizes.icon") {
            Err(ThemeError::Mismatch {
                path,
                expected,
                found,
            }) => {
                assert_eq!(path, "sizes.icon");
                assert_eq!(expected, "string");
                assert_eq!(found, "number");
            }
            other => panic!("expected a mismatch, got {other:?}"),
        }

        assert!(matches!(
            theme.number_at("sizes.avatar"),
            Err(ThemeError::Missing(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_keeps_key_order() {
        let theme = ThemeValue::from_json(r#"{"b": 1, "a": {"z": true, "y": null}, "c": [1, "x"]}"#)
            .unwrap();

        let keys: Vec<_> = theme.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);

        let reparsed = ThemeValue::from_json(theme.to_json()).unwrap();
        assert_eq!(reparsed, theme);
    }

    #[test]
    fn test_numbers_keep_their_json_form() {
        let theme = ThemeValue::from_json(r#"{"w":400,"ratio":0.8,"offset":-2}"#).unwrap();

        assert_eq!(theme.to_json(), r#"{"w":400,"ratio":0.8,"offset":-2}"#);
        assert_eq!(theme.number_at("w").unwrap(), 400.0);
        assert_eq!(theme.number_at("offset").unwrap(), -2.0);
        assert_eq!(ThemeValue::from(f64::NAN), ThemeValue::Null);
    }

    #[test]
    fn test_json_value_keeps_key_order() {
        let theme = ThemeValue::from(json!({ "zeta": 1, "alpha": { "y": 1, "b": 2 }, "mid": 3 }));

        let keys: Vec<_> = theme.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(theme.leaf_paths(), vec!["zeta", "alpha.y", "alpha.b", "mid"]);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        assert!(matches!(
            ThemeValue::from_json("{ colors: "),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn test_leaf_paths() {
        let theme = ThemeValue::from(json!({
            "colors": { "primary": "blue", "platform": {} },
            "dark": false
        }));

        assert_eq!(
            theme.leaf_paths(),
            vec!["colors.primary", "colors.platform", "dark"]
        );
    }

    #[test]
    fn test_from_iterator_builds_map() {
        let theme: ThemeValue = [("primary", "blue"), ("secondary", "red")]
            .into_iter()
            .collect();

        assert_eq!(theme.str_at("secondary").unwrap(), "red");
    }
}
