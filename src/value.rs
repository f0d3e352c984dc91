//! Contains the `JsonValue` enum, a native Rust representation of any
//! JSON value, and the materializer that builds one from a parsed tree.
use crate::error::ParseError;
use crate::node::{NodeId, NodeKind, Scope, Tree};
use std::collections::BTreeMap;
use std::ops::Index;
use std::str::FromStr;
use tracing::debug;

/// A native Rust representation of any valid JSON value.
#[derive(Debug, PartialEq, Clone)]
pub enum JsonValue {
    /// Represents a JSON `null`.
    Null,
    /// Represents a JSON `true` or `false`.
    Boolean(bool),
    /// Represents a JSON number.
    Number(f64),
    /// Represents a JSON string.
    String(String),
    /// Represents a JSON array (list).
    Array(Vec<JsonValue>),
    /// Represents a JSON object (map), ordered by key.
    Object(BTreeMap<String, JsonValue>),
}

static NULL: JsonValue = JsonValue::Null;

impl JsonValue {
    /// Parses a JSON string into a `JsonValue`.
    ///
    /// Same as [`crate::parse_json`].
    pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
        crate::parse_json(input)
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns the boolean if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the map if this is an `Object`.
    pub fn as_object(&self) -> Option<&BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Looks up element `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|a| a.get(index))
    }
}

impl FromStr for JsonValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_json(s)
    }
}

/// `value["key"]`; yields `Null` for missing keys and non-objects.
impl Index<&str> for JsonValue {
    type Output = JsonValue;

    fn index(&self, key: &str) -> &JsonValue {
        self.get(key).unwrap_or(&NULL)
    }
}

/// `value[0]`; yields `Null` when out of bounds or not an array.
impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        self.get_index(index).unwrap_or(&NULL)
    }
}

/// Converts a parsed tree into its `JsonValue`.
///
/// # Errors
/// Returns `ParseError::DuplicateKey` if any object defines a key twice,
/// and `ParseError::Syntax` (end of input) for a tree with no value.
pub fn materialize(tree: &Tree<'_>) -> Result<JsonValue, ParseError> {
    let value = materialize_node(tree, Tree::ROOT)?;
    debug!(nodes = tree.node_count(), "materialized value");
    Ok(value)
}

fn materialize_node(tree: &Tree<'_>, id: NodeId) -> Result<JsonValue, ParseError> {
    match tree.node(id).kind {
        NodeKind::Object => materialize_object(tree, id),
        NodeKind::Array => {
            let mut arr = Vec::new();
            for &child in &tree.node(id).children {
                if tree.node(child).scope == Some(Scope::Value) {
                    arr.push(materialize_node(tree, child)?);
                }
            }
            Ok(JsonValue::Array(arr))
        }
        NodeKind::String(s) => Ok(JsonValue::String(s.to_string())),
        NodeKind::Number(n) => Ok(JsonValue::Number(n)),
        NodeKind::Boolean(b) => Ok(JsonValue::Boolean(b)),
        NodeKind::Null => Ok(JsonValue::Null),
        NodeKind::Root => {
            let value = tree.value().ok_or_else(ParseError::end_of_input)?;
            materialize_node(tree, value)
        }
        // Containers only hand over children scoped as values; separators have no scope.
        kind @ (NodeKind::Comma | NodeKind::Colon) => {
            unreachable!("separator {:?} materialized as a value", kind)
        }
    }
}

fn materialize_object(tree: &Tree<'_>, id: NodeId) -> Result<JsonValue, ParseError> {
    let mut obj = BTreeMap::new();
    let mut pending_key: Option<&str> = None;

    for &child in &tree.node(id).children {
        let node = tree.node(child);
        match (node.scope, node.kind) {
            (Some(Scope::Key), NodeKind::String(key)) => pending_key = Some(key),
            (Some(Scope::Value), _) => {
                let Some(key) = pending_key.take() else {
                    continue;
                };
                if obj.contains_key(key) {
                    return Err(ParseError::DuplicateKey {
                        key: key.to_string(),
                    });
                }
                let value = materialize_node(tree, child)?;
                obj.insert(key.to_string(), value);
            }
            // Commas and colons.
            _ => {}
        }
    }

    Ok(JsonValue::Object(obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::tokenizer::tokenize;

    fn materialize_text(input: &str) -> Result<JsonValue, ParseError> {
        materialize(&parse(&tokenize(input)?)?)
    }

    #[test]
    fn test_materialize_object_and_array() {
        let value = materialize_text(r#"{"b": [1, "x", null], "a": false}"#).unwrap();
        let mut expected = BTreeMap::new();
        expected.insert(
            "b".to_string(),
            JsonValue::Array(vec![
                JsonValue::Number(1.0),
                JsonValue::String("x".to_string()),
                JsonValue::Null,
            ]),
        );
        expected.insert("a".to_string(), JsonValue::Boolean(false));
        assert_eq!(value, JsonValue::Object(expected));
    }

    #[test]
    fn test_materialize_nesting() {
        let value = materialize_text(r#"{"c": {"d": []}}"#).unwrap();
        assert_eq!(value["c"]["d"], JsonValue::Array(vec![]));
        assert!(value["c"].as_object().is_some());
    }

    #[test]
    fn test_materialize_empty_containers() {
        assert_eq!(
            materialize_text("{}").unwrap(),
            JsonValue::Object(BTreeMap::new())
        );
        assert_eq!(materialize_text("[]").unwrap(), JsonValue::Array(vec![]));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        assert_eq!(
            materialize_text(r#"{"a":1,"a":2}"#).unwrap_err(),
            ParseError::DuplicateKey {
                key: "a".to_string()
            }
        );
        // The same key in sibling objects is fine.
        assert!(materialize_text(r#"[{"a":1},{"a":2}]"#).is_ok());
        // Duplicates are found in nested objects too.
        assert!(matches!(
            materialize_text(r#"{"x": {"k": null, "k": null}}"#),
            Err(ParseError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_accessors() {
        let input = r#"{"n": -0.5, "s": "str", "t": true, "z": null, "l": [7]}"#;
        let value = materialize_text(input).unwrap();
        assert_eq!(value["n"].as_f64(), Some(-0.5));
        assert_eq!(value["s"].as_str(), Some("str"));
        assert_eq!(value["t"].as_bool(), Some(true));
        assert!(value["z"].is_null());
        assert_eq!(value["l"][0].as_f64(), Some(7.0));
        assert_eq!(
            value.get("l").and_then(|l| l.get_index(0)),
            Some(&JsonValue::Number(7.0))
        );

        // Missing entries index to null; typed accessors return None.
        assert!(value["missing"].is_null());
        assert!(value["l"][5].is_null());
        assert!(value["s"]["inner"].is_null());
        assert_eq!(value["s"].as_f64(), None);
        assert_eq!(value.get_index(0), None);
    }

    #[test]
    fn test_materialize_tree_without_value() {
        assert_eq!(
            materialize(&Tree::new()).unwrap_err(),
            ParseError::end_of_input()
        );
    }

    #[test]
    fn test_materialize_skips_separators() {
        let mut tree = Tree::new();
        let array = tree.push(Tree::ROOT, NodeKind::Array, Some(Scope::Value));
        tree.push(array, NodeKind::Null, Some(Scope::Value));
        tree.push(array, NodeKind::Comma, None);
        tree.push(array, NodeKind::Boolean(true), Some(Scope::Value));
        assert_eq!(
            materialize(&tree).unwrap(),
            JsonValue::Array(vec![JsonValue::Null, JsonValue::Boolean(true)])
        );

        let mut tree = Tree::new();
        let object = tree.push(Tree::ROOT, NodeKind::Object, Some(Scope::Value));
        tree.push(object, NodeKind::String("k"), Some(Scope::Key));
        tree.push(object, NodeKind::Colon, None);
        tree.push(object, NodeKind::Number(2.5), Some(Scope::Value));
        assert_eq!(materialize(&tree).unwrap()["k"].as_f64(), Some(2.5));
    }

    #[test]
    fn test_from_str() {
        let value: JsonValue = r#"["a", 1]"#.parse().unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert!("[1,]".parse::<JsonValue>().is_err());
    }
}
