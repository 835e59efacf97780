//! Custom key/value properties attached to scene objects.

use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;

/// A scalar value stored under a custom property key.
///
/// Also used for modifier parameter bags, so the whole sandbox shares one
/// value representation.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl PropValue {
    /// Short type label for UI combos
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Bool(_) => "Bool",
            PropValue::Int(_) => "Int",
            PropValue::Float(_) => "Float",
            PropValue::Text(_) => "Text",
        }
    }

    /// Default value for a freshly added property of the given type label
    pub fn default_of(type_name: &str) -> PropValue {
        match type_name {
            "Bool" => PropValue::Bool(false),
            "Int" => PropValue::Int(0),
            "Float" => PropValue::Float(0.0),
            _ => PropValue::Text(String::new()),
        }
    }

    pub fn type_names() -> &'static [&'static str] {
        &["Bool", "Int", "Float", "Text"]
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(v) => write!(f, "{}", v),
            PropValue::Int(v) => write!(f, "{}", v),
            PropValue::Float(v) => write!(f, "{:.3}", v),
            PropValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Free-form key/value properties on a scene object.
///
/// Keys are unique; a sorted map keeps UI listings and test output stable
/// (insertion order carries no meaning here).
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CustomProperties(pub BTreeMap<String, PropValue>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_value_display() {
        assert_eq!(PropValue::Bool(true).to_string(), "true");
        assert_eq!(PropValue::Int(-4).to_string(), "-4");
        assert_eq!(PropValue::Float(1.5).to_string(), "1.500");
        assert_eq!(PropValue::Text("hp".into()).to_string(), "hp");
    }

    #[test]
    fn test_default_of_round_trips_type_names() {
        for name in PropValue::type_names() {
            let value = PropValue::default_of(name);
            assert_eq!(value.type_name(), *name);
        }
    }

    #[test]
    fn test_default_of_unknown_falls_back_to_text() {
        assert_eq!(PropValue::default_of("Vector"), PropValue::Text(String::new()));
    }

    #[test]
    fn test_custom_properties_default_is_empty() {
        let props = CustomProperties::default();
        assert!(props.0.is_empty());
    }
}
