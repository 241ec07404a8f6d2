//! Value - Attribute values that may be unresolved Terraform expressions
//!
//! Terraform accepts a `${...}` expression wherever a literal is expected.
//! String fields hold such expressions as plain strings; every other field
//! type is wrapped in [`Token`] so that it can carry one as well.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::resource::{Reference, is_expression};

/// A literal value or a `${...}` expression resolved by Terraform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token<T> {
    Literal(T),
    Expression(String),
}

impl<T> Token<T> {
    pub fn literal(&self) -> Option<&T> {
        match self {
            Token::Literal(value) => Some(value),
            Token::Expression(_) => None,
        }
    }

    pub fn expression(&self) -> Option<&str> {
        match self {
            Token::Literal(_) => None,
            Token::Expression(expr) => Some(expr),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Token::Expression(_))
    }
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(value) => value.fmt(f),
            Token::Expression(expr) => f.write_str(expr),
        }
    }
}

impl<T: Serialize> Serialize for Token<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Literal(value) => value.serialize(serializer),
            Token::Expression(expr) => serializer.serialize_str(expr),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Token<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Value::String(s) = &value
            && is_expression(s)
        {
            return Ok(Token::Expression(s.clone()));
        }
        T::deserialize(value)
            .map(Token::Literal)
            .map_err(de::Error::custom)
    }
}

impl<T> From<Reference> for Token<T> {
    fn from(reference: Reference) -> Self {
        Token::Expression(reference.to_expression())
    }
}

impl<T> From<&Reference> for Token<T> {
    fn from(reference: &Reference) -> Self {
        Token::Expression(reference.to_expression())
    }
}

impl From<i64> for Token<i64> {
    fn from(value: i64) -> Self {
        Token::Literal(value)
    }
}

impl From<i32> for Token<i64> {
    fn from(value: i32) -> Self {
        Token::Literal(i64::from(value))
    }
}

impl From<bool> for Token<bool> {
    fn from(value: bool) -> Self {
        Token::Literal(value)
    }
}

impl<T> From<Vec<T>> for Token<Vec<T>> {
    fn from(values: Vec<T>) -> Self {
        Token::Literal(values)
    }
}

impl<T> From<BTreeMap<String, T>> for Token<BTreeMap<String, T>> {
    fn from(values: BTreeMap<String, T>) -> Self {
        Token::Literal(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceId;
    use serde_json::json;

    #[test]
    fn literal_and_expression_serialize_untagged() {
        let count: Token<i64> = 3.into();
        assert_eq!(serde_json::to_value(&count).unwrap(), json!(3));

        let enabled: Token<bool> = Token::Expression("${var.enabled}".to_string());
        assert_eq!(serde_json::to_value(&enabled).unwrap(), json!("${var.enabled}"));
    }

    #[test]
    fn deserialize_accepts_expressions_for_any_type() {
        let flag: Token<bool> = serde_json::from_value(json!("${var.encrypted}")).unwrap();
        assert_eq!(flag.expression(), Some("${var.encrypted}"));

        let roles: Token<Vec<String>> =
            serde_json::from_value(json!("${aws_iam_role.loader[*].arn}")).unwrap();
        assert!(roles.is_expression());

        let nodes: Token<i64> = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(nodes.literal(), Some(&2));
    }

    #[test]
    fn deserialize_rejects_plain_strings_for_non_strings() {
        let err = serde_json::from_value::<Token<bool>>(json!("yes")).unwrap_err();
        assert!(err.to_string().contains("expected a boolean"));

        let err = serde_json::from_value::<Token<i64>>(json!("${unterminated")).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn reference_converts_to_expression() {
        let cluster = ResourceId::new("aws_redshift_cluster", "main");
        let port: Token<i64> = Reference::new(&cluster, "port").into();
        assert_eq!(port, Token::Expression("${aws_redshift_cluster.main.port}".to_string()));
        assert_eq!(port.to_string(), "${aws_redshift_cluster.main.port}");
    }
}
