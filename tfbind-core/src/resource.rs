//! Resource - Addresses, reference tokens and meta-arguments of Terraform elements

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Token;

/// Whether an element is a managed resource or a read-only data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Resource,
    DataSource,
}

impl ElementKind {
    /// Top-level section of the Terraform JSON document ("resource" or "data")
    pub fn section(&self) -> &'static str {
        match self {
            ElementKind::Resource => "resource",
            ElementKind::DataSource => "data",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Resource => write!(f, "resource"),
            ElementKind::DataSource => write!(f, "data source"),
        }
    }
}

/// Unique identifier for an element within a stack
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    pub kind: ElementKind,
    /// Terraform type (e.g., "aws_redshift_cluster")
    pub resource_type: String,
    /// Local name given by the user (e.g., "analytics")
    pub name: String,
}

impl ResourceId {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Resource,
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    pub fn data_source(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::DataSource,
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// Address as written in Terraform expressions
    /// - resource: `aws_redshift_cluster.analytics`
    /// - data source: `data.aws_redshift_cluster.analytics`
    pub fn terraform_address(&self) -> String {
        match self.kind {
            ElementKind::Resource => format!("{}.{}", self.resource_type, self.name),
            ElementKind::DataSource => format!("data.{}.{}", self.resource_type, self.name),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terraform_address())
    }
}

/// Token referring to an attribute of another element.
///
/// Terraform resolves these at apply time; until then the value is only
/// known as the `${...}` expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    path: String,
}

impl Reference {
    /// Reference to `attribute` of the element at `address`
    pub fn new(address: &ResourceId, attribute: &str) -> Self {
        Self {
            path: format!("{}.{}", address.terraform_address(), attribute),
        }
    }

    /// Reference built from a raw expression path (without `${}`)
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Nested attribute of this reference (`path.name`)
    pub fn attribute(&self, name: &str) -> Self {
        Self {
            path: format!("{}.{}", self.path, name),
        }
    }

    /// Element of a list-valued reference (`path[index]`)
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Interpolation expression (`${path}`)
    pub fn to_expression(&self) -> String {
        format!("${{{}}}", self.path)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.path)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.to_expression()
    }
}

impl From<&Reference> for String {
    fn from(reference: &Reference) -> Self {
        reference.to_expression()
    }
}

/// Returns true if the string is an unresolved `${...}` expression
pub fn is_expression(s: &str) -> bool {
    s.starts_with("${") && s.ends_with('}')
}

/// `lifecycle` meta-argument
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lifecycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_before_destroy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevent_destroy: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_changes: Vec<String>,
}

/// Terraform meta-arguments accepted by every resource and data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaArguments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Token<i64>>,
    /// Addresses of elements this one depends on (e.g., `aws_redshift_cluster.main`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Provider reference (e.g., `aws.west`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
}

impl MetaArguments {
    /// Names of the meta-argument keys in a Terraform JSON element body
    pub const KEYS: &'static [&'static str] = &["count", "depends_on", "provider", "lifecycle"];

    pub fn is_empty(&self) -> bool {
        self.count.is_none()
            && self.depends_on.is_empty()
            && self.provider.is_none()
            && self.lifecycle.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_address() {
        let id = ResourceId::new("aws_redshift_cluster", "main");
        assert_eq!(id.terraform_address(), "aws_redshift_cluster.main");
        assert_eq!(id.kind, ElementKind::Resource);
    }

    #[test]
    fn data_source_address() {
        let id = ResourceId::data_source("aws_redshift_cluster", "existing");
        assert_eq!(id.terraform_address(), "data.aws_redshift_cluster.existing");
        assert_eq!(id.to_string(), "data.aws_redshift_cluster.existing");
    }

    #[test]
    fn reference_paths() {
        let id = ResourceId::new("aws_redshift_cluster", "main");
        let nodes = Reference::new(&id, "cluster_nodes");
        assert_eq!(nodes.to_string(), "${aws_redshift_cluster.main.cluster_nodes}");
        assert_eq!(
            nodes.index(0).attribute("private_ip_address").to_expression(),
            "${aws_redshift_cluster.main.cluster_nodes[0].private_ip_address}"
        );
        let s: String = Reference::new(&id, "arn").into();
        assert_eq!(s, "${aws_redshift_cluster.main.arn}");
    }

    #[test]
    fn expression_detection() {
        assert!(is_expression("${aws_redshift_cluster.main.arn}"));
        assert!(!is_expression("arn:aws:redshift:us-east-1:123456789012:cluster:main"));
        assert!(!is_expression("${unterminated"));
    }

    #[test]
    fn meta_arguments_skip_empty_fields() {
        let meta = MetaArguments {
            count: Some(Token::Literal(2)),
            ..Default::default()
        };
        assert!(!meta.is_empty());
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            serde_json::json!({ "count": 2 })
        );
        assert!(MetaArguments::default().is_empty());
    }

    #[test]
    fn count_accepts_expression() {
        let meta: MetaArguments =
            serde_json::from_value(serde_json::json!({ "count": "${var.replicas}" })).unwrap();
        assert_eq!(
            meta.count,
            Some(Token::Expression("${var.replicas}".to_string()))
        );
    }
}
