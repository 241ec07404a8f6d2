//! Element - The capability every generated binding exposes to its host
//!
//! A binding owns its typed configuration. The stack that hosts it only
//! needs the element's address, its schema, its meta-arguments and the
//! synthesized attribute map, which is what this trait provides.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::resource::{ElementKind, MetaArguments, Reference, ResourceId};
use crate::schema::{Attributes, ResourceSchema};

/// A Terraform resource or data source that can be synthesized
pub trait TerraformElement: fmt::Debug + Send + Sync {
    /// Address of this element (type + local name)
    fn address(&self) -> &ResourceId;

    /// Terraform schema of this element's type
    fn schema(&self) -> ResourceSchema;

    fn meta(&self) -> &MetaArguments;

    fn meta_mut(&mut self) -> &mut MetaArguments;

    /// Configured attributes as they appear in Terraform JSON
    fn synthesize_attributes(&self) -> Result<Attributes, ConfigError>;

    fn kind(&self) -> ElementKind {
        self.address().kind
    }

    fn terraform_address(&self) -> String {
        self.address().terraform_address()
    }

    /// Reference token to any attribute of this element
    fn interpolation_for_attribute(&self, attribute: &str) -> Reference {
        Reference::new(self.address(), attribute)
    }

    /// Add an explicit dependency on another element
    fn depends_on(&mut self, other: &dyn TerraformElement) {
        let target = other.terraform_address();
        if !self.meta().depends_on.contains(&target) {
            self.meta_mut().depends_on.push(target);
        }
    }

    /// Check the synthesized attributes against the element's schema
    fn validate(&self) -> Result<(), ConfigError> {
        let attributes = self.synthesize_attributes()?;
        self.schema()
            .validate(&attributes)
            .map_err(|errors| ConfigError::Invalid {
                address: self.terraform_address(),
                errors,
            })
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serialize a typed configuration into an attribute map
pub fn to_attributes<T: Serialize>(
    address: &ResourceId,
    config: &T,
) -> Result<Attributes, ConfigError> {
    let value = serde_json::to_value(config).map_err(|source| ConfigError::Serialize {
        address: address.terraform_address(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::NotAnObject {
            resource_type: address.resource_type.clone(),
            got: json_kind(&other).to_string(),
        }),
    }
}

/// Split a Terraform JSON element body into meta-arguments and a typed configuration
pub fn from_terraform_json<C: DeserializeOwned>(
    resource_type: &str,
    body: Value,
) -> Result<(MetaArguments, C), ConfigError> {
    let Value::Object(mut attributes) = body else {
        return Err(ConfigError::NotAnObject {
            resource_type: resource_type.to_string(),
            got: json_kind(&body).to_string(),
        });
    };

    let mut meta = Map::new();
    for key in MetaArguments::KEYS {
        if let Some(value) = attributes.remove(*key) {
            meta.insert(key.to_string(), value);
        }
    }

    let deserialize_error = |source| ConfigError::Deserialize {
        resource_type: resource_type.to_string(),
        source,
    };
    let meta = serde_json::from_value(Value::Object(meta)).map_err(deserialize_error)?;
    let config = serde_json::from_value(Value::Object(attributes)).map_err(deserialize_error)?;
    Ok((meta, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};
    use crate::value::Token;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct PolicyConfig {
        policy: String,
        resource_arn: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    }

    #[derive(Debug)]
    struct Policy {
        address: ResourceId,
        meta: MetaArguments,
        config: PolicyConfig,
    }

    impl TerraformElement for Policy {
        fn address(&self) -> &ResourceId {
            &self.address
        }

        fn schema(&self) -> ResourceSchema {
            ResourceSchema::new("aws_redshiftserverless_resource_policy")
                .attribute(AttributeSchema::new("id", AttributeType::String).optional_computed())
                .attribute(AttributeSchema::new("policy", AttributeType::String).required())
                .attribute(AttributeSchema::new("resource_arn", AttributeType::String).required())
        }

        fn meta(&self) -> &MetaArguments {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut MetaArguments {
            &mut self.meta
        }

        fn synthesize_attributes(&self) -> Result<Attributes, ConfigError> {
            to_attributes(&self.address, &self.config)
        }
    }

    fn policy(name: &str) -> Policy {
        Policy {
            address: ResourceId::new("aws_redshiftserverless_resource_policy", name),
            meta: MetaArguments::default(),
            config: PolicyConfig {
                policy: "{}".to_string(),
                resource_arn: "arn:aws:redshift-serverless:::snapshot/x".to_string(),
                id: None,
            },
        }
    }

    #[test]
    fn synthesize_skips_unset_optionals() {
        let attrs = policy("p").synthesize_attributes().unwrap();
        assert_eq!(attrs.len(), 2);
        assert!(!attrs.contains_key("id"));
    }

    #[test]
    fn validate_against_own_schema() {
        assert!(policy("p").validate().is_ok());
    }

    #[test]
    fn depends_on_is_deduplicated() {
        let target = policy("target");
        let mut dependent = policy("dependent");
        dependent.depends_on(&target);
        dependent.depends_on(&target);
        assert_eq!(
            dependent.meta().depends_on,
            vec!["aws_redshiftserverless_resource_policy.target".to_string()]
        );
    }

    #[test]
    fn interpolation_tokens() {
        let p = policy("shared");
        assert_eq!(
            p.interpolation_for_attribute("id").to_string(),
            "${aws_redshiftserverless_resource_policy.shared.id}"
        );
    }

    #[test]
    fn from_json_splits_meta_arguments() {
        let body = json!({
            "policy": "{}",
            "resource_arn": "arn",
            "count": 2,
            "depends_on": ["aws_redshiftserverless_namespace.main"],
        });
        let (meta, config): (MetaArguments, PolicyConfig) =
            from_terraform_json("aws_redshiftserverless_resource_policy", body).unwrap();
        assert_eq!(meta.count, Some(Token::Literal(2)));
        assert_eq!(meta.depends_on.len(), 1);
        assert_eq!(config.policy, "{}");
    }

    #[test]
    fn from_json_reports_missing_field() {
        let body = json!({ "policy": "{}" });
        let err = from_terraform_json::<PolicyConfig>("aws_redshiftserverless_resource_policy", body)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize { .. }));
        assert!(err.to_string().contains("resource_arn"));
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = from_terraform_json::<PolicyConfig>("aws_redshiftserverless_resource_policy", json!([]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "aws_redshiftserverless_resource_policy: expected a JSON object, got array"
        );
    }
}
