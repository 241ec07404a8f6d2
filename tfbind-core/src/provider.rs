//! Provider - Registry of the Terraform types a binding package exposes
//!
//! A Provider lists the resource and data-source types it has bindings for,
//! so that Terraform JSON documents can be turned back into typed elements.

use serde_json::Value;

use crate::config::ProviderConfig;
use crate::element::TerraformElement;
use crate::error::ConfigError;
use crate::resource::ElementKind;
use crate::schema::ResourceSchema;

/// Definition of a Terraform type that a Provider can build
pub trait ResourceType: Send + Sync {
    /// Terraform type name (e.g., "aws_redshift_cluster")
    fn name(&self) -> &'static str;

    fn kind(&self) -> ElementKind;

    /// Attribute schema for this type
    fn schema(&self) -> ResourceSchema;

    /// Build a typed element from a Terraform JSON element body
    fn from_json(
        &self,
        name: &str,
        body: Value,
    ) -> Result<Box<dyn TerraformElement>, ConfigError>;
}

/// Main Provider trait
pub trait Provider: Send + Sync {
    /// Local name of this Provider (e.g., "aws")
    fn name(&self) -> &'static str;

    /// Registry source (e.g., "hashicorp/aws")
    fn source(&self) -> &'static str;

    /// List of types this Provider can build
    fn resource_types(&self) -> Vec<Box<dyn ResourceType>>;

    /// Find a type by kind and Terraform name
    fn find_type(&self, kind: ElementKind, name: &str) -> Option<Box<dyn ResourceType>> {
        self.resource_types()
            .into_iter()
            .find(|t| t.kind() == kind && t.name() == name)
    }

    /// Default provider block for stacks built from this Provider
    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.name(), self.source())
    }
}

/// Provider implementation for Box<dyn Provider>
impl Provider for Box<dyn Provider> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn source(&self) -> &'static str {
        (**self).source()
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        (**self).resource_types()
    }

    fn find_type(&self, kind: ElementKind, name: &str) -> Option<Box<dyn ResourceType>> {
        (**self).find_type(kind, name)
    }

    fn provider_config(&self) -> ProviderConfig {
        (**self).provider_config()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::element::{from_terraform_json, to_attributes};
    use crate::resource::{MetaArguments, ResourceId};
    use crate::schema::{AttributeSchema, AttributeType, Attributes};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(crate) struct AssociationConfig {
        pub(crate) cluster_identifier: String,
        pub(crate) schedule_identifier: String,
    }

    #[derive(Debug)]
    pub(crate) struct Association {
        pub(crate) address: ResourceId,
        pub(crate) meta: MetaArguments,
        pub(crate) config: AssociationConfig,
    }

    impl Association {
        pub(crate) fn new(name: &str, cluster: &str) -> Self {
            Self {
                address: ResourceId::new("aws_redshift_snapshot_schedule_association", name),
                meta: MetaArguments::default(),
                config: AssociationConfig {
                    cluster_identifier: cluster.to_string(),
                    schedule_identifier: "nightly".to_string(),
                },
            }
        }
    }

    pub(crate) fn association_schema() -> ResourceSchema {
        ResourceSchema::new("aws_redshift_snapshot_schedule_association")
            .attribute(AttributeSchema::new("cluster_identifier", AttributeType::String).required())
            .attribute(AttributeSchema::new("schedule_identifier", AttributeType::String).required())
    }

    impl TerraformElement for Association {
        fn address(&self) -> &ResourceId {
            &self.address
        }

        fn schema(&self) -> ResourceSchema {
            association_schema()
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

    struct AssociationType;

    impl ResourceType for AssociationType {
        fn name(&self) -> &'static str {
            "aws_redshift_snapshot_schedule_association"
        }

        fn kind(&self) -> ElementKind {
            ElementKind::Resource
        }

        fn schema(&self) -> ResourceSchema {
            association_schema()
        }

        fn from_json(
            &self,
            name: &str,
            body: Value,
        ) -> Result<Box<dyn TerraformElement>, ConfigError> {
            let (meta, config) = from_terraform_json(self.name(), body)?;
            Ok(Box::new(Association {
                address: ResourceId::new(self.name(), name),
                meta,
                config,
            }))
        }
    }

    // Mock Provider for testing
    pub(crate) struct MockProvider;

    /// Provider whose block carries its own arguments
    struct RegionalProvider;

    impl Provider for RegionalProvider {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn source(&self) -> &'static str {
            "example/mock"
        }

        fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
            Vec::new()
        }

        fn find_type(&self, _kind: ElementKind, _name: &str) -> Option<Box<dyn ResourceType>> {
            Some(Box::new(AssociationType))
        }

        fn provider_config(&self) -> ProviderConfig {
            ProviderConfig::new(self.name(), self.source())
                .with_version("~> 1.0")
                .with_argument("region", "us-east-1")
        }
    }

    impl Provider for MockProvider {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn source(&self) -> &'static str {
            "example/mock"
        }

        fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
            vec![Box::new(AssociationType)]
        }
    }

    #[test]
    fn find_type_by_kind_and_name() {
        let provider = MockProvider;
        assert!(
            provider
                .find_type(ElementKind::Resource, "aws_redshift_snapshot_schedule_association")
                .is_some()
        );
        assert!(
            provider
                .find_type(ElementKind::DataSource, "aws_redshift_snapshot_schedule_association")
                .is_none()
        );
    }

    #[test]
    fn boxed_provider_delegates() {
        let provider: Box<dyn Provider> = Box::new(MockProvider);
        assert_eq!(provider.name(), "mock");
        assert_eq!(provider.provider_config().source, "example/mock");
        assert_eq!(provider.resource_types().len(), 1);
    }

    #[test]
    fn boxed_provider_keeps_overridden_methods() {
        let provider: Box<dyn Provider> = Box::new(RegionalProvider);
        let config = provider.provider_config();
        assert_eq!(config.version.as_deref(), Some("~> 1.0"));
        assert_eq!(
            config.arguments.get("region"),
            Some(&Value::String("us-east-1".to_string()))
        );
        assert!(provider.find_type(ElementKind::DataSource, "anything").is_some());
    }
}
