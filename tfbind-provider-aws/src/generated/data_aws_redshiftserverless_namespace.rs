//! data_aws_redshiftserverless_namespace bindings
//!
//! Generated from Terraform data source schema: aws_redshiftserverless_namespace
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};

/// Terraform schema of `aws_redshiftserverless_namespace`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshiftserverless_namespace")
        .attribute(
            AttributeSchema::new("admin_username", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("db_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("default_iam_role_arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("iam_roles", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("kms_key_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("log_exports", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_name", AttributeType::String)
                .required(),
        )
}

/// `aws_redshiftserverless_namespace` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftserverlessNamespace {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftserverlessNamespaceConfig,
}

impl DataAwsRedshiftserverlessNamespace {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_namespace";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftserverlessNamespaceConfig) -> Self {
        Self {
            address: ResourceId::data_source(Self::TF_RESOURCE_TYPE, name),
            meta: MetaArguments::default(),
            config,
        }
    }

    /// Build from the body of a Terraform JSON element
    pub fn from_json(name: impl Into<String>, body: Value) -> Result<Self, ConfigError> {
        let (meta, config) = from_terraform_json(Self::TF_RESOURCE_TYPE, body)?;
        Ok(Self {
            address: ResourceId::data_source(Self::TF_RESOURCE_TYPE, name),
            meta,
            config,
        })
    }

    pub fn config(&self) -> &DataAwsRedshiftserverlessNamespaceConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftserverlessNamespaceConfig {
        self.config
    }

    pub fn admin_username(&self) -> Reference {
        self.interpolation_for_attribute("admin_username")
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn db_name(&self) -> Reference {
        self.interpolation_for_attribute("db_name")
    }

    pub fn default_iam_role_arn(&self) -> Reference {
        self.interpolation_for_attribute("default_iam_role_arn")
    }

    pub fn iam_roles(&self) -> Reference {
        self.interpolation_for_attribute("iam_roles")
    }

    pub fn id(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = Some(value.into());
    }

    pub fn reset_id(&mut self) {
        self.config.id = None;
    }

    pub fn kms_key_id(&self) -> Reference {
        self.interpolation_for_attribute("kms_key_id")
    }

    pub fn log_exports(&self) -> Reference {
        self.interpolation_for_attribute("log_exports")
    }

    pub fn namespace_id(&self) -> Reference {
        self.interpolation_for_attribute("namespace_id")
    }

    pub fn namespace_name(&self) -> &str {
        &self.config.namespace_name
    }

    pub fn set_namespace_name(&mut self, value: impl Into<String>) {
        self.config.namespace_name = value.into();
    }
}

impl TerraformElement for DataAwsRedshiftserverlessNamespace {
    fn address(&self) -> &ResourceId {
        &self.address
    }

    fn schema(&self) -> ResourceSchema {
        schema()
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

/// Configuration of `aws_redshiftserverless_namespace`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftserverlessNamespaceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub namespace_name: String,
}

impl DataAwsRedshiftserverlessNamespaceConfig {
    pub fn builder() -> DataAwsRedshiftserverlessNamespaceConfigBuilder {
        DataAwsRedshiftserverlessNamespaceConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftserverlessNamespaceConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftserverlessNamespaceConfigBuilder {
    id: Option<String>,
    namespace_name: Option<String>,
}

impl DataAwsRedshiftserverlessNamespaceConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn namespace_name(mut self, value: impl Into<String>) -> Self {
        self.namespace_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftserverlessNamespaceConfig, ConfigError> {
        Ok(DataAwsRedshiftserverlessNamespaceConfig {
            id: self.id,
            namespace_name: self
                .namespace_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_namespace", "namespace_name"))?,
        })
    }
}
