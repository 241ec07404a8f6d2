//! redshift_hsm_configuration bindings
//!
//! Generated from Terraform resource schema: aws_redshift_hsm_configuration
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_hsm_configuration`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_hsm_configuration")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("hsm_configuration_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("hsm_ip_address", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("hsm_partition_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("hsm_partition_password", AttributeType::String)
                .required()
                .sensitive(),
        )
        .attribute(
            AttributeSchema::new("hsm_server_public_certificate", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
}

/// `aws_redshift_hsm_configuration` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftHsmConfiguration {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftHsmConfigurationConfig,
}

impl RedshiftHsmConfiguration {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_hsm_configuration";

    pub fn new(name: impl Into<String>, config: RedshiftHsmConfigurationConfig) -> Self {
        Self {
            address: ResourceId::new(Self::TF_RESOURCE_TYPE, name),
            meta: MetaArguments::default(),
            config,
        }
    }

    /// Build from the body of a Terraform JSON element
    pub fn from_json(name: impl Into<String>, body: Value) -> Result<Self, ConfigError> {
        let (meta, config) = from_terraform_json(Self::TF_RESOURCE_TYPE, body)?;
        Ok(Self {
            address: ResourceId::new(Self::TF_RESOURCE_TYPE, name),
            meta,
            config,
        })
    }

    pub fn config(&self) -> &RedshiftHsmConfigurationConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftHsmConfigurationConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn description(&self) -> &str {
        &self.config.description
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.config.description = value.into();
    }

    pub fn hsm_configuration_identifier(&self) -> &str {
        &self.config.hsm_configuration_identifier
    }

    pub fn set_hsm_configuration_identifier(&mut self, value: impl Into<String>) {
        self.config.hsm_configuration_identifier = value.into();
    }

    pub fn hsm_ip_address(&self) -> &str {
        &self.config.hsm_ip_address
    }

    pub fn set_hsm_ip_address(&mut self, value: impl Into<String>) {
        self.config.hsm_ip_address = value.into();
    }

    pub fn hsm_partition_name(&self) -> &str {
        &self.config.hsm_partition_name
    }

    pub fn set_hsm_partition_name(&mut self, value: impl Into<String>) {
        self.config.hsm_partition_name = value.into();
    }

    pub fn hsm_partition_password(&self) -> &str {
        &self.config.hsm_partition_password
    }

    pub fn set_hsm_partition_password(&mut self, value: impl Into<String>) {
        self.config.hsm_partition_password = value.into();
    }

    pub fn hsm_server_public_certificate(&self) -> &str {
        &self.config.hsm_server_public_certificate
    }

    pub fn set_hsm_server_public_certificate(&mut self, value: impl Into<String>) {
        self.config.hsm_server_public_certificate = value.into();
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

    pub fn tags(&self) -> Option<&Token<BTreeMap<String, String>>> {
        self.config.tags.as_ref()
    }

    pub fn set_tags(&mut self, value: impl Into<Token<BTreeMap<String, String>>>) {
        self.config.tags = Some(value.into());
    }

    pub fn reset_tags(&mut self) {
        self.config.tags = None;
    }

    pub fn tags_all(&self) -> Option<&Token<BTreeMap<String, String>>> {
        self.config.tags_all.as_ref()
    }

    pub fn set_tags_all(&mut self, value: impl Into<Token<BTreeMap<String, String>>>) {
        self.config.tags_all = Some(value.into());
    }

    pub fn reset_tags_all(&mut self) {
        self.config.tags_all = None;
    }
}

impl TerraformElement for RedshiftHsmConfiguration {
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

/// Configuration of `aws_redshift_hsm_configuration`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftHsmConfigurationConfig {
    pub description: String,
    pub hsm_configuration_identifier: String,
    pub hsm_ip_address: String,
    pub hsm_partition_name: String,
    pub hsm_partition_password: String,
    pub hsm_server_public_certificate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftHsmConfigurationConfig {
    pub fn builder() -> RedshiftHsmConfigurationConfigBuilder {
        RedshiftHsmConfigurationConfigBuilder::default()
    }
}

/// Builder for [`RedshiftHsmConfigurationConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftHsmConfigurationConfigBuilder {
    description: Option<String>,
    hsm_configuration_identifier: Option<String>,
    hsm_ip_address: Option<String>,
    hsm_partition_name: Option<String>,
    hsm_partition_password: Option<String>,
    hsm_server_public_certificate: Option<String>,
    id: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftHsmConfigurationConfigBuilder {
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn hsm_configuration_identifier(mut self, value: impl Into<String>) -> Self {
        self.hsm_configuration_identifier = Some(value.into());
        self
    }

    pub fn hsm_ip_address(mut self, value: impl Into<String>) -> Self {
        self.hsm_ip_address = Some(value.into());
        self
    }

    pub fn hsm_partition_name(mut self, value: impl Into<String>) -> Self {
        self.hsm_partition_name = Some(value.into());
        self
    }

    pub fn hsm_partition_password(mut self, value: impl Into<String>) -> Self {
        self.hsm_partition_password = Some(value.into());
        self
    }

    pub fn hsm_server_public_certificate(mut self, value: impl Into<String>) -> Self {
        self.hsm_server_public_certificate = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn tags(mut self, value: impl Into<Token<BTreeMap<String, String>>>) -> Self {
        self.tags = Some(value.into());
        self
    }

    pub fn tags_all(mut self, value: impl Into<Token<BTreeMap<String, String>>>) -> Self {
        self.tags_all = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftHsmConfigurationConfig, ConfigError> {
        Ok(RedshiftHsmConfigurationConfig {
            description: self
                .description
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_configuration", "description"))?,
            hsm_configuration_identifier: self
                .hsm_configuration_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_configuration", "hsm_configuration_identifier"))?,
            hsm_ip_address: self
                .hsm_ip_address
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_configuration", "hsm_ip_address"))?,
            hsm_partition_name: self
                .hsm_partition_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_configuration", "hsm_partition_name"))?,
            hsm_partition_password: self
                .hsm_partition_password
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_configuration", "hsm_partition_password"))?,
            hsm_server_public_certificate: self
                .hsm_server_public_certificate
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_configuration", "hsm_server_public_certificate"))?,
            id: self.id,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
