//! data_aws_redshift_subnet_group bindings
//!
//! Generated from Terraform data source schema: aws_redshift_subnet_group
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

/// Terraform schema of `aws_redshift_subnet_group`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshift_subnet_group")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("subnet_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
}

/// `aws_redshift_subnet_group` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftSubnetGroup {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftSubnetGroupConfig,
}

impl DataAwsRedshiftSubnetGroup {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_subnet_group";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftSubnetGroupConfig) -> Self {
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

    pub fn config(&self) -> &DataAwsRedshiftSubnetGroupConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftSubnetGroupConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn description(&self) -> Reference {
        self.interpolation_for_attribute("description")
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

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    pub fn subnet_ids(&self) -> Reference {
        self.interpolation_for_attribute("subnet_ids")
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
}

impl TerraformElement for DataAwsRedshiftSubnetGroup {
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

/// Configuration of `aws_redshift_subnet_group`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftSubnetGroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
}

impl DataAwsRedshiftSubnetGroupConfig {
    pub fn builder() -> DataAwsRedshiftSubnetGroupConfigBuilder {
        DataAwsRedshiftSubnetGroupConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftSubnetGroupConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftSubnetGroupConfigBuilder {
    id: Option<String>,
    name: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
}

impl DataAwsRedshiftSubnetGroupConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn tags(mut self, value: impl Into<Token<BTreeMap<String, String>>>) -> Self {
        self.tags = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftSubnetGroupConfig, ConfigError> {
        Ok(DataAwsRedshiftSubnetGroupConfig {
            id: self.id,
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshift_subnet_group", "name"))?,
            tags: self.tags,
        })
    }
}
