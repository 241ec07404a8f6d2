//! redshift_parameter_group bindings
//!
//! Generated from Terraform resource schema: aws_redshift_parameter_group
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_parameter_group`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_parameter_group")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("family", AttributeType::String)
                .required(),
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
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .block(
            BlockSchema::new("parameter", NestingMode::Set)
                .attribute(
                    AttributeSchema::new("name", AttributeType::String)
                        .required(),
                )
                .attribute(
                    AttributeSchema::new("value", AttributeType::String)
                        .required(),
                ),
        )
}

/// `aws_redshift_parameter_group` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftParameterGroup {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftParameterGroupConfig,
}

impl RedshiftParameterGroup {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_parameter_group";

    pub fn new(name: impl Into<String>, config: RedshiftParameterGroupConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftParameterGroupConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftParameterGroupConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.config.description = Some(value.into());
    }

    pub fn reset_description(&mut self) {
        self.config.description = None;
    }

    pub fn family(&self) -> &str {
        &self.config.family
    }

    pub fn set_family(&mut self, value: impl Into<String>) {
        self.config.family = value.into();
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

    pub fn parameter(&self) -> &[RedshiftParameterGroupParameter] {
        &self.config.parameter
    }

    pub fn put_parameter(&mut self, value: Vec<RedshiftParameterGroupParameter>) {
        self.config.parameter = value;
    }

    pub fn reset_parameter(&mut self) {
        self.config.parameter.clear();
    }
}

impl TerraformElement for RedshiftParameterGroup {
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

/// Configuration of `aws_redshift_parameter_group`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftParameterGroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::block_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameter: Vec<RedshiftParameterGroupParameter>,
}

impl RedshiftParameterGroupConfig {
    pub fn builder() -> RedshiftParameterGroupConfigBuilder {
        RedshiftParameterGroupConfigBuilder::default()
    }
}

/// Builder for [`RedshiftParameterGroupConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftParameterGroupConfigBuilder {
    description: Option<String>,
    family: Option<String>,
    id: Option<String>,
    name: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
    parameter: Vec<RedshiftParameterGroupParameter>,
}

impl RedshiftParameterGroupConfigBuilder {
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn family(mut self, value: impl Into<String>) -> Self {
        self.family = Some(value.into());
        self
    }

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

    pub fn tags_all(mut self, value: impl Into<Token<BTreeMap<String, String>>>) -> Self {
        self.tags_all = Some(value.into());
        self
    }

    pub fn parameter(mut self, value: Vec<RedshiftParameterGroupParameter>) -> Self {
        self.parameter = value;
        self
    }

    pub fn build(self) -> Result<RedshiftParameterGroupConfig, ConfigError> {
        Ok(RedshiftParameterGroupConfig {
            description: self.description,
            family: self
                .family
                .ok_or_else(|| ConfigError::missing("aws_redshift_parameter_group", "family"))?,
            id: self.id,
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshift_parameter_group", "name"))?,
            tags: self.tags,
            tags_all: self.tags_all,
            parameter: self.parameter,
        })
    }
}

/// `parameter` block of `aws_redshift_parameter_group`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftParameterGroupParameter {
    pub name: String,
    pub value: String,
}

impl RedshiftParameterGroupParameter {
    pub fn builder() -> RedshiftParameterGroupParameterBuilder {
        RedshiftParameterGroupParameterBuilder::default()
    }
}

/// Builder for [`RedshiftParameterGroupParameter`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftParameterGroupParameterBuilder {
    name: Option<String>,
    value: Option<String>,
}

impl RedshiftParameterGroupParameterBuilder {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftParameterGroupParameter, ConfigError> {
        Ok(RedshiftParameterGroupParameter {
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshift_parameter_group.parameter", "name"))?,
            value: self
                .value
                .ok_or_else(|| ConfigError::missing("aws_redshift_parameter_group.parameter", "value"))?,
        })
    }
}
