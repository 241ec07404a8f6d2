//! redshift_snapshot_schedule bindings
//!
//! Generated from Terraform resource schema: aws_redshift_snapshot_schedule
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

/// Terraform schema of `aws_redshift_snapshot_schedule`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_snapshot_schedule")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("definitions", AttributeType::Set(Box::new(AttributeType::String)))
                .required(),
        )
        .attribute(
            AttributeSchema::new("description", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("force_destroy", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("identifier", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("identifier_prefix", AttributeType::String)
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

/// `aws_redshift_snapshot_schedule` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftSnapshotSchedule {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftSnapshotScheduleConfig,
}

impl RedshiftSnapshotSchedule {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_snapshot_schedule";

    pub fn new(name: impl Into<String>, config: RedshiftSnapshotScheduleConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftSnapshotScheduleConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftSnapshotScheduleConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn definitions(&self) -> &Token<Vec<String>> {
        &self.config.definitions
    }

    pub fn set_definitions(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.definitions = value.into();
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

    pub fn force_destroy(&self) -> Option<&Token<bool>> {
        self.config.force_destroy.as_ref()
    }

    pub fn set_force_destroy(&mut self, value: impl Into<Token<bool>>) {
        self.config.force_destroy = Some(value.into());
    }

    pub fn reset_force_destroy(&mut self) {
        self.config.force_destroy = None;
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

    pub fn identifier(&self) -> Option<&str> {
        self.config.identifier.as_deref()
    }

    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.config.identifier = Some(value.into());
    }

    pub fn reset_identifier(&mut self) {
        self.config.identifier = None;
    }

    pub fn identifier_prefix(&self) -> Option<&str> {
        self.config.identifier_prefix.as_deref()
    }

    pub fn set_identifier_prefix(&mut self, value: impl Into<String>) {
        self.config.identifier_prefix = Some(value.into());
    }

    pub fn reset_identifier_prefix(&mut self) {
        self.config.identifier_prefix = None;
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

impl TerraformElement for RedshiftSnapshotSchedule {
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

/// Configuration of `aws_redshift_snapshot_schedule`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftSnapshotScheduleConfig {
    pub definitions: Token<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_destroy: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftSnapshotScheduleConfig {
    pub fn builder() -> RedshiftSnapshotScheduleConfigBuilder {
        RedshiftSnapshotScheduleConfigBuilder::default()
    }
}

/// Builder for [`RedshiftSnapshotScheduleConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftSnapshotScheduleConfigBuilder {
    definitions: Option<Token<Vec<String>>>,
    description: Option<String>,
    force_destroy: Option<Token<bool>>,
    id: Option<String>,
    identifier: Option<String>,
    identifier_prefix: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftSnapshotScheduleConfigBuilder {
    pub fn definitions(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.definitions = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn force_destroy(mut self, value: impl Into<Token<bool>>) -> Self {
        self.force_destroy = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn identifier(mut self, value: impl Into<String>) -> Self {
        self.identifier = Some(value.into());
        self
    }

    pub fn identifier_prefix(mut self, value: impl Into<String>) -> Self {
        self.identifier_prefix = Some(value.into());
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

    pub fn build(self) -> Result<RedshiftSnapshotScheduleConfig, ConfigError> {
        Ok(RedshiftSnapshotScheduleConfig {
            definitions: self
                .definitions
                .ok_or_else(|| ConfigError::missing("aws_redshift_snapshot_schedule", "definitions"))?,
            description: self.description,
            force_destroy: self.force_destroy,
            id: self.id,
            identifier: self.identifier,
            identifier_prefix: self.identifier_prefix,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
