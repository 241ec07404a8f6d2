//! redshift_snapshot_copy_grant bindings
//!
//! Generated from Terraform resource schema: aws_redshift_snapshot_copy_grant
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

/// Terraform schema of `aws_redshift_snapshot_copy_grant`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_snapshot_copy_grant")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("kms_key_id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("snapshot_copy_grant_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
}

/// `aws_redshift_snapshot_copy_grant` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftSnapshotCopyGrant {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftSnapshotCopyGrantConfig,
}

impl RedshiftSnapshotCopyGrant {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_snapshot_copy_grant";

    pub fn new(name: impl Into<String>, config: RedshiftSnapshotCopyGrantConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftSnapshotCopyGrantConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftSnapshotCopyGrantConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
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

    pub fn kms_key_id(&self) -> Option<&str> {
        self.config.kms_key_id.as_deref()
    }

    pub fn set_kms_key_id(&mut self, value: impl Into<String>) {
        self.config.kms_key_id = Some(value.into());
    }

    pub fn reset_kms_key_id(&mut self) {
        self.config.kms_key_id = None;
    }

    pub fn snapshot_copy_grant_name(&self) -> &str {
        &self.config.snapshot_copy_grant_name
    }

    pub fn set_snapshot_copy_grant_name(&mut self, value: impl Into<String>) {
        self.config.snapshot_copy_grant_name = value.into();
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

impl TerraformElement for RedshiftSnapshotCopyGrant {
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

/// Configuration of `aws_redshift_snapshot_copy_grant`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftSnapshotCopyGrantConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    pub snapshot_copy_grant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftSnapshotCopyGrantConfig {
    pub fn builder() -> RedshiftSnapshotCopyGrantConfigBuilder {
        RedshiftSnapshotCopyGrantConfigBuilder::default()
    }
}

/// Builder for [`RedshiftSnapshotCopyGrantConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftSnapshotCopyGrantConfigBuilder {
    id: Option<String>,
    kms_key_id: Option<String>,
    snapshot_copy_grant_name: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftSnapshotCopyGrantConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    pub fn snapshot_copy_grant_name(mut self, value: impl Into<String>) -> Self {
        self.snapshot_copy_grant_name = Some(value.into());
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

    pub fn build(self) -> Result<RedshiftSnapshotCopyGrantConfig, ConfigError> {
        Ok(RedshiftSnapshotCopyGrantConfig {
            id: self.id,
            kms_key_id: self.kms_key_id,
            snapshot_copy_grant_name: self
                .snapshot_copy_grant_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_snapshot_copy_grant", "snapshot_copy_grant_name"))?,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
