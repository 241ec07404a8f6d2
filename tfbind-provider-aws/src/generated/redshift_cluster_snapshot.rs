//! redshift_cluster_snapshot bindings
//!
//! Generated from Terraform resource schema: aws_redshift_cluster_snapshot
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

/// Terraform schema of `aws_redshift_cluster_snapshot`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_cluster_snapshot")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
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
            AttributeSchema::new("manual_snapshot_retention_period", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("owner_account", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("snapshot_identifier", AttributeType::String)
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

/// `aws_redshift_cluster_snapshot` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftClusterSnapshot {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftClusterSnapshotConfig,
}

impl RedshiftClusterSnapshot {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_cluster_snapshot";

    pub fn new(name: impl Into<String>, config: RedshiftClusterSnapshotConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftClusterSnapshotConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftClusterSnapshotConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
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

    pub fn manual_snapshot_retention_period(&self) -> Option<&Token<i64>> {
        self.config.manual_snapshot_retention_period.as_ref()
    }

    pub fn set_manual_snapshot_retention_period(&mut self, value: impl Into<Token<i64>>) {
        self.config.manual_snapshot_retention_period = Some(value.into());
    }

    pub fn reset_manual_snapshot_retention_period(&mut self) {
        self.config.manual_snapshot_retention_period = None;
    }

    pub fn owner_account(&self) -> Reference {
        self.interpolation_for_attribute("owner_account")
    }

    pub fn snapshot_identifier(&self) -> &str {
        &self.config.snapshot_identifier
    }

    pub fn set_snapshot_identifier(&mut self, value: impl Into<String>) {
        self.config.snapshot_identifier = value.into();
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

impl TerraformElement for RedshiftClusterSnapshot {
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

/// Configuration of `aws_redshift_cluster_snapshot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftClusterSnapshotConfig {
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_snapshot_retention_period: Option<Token<i64>>,
    pub snapshot_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftClusterSnapshotConfig {
    pub fn builder() -> RedshiftClusterSnapshotConfigBuilder {
        RedshiftClusterSnapshotConfigBuilder::default()
    }
}

/// Builder for [`RedshiftClusterSnapshotConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterSnapshotConfigBuilder {
    cluster_identifier: Option<String>,
    id: Option<String>,
    manual_snapshot_retention_period: Option<Token<i64>>,
    snapshot_identifier: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftClusterSnapshotConfigBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn manual_snapshot_retention_period(mut self, value: impl Into<Token<i64>>) -> Self {
        self.manual_snapshot_retention_period = Some(value.into());
        self
    }

    pub fn snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.snapshot_identifier = Some(value.into());
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

    pub fn build(self) -> Result<RedshiftClusterSnapshotConfig, ConfigError> {
        Ok(RedshiftClusterSnapshotConfig {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster_snapshot", "cluster_identifier"))?,
            id: self.id,
            manual_snapshot_retention_period: self.manual_snapshot_retention_period,
            snapshot_identifier: self
                .snapshot_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster_snapshot", "snapshot_identifier"))?,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
