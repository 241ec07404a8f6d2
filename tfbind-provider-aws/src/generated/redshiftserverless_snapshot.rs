//! redshiftserverless_snapshot bindings
//!
//! Generated from Terraform resource schema: aws_redshiftserverless_snapshot
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshiftserverless_snapshot`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftserverless_snapshot")
        .attribute(
            AttributeSchema::new("accounts_with_provisioned_restore_access", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("accounts_with_restore_access", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("admin_username", AttributeType::String)
                .computed(),
        )
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
                .computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("owner_account", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("retention_period", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("snapshot_name", AttributeType::String)
                .required(),
        )
}

/// `aws_redshiftserverless_snapshot` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftserverlessSnapshot {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftserverlessSnapshotConfig,
}

impl RedshiftserverlessSnapshot {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_snapshot";

    pub fn new(name: impl Into<String>, config: RedshiftserverlessSnapshotConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftserverlessSnapshotConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftserverlessSnapshotConfig {
        self.config
    }

    pub fn accounts_with_provisioned_restore_access(&self) -> Reference {
        self.interpolation_for_attribute("accounts_with_provisioned_restore_access")
    }

    pub fn accounts_with_restore_access(&self) -> Reference {
        self.interpolation_for_attribute("accounts_with_restore_access")
    }

    pub fn admin_username(&self) -> Reference {
        self.interpolation_for_attribute("admin_username")
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

    pub fn kms_key_id(&self) -> Reference {
        self.interpolation_for_attribute("kms_key_id")
    }

    pub fn namespace_arn(&self) -> Reference {
        self.interpolation_for_attribute("namespace_arn")
    }

    pub fn namespace_name(&self) -> &str {
        &self.config.namespace_name
    }

    pub fn set_namespace_name(&mut self, value: impl Into<String>) {
        self.config.namespace_name = value.into();
    }

    pub fn owner_account(&self) -> Reference {
        self.interpolation_for_attribute("owner_account")
    }

    pub fn retention_period(&self) -> Option<&Token<i64>> {
        self.config.retention_period.as_ref()
    }

    pub fn set_retention_period(&mut self, value: impl Into<Token<i64>>) {
        self.config.retention_period = Some(value.into());
    }

    pub fn reset_retention_period(&mut self) {
        self.config.retention_period = None;
    }

    pub fn snapshot_name(&self) -> &str {
        &self.config.snapshot_name
    }

    pub fn set_snapshot_name(&mut self, value: impl Into<String>) {
        self.config.snapshot_name = value.into();
    }
}

impl TerraformElement for RedshiftserverlessSnapshot {
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

/// Configuration of `aws_redshiftserverless_snapshot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessSnapshotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub namespace_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_period: Option<Token<i64>>,
    pub snapshot_name: String,
}

impl RedshiftserverlessSnapshotConfig {
    pub fn builder() -> RedshiftserverlessSnapshotConfigBuilder {
        RedshiftserverlessSnapshotConfigBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessSnapshotConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessSnapshotConfigBuilder {
    id: Option<String>,
    namespace_name: Option<String>,
    retention_period: Option<Token<i64>>,
    snapshot_name: Option<String>,
}

impl RedshiftserverlessSnapshotConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn namespace_name(mut self, value: impl Into<String>) -> Self {
        self.namespace_name = Some(value.into());
        self
    }

    pub fn retention_period(mut self, value: impl Into<Token<i64>>) -> Self {
        self.retention_period = Some(value.into());
        self
    }

    pub fn snapshot_name(mut self, value: impl Into<String>) -> Self {
        self.snapshot_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftserverlessSnapshotConfig, ConfigError> {
        Ok(RedshiftserverlessSnapshotConfig {
            id: self.id,
            namespace_name: self
                .namespace_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_snapshot", "namespace_name"))?,
            retention_period: self.retention_period,
            snapshot_name: self
                .snapshot_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_snapshot", "snapshot_name"))?,
        })
    }
}
