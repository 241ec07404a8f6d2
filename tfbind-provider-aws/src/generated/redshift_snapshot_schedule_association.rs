//! redshift_snapshot_schedule_association bindings
//!
//! Generated from Terraform resource schema: aws_redshift_snapshot_schedule_association
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};

/// Terraform schema of `aws_redshift_snapshot_schedule_association`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_snapshot_schedule_association")
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("schedule_identifier", AttributeType::String)
                .required(),
        )
}

/// `aws_redshift_snapshot_schedule_association` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftSnapshotScheduleAssociation {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftSnapshotScheduleAssociationConfig,
}

impl RedshiftSnapshotScheduleAssociation {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_snapshot_schedule_association";

    pub fn new(name: impl Into<String>, config: RedshiftSnapshotScheduleAssociationConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftSnapshotScheduleAssociationConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftSnapshotScheduleAssociationConfig {
        self.config
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

    pub fn schedule_identifier(&self) -> &str {
        &self.config.schedule_identifier
    }

    pub fn set_schedule_identifier(&mut self, value: impl Into<String>) {
        self.config.schedule_identifier = value.into();
    }
}

impl TerraformElement for RedshiftSnapshotScheduleAssociation {
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

/// Configuration of `aws_redshift_snapshot_schedule_association`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftSnapshotScheduleAssociationConfig {
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub schedule_identifier: String,
}

impl RedshiftSnapshotScheduleAssociationConfig {
    pub fn builder() -> RedshiftSnapshotScheduleAssociationConfigBuilder {
        RedshiftSnapshotScheduleAssociationConfigBuilder::default()
    }
}

/// Builder for [`RedshiftSnapshotScheduleAssociationConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftSnapshotScheduleAssociationConfigBuilder {
    cluster_identifier: Option<String>,
    id: Option<String>,
    schedule_identifier: Option<String>,
}

impl RedshiftSnapshotScheduleAssociationConfigBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn schedule_identifier(mut self, value: impl Into<String>) -> Self {
        self.schedule_identifier = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftSnapshotScheduleAssociationConfig, ConfigError> {
        Ok(RedshiftSnapshotScheduleAssociationConfig {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_snapshot_schedule_association", "cluster_identifier"))?,
            id: self.id,
            schedule_identifier: self
                .schedule_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_snapshot_schedule_association", "schedule_identifier"))?,
        })
    }
}
