//! data_aws_redshift_cluster bindings
//!
//! Generated from Terraform data source schema: aws_redshift_cluster
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::block::{ComputedList, ComputedObject};
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_cluster`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshift_cluster")
        .attribute(
            AttributeSchema::new("allow_version_upgrade", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("aqua_configuration_status", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("automated_snapshot_retention_period", AttributeType::Int)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("availability_zone", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("availability_zone_relocation_enabled", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("bucket_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("cluster_nodes", AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("node_role".to_string(), AttributeType::String), ("private_ip_address".to_string(), AttributeType::String), ("public_ip_address".to_string(), AttributeType::String)])))))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_parameter_group_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_public_key", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_revision_number", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_security_groups", AttributeType::List(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_subnet_group_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_type", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_version", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("database_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("default_iam_role_arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("elastic_ip", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("enable_logging", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("encrypted", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("endpoint", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("enhanced_vpc_routing", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("iam_roles", AttributeType::List(Box::new(AttributeType::String)))
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
            AttributeSchema::new("log_destination_type", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("log_exports", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("maintenance_track_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("manual_snapshot_retention_period", AttributeType::Int)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("master_username", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("node_type", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("number_of_nodes", AttributeType::Int)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("port", AttributeType::Int)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("preferred_maintenance_window", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("publicly_accessible", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("s3_key_prefix", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("vpc_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("vpc_security_group_ids", AttributeType::List(Box::new(AttributeType::String)))
                .computed(),
        )
}

/// `aws_redshift_cluster` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftCluster {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftClusterConfig,
}

impl DataAwsRedshiftCluster {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_cluster";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftClusterConfig) -> Self {
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

    pub fn config(&self) -> &DataAwsRedshiftClusterConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftClusterConfig {
        self.config
    }

    pub fn allow_version_upgrade(&self) -> Reference {
        self.interpolation_for_attribute("allow_version_upgrade")
    }

    pub fn aqua_configuration_status(&self) -> Reference {
        self.interpolation_for_attribute("aqua_configuration_status")
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn automated_snapshot_retention_period(&self) -> Reference {
        self.interpolation_for_attribute("automated_snapshot_retention_period")
    }

    pub fn availability_zone(&self) -> Reference {
        self.interpolation_for_attribute("availability_zone")
    }

    pub fn availability_zone_relocation_enabled(&self) -> Reference {
        self.interpolation_for_attribute("availability_zone_relocation_enabled")
    }

    pub fn bucket_name(&self) -> Reference {
        self.interpolation_for_attribute("bucket_name")
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
    }

    pub fn cluster_nodes(&self) -> DataAwsRedshiftClusterClusterNodesList {
        DataAwsRedshiftClusterClusterNodesList::new(self.interpolation_for_attribute("cluster_nodes"))
    }

    pub fn cluster_parameter_group_name(&self) -> Reference {
        self.interpolation_for_attribute("cluster_parameter_group_name")
    }

    pub fn cluster_public_key(&self) -> Reference {
        self.interpolation_for_attribute("cluster_public_key")
    }

    pub fn cluster_revision_number(&self) -> Reference {
        self.interpolation_for_attribute("cluster_revision_number")
    }

    pub fn cluster_security_groups(&self) -> Reference {
        self.interpolation_for_attribute("cluster_security_groups")
    }

    pub fn cluster_subnet_group_name(&self) -> Reference {
        self.interpolation_for_attribute("cluster_subnet_group_name")
    }

    pub fn cluster_type(&self) -> Reference {
        self.interpolation_for_attribute("cluster_type")
    }

    pub fn cluster_version(&self) -> Reference {
        self.interpolation_for_attribute("cluster_version")
    }

    pub fn database_name(&self) -> Reference {
        self.interpolation_for_attribute("database_name")
    }

    pub fn default_iam_role_arn(&self) -> Reference {
        self.interpolation_for_attribute("default_iam_role_arn")
    }

    pub fn elastic_ip(&self) -> Reference {
        self.interpolation_for_attribute("elastic_ip")
    }

    pub fn enable_logging(&self) -> Reference {
        self.interpolation_for_attribute("enable_logging")
    }

    pub fn encrypted(&self) -> Reference {
        self.interpolation_for_attribute("encrypted")
    }

    pub fn endpoint(&self) -> Reference {
        self.interpolation_for_attribute("endpoint")
    }

    pub fn enhanced_vpc_routing(&self) -> Reference {
        self.interpolation_for_attribute("enhanced_vpc_routing")
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

    pub fn log_destination_type(&self) -> Reference {
        self.interpolation_for_attribute("log_destination_type")
    }

    pub fn log_exports(&self) -> Reference {
        self.interpolation_for_attribute("log_exports")
    }

    pub fn maintenance_track_name(&self) -> Reference {
        self.interpolation_for_attribute("maintenance_track_name")
    }

    pub fn manual_snapshot_retention_period(&self) -> Reference {
        self.interpolation_for_attribute("manual_snapshot_retention_period")
    }

    pub fn master_username(&self) -> Reference {
        self.interpolation_for_attribute("master_username")
    }

    pub fn node_type(&self) -> Reference {
        self.interpolation_for_attribute("node_type")
    }

    pub fn number_of_nodes(&self) -> Reference {
        self.interpolation_for_attribute("number_of_nodes")
    }

    pub fn port(&self) -> Reference {
        self.interpolation_for_attribute("port")
    }

    pub fn preferred_maintenance_window(&self) -> Reference {
        self.interpolation_for_attribute("preferred_maintenance_window")
    }

    pub fn publicly_accessible(&self) -> Reference {
        self.interpolation_for_attribute("publicly_accessible")
    }

    pub fn s3_key_prefix(&self) -> Reference {
        self.interpolation_for_attribute("s3_key_prefix")
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

    pub fn vpc_id(&self) -> Reference {
        self.interpolation_for_attribute("vpc_id")
    }

    pub fn vpc_security_group_ids(&self) -> Reference {
        self.interpolation_for_attribute("vpc_security_group_ids")
    }
}

impl TerraformElement for DataAwsRedshiftCluster {
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

/// Configuration of `aws_redshift_cluster`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftClusterConfig {
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
}

impl DataAwsRedshiftClusterConfig {
    pub fn builder() -> DataAwsRedshiftClusterConfigBuilder {
        DataAwsRedshiftClusterConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftClusterConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftClusterConfigBuilder {
    cluster_identifier: Option<String>,
    id: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
}

impl DataAwsRedshiftClusterConfigBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
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

    pub fn build(self) -> Result<DataAwsRedshiftClusterConfig, ConfigError> {
        Ok(DataAwsRedshiftClusterConfig {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster", "cluster_identifier"))?,
            id: self.id,
            tags: self.tags,
        })
    }
}

/// Computed `cluster_nodes` list of `aws_redshift_cluster`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftClusterClusterNodesList {
    inner: ComputedList,
}

impl DataAwsRedshiftClusterClusterNodesList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> DataAwsRedshiftClusterClusterNodesOutputReference {
        DataAwsRedshiftClusterClusterNodesOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`DataAwsRedshiftClusterClusterNodesList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftClusterClusterNodesOutputReference {
    inner: ComputedObject,
}

impl DataAwsRedshiftClusterClusterNodesOutputReference {
    pub fn node_role(&self) -> Reference {
        self.inner.attribute("node_role")
    }

    pub fn private_ip_address(&self) -> Reference {
        self.inner.attribute("private_ip_address")
    }

    pub fn public_ip_address(&self) -> Reference {
        self.inner.attribute("public_ip_address")
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}
