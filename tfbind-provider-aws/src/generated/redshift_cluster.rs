//! redshift_cluster bindings
//!
//! Generated from Terraform resource schema: aws_redshift_cluster
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::block::{ComputedList, ComputedObject};
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema, validate_enum};
use tfbind_core::value::Token;

const VALID_AQUA_CONFIGURATION_STATUS: &[&str] = &["enabled", "disabled", "auto"];

fn validate_aqua_configuration_status(value: &Value) -> Result<(), String> {
    validate_enum(value, "AquaConfigurationStatus", VALID_AQUA_CONFIGURATION_STATUS)
}

const VALID_CLUSTER_TYPE: &[&str] = &["single-node", "multi-node"];

fn validate_cluster_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "ClusterType", VALID_CLUSTER_TYPE)
}

const VALID_LOGGING_LOG_DESTINATION_TYPE: &[&str] = &["s3", "cloudwatch"];

fn validate_logging_log_destination_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "LogDestinationType", VALID_LOGGING_LOG_DESTINATION_TYPE)
}

/// Terraform schema of `aws_redshift_cluster`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_cluster")
        .attribute(
            AttributeSchema::new("allow_version_upgrade", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("apply_immediately", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("aqua_configuration_status", AttributeType::Custom { name: "AquaConfigurationStatus".to_string(), base: Box::new(AttributeType::String), validate: validate_aqua_configuration_status })
                .optional_computed()
                .with_description("The value represents how the cluster is configured to use AQUA. Valid values are `enabled`, `disabled`, `auto`."),
        )
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("automated_snapshot_retention_period", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("availability_zone", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("availability_zone_relocation_enabled", AttributeType::Bool),
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
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_public_key", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_revision_number", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_security_groups", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_subnet_group_name", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_type", AttributeType::Custom { name: "ClusterType".to_string(), base: Box::new(AttributeType::String), validate: validate_cluster_type })
                .optional_computed()
                .with_description("The cluster type to use. Valid values are `single-node`, `multi-node`."),
        )
        .attribute(
            AttributeSchema::new("cluster_version", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("database_name", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("default_iam_role_arn", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("dns_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("elastic_ip", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("encrypted", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("endpoint", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("enhanced_vpc_routing", AttributeType::Bool)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("final_snapshot_identifier", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("iam_roles", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
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
            AttributeSchema::new("maintenance_track_name", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("manual_snapshot_retention_period", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("master_password", AttributeType::String)
                .sensitive(),
        )
        .attribute(
            AttributeSchema::new("master_username", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("node_type", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("number_of_nodes", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("owner_account", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("port", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("preferred_maintenance_window", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("publicly_accessible", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("skip_final_snapshot", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("snapshot_cluster_identifier", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("snapshot_identifier", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("vpc_security_group_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .block(
            BlockSchema::new("logging", NestingMode::List)
                .max_items(1)
                .attribute(
                    AttributeSchema::new("bucket_name", AttributeType::String),
                )
                .attribute(
                    AttributeSchema::new("enable", AttributeType::Bool)
                        .required(),
                )
                .attribute(
                    AttributeSchema::new("log_destination_type", AttributeType::Custom { name: "LogDestinationType".to_string(), base: Box::new(AttributeType::String), validate: validate_logging_log_destination_type })
                        .with_description("The log destination type. Valid values are `s3`, `cloudwatch`."),
                )
                .attribute(
                    AttributeSchema::new("log_exports", AttributeType::Set(Box::new(AttributeType::String))),
                )
                .attribute(
                    AttributeSchema::new("s3_key_prefix", AttributeType::String),
                ),
        )
        .block(
            BlockSchema::new("snapshot_copy", NestingMode::List)
                .max_items(1)
                .attribute(
                    AttributeSchema::new("destination_region", AttributeType::String)
                        .required(),
                )
                .attribute(
                    AttributeSchema::new("grant_name", AttributeType::String),
                )
                .attribute(
                    AttributeSchema::new("retention_period", AttributeType::Int),
                ),
        )
        .block(
            BlockSchema::new("timeouts", NestingMode::Single)
                .attribute(
                    AttributeSchema::new("create", AttributeType::String),
                )
                .attribute(
                    AttributeSchema::new("delete", AttributeType::String),
                )
                .attribute(
                    AttributeSchema::new("update", AttributeType::String),
                ),
        )
}

/// `aws_redshift_cluster` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftCluster {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftClusterConfig,
}

impl RedshiftCluster {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_cluster";

    pub fn new(name: impl Into<String>, config: RedshiftClusterConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftClusterConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftClusterConfig {
        self.config
    }

    pub fn allow_version_upgrade(&self) -> Option<&Token<bool>> {
        self.config.allow_version_upgrade.as_ref()
    }

    pub fn set_allow_version_upgrade(&mut self, value: impl Into<Token<bool>>) {
        self.config.allow_version_upgrade = Some(value.into());
    }

    pub fn reset_allow_version_upgrade(&mut self) {
        self.config.allow_version_upgrade = None;
    }

    pub fn apply_immediately(&self) -> Option<&Token<bool>> {
        self.config.apply_immediately.as_ref()
    }

    pub fn set_apply_immediately(&mut self, value: impl Into<Token<bool>>) {
        self.config.apply_immediately = Some(value.into());
    }

    pub fn reset_apply_immediately(&mut self) {
        self.config.apply_immediately = None;
    }

    pub fn aqua_configuration_status(&self) -> Option<&str> {
        self.config.aqua_configuration_status.as_deref()
    }

    pub fn set_aqua_configuration_status(&mut self, value: impl Into<String>) {
        self.config.aqua_configuration_status = Some(value.into());
    }

    pub fn reset_aqua_configuration_status(&mut self) {
        self.config.aqua_configuration_status = None;
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn automated_snapshot_retention_period(&self) -> Option<&Token<i64>> {
        self.config.automated_snapshot_retention_period.as_ref()
    }

    pub fn set_automated_snapshot_retention_period(&mut self, value: impl Into<Token<i64>>) {
        self.config.automated_snapshot_retention_period = Some(value.into());
    }

    pub fn reset_automated_snapshot_retention_period(&mut self) {
        self.config.automated_snapshot_retention_period = None;
    }

    pub fn availability_zone(&self) -> Option<&str> {
        self.config.availability_zone.as_deref()
    }

    pub fn set_availability_zone(&mut self, value: impl Into<String>) {
        self.config.availability_zone = Some(value.into());
    }

    pub fn reset_availability_zone(&mut self) {
        self.config.availability_zone = None;
    }

    pub fn availability_zone_relocation_enabled(&self) -> Option<&Token<bool>> {
        self.config.availability_zone_relocation_enabled.as_ref()
    }

    pub fn set_availability_zone_relocation_enabled(&mut self, value: impl Into<Token<bool>>) {
        self.config.availability_zone_relocation_enabled = Some(value.into());
    }

    pub fn reset_availability_zone_relocation_enabled(&mut self) {
        self.config.availability_zone_relocation_enabled = None;
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
    }

    pub fn cluster_nodes(&self) -> RedshiftClusterClusterNodesList {
        RedshiftClusterClusterNodesList::new(self.interpolation_for_attribute("cluster_nodes"))
    }

    pub fn cluster_parameter_group_name(&self) -> Option<&str> {
        self.config.cluster_parameter_group_name.as_deref()
    }

    pub fn set_cluster_parameter_group_name(&mut self, value: impl Into<String>) {
        self.config.cluster_parameter_group_name = Some(value.into());
    }

    pub fn reset_cluster_parameter_group_name(&mut self) {
        self.config.cluster_parameter_group_name = None;
    }

    pub fn cluster_public_key(&self) -> Option<&str> {
        self.config.cluster_public_key.as_deref()
    }

    pub fn set_cluster_public_key(&mut self, value: impl Into<String>) {
        self.config.cluster_public_key = Some(value.into());
    }

    pub fn reset_cluster_public_key(&mut self) {
        self.config.cluster_public_key = None;
    }

    pub fn cluster_revision_number(&self) -> Option<&str> {
        self.config.cluster_revision_number.as_deref()
    }

    pub fn set_cluster_revision_number(&mut self, value: impl Into<String>) {
        self.config.cluster_revision_number = Some(value.into());
    }

    pub fn reset_cluster_revision_number(&mut self) {
        self.config.cluster_revision_number = None;
    }

    pub fn cluster_security_groups(&self) -> Option<&Token<Vec<String>>> {
        self.config.cluster_security_groups.as_ref()
    }

    pub fn set_cluster_security_groups(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.cluster_security_groups = Some(value.into());
    }

    pub fn reset_cluster_security_groups(&mut self) {
        self.config.cluster_security_groups = None;
    }

    pub fn cluster_subnet_group_name(&self) -> Option<&str> {
        self.config.cluster_subnet_group_name.as_deref()
    }

    pub fn set_cluster_subnet_group_name(&mut self, value: impl Into<String>) {
        self.config.cluster_subnet_group_name = Some(value.into());
    }

    pub fn reset_cluster_subnet_group_name(&mut self) {
        self.config.cluster_subnet_group_name = None;
    }

    pub fn cluster_type(&self) -> Option<&str> {
        self.config.cluster_type.as_deref()
    }

    pub fn set_cluster_type(&mut self, value: impl Into<String>) {
        self.config.cluster_type = Some(value.into());
    }

    pub fn reset_cluster_type(&mut self) {
        self.config.cluster_type = None;
    }

    pub fn cluster_version(&self) -> Option<&str> {
        self.config.cluster_version.as_deref()
    }

    pub fn set_cluster_version(&mut self, value: impl Into<String>) {
        self.config.cluster_version = Some(value.into());
    }

    pub fn reset_cluster_version(&mut self) {
        self.config.cluster_version = None;
    }

    pub fn database_name(&self) -> Option<&str> {
        self.config.database_name.as_deref()
    }

    pub fn set_database_name(&mut self, value: impl Into<String>) {
        self.config.database_name = Some(value.into());
    }

    pub fn reset_database_name(&mut self) {
        self.config.database_name = None;
    }

    pub fn default_iam_role_arn(&self) -> Option<&str> {
        self.config.default_iam_role_arn.as_deref()
    }

    pub fn set_default_iam_role_arn(&mut self, value: impl Into<String>) {
        self.config.default_iam_role_arn = Some(value.into());
    }

    pub fn reset_default_iam_role_arn(&mut self) {
        self.config.default_iam_role_arn = None;
    }

    pub fn dns_name(&self) -> Reference {
        self.interpolation_for_attribute("dns_name")
    }

    pub fn elastic_ip(&self) -> Option<&str> {
        self.config.elastic_ip.as_deref()
    }

    pub fn set_elastic_ip(&mut self, value: impl Into<String>) {
        self.config.elastic_ip = Some(value.into());
    }

    pub fn reset_elastic_ip(&mut self) {
        self.config.elastic_ip = None;
    }

    pub fn encrypted(&self) -> Option<&Token<bool>> {
        self.config.encrypted.as_ref()
    }

    pub fn set_encrypted(&mut self, value: impl Into<Token<bool>>) {
        self.config.encrypted = Some(value.into());
    }

    pub fn reset_encrypted(&mut self) {
        self.config.encrypted = None;
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.config.endpoint.as_deref()
    }

    pub fn set_endpoint(&mut self, value: impl Into<String>) {
        self.config.endpoint = Some(value.into());
    }

    pub fn reset_endpoint(&mut self) {
        self.config.endpoint = None;
    }

    pub fn enhanced_vpc_routing(&self) -> Option<&Token<bool>> {
        self.config.enhanced_vpc_routing.as_ref()
    }

    pub fn set_enhanced_vpc_routing(&mut self, value: impl Into<Token<bool>>) {
        self.config.enhanced_vpc_routing = Some(value.into());
    }

    pub fn reset_enhanced_vpc_routing(&mut self) {
        self.config.enhanced_vpc_routing = None;
    }

    pub fn final_snapshot_identifier(&self) -> Option<&str> {
        self.config.final_snapshot_identifier.as_deref()
    }

    pub fn set_final_snapshot_identifier(&mut self, value: impl Into<String>) {
        self.config.final_snapshot_identifier = Some(value.into());
    }

    pub fn reset_final_snapshot_identifier(&mut self) {
        self.config.final_snapshot_identifier = None;
    }

    pub fn iam_roles(&self) -> Option<&Token<Vec<String>>> {
        self.config.iam_roles.as_ref()
    }

    pub fn set_iam_roles(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.iam_roles = Some(value.into());
    }

    pub fn reset_iam_roles(&mut self) {
        self.config.iam_roles = None;
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

    pub fn maintenance_track_name(&self) -> Option<&str> {
        self.config.maintenance_track_name.as_deref()
    }

    pub fn set_maintenance_track_name(&mut self, value: impl Into<String>) {
        self.config.maintenance_track_name = Some(value.into());
    }

    pub fn reset_maintenance_track_name(&mut self) {
        self.config.maintenance_track_name = None;
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

    pub fn master_password(&self) -> Option<&str> {
        self.config.master_password.as_deref()
    }

    pub fn set_master_password(&mut self, value: impl Into<String>) {
        self.config.master_password = Some(value.into());
    }

    pub fn reset_master_password(&mut self) {
        self.config.master_password = None;
    }

    pub fn master_username(&self) -> Option<&str> {
        self.config.master_username.as_deref()
    }

    pub fn set_master_username(&mut self, value: impl Into<String>) {
        self.config.master_username = Some(value.into());
    }

    pub fn reset_master_username(&mut self) {
        self.config.master_username = None;
    }

    pub fn node_type(&self) -> &str {
        &self.config.node_type
    }

    pub fn set_node_type(&mut self, value: impl Into<String>) {
        self.config.node_type = value.into();
    }

    pub fn number_of_nodes(&self) -> Option<&Token<i64>> {
        self.config.number_of_nodes.as_ref()
    }

    pub fn set_number_of_nodes(&mut self, value: impl Into<Token<i64>>) {
        self.config.number_of_nodes = Some(value.into());
    }

    pub fn reset_number_of_nodes(&mut self) {
        self.config.number_of_nodes = None;
    }

    pub fn owner_account(&self) -> Option<&str> {
        self.config.owner_account.as_deref()
    }

    pub fn set_owner_account(&mut self, value: impl Into<String>) {
        self.config.owner_account = Some(value.into());
    }

    pub fn reset_owner_account(&mut self) {
        self.config.owner_account = None;
    }

    pub fn port(&self) -> Option<&Token<i64>> {
        self.config.port.as_ref()
    }

    pub fn set_port(&mut self, value: impl Into<Token<i64>>) {
        self.config.port = Some(value.into());
    }

    pub fn reset_port(&mut self) {
        self.config.port = None;
    }

    pub fn preferred_maintenance_window(&self) -> Option<&str> {
        self.config.preferred_maintenance_window.as_deref()
    }

    pub fn set_preferred_maintenance_window(&mut self, value: impl Into<String>) {
        self.config.preferred_maintenance_window = Some(value.into());
    }

    pub fn reset_preferred_maintenance_window(&mut self) {
        self.config.preferred_maintenance_window = None;
    }

    pub fn publicly_accessible(&self) -> Option<&Token<bool>> {
        self.config.publicly_accessible.as_ref()
    }

    pub fn set_publicly_accessible(&mut self, value: impl Into<Token<bool>>) {
        self.config.publicly_accessible = Some(value.into());
    }

    pub fn reset_publicly_accessible(&mut self) {
        self.config.publicly_accessible = None;
    }

    pub fn skip_final_snapshot(&self) -> Option<&Token<bool>> {
        self.config.skip_final_snapshot.as_ref()
    }

    pub fn set_skip_final_snapshot(&mut self, value: impl Into<Token<bool>>) {
        self.config.skip_final_snapshot = Some(value.into());
    }

    pub fn reset_skip_final_snapshot(&mut self) {
        self.config.skip_final_snapshot = None;
    }

    pub fn snapshot_cluster_identifier(&self) -> Option<&str> {
        self.config.snapshot_cluster_identifier.as_deref()
    }

    pub fn set_snapshot_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.snapshot_cluster_identifier = Some(value.into());
    }

    pub fn reset_snapshot_cluster_identifier(&mut self) {
        self.config.snapshot_cluster_identifier = None;
    }

    pub fn snapshot_identifier(&self) -> Option<&str> {
        self.config.snapshot_identifier.as_deref()
    }

    pub fn set_snapshot_identifier(&mut self, value: impl Into<String>) {
        self.config.snapshot_identifier = Some(value.into());
    }

    pub fn reset_snapshot_identifier(&mut self) {
        self.config.snapshot_identifier = None;
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

    pub fn vpc_security_group_ids(&self) -> Option<&Token<Vec<String>>> {
        self.config.vpc_security_group_ids.as_ref()
    }

    pub fn set_vpc_security_group_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.vpc_security_group_ids = Some(value.into());
    }

    pub fn reset_vpc_security_group_ids(&mut self) {
        self.config.vpc_security_group_ids = None;
    }

    pub fn logging(&self) -> Option<&RedshiftClusterLogging> {
        self.config.logging.as_ref()
    }

    pub fn put_logging(&mut self, value: RedshiftClusterLogging) {
        self.config.logging = Some(value);
    }

    pub fn reset_logging(&mut self) {
        self.config.logging = None;
    }

    pub fn snapshot_copy(&self) -> Option<&RedshiftClusterSnapshotCopy> {
        self.config.snapshot_copy.as_ref()
    }

    pub fn put_snapshot_copy(&mut self, value: RedshiftClusterSnapshotCopy) {
        self.config.snapshot_copy = Some(value);
    }

    pub fn reset_snapshot_copy(&mut self) {
        self.config.snapshot_copy = None;
    }

    pub fn timeouts(&self) -> Option<&RedshiftClusterTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: RedshiftClusterTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }
}

impl TerraformElement for RedshiftCluster {
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
pub struct RedshiftClusterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_version_upgrade: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<Token<bool>>,
    /// The value represents how the cluster is configured to use AQUA. Valid values are `enabled`, `disabled`, `auto`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqua_configuration_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automated_snapshot_retention_period: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone_relocation_enabled: Option<Token<bool>>,
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_parameter_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_revision_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_security_groups: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_subnet_group_name: Option<String>,
    /// The cluster type to use. Valid values are `single-node`, `multi-node`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iam_role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_vpc_routing: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_snapshot_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_roles: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_track_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_snapshot_retention_period: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_nodes: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_final_snapshot: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_cluster_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Token<Vec<String>>>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub logging: Option<RedshiftClusterLogging>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub snapshot_copy: Option<RedshiftClusterSnapshotCopy>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeouts: Option<RedshiftClusterTimeouts>,
}

impl RedshiftClusterConfig {
    pub fn builder() -> RedshiftClusterConfigBuilder {
        RedshiftClusterConfigBuilder::default()
    }
}

/// Builder for [`RedshiftClusterConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterConfigBuilder {
    allow_version_upgrade: Option<Token<bool>>,
    apply_immediately: Option<Token<bool>>,
    aqua_configuration_status: Option<String>,
    automated_snapshot_retention_period: Option<Token<i64>>,
    availability_zone: Option<String>,
    availability_zone_relocation_enabled: Option<Token<bool>>,
    cluster_identifier: Option<String>,
    cluster_parameter_group_name: Option<String>,
    cluster_public_key: Option<String>,
    cluster_revision_number: Option<String>,
    cluster_security_groups: Option<Token<Vec<String>>>,
    cluster_subnet_group_name: Option<String>,
    cluster_type: Option<String>,
    cluster_version: Option<String>,
    database_name: Option<String>,
    default_iam_role_arn: Option<String>,
    elastic_ip: Option<String>,
    encrypted: Option<Token<bool>>,
    endpoint: Option<String>,
    enhanced_vpc_routing: Option<Token<bool>>,
    final_snapshot_identifier: Option<String>,
    iam_roles: Option<Token<Vec<String>>>,
    id: Option<String>,
    kms_key_id: Option<String>,
    maintenance_track_name: Option<String>,
    manual_snapshot_retention_period: Option<Token<i64>>,
    master_password: Option<String>,
    master_username: Option<String>,
    node_type: Option<String>,
    number_of_nodes: Option<Token<i64>>,
    owner_account: Option<String>,
    port: Option<Token<i64>>,
    preferred_maintenance_window: Option<String>,
    publicly_accessible: Option<Token<bool>>,
    skip_final_snapshot: Option<Token<bool>>,
    snapshot_cluster_identifier: Option<String>,
    snapshot_identifier: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
    vpc_security_group_ids: Option<Token<Vec<String>>>,
    logging: Option<RedshiftClusterLogging>,
    snapshot_copy: Option<RedshiftClusterSnapshotCopy>,
    timeouts: Option<RedshiftClusterTimeouts>,
}

impl RedshiftClusterConfigBuilder {
    pub fn allow_version_upgrade(mut self, value: impl Into<Token<bool>>) -> Self {
        self.allow_version_upgrade = Some(value.into());
        self
    }

    pub fn apply_immediately(mut self, value: impl Into<Token<bool>>) -> Self {
        self.apply_immediately = Some(value.into());
        self
    }

    pub fn aqua_configuration_status(mut self, value: impl Into<String>) -> Self {
        self.aqua_configuration_status = Some(value.into());
        self
    }

    pub fn automated_snapshot_retention_period(mut self, value: impl Into<Token<i64>>) -> Self {
        self.automated_snapshot_retention_period = Some(value.into());
        self
    }

    pub fn availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    pub fn availability_zone_relocation_enabled(mut self, value: impl Into<Token<bool>>) -> Self {
        self.availability_zone_relocation_enabled = Some(value.into());
        self
    }

    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn cluster_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.cluster_parameter_group_name = Some(value.into());
        self
    }

    pub fn cluster_public_key(mut self, value: impl Into<String>) -> Self {
        self.cluster_public_key = Some(value.into());
        self
    }

    pub fn cluster_revision_number(mut self, value: impl Into<String>) -> Self {
        self.cluster_revision_number = Some(value.into());
        self
    }

    pub fn cluster_security_groups(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.cluster_security_groups = Some(value.into());
        self
    }

    pub fn cluster_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.cluster_subnet_group_name = Some(value.into());
        self
    }

    pub fn cluster_type(mut self, value: impl Into<String>) -> Self {
        self.cluster_type = Some(value.into());
        self
    }

    pub fn cluster_version(mut self, value: impl Into<String>) -> Self {
        self.cluster_version = Some(value.into());
        self
    }

    pub fn database_name(mut self, value: impl Into<String>) -> Self {
        self.database_name = Some(value.into());
        self
    }

    pub fn default_iam_role_arn(mut self, value: impl Into<String>) -> Self {
        self.default_iam_role_arn = Some(value.into());
        self
    }

    pub fn elastic_ip(mut self, value: impl Into<String>) -> Self {
        self.elastic_ip = Some(value.into());
        self
    }

    pub fn encrypted(mut self, value: impl Into<Token<bool>>) -> Self {
        self.encrypted = Some(value.into());
        self
    }

    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = Some(value.into());
        self
    }

    pub fn enhanced_vpc_routing(mut self, value: impl Into<Token<bool>>) -> Self {
        self.enhanced_vpc_routing = Some(value.into());
        self
    }

    pub fn final_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.final_snapshot_identifier = Some(value.into());
        self
    }

    pub fn iam_roles(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.iam_roles = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    pub fn maintenance_track_name(mut self, value: impl Into<String>) -> Self {
        self.maintenance_track_name = Some(value.into());
        self
    }

    pub fn manual_snapshot_retention_period(mut self, value: impl Into<Token<i64>>) -> Self {
        self.manual_snapshot_retention_period = Some(value.into());
        self
    }

    pub fn master_password(mut self, value: impl Into<String>) -> Self {
        self.master_password = Some(value.into());
        self
    }

    pub fn master_username(mut self, value: impl Into<String>) -> Self {
        self.master_username = Some(value.into());
        self
    }

    pub fn node_type(mut self, value: impl Into<String>) -> Self {
        self.node_type = Some(value.into());
        self
    }

    pub fn number_of_nodes(mut self, value: impl Into<Token<i64>>) -> Self {
        self.number_of_nodes = Some(value.into());
        self
    }

    pub fn owner_account(mut self, value: impl Into<String>) -> Self {
        self.owner_account = Some(value.into());
        self
    }

    pub fn port(mut self, value: impl Into<Token<i64>>) -> Self {
        self.port = Some(value.into());
        self
    }

    pub fn preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(value.into());
        self
    }

    pub fn publicly_accessible(mut self, value: impl Into<Token<bool>>) -> Self {
        self.publicly_accessible = Some(value.into());
        self
    }

    pub fn skip_final_snapshot(mut self, value: impl Into<Token<bool>>) -> Self {
        self.skip_final_snapshot = Some(value.into());
        self
    }

    pub fn snapshot_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.snapshot_cluster_identifier = Some(value.into());
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

    pub fn vpc_security_group_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.vpc_security_group_ids = Some(value.into());
        self
    }

    pub fn logging(mut self, value: RedshiftClusterLogging) -> Self {
        self.logging = Some(value);
        self
    }

    pub fn snapshot_copy(mut self, value: RedshiftClusterSnapshotCopy) -> Self {
        self.snapshot_copy = Some(value);
        self
    }

    pub fn timeouts(mut self, value: RedshiftClusterTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    pub fn build(self) -> Result<RedshiftClusterConfig, ConfigError> {
        Ok(RedshiftClusterConfig {
            allow_version_upgrade: self.allow_version_upgrade,
            apply_immediately: self.apply_immediately,
            aqua_configuration_status: self.aqua_configuration_status,
            automated_snapshot_retention_period: self.automated_snapshot_retention_period,
            availability_zone: self.availability_zone,
            availability_zone_relocation_enabled: self.availability_zone_relocation_enabled,
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster", "cluster_identifier"))?,
            cluster_parameter_group_name: self.cluster_parameter_group_name,
            cluster_public_key: self.cluster_public_key,
            cluster_revision_number: self.cluster_revision_number,
            cluster_security_groups: self.cluster_security_groups,
            cluster_subnet_group_name: self.cluster_subnet_group_name,
            cluster_type: self.cluster_type,
            cluster_version: self.cluster_version,
            database_name: self.database_name,
            default_iam_role_arn: self.default_iam_role_arn,
            elastic_ip: self.elastic_ip,
            encrypted: self.encrypted,
            endpoint: self.endpoint,
            enhanced_vpc_routing: self.enhanced_vpc_routing,
            final_snapshot_identifier: self.final_snapshot_identifier,
            iam_roles: self.iam_roles,
            id: self.id,
            kms_key_id: self.kms_key_id,
            maintenance_track_name: self.maintenance_track_name,
            manual_snapshot_retention_period: self.manual_snapshot_retention_period,
            master_password: self.master_password,
            master_username: self.master_username,
            node_type: self
                .node_type
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster", "node_type"))?,
            number_of_nodes: self.number_of_nodes,
            owner_account: self.owner_account,
            port: self.port,
            preferred_maintenance_window: self.preferred_maintenance_window,
            publicly_accessible: self.publicly_accessible,
            skip_final_snapshot: self.skip_final_snapshot,
            snapshot_cluster_identifier: self.snapshot_cluster_identifier,
            snapshot_identifier: self.snapshot_identifier,
            tags: self.tags,
            tags_all: self.tags_all,
            vpc_security_group_ids: self.vpc_security_group_ids,
            logging: self.logging,
            snapshot_copy: self.snapshot_copy,
            timeouts: self.timeouts,
        })
    }
}

/// `logging` block of `aws_redshift_cluster`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftClusterLogging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    pub enable: Token<bool>,
    /// The log destination type. Valid values are `s3`, `cloudwatch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_destination_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_exports: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_key_prefix: Option<String>,
}

impl RedshiftClusterLogging {
    pub fn builder() -> RedshiftClusterLoggingBuilder {
        RedshiftClusterLoggingBuilder::default()
    }
}

/// Builder for [`RedshiftClusterLogging`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterLoggingBuilder {
    bucket_name: Option<String>,
    enable: Option<Token<bool>>,
    log_destination_type: Option<String>,
    log_exports: Option<Token<Vec<String>>>,
    s3_key_prefix: Option<String>,
}

impl RedshiftClusterLoggingBuilder {
    pub fn bucket_name(mut self, value: impl Into<String>) -> Self {
        self.bucket_name = Some(value.into());
        self
    }

    pub fn enable(mut self, value: impl Into<Token<bool>>) -> Self {
        self.enable = Some(value.into());
        self
    }

    pub fn log_destination_type(mut self, value: impl Into<String>) -> Self {
        self.log_destination_type = Some(value.into());
        self
    }

    pub fn log_exports(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.log_exports = Some(value.into());
        self
    }

    pub fn s3_key_prefix(mut self, value: impl Into<String>) -> Self {
        self.s3_key_prefix = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftClusterLogging, ConfigError> {
        Ok(RedshiftClusterLogging {
            bucket_name: self.bucket_name,
            enable: self
                .enable
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster.logging", "enable"))?,
            log_destination_type: self.log_destination_type,
            log_exports: self.log_exports,
            s3_key_prefix: self.s3_key_prefix,
        })
    }
}

/// `snapshot_copy` block of `aws_redshift_cluster`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftClusterSnapshotCopy {
    pub destination_region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_period: Option<Token<i64>>,
}

impl RedshiftClusterSnapshotCopy {
    pub fn builder() -> RedshiftClusterSnapshotCopyBuilder {
        RedshiftClusterSnapshotCopyBuilder::default()
    }
}

/// Builder for [`RedshiftClusterSnapshotCopy`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterSnapshotCopyBuilder {
    destination_region: Option<String>,
    grant_name: Option<String>,
    retention_period: Option<Token<i64>>,
}

impl RedshiftClusterSnapshotCopyBuilder {
    pub fn destination_region(mut self, value: impl Into<String>) -> Self {
        self.destination_region = Some(value.into());
        self
    }

    pub fn grant_name(mut self, value: impl Into<String>) -> Self {
        self.grant_name = Some(value.into());
        self
    }

    pub fn retention_period(mut self, value: impl Into<Token<i64>>) -> Self {
        self.retention_period = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftClusterSnapshotCopy, ConfigError> {
        Ok(RedshiftClusterSnapshotCopy {
            destination_region: self
                .destination_region
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster.snapshot_copy", "destination_region"))?,
            grant_name: self.grant_name,
            retention_period: self.retention_period,
        })
    }
}

/// `timeouts` block of `aws_redshift_cluster`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftClusterTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl RedshiftClusterTimeouts {
    pub fn builder() -> RedshiftClusterTimeoutsBuilder {
        RedshiftClusterTimeoutsBuilder::default()
    }
}

/// Builder for [`RedshiftClusterTimeouts`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    update: Option<String>,
}

impl RedshiftClusterTimeoutsBuilder {
    pub fn create(mut self, value: impl Into<String>) -> Self {
        self.create = Some(value.into());
        self
    }

    pub fn delete(mut self, value: impl Into<String>) -> Self {
        self.delete = Some(value.into());
        self
    }

    pub fn update(mut self, value: impl Into<String>) -> Self {
        self.update = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftClusterTimeouts, ConfigError> {
        Ok(RedshiftClusterTimeouts {
            create: self.create,
            delete: self.delete,
            update: self.update,
        })
    }
}

/// Computed `cluster_nodes` list of `aws_redshift_cluster`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftClusterClusterNodesList {
    inner: ComputedList,
}

impl RedshiftClusterClusterNodesList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftClusterClusterNodesOutputReference {
        RedshiftClusterClusterNodesOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftClusterClusterNodesList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftClusterClusterNodesOutputReference {
    inner: ComputedObject,
}

impl RedshiftClusterClusterNodesOutputReference {
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
