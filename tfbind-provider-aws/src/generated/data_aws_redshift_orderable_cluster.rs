//! data_aws_redshift_orderable_cluster bindings
//!
//! Generated from Terraform data source schema: aws_redshift_orderable_cluster
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema, validate_enum};
use tfbind_core::value::Token;

const VALID_CLUSTER_TYPE: &[&str] = &["multi-node", "single-node"];

fn validate_cluster_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "ClusterType", VALID_CLUSTER_TYPE)
}

/// Terraform schema of `aws_redshift_orderable_cluster`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshift_orderable_cluster")
        .attribute(
            AttributeSchema::new("availability_zones", AttributeType::List(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_type", AttributeType::Custom { name: "ClusterType".to_string(), base: Box::new(AttributeType::String), validate: validate_cluster_type })
                .optional_computed()
                .with_description("Reserved for future use. Valid values are `multi-node`, `single-node`."),
        )
        .attribute(
            AttributeSchema::new("cluster_version", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("node_type", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("preferred_node_types", AttributeType::List(Box::new(AttributeType::String))),
        )
}

/// `aws_redshift_orderable_cluster` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftOrderableCluster {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftOrderableClusterConfig,
}

impl DataAwsRedshiftOrderableCluster {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_orderable_cluster";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftOrderableClusterConfig) -> Self {
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

    pub fn config(&self) -> &DataAwsRedshiftOrderableClusterConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftOrderableClusterConfig {
        self.config
    }

    pub fn availability_zones(&self) -> Reference {
        self.interpolation_for_attribute("availability_zones")
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

    pub fn id(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = Some(value.into());
    }

    pub fn reset_id(&mut self) {
        self.config.id = None;
    }

    pub fn node_type(&self) -> Option<&str> {
        self.config.node_type.as_deref()
    }

    pub fn set_node_type(&mut self, value: impl Into<String>) {
        self.config.node_type = Some(value.into());
    }

    pub fn reset_node_type(&mut self) {
        self.config.node_type = None;
    }

    pub fn preferred_node_types(&self) -> Option<&Token<Vec<String>>> {
        self.config.preferred_node_types.as_ref()
    }

    pub fn set_preferred_node_types(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.preferred_node_types = Some(value.into());
    }

    pub fn reset_preferred_node_types(&mut self) {
        self.config.preferred_node_types = None;
    }
}

impl TerraformElement for DataAwsRedshiftOrderableCluster {
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

/// Configuration of `aws_redshift_orderable_cluster`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftOrderableClusterConfig {
    /// Reserved for future use. Valid values are `multi-node`, `single-node`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_node_types: Option<Token<Vec<String>>>,
}

impl DataAwsRedshiftOrderableClusterConfig {
    pub fn builder() -> DataAwsRedshiftOrderableClusterConfigBuilder {
        DataAwsRedshiftOrderableClusterConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftOrderableClusterConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftOrderableClusterConfigBuilder {
    cluster_type: Option<String>,
    cluster_version: Option<String>,
    id: Option<String>,
    node_type: Option<String>,
    preferred_node_types: Option<Token<Vec<String>>>,
}

impl DataAwsRedshiftOrderableClusterConfigBuilder {
    pub fn cluster_type(mut self, value: impl Into<String>) -> Self {
        self.cluster_type = Some(value.into());
        self
    }

    pub fn cluster_version(mut self, value: impl Into<String>) -> Self {
        self.cluster_version = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn node_type(mut self, value: impl Into<String>) -> Self {
        self.node_type = Some(value.into());
        self
    }

    pub fn preferred_node_types(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.preferred_node_types = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftOrderableClusterConfig, ConfigError> {
        Ok(DataAwsRedshiftOrderableClusterConfig {
            cluster_type: self.cluster_type,
            cluster_version: self.cluster_version,
            id: self.id,
            node_type: self.node_type,
            preferred_node_types: self.preferred_node_types,
        })
    }
}
