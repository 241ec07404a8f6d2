//! data_aws_redshift_cluster_credentials bindings
//!
//! Generated from Terraform data source schema: aws_redshift_cluster_credentials
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_cluster_credentials`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshift_cluster_credentials")
        .attribute(
            AttributeSchema::new("auto_create", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("db_groups", AttributeType::Set(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("db_name", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("db_password", AttributeType::String)
                .computed()
                .sensitive(),
        )
        .attribute(
            AttributeSchema::new("db_user", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("duration_seconds", AttributeType::Int),
        )
        .attribute(
            AttributeSchema::new("expiration", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
}

/// `aws_redshift_cluster_credentials` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftClusterCredentials {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftClusterCredentialsConfig,
}

impl DataAwsRedshiftClusterCredentials {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_cluster_credentials";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftClusterCredentialsConfig) -> Self {
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

    pub fn config(&self) -> &DataAwsRedshiftClusterCredentialsConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftClusterCredentialsConfig {
        self.config
    }

    pub fn auto_create(&self) -> Option<&Token<bool>> {
        self.config.auto_create.as_ref()
    }

    pub fn set_auto_create(&mut self, value: impl Into<Token<bool>>) {
        self.config.auto_create = Some(value.into());
    }

    pub fn reset_auto_create(&mut self) {
        self.config.auto_create = None;
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
    }

    pub fn db_groups(&self) -> Option<&Token<Vec<String>>> {
        self.config.db_groups.as_ref()
    }

    pub fn set_db_groups(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.db_groups = Some(value.into());
    }

    pub fn reset_db_groups(&mut self) {
        self.config.db_groups = None;
    }

    pub fn db_name(&self) -> Option<&str> {
        self.config.db_name.as_deref()
    }

    pub fn set_db_name(&mut self, value: impl Into<String>) {
        self.config.db_name = Some(value.into());
    }

    pub fn reset_db_name(&mut self) {
        self.config.db_name = None;
    }

    pub fn db_password(&self) -> Reference {
        self.interpolation_for_attribute("db_password")
    }

    pub fn db_user(&self) -> &str {
        &self.config.db_user
    }

    pub fn set_db_user(&mut self, value: impl Into<String>) {
        self.config.db_user = value.into();
    }

    pub fn duration_seconds(&self) -> Option<&Token<i64>> {
        self.config.duration_seconds.as_ref()
    }

    pub fn set_duration_seconds(&mut self, value: impl Into<Token<i64>>) {
        self.config.duration_seconds = Some(value.into());
    }

    pub fn reset_duration_seconds(&mut self) {
        self.config.duration_seconds = None;
    }

    pub fn expiration(&self) -> Reference {
        self.interpolation_for_attribute("expiration")
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
}

impl TerraformElement for DataAwsRedshiftClusterCredentials {
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

/// Configuration of `aws_redshift_cluster_credentials`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftClusterCredentialsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_create: Option<Token<bool>>,
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_groups: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    pub db_user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DataAwsRedshiftClusterCredentialsConfig {
    pub fn builder() -> DataAwsRedshiftClusterCredentialsConfigBuilder {
        DataAwsRedshiftClusterCredentialsConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftClusterCredentialsConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftClusterCredentialsConfigBuilder {
    auto_create: Option<Token<bool>>,
    cluster_identifier: Option<String>,
    db_groups: Option<Token<Vec<String>>>,
    db_name: Option<String>,
    db_user: Option<String>,
    duration_seconds: Option<Token<i64>>,
    id: Option<String>,
}

impl DataAwsRedshiftClusterCredentialsConfigBuilder {
    pub fn auto_create(mut self, value: impl Into<Token<bool>>) -> Self {
        self.auto_create = Some(value.into());
        self
    }

    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn db_groups(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.db_groups = Some(value.into());
        self
    }

    pub fn db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
        self
    }

    pub fn db_user(mut self, value: impl Into<String>) -> Self {
        self.db_user = Some(value.into());
        self
    }

    pub fn duration_seconds(mut self, value: impl Into<Token<i64>>) -> Self {
        self.duration_seconds = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftClusterCredentialsConfig, ConfigError> {
        Ok(DataAwsRedshiftClusterCredentialsConfig {
            auto_create: self.auto_create,
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster_credentials", "cluster_identifier"))?,
            db_groups: self.db_groups,
            db_name: self.db_name,
            db_user: self
                .db_user
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster_credentials", "db_user"))?,
            duration_seconds: self.duration_seconds,
            id: self.id,
        })
    }
}
