//! data_aws_redshiftserverless_credentials bindings
//!
//! Generated from Terraform data source schema: aws_redshiftserverless_credentials
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshiftserverless_credentials`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshiftserverless_credentials")
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
                .computed(),
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
        .attribute(
            AttributeSchema::new("workgroup_name", AttributeType::String)
                .required(),
        )
}

/// `aws_redshiftserverless_credentials` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftserverlessCredentials {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftserverlessCredentialsConfig,
}

impl DataAwsRedshiftserverlessCredentials {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_credentials";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftserverlessCredentialsConfig) -> Self {
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

    pub fn config(&self) -> &DataAwsRedshiftserverlessCredentialsConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftserverlessCredentialsConfig {
        self.config
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

    pub fn db_user(&self) -> Reference {
        self.interpolation_for_attribute("db_user")
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

    pub fn workgroup_name(&self) -> &str {
        &self.config.workgroup_name
    }

    pub fn set_workgroup_name(&mut self, value: impl Into<String>) {
        self.config.workgroup_name = value.into();
    }
}

impl TerraformElement for DataAwsRedshiftserverlessCredentials {
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

/// Configuration of `aws_redshiftserverless_credentials`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftserverlessCredentialsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub workgroup_name: String,
}

impl DataAwsRedshiftserverlessCredentialsConfig {
    pub fn builder() -> DataAwsRedshiftserverlessCredentialsConfigBuilder {
        DataAwsRedshiftserverlessCredentialsConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftserverlessCredentialsConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftserverlessCredentialsConfigBuilder {
    db_name: Option<String>,
    duration_seconds: Option<Token<i64>>,
    id: Option<String>,
    workgroup_name: Option<String>,
}

impl DataAwsRedshiftserverlessCredentialsConfigBuilder {
    pub fn db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
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

    pub fn workgroup_name(mut self, value: impl Into<String>) -> Self {
        self.workgroup_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftserverlessCredentialsConfig, ConfigError> {
        Ok(DataAwsRedshiftserverlessCredentialsConfig {
            db_name: self.db_name,
            duration_seconds: self.duration_seconds,
            id: self.id,
            workgroup_name: self
                .workgroup_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_credentials", "workgroup_name"))?,
        })
    }
}
