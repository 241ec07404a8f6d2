//! data_aws_redshift_service_account bindings
//!
//! Generated from Terraform data source schema: aws_redshift_service_account
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};

/// Terraform schema of `aws_redshift_service_account`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshift_service_account")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("region", AttributeType::String),
        )
}

/// `aws_redshift_service_account` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftServiceAccount {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftServiceAccountConfig,
}

impl DataAwsRedshiftServiceAccount {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_service_account";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftServiceAccountConfig) -> Self {
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

    pub fn config(&self) -> &DataAwsRedshiftServiceAccountConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftServiceAccountConfig {
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

    pub fn region(&self) -> Option<&str> {
        self.config.region.as_deref()
    }

    pub fn set_region(&mut self, value: impl Into<String>) {
        self.config.region = Some(value.into());
    }

    pub fn reset_region(&mut self) {
        self.config.region = None;
    }
}

impl TerraformElement for DataAwsRedshiftServiceAccount {
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

/// Configuration of `aws_redshift_service_account`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataAwsRedshiftServiceAccountConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl DataAwsRedshiftServiceAccountConfig {
    pub fn builder() -> DataAwsRedshiftServiceAccountConfigBuilder {
        DataAwsRedshiftServiceAccountConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftServiceAccountConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftServiceAccountConfigBuilder {
    id: Option<String>,
    region: Option<String>,
}

impl DataAwsRedshiftServiceAccountConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftServiceAccountConfig, ConfigError> {
        Ok(DataAwsRedshiftServiceAccountConfig {
            id: self.id,
            region: self.region,
        })
    }
}
