//! redshift_partner bindings
//!
//! Generated from Terraform resource schema: aws_redshift_partner
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};

/// Terraform schema of `aws_redshift_partner`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_partner")
        .attribute(
            AttributeSchema::new("account_id", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("database_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("partner_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("status", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("status_message", AttributeType::String)
                .computed(),
        )
}

/// `aws_redshift_partner` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftPartner {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftPartnerConfig,
}

impl RedshiftPartner {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_partner";

    pub fn new(name: impl Into<String>, config: RedshiftPartnerConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftPartnerConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftPartnerConfig {
        self.config
    }

    pub fn account_id(&self) -> &str {
        &self.config.account_id
    }

    pub fn set_account_id(&mut self, value: impl Into<String>) {
        self.config.account_id = value.into();
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
    }

    pub fn database_name(&self) -> &str {
        &self.config.database_name
    }

    pub fn set_database_name(&mut self, value: impl Into<String>) {
        self.config.database_name = value.into();
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

    pub fn partner_name(&self) -> &str {
        &self.config.partner_name
    }

    pub fn set_partner_name(&mut self, value: impl Into<String>) {
        self.config.partner_name = value.into();
    }

    pub fn status(&self) -> Reference {
        self.interpolation_for_attribute("status")
    }

    pub fn status_message(&self) -> Reference {
        self.interpolation_for_attribute("status_message")
    }
}

impl TerraformElement for RedshiftPartner {
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

/// Configuration of `aws_redshift_partner`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftPartnerConfig {
    pub account_id: String,
    pub cluster_identifier: String,
    pub database_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub partner_name: String,
}

impl RedshiftPartnerConfig {
    pub fn builder() -> RedshiftPartnerConfigBuilder {
        RedshiftPartnerConfigBuilder::default()
    }
}

/// Builder for [`RedshiftPartnerConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftPartnerConfigBuilder {
    account_id: Option<String>,
    cluster_identifier: Option<String>,
    database_name: Option<String>,
    id: Option<String>,
    partner_name: Option<String>,
}

impl RedshiftPartnerConfigBuilder {
    pub fn account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }

    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn database_name(mut self, value: impl Into<String>) -> Self {
        self.database_name = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn partner_name(mut self, value: impl Into<String>) -> Self {
        self.partner_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftPartnerConfig, ConfigError> {
        Ok(RedshiftPartnerConfig {
            account_id: self
                .account_id
                .ok_or_else(|| ConfigError::missing("aws_redshift_partner", "account_id"))?,
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_partner", "cluster_identifier"))?,
            database_name: self
                .database_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_partner", "database_name"))?,
            id: self.id,
            partner_name: self
                .partner_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_partner", "partner_name"))?,
        })
    }
}
