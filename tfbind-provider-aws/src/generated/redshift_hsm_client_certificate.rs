//! redshift_hsm_client_certificate bindings
//!
//! Generated from Terraform resource schema: aws_redshift_hsm_client_certificate
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

/// Terraform schema of `aws_redshift_hsm_client_certificate`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_hsm_client_certificate")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("hsm_client_certificate_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("hsm_client_certificate_public_key", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
}

/// `aws_redshift_hsm_client_certificate` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftHsmClientCertificate {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftHsmClientCertificateConfig,
}

impl RedshiftHsmClientCertificate {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_hsm_client_certificate";

    pub fn new(name: impl Into<String>, config: RedshiftHsmClientCertificateConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftHsmClientCertificateConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftHsmClientCertificateConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn hsm_client_certificate_identifier(&self) -> &str {
        &self.config.hsm_client_certificate_identifier
    }

    pub fn set_hsm_client_certificate_identifier(&mut self, value: impl Into<String>) {
        self.config.hsm_client_certificate_identifier = value.into();
    }

    pub fn hsm_client_certificate_public_key(&self) -> Reference {
        self.interpolation_for_attribute("hsm_client_certificate_public_key")
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

impl TerraformElement for RedshiftHsmClientCertificate {
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

/// Configuration of `aws_redshift_hsm_client_certificate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftHsmClientCertificateConfig {
    pub hsm_client_certificate_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftHsmClientCertificateConfig {
    pub fn builder() -> RedshiftHsmClientCertificateConfigBuilder {
        RedshiftHsmClientCertificateConfigBuilder::default()
    }
}

/// Builder for [`RedshiftHsmClientCertificateConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftHsmClientCertificateConfigBuilder {
    hsm_client_certificate_identifier: Option<String>,
    id: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftHsmClientCertificateConfigBuilder {
    pub fn hsm_client_certificate_identifier(mut self, value: impl Into<String>) -> Self {
        self.hsm_client_certificate_identifier = Some(value.into());
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

    pub fn tags_all(mut self, value: impl Into<Token<BTreeMap<String, String>>>) -> Self {
        self.tags_all = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftHsmClientCertificateConfig, ConfigError> {
        Ok(RedshiftHsmClientCertificateConfig {
            hsm_client_certificate_identifier: self
                .hsm_client_certificate_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_hsm_client_certificate", "hsm_client_certificate_identifier"))?,
            id: self.id,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
