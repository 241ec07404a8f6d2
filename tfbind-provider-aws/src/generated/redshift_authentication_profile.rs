//! redshift_authentication_profile bindings
//!
//! Generated from Terraform resource schema: aws_redshift_authentication_profile
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};

/// Terraform schema of `aws_redshift_authentication_profile`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_authentication_profile")
        .attribute(
            AttributeSchema::new("authentication_profile_content", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("authentication_profile_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
}

/// `aws_redshift_authentication_profile` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftAuthenticationProfile {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftAuthenticationProfileConfig,
}

impl RedshiftAuthenticationProfile {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_authentication_profile";

    pub fn new(name: impl Into<String>, config: RedshiftAuthenticationProfileConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftAuthenticationProfileConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftAuthenticationProfileConfig {
        self.config
    }

    pub fn authentication_profile_content(&self) -> &str {
        &self.config.authentication_profile_content
    }

    pub fn set_authentication_profile_content(&mut self, value: impl Into<String>) {
        self.config.authentication_profile_content = value.into();
    }

    pub fn authentication_profile_name(&self) -> &str {
        &self.config.authentication_profile_name
    }

    pub fn set_authentication_profile_name(&mut self, value: impl Into<String>) {
        self.config.authentication_profile_name = value.into();
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

impl TerraformElement for RedshiftAuthenticationProfile {
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

/// Configuration of `aws_redshift_authentication_profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftAuthenticationProfileConfig {
    pub authentication_profile_content: String,
    pub authentication_profile_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RedshiftAuthenticationProfileConfig {
    pub fn builder() -> RedshiftAuthenticationProfileConfigBuilder {
        RedshiftAuthenticationProfileConfigBuilder::default()
    }
}

/// Builder for [`RedshiftAuthenticationProfileConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftAuthenticationProfileConfigBuilder {
    authentication_profile_content: Option<String>,
    authentication_profile_name: Option<String>,
    id: Option<String>,
}

impl RedshiftAuthenticationProfileConfigBuilder {
    pub fn authentication_profile_content(mut self, value: impl Into<String>) -> Self {
        self.authentication_profile_content = Some(value.into());
        self
    }

    pub fn authentication_profile_name(mut self, value: impl Into<String>) -> Self {
        self.authentication_profile_name = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftAuthenticationProfileConfig, ConfigError> {
        Ok(RedshiftAuthenticationProfileConfig {
            authentication_profile_content: self
                .authentication_profile_content
                .ok_or_else(|| ConfigError::missing("aws_redshift_authentication_profile", "authentication_profile_content"))?,
            authentication_profile_name: self
                .authentication_profile_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_authentication_profile", "authentication_profile_name"))?,
            id: self.id,
        })
    }
}
