//! redshiftserverless_resource_policy bindings
//!
//! Generated from Terraform resource schema: aws_redshiftserverless_resource_policy
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};

/// Terraform schema of `aws_redshiftserverless_resource_policy`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftserverless_resource_policy")
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("policy", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("resource_arn", AttributeType::String)
                .required(),
        )
}

/// `aws_redshiftserverless_resource_policy` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftserverlessResourcePolicy {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftserverlessResourcePolicyConfig,
}

impl RedshiftserverlessResourcePolicy {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_resource_policy";

    pub fn new(name: impl Into<String>, config: RedshiftserverlessResourcePolicyConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftserverlessResourcePolicyConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftserverlessResourcePolicyConfig {
        self.config
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

    pub fn policy(&self) -> &str {
        &self.config.policy
    }

    pub fn set_policy(&mut self, value: impl Into<String>) {
        self.config.policy = value.into();
    }

    pub fn resource_arn(&self) -> &str {
        &self.config.resource_arn
    }

    pub fn set_resource_arn(&mut self, value: impl Into<String>) {
        self.config.resource_arn = value.into();
    }
}

impl TerraformElement for RedshiftserverlessResourcePolicy {
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

/// Configuration of `aws_redshiftserverless_resource_policy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessResourcePolicyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub policy: String,
    pub resource_arn: String,
}

impl RedshiftserverlessResourcePolicyConfig {
    pub fn builder() -> RedshiftserverlessResourcePolicyConfigBuilder {
        RedshiftserverlessResourcePolicyConfigBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessResourcePolicyConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessResourcePolicyConfigBuilder {
    id: Option<String>,
    policy: Option<String>,
    resource_arn: Option<String>,
}

impl RedshiftserverlessResourcePolicyConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn policy(mut self, value: impl Into<String>) -> Self {
        self.policy = Some(value.into());
        self
    }

    pub fn resource_arn(mut self, value: impl Into<String>) -> Self {
        self.resource_arn = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftserverlessResourcePolicyConfig, ConfigError> {
        Ok(RedshiftserverlessResourcePolicyConfig {
            id: self.id,
            policy: self
                .policy
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_resource_policy", "policy"))?,
            resource_arn: self
                .resource_arn
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_resource_policy", "resource_arn"))?,
        })
    }
}
