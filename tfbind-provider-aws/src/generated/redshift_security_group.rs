//! redshift_security_group bindings
//!
//! Generated from Terraform resource schema: aws_redshift_security_group
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::block::non_empty;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema, types};

/// Terraform schema of `aws_redshift_security_group`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_security_group")
        .attribute(
            AttributeSchema::new("description", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required(),
        )
        .block(
            BlockSchema::new("ingress", NestingMode::Set)
                .min_items(1)
                .attribute(
                    AttributeSchema::new("cidr", types::cidr()),
                )
                .attribute(
                    AttributeSchema::new("security_group_name", AttributeType::String)
                        .optional_computed(),
                )
                .attribute(
                    AttributeSchema::new("security_group_owner_id", AttributeType::String)
                        .optional_computed(),
                ),
        )
}

/// `aws_redshift_security_group` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftSecurityGroup {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftSecurityGroupConfig,
}

impl RedshiftSecurityGroup {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_security_group";

    pub fn new(name: impl Into<String>, config: RedshiftSecurityGroupConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftSecurityGroupConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftSecurityGroupConfig {
        self.config
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.config.description = Some(value.into());
    }

    pub fn reset_description(&mut self) {
        self.config.description = None;
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

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    pub fn ingress(&self) -> &[RedshiftSecurityGroupIngress] {
        &self.config.ingress
    }

    pub fn put_ingress(&mut self, value: Vec<RedshiftSecurityGroupIngress>) {
        self.config.ingress = value;
    }
}

impl TerraformElement for RedshiftSecurityGroup {
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

/// Configuration of `aws_redshift_security_group`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftSecurityGroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::block_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ingress: Vec<RedshiftSecurityGroupIngress>,
}

impl RedshiftSecurityGroupConfig {
    pub fn builder() -> RedshiftSecurityGroupConfigBuilder {
        RedshiftSecurityGroupConfigBuilder::default()
    }
}

/// Builder for [`RedshiftSecurityGroupConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftSecurityGroupConfigBuilder {
    description: Option<String>,
    id: Option<String>,
    name: Option<String>,
    ingress: Vec<RedshiftSecurityGroupIngress>,
}

impl RedshiftSecurityGroupConfigBuilder {
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn ingress(mut self, value: Vec<RedshiftSecurityGroupIngress>) -> Self {
        self.ingress = value;
        self
    }

    pub fn build(self) -> Result<RedshiftSecurityGroupConfig, ConfigError> {
        Ok(RedshiftSecurityGroupConfig {
            description: self.description,
            id: self.id,
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshift_security_group", "name"))?,
            ingress: non_empty(self.ingress, "aws_redshift_security_group", "ingress")?,
        })
    }
}

/// `ingress` block of `aws_redshift_security_group`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftSecurityGroupIngress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_owner_id: Option<String>,
}

impl RedshiftSecurityGroupIngress {
    pub fn builder() -> RedshiftSecurityGroupIngressBuilder {
        RedshiftSecurityGroupIngressBuilder::default()
    }
}

/// Builder for [`RedshiftSecurityGroupIngress`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftSecurityGroupIngressBuilder {
    cidr: Option<String>,
    security_group_name: Option<String>,
    security_group_owner_id: Option<String>,
}

impl RedshiftSecurityGroupIngressBuilder {
    pub fn cidr(mut self, value: impl Into<String>) -> Self {
        self.cidr = Some(value.into());
        self
    }

    pub fn security_group_name(mut self, value: impl Into<String>) -> Self {
        self.security_group_name = Some(value.into());
        self
    }

    pub fn security_group_owner_id(mut self, value: impl Into<String>) -> Self {
        self.security_group_owner_id = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftSecurityGroupIngress, ConfigError> {
        Ok(RedshiftSecurityGroupIngress {
            cidr: self.cidr,
            security_group_name: self.security_group_name,
            security_group_owner_id: self.security_group_owner_id,
        })
    }
}
