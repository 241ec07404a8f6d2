//! redshift_cluster_iam_roles bindings
//!
//! Generated from Terraform resource schema: aws_redshift_cluster_iam_roles
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_cluster_iam_roles`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_cluster_iam_roles")
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("default_iam_role_arn", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("iam_role_arns", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
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

/// `aws_redshift_cluster_iam_roles` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftClusterIamRoles {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftClusterIamRolesConfig,
}

impl RedshiftClusterIamRoles {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_cluster_iam_roles";

    pub fn new(name: impl Into<String>, config: RedshiftClusterIamRolesConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftClusterIamRolesConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftClusterIamRolesConfig {
        self.config
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
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

    pub fn iam_role_arns(&self) -> Option<&Token<Vec<String>>> {
        self.config.iam_role_arns.as_ref()
    }

    pub fn set_iam_role_arns(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.iam_role_arns = Some(value.into());
    }

    pub fn reset_iam_role_arns(&mut self) {
        self.config.iam_role_arns = None;
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

    pub fn timeouts(&self) -> Option<&RedshiftClusterIamRolesTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: RedshiftClusterIamRolesTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }
}

impl TerraformElement for RedshiftClusterIamRoles {
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

/// Configuration of `aws_redshift_cluster_iam_roles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftClusterIamRolesConfig {
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iam_role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_role_arns: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeouts: Option<RedshiftClusterIamRolesTimeouts>,
}

impl RedshiftClusterIamRolesConfig {
    pub fn builder() -> RedshiftClusterIamRolesConfigBuilder {
        RedshiftClusterIamRolesConfigBuilder::default()
    }
}

/// Builder for [`RedshiftClusterIamRolesConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterIamRolesConfigBuilder {
    cluster_identifier: Option<String>,
    default_iam_role_arn: Option<String>,
    iam_role_arns: Option<Token<Vec<String>>>,
    id: Option<String>,
    timeouts: Option<RedshiftClusterIamRolesTimeouts>,
}

impl RedshiftClusterIamRolesConfigBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn default_iam_role_arn(mut self, value: impl Into<String>) -> Self {
        self.default_iam_role_arn = Some(value.into());
        self
    }

    pub fn iam_role_arns(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.iam_role_arns = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn timeouts(mut self, value: RedshiftClusterIamRolesTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    pub fn build(self) -> Result<RedshiftClusterIamRolesConfig, ConfigError> {
        Ok(RedshiftClusterIamRolesConfig {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_cluster_iam_roles", "cluster_identifier"))?,
            default_iam_role_arn: self.default_iam_role_arn,
            iam_role_arns: self.iam_role_arns,
            id: self.id,
            timeouts: self.timeouts,
        })
    }
}

/// `timeouts` block of `aws_redshift_cluster_iam_roles`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftClusterIamRolesTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl RedshiftClusterIamRolesTimeouts {
    pub fn builder() -> RedshiftClusterIamRolesTimeoutsBuilder {
        RedshiftClusterIamRolesTimeoutsBuilder::default()
    }
}

/// Builder for [`RedshiftClusterIamRolesTimeouts`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftClusterIamRolesTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    update: Option<String>,
}

impl RedshiftClusterIamRolesTimeoutsBuilder {
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

    pub fn build(self) -> Result<RedshiftClusterIamRolesTimeouts, ConfigError> {
        Ok(RedshiftClusterIamRolesTimeouts {
            create: self.create,
            delete: self.delete,
            update: self.update,
        })
    }
}
