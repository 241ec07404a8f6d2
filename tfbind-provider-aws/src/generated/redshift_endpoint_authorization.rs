//! redshift_endpoint_authorization bindings
//!
//! Generated from Terraform resource schema: aws_redshift_endpoint_authorization
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_endpoint_authorization`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_endpoint_authorization")
        .attribute(
            AttributeSchema::new("account", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("allowed_all_vpcs", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("endpoint_count", AttributeType::Int)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("force_delete", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("grantee", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("grantor", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("vpc_ids", AttributeType::Set(Box::new(AttributeType::String))),
        )
}

/// `aws_redshift_endpoint_authorization` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftEndpointAuthorization {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftEndpointAuthorizationConfig,
}

impl RedshiftEndpointAuthorization {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_endpoint_authorization";

    pub fn new(name: impl Into<String>, config: RedshiftEndpointAuthorizationConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftEndpointAuthorizationConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftEndpointAuthorizationConfig {
        self.config
    }

    pub fn account(&self) -> &str {
        &self.config.account
    }

    pub fn set_account(&mut self, value: impl Into<String>) {
        self.config.account = value.into();
    }

    pub fn allowed_all_vpcs(&self) -> Reference {
        self.interpolation_for_attribute("allowed_all_vpcs")
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
    }

    pub fn endpoint_count(&self) -> Reference {
        self.interpolation_for_attribute("endpoint_count")
    }

    pub fn force_delete(&self) -> Option<&Token<bool>> {
        self.config.force_delete.as_ref()
    }

    pub fn set_force_delete(&mut self, value: impl Into<Token<bool>>) {
        self.config.force_delete = Some(value.into());
    }

    pub fn reset_force_delete(&mut self) {
        self.config.force_delete = None;
    }

    pub fn grantee(&self) -> Reference {
        self.interpolation_for_attribute("grantee")
    }

    pub fn grantor(&self) -> Reference {
        self.interpolation_for_attribute("grantor")
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

    pub fn vpc_ids(&self) -> Option<&Token<Vec<String>>> {
        self.config.vpc_ids.as_ref()
    }

    pub fn set_vpc_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.vpc_ids = Some(value.into());
    }

    pub fn reset_vpc_ids(&mut self) {
        self.config.vpc_ids = None;
    }
}

impl TerraformElement for RedshiftEndpointAuthorization {
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

/// Configuration of `aws_redshift_endpoint_authorization`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftEndpointAuthorizationConfig {
    pub account: String,
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_delete: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_ids: Option<Token<Vec<String>>>,
}

impl RedshiftEndpointAuthorizationConfig {
    pub fn builder() -> RedshiftEndpointAuthorizationConfigBuilder {
        RedshiftEndpointAuthorizationConfigBuilder::default()
    }
}

/// Builder for [`RedshiftEndpointAuthorizationConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftEndpointAuthorizationConfigBuilder {
    account: Option<String>,
    cluster_identifier: Option<String>,
    force_delete: Option<Token<bool>>,
    id: Option<String>,
    vpc_ids: Option<Token<Vec<String>>>,
}

impl RedshiftEndpointAuthorizationConfigBuilder {
    pub fn account(mut self, value: impl Into<String>) -> Self {
        self.account = Some(value.into());
        self
    }

    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn force_delete(mut self, value: impl Into<Token<bool>>) -> Self {
        self.force_delete = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn vpc_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.vpc_ids = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftEndpointAuthorizationConfig, ConfigError> {
        Ok(RedshiftEndpointAuthorizationConfig {
            account: self
                .account
                .ok_or_else(|| ConfigError::missing("aws_redshift_endpoint_authorization", "account"))?,
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_endpoint_authorization", "cluster_identifier"))?,
            force_delete: self.force_delete,
            id: self.id,
            vpc_ids: self.vpc_ids,
        })
    }
}
