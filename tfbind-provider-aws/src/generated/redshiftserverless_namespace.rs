//! redshiftserverless_namespace bindings
//!
//! Generated from Terraform resource schema: aws_redshiftserverless_namespace
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

/// Terraform schema of `aws_redshiftserverless_namespace`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftserverless_namespace")
        .attribute(
            AttributeSchema::new("admin_user_password", AttributeType::String)
                .sensitive(),
        )
        .attribute(
            AttributeSchema::new("admin_username", AttributeType::String)
                .optional_computed()
                .sensitive(),
        )
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("db_name", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("default_iam_role_arn", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("iam_roles", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("kms_key_id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("log_exports", AttributeType::Set(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("namespace_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
}

/// `aws_redshiftserverless_namespace` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftserverlessNamespace {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftserverlessNamespaceConfig,
}

impl RedshiftserverlessNamespace {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_namespace";

    pub fn new(name: impl Into<String>, config: RedshiftserverlessNamespaceConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftserverlessNamespaceConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftserverlessNamespaceConfig {
        self.config
    }

    pub fn admin_user_password(&self) -> Option<&str> {
        self.config.admin_user_password.as_deref()
    }

    pub fn set_admin_user_password(&mut self, value: impl Into<String>) {
        self.config.admin_user_password = Some(value.into());
    }

    pub fn reset_admin_user_password(&mut self) {
        self.config.admin_user_password = None;
    }

    pub fn admin_username(&self) -> Option<&str> {
        self.config.admin_username.as_deref()
    }

    pub fn set_admin_username(&mut self, value: impl Into<String>) {
        self.config.admin_username = Some(value.into());
    }

    pub fn reset_admin_username(&mut self) {
        self.config.admin_username = None;
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
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

    pub fn default_iam_role_arn(&self) -> Option<&str> {
        self.config.default_iam_role_arn.as_deref()
    }

    pub fn set_default_iam_role_arn(&mut self, value: impl Into<String>) {
        self.config.default_iam_role_arn = Some(value.into());
    }

    pub fn reset_default_iam_role_arn(&mut self) {
        self.config.default_iam_role_arn = None;
    }

    pub fn iam_roles(&self) -> Option<&Token<Vec<String>>> {
        self.config.iam_roles.as_ref()
    }

    pub fn set_iam_roles(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.iam_roles = Some(value.into());
    }

    pub fn reset_iam_roles(&mut self) {
        self.config.iam_roles = None;
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

    pub fn kms_key_id(&self) -> Option<&str> {
        self.config.kms_key_id.as_deref()
    }

    pub fn set_kms_key_id(&mut self, value: impl Into<String>) {
        self.config.kms_key_id = Some(value.into());
    }

    pub fn reset_kms_key_id(&mut self) {
        self.config.kms_key_id = None;
    }

    pub fn log_exports(&self) -> Option<&Token<Vec<String>>> {
        self.config.log_exports.as_ref()
    }

    pub fn set_log_exports(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.log_exports = Some(value.into());
    }

    pub fn reset_log_exports(&mut self) {
        self.config.log_exports = None;
    }

    pub fn namespace_id(&self) -> Reference {
        self.interpolation_for_attribute("namespace_id")
    }

    pub fn namespace_name(&self) -> &str {
        &self.config.namespace_name
    }

    pub fn set_namespace_name(&mut self, value: impl Into<String>) {
        self.config.namespace_name = value.into();
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

impl TerraformElement for RedshiftserverlessNamespace {
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

/// Configuration of `aws_redshiftserverless_namespace`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessNamespaceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_user_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_iam_role_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_roles: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_exports: Option<Token<Vec<String>>>,
    pub namespace_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftserverlessNamespaceConfig {
    pub fn builder() -> RedshiftserverlessNamespaceConfigBuilder {
        RedshiftserverlessNamespaceConfigBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessNamespaceConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessNamespaceConfigBuilder {
    admin_user_password: Option<String>,
    admin_username: Option<String>,
    db_name: Option<String>,
    default_iam_role_arn: Option<String>,
    iam_roles: Option<Token<Vec<String>>>,
    id: Option<String>,
    kms_key_id: Option<String>,
    log_exports: Option<Token<Vec<String>>>,
    namespace_name: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftserverlessNamespaceConfigBuilder {
    pub fn admin_user_password(mut self, value: impl Into<String>) -> Self {
        self.admin_user_password = Some(value.into());
        self
    }

    pub fn admin_username(mut self, value: impl Into<String>) -> Self {
        self.admin_username = Some(value.into());
        self
    }

    pub fn db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
        self
    }

    pub fn default_iam_role_arn(mut self, value: impl Into<String>) -> Self {
        self.default_iam_role_arn = Some(value.into());
        self
    }

    pub fn iam_roles(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.iam_roles = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    pub fn log_exports(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.log_exports = Some(value.into());
        self
    }

    pub fn namespace_name(mut self, value: impl Into<String>) -> Self {
        self.namespace_name = Some(value.into());
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

    pub fn build(self) -> Result<RedshiftserverlessNamespaceConfig, ConfigError> {
        Ok(RedshiftserverlessNamespaceConfig {
            admin_user_password: self.admin_user_password,
            admin_username: self.admin_username,
            db_name: self.db_name,
            default_iam_role_arn: self.default_iam_role_arn,
            iam_roles: self.iam_roles,
            id: self.id,
            kms_key_id: self.kms_key_id,
            log_exports: self.log_exports,
            namespace_name: self
                .namespace_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_namespace", "namespace_name"))?,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
