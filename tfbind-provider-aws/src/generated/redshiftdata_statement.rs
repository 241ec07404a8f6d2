//! redshiftdata_statement bindings
//!
//! Generated from Terraform resource schema: aws_redshiftdata_statement
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshiftdata_statement`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftdata_statement")
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("database", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("db_user", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("secret_arn", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("sql", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("statement_name", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("with_event", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("workgroup_name", AttributeType::String),
        )
        .block(
            BlockSchema::new("parameters", NestingMode::List)
                .attribute(
                    AttributeSchema::new("name", AttributeType::String)
                        .required(),
                )
                .attribute(
                    AttributeSchema::new("value", AttributeType::String)
                        .required(),
                ),
        )
        .block(
            BlockSchema::new("timeouts", NestingMode::Single)
                .attribute(
                    AttributeSchema::new("create", AttributeType::String),
                ),
        )
}

/// `aws_redshiftdata_statement` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftdataStatement {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftdataStatementConfig,
}

impl RedshiftdataStatement {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftdata_statement";

    pub fn new(name: impl Into<String>, config: RedshiftdataStatementConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftdataStatementConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftdataStatementConfig {
        self.config
    }

    pub fn cluster_identifier(&self) -> Option<&str> {
        self.config.cluster_identifier.as_deref()
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = Some(value.into());
    }

    pub fn reset_cluster_identifier(&mut self) {
        self.config.cluster_identifier = None;
    }

    pub fn database(&self) -> &str {
        &self.config.database
    }

    pub fn set_database(&mut self, value: impl Into<String>) {
        self.config.database = value.into();
    }

    pub fn db_user(&self) -> Option<&str> {
        self.config.db_user.as_deref()
    }

    pub fn set_db_user(&mut self, value: impl Into<String>) {
        self.config.db_user = Some(value.into());
    }

    pub fn reset_db_user(&mut self) {
        self.config.db_user = None;
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

    pub fn secret_arn(&self) -> Option<&str> {
        self.config.secret_arn.as_deref()
    }

    pub fn set_secret_arn(&mut self, value: impl Into<String>) {
        self.config.secret_arn = Some(value.into());
    }

    pub fn reset_secret_arn(&mut self) {
        self.config.secret_arn = None;
    }

    pub fn sql(&self) -> &str {
        &self.config.sql
    }

    pub fn set_sql(&mut self, value: impl Into<String>) {
        self.config.sql = value.into();
    }

    pub fn statement_name(&self) -> Option<&str> {
        self.config.statement_name.as_deref()
    }

    pub fn set_statement_name(&mut self, value: impl Into<String>) {
        self.config.statement_name = Some(value.into());
    }

    pub fn reset_statement_name(&mut self) {
        self.config.statement_name = None;
    }

    pub fn with_event(&self) -> Option<&Token<bool>> {
        self.config.with_event.as_ref()
    }

    pub fn set_with_event(&mut self, value: impl Into<Token<bool>>) {
        self.config.with_event = Some(value.into());
    }

    pub fn reset_with_event(&mut self) {
        self.config.with_event = None;
    }

    pub fn workgroup_name(&self) -> Option<&str> {
        self.config.workgroup_name.as_deref()
    }

    pub fn set_workgroup_name(&mut self, value: impl Into<String>) {
        self.config.workgroup_name = Some(value.into());
    }

    pub fn reset_workgroup_name(&mut self) {
        self.config.workgroup_name = None;
    }

    pub fn parameters(&self) -> &[RedshiftdataStatementParameters] {
        &self.config.parameters
    }

    pub fn put_parameters(&mut self, value: Vec<RedshiftdataStatementParameters>) {
        self.config.parameters = value;
    }

    pub fn reset_parameters(&mut self) {
        self.config.parameters.clear();
    }

    pub fn timeouts(&self) -> Option<&RedshiftdataStatementTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: RedshiftdataStatementTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }
}

impl TerraformElement for RedshiftdataStatement {
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

/// Configuration of `aws_redshiftdata_statement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftdataStatementConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_identifier: Option<String>,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    pub sql: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_event: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workgroup_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::block_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<RedshiftdataStatementParameters>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeouts: Option<RedshiftdataStatementTimeouts>,
}

impl RedshiftdataStatementConfig {
    pub fn builder() -> RedshiftdataStatementConfigBuilder {
        RedshiftdataStatementConfigBuilder::default()
    }
}

/// Builder for [`RedshiftdataStatementConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftdataStatementConfigBuilder {
    cluster_identifier: Option<String>,
    database: Option<String>,
    db_user: Option<String>,
    id: Option<String>,
    secret_arn: Option<String>,
    sql: Option<String>,
    statement_name: Option<String>,
    with_event: Option<Token<bool>>,
    workgroup_name: Option<String>,
    parameters: Vec<RedshiftdataStatementParameters>,
    timeouts: Option<RedshiftdataStatementTimeouts>,
}

impl RedshiftdataStatementConfigBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn database(mut self, value: impl Into<String>) -> Self {
        self.database = Some(value.into());
        self
    }

    pub fn db_user(mut self, value: impl Into<String>) -> Self {
        self.db_user = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn secret_arn(mut self, value: impl Into<String>) -> Self {
        self.secret_arn = Some(value.into());
        self
    }

    pub fn sql(mut self, value: impl Into<String>) -> Self {
        self.sql = Some(value.into());
        self
    }

    pub fn statement_name(mut self, value: impl Into<String>) -> Self {
        self.statement_name = Some(value.into());
        self
    }

    pub fn with_event(mut self, value: impl Into<Token<bool>>) -> Self {
        self.with_event = Some(value.into());
        self
    }

    pub fn workgroup_name(mut self, value: impl Into<String>) -> Self {
        self.workgroup_name = Some(value.into());
        self
    }

    pub fn parameters(mut self, value: Vec<RedshiftdataStatementParameters>) -> Self {
        self.parameters = value;
        self
    }

    pub fn timeouts(mut self, value: RedshiftdataStatementTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    pub fn build(self) -> Result<RedshiftdataStatementConfig, ConfigError> {
        Ok(RedshiftdataStatementConfig {
            cluster_identifier: self.cluster_identifier,
            database: self
                .database
                .ok_or_else(|| ConfigError::missing("aws_redshiftdata_statement", "database"))?,
            db_user: self.db_user,
            id: self.id,
            secret_arn: self.secret_arn,
            sql: self
                .sql
                .ok_or_else(|| ConfigError::missing("aws_redshiftdata_statement", "sql"))?,
            statement_name: self.statement_name,
            with_event: self.with_event,
            workgroup_name: self.workgroup_name,
            parameters: self.parameters,
            timeouts: self.timeouts,
        })
    }
}

/// `parameters` block of `aws_redshiftdata_statement`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftdataStatementParameters {
    pub name: String,
    pub value: String,
}

impl RedshiftdataStatementParameters {
    pub fn builder() -> RedshiftdataStatementParametersBuilder {
        RedshiftdataStatementParametersBuilder::default()
    }
}

/// Builder for [`RedshiftdataStatementParameters`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftdataStatementParametersBuilder {
    name: Option<String>,
    value: Option<String>,
}

impl RedshiftdataStatementParametersBuilder {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftdataStatementParameters, ConfigError> {
        Ok(RedshiftdataStatementParameters {
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshiftdata_statement.parameters", "name"))?,
            value: self
                .value
                .ok_or_else(|| ConfigError::missing("aws_redshiftdata_statement.parameters", "value"))?,
        })
    }
}

/// `timeouts` block of `aws_redshiftdata_statement`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftdataStatementTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
}

impl RedshiftdataStatementTimeouts {
    pub fn builder() -> RedshiftdataStatementTimeoutsBuilder {
        RedshiftdataStatementTimeoutsBuilder::default()
    }
}

/// Builder for [`RedshiftdataStatementTimeouts`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftdataStatementTimeoutsBuilder {
    create: Option<String>,
}

impl RedshiftdataStatementTimeoutsBuilder {
    pub fn create(mut self, value: impl Into<String>) -> Self {
        self.create = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftdataStatementTimeouts, ConfigError> {
        Ok(RedshiftdataStatementTimeouts {
            create: self.create,
        })
    }
}
