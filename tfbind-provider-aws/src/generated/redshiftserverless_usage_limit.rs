//! redshiftserverless_usage_limit bindings
//!
//! Generated from Terraform resource schema: aws_redshiftserverless_usage_limit
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema, validate_enum};
use tfbind_core::value::Token;

const VALID_BREACH_ACTION: &[&str] = &["log", "emit-metric", "deactivate"];

fn validate_breach_action(value: &Value) -> Result<(), String> {
    validate_enum(value, "BreachAction", VALID_BREACH_ACTION)
}

const VALID_PERIOD: &[&str] = &["daily", "weekly", "monthly"];

fn validate_period(value: &Value) -> Result<(), String> {
    validate_enum(value, "Period", VALID_PERIOD)
}

const VALID_USAGE_TYPE: &[&str] = &["serverless-compute", "cross-region-datasharing"];

fn validate_usage_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "UsageType", VALID_USAGE_TYPE)
}

/// Terraform schema of `aws_redshiftserverless_usage_limit`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftserverless_usage_limit")
        .attribute(
            AttributeSchema::new("amount", AttributeType::Int)
                .required(),
        )
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("breach_action", AttributeType::Custom { name: "BreachAction".to_string(), base: Box::new(AttributeType::String), validate: validate_breach_action })
                .with_description("The action that Amazon Redshift Serverless takes when the limit is reached. Valid values are `log`, `emit-metric`, `deactivate`."),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("period", AttributeType::Custom { name: "Period".to_string(), base: Box::new(AttributeType::String), validate: validate_period })
                .with_description("The time period that the amount applies to. Valid values are `daily`, `weekly`, `monthly`."),
        )
        .attribute(
            AttributeSchema::new("resource_arn", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("usage_type", AttributeType::Custom { name: "UsageType".to_string(), base: Box::new(AttributeType::String), validate: validate_usage_type })
                .required()
                .with_description("The type of Amazon Redshift Serverless usage to create a usage limit for. Valid values are `serverless-compute`, `cross-region-datasharing`."),
        )
}

/// `aws_redshiftserverless_usage_limit` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftserverlessUsageLimit {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftserverlessUsageLimitConfig,
}

impl RedshiftserverlessUsageLimit {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_usage_limit";

    pub fn new(name: impl Into<String>, config: RedshiftserverlessUsageLimitConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftserverlessUsageLimitConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftserverlessUsageLimitConfig {
        self.config
    }

    pub fn amount(&self) -> &Token<i64> {
        &self.config.amount
    }

    pub fn set_amount(&mut self, value: impl Into<Token<i64>>) {
        self.config.amount = value.into();
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn breach_action(&self) -> Option<&str> {
        self.config.breach_action.as_deref()
    }

    pub fn set_breach_action(&mut self, value: impl Into<String>) {
        self.config.breach_action = Some(value.into());
    }

    pub fn reset_breach_action(&mut self) {
        self.config.breach_action = None;
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

    pub fn period(&self) -> Option<&str> {
        self.config.period.as_deref()
    }

    pub fn set_period(&mut self, value: impl Into<String>) {
        self.config.period = Some(value.into());
    }

    pub fn reset_period(&mut self) {
        self.config.period = None;
    }

    pub fn resource_arn(&self) -> &str {
        &self.config.resource_arn
    }

    pub fn set_resource_arn(&mut self, value: impl Into<String>) {
        self.config.resource_arn = value.into();
    }

    pub fn usage_type(&self) -> &str {
        &self.config.usage_type
    }

    pub fn set_usage_type(&mut self, value: impl Into<String>) {
        self.config.usage_type = value.into();
    }
}

impl TerraformElement for RedshiftserverlessUsageLimit {
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

/// Configuration of `aws_redshiftserverless_usage_limit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessUsageLimitConfig {
    pub amount: Token<i64>,
    /// The action that Amazon Redshift Serverless takes when the limit is reached. Valid values are `log`, `emit-metric`, `deactivate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breach_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The time period that the amount applies to. Valid values are `daily`, `weekly`, `monthly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub resource_arn: String,
    /// The type of Amazon Redshift Serverless usage to create a usage limit for. Valid values are `serverless-compute`, `cross-region-datasharing`.
    pub usage_type: String,
}

impl RedshiftserverlessUsageLimitConfig {
    pub fn builder() -> RedshiftserverlessUsageLimitConfigBuilder {
        RedshiftserverlessUsageLimitConfigBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessUsageLimitConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessUsageLimitConfigBuilder {
    amount: Option<Token<i64>>,
    breach_action: Option<String>,
    id: Option<String>,
    period: Option<String>,
    resource_arn: Option<String>,
    usage_type: Option<String>,
}

impl RedshiftserverlessUsageLimitConfigBuilder {
    pub fn amount(mut self, value: impl Into<Token<i64>>) -> Self {
        self.amount = Some(value.into());
        self
    }

    pub fn breach_action(mut self, value: impl Into<String>) -> Self {
        self.breach_action = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn period(mut self, value: impl Into<String>) -> Self {
        self.period = Some(value.into());
        self
    }

    pub fn resource_arn(mut self, value: impl Into<String>) -> Self {
        self.resource_arn = Some(value.into());
        self
    }

    pub fn usage_type(mut self, value: impl Into<String>) -> Self {
        self.usage_type = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftserverlessUsageLimitConfig, ConfigError> {
        Ok(RedshiftserverlessUsageLimitConfig {
            amount: self
                .amount
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_usage_limit", "amount"))?,
            breach_action: self.breach_action,
            id: self.id,
            period: self.period,
            resource_arn: self
                .resource_arn
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_usage_limit", "resource_arn"))?,
            usage_type: self
                .usage_type
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_usage_limit", "usage_type"))?,
        })
    }
}
