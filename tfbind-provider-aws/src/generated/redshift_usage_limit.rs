//! redshift_usage_limit bindings
//!
//! Generated from Terraform resource schema: aws_redshift_usage_limit
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema, validate_enum};
use tfbind_core::value::Token;

const VALID_BREACH_ACTION: &[&str] = &["log", "emit-metric", "disable"];

fn validate_breach_action(value: &Value) -> Result<(), String> {
    validate_enum(value, "BreachAction", VALID_BREACH_ACTION)
}

const VALID_FEATURE_TYPE: &[&str] = &["spectrum", "concurrency-scaling", "cross-region-datasharing"];

fn validate_feature_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "FeatureType", VALID_FEATURE_TYPE)
}

const VALID_LIMIT_TYPE: &[&str] = &["time", "data-scanned"];

fn validate_limit_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "LimitType", VALID_LIMIT_TYPE)
}

const VALID_PERIOD: &[&str] = &["daily", "weekly", "monthly"];

fn validate_period(value: &Value) -> Result<(), String> {
    validate_enum(value, "Period", VALID_PERIOD)
}

/// Terraform schema of `aws_redshift_usage_limit`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_usage_limit")
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
                .with_description("The action that Amazon Redshift takes when the limit is reached. Valid values are `log`, `emit-metric`, `disable`."),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("feature_type", AttributeType::Custom { name: "FeatureType".to_string(), base: Box::new(AttributeType::String), validate: validate_feature_type })
                .required()
                .with_description("The Amazon Redshift feature that you want to limit. Valid values are `spectrum`, `concurrency-scaling`, `cross-region-datasharing`."),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("limit_type", AttributeType::Custom { name: "LimitType".to_string(), base: Box::new(AttributeType::String), validate: validate_limit_type })
                .required()
                .with_description("The type of limit. Valid values are `time`, `data-scanned`."),
        )
        .attribute(
            AttributeSchema::new("period", AttributeType::Custom { name: "Period".to_string(), base: Box::new(AttributeType::String), validate: validate_period })
                .with_description("The time period that the amount applies to. Valid values are `daily`, `weekly`, `monthly`."),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
}

/// `aws_redshift_usage_limit` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftUsageLimit {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftUsageLimitConfig,
}

impl RedshiftUsageLimit {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_usage_limit";

    pub fn new(name: impl Into<String>, config: RedshiftUsageLimitConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftUsageLimitConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftUsageLimitConfig {
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

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
    }

    pub fn feature_type(&self) -> &str {
        &self.config.feature_type
    }

    pub fn set_feature_type(&mut self, value: impl Into<String>) {
        self.config.feature_type = value.into();
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

    pub fn limit_type(&self) -> &str {
        &self.config.limit_type
    }

    pub fn set_limit_type(&mut self, value: impl Into<String>) {
        self.config.limit_type = value.into();
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

impl TerraformElement for RedshiftUsageLimit {
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

/// Configuration of `aws_redshift_usage_limit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftUsageLimitConfig {
    pub amount: Token<i64>,
    /// The action that Amazon Redshift takes when the limit is reached. Valid values are `log`, `emit-metric`, `disable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breach_action: Option<String>,
    pub cluster_identifier: String,
    /// The Amazon Redshift feature that you want to limit. Valid values are `spectrum`, `concurrency-scaling`, `cross-region-datasharing`.
    pub feature_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The type of limit. Valid values are `time`, `data-scanned`.
    pub limit_type: String,
    /// The time period that the amount applies to. Valid values are `daily`, `weekly`, `monthly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftUsageLimitConfig {
    pub fn builder() -> RedshiftUsageLimitConfigBuilder {
        RedshiftUsageLimitConfigBuilder::default()
    }
}

/// Builder for [`RedshiftUsageLimitConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftUsageLimitConfigBuilder {
    amount: Option<Token<i64>>,
    breach_action: Option<String>,
    cluster_identifier: Option<String>,
    feature_type: Option<String>,
    id: Option<String>,
    limit_type: Option<String>,
    period: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
}

impl RedshiftUsageLimitConfigBuilder {
    pub fn amount(mut self, value: impl Into<Token<i64>>) -> Self {
        self.amount = Some(value.into());
        self
    }

    pub fn breach_action(mut self, value: impl Into<String>) -> Self {
        self.breach_action = Some(value.into());
        self
    }

    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn feature_type(mut self, value: impl Into<String>) -> Self {
        self.feature_type = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn limit_type(mut self, value: impl Into<String>) -> Self {
        self.limit_type = Some(value.into());
        self
    }

    pub fn period(mut self, value: impl Into<String>) -> Self {
        self.period = Some(value.into());
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

    pub fn build(self) -> Result<RedshiftUsageLimitConfig, ConfigError> {
        Ok(RedshiftUsageLimitConfig {
            amount: self
                .amount
                .ok_or_else(|| ConfigError::missing("aws_redshift_usage_limit", "amount"))?,
            breach_action: self.breach_action,
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_usage_limit", "cluster_identifier"))?,
            feature_type: self
                .feature_type
                .ok_or_else(|| ConfigError::missing("aws_redshift_usage_limit", "feature_type"))?,
            id: self.id,
            limit_type: self
                .limit_type
                .ok_or_else(|| ConfigError::missing("aws_redshift_usage_limit", "limit_type"))?,
            period: self.period,
            tags: self.tags,
            tags_all: self.tags_all,
        })
    }
}
