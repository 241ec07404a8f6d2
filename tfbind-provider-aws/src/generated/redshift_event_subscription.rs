//! redshift_event_subscription bindings
//!
//! Generated from Terraform resource schema: aws_redshift_event_subscription
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema, validate_enum};
use tfbind_core::value::Token;

const VALID_SEVERITY: &[&str] = &["INFO", "ERROR"];

fn validate_severity(value: &Value) -> Result<(), String> {
    validate_enum(value, "Severity", VALID_SEVERITY)
}

const VALID_SOURCE_TYPE: &[&str] = &["cluster", "cluster-parameter-group", "cluster-security-group", "cluster-snapshot", "scheduled-action"];

fn validate_source_type(value: &Value) -> Result<(), String> {
    validate_enum(value, "SourceType", VALID_SOURCE_TYPE)
}

/// Terraform schema of `aws_redshift_event_subscription`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_event_subscription")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("customer_aws_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("enabled", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("event_categories", AttributeType::Set(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("severity", AttributeType::Custom { name: "Severity".to_string(), base: Box::new(AttributeType::String), validate: validate_severity })
                .with_description("The event severity to be published by the notification subscription. Valid values are `INFO`, `ERROR`."),
        )
        .attribute(
            AttributeSchema::new("sns_topic_arn", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("source_ids", AttributeType::Set(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("source_type", AttributeType::Custom { name: "SourceType".to_string(), base: Box::new(AttributeType::String), validate: validate_source_type })
                .with_description("The type of source that will be generating the events. Valid values are `cluster`, `cluster-parameter-group`, `cluster-security-group`, `cluster-snapshot`, `scheduled-action`."),
        )
        .attribute(
            AttributeSchema::new("status", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
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

/// `aws_redshift_event_subscription` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftEventSubscription {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftEventSubscriptionConfig,
}

impl RedshiftEventSubscription {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_event_subscription";

    pub fn new(name: impl Into<String>, config: RedshiftEventSubscriptionConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftEventSubscriptionConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftEventSubscriptionConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn customer_aws_id(&self) -> Reference {
        self.interpolation_for_attribute("customer_aws_id")
    }

    pub fn enabled(&self) -> Option<&Token<bool>> {
        self.config.enabled.as_ref()
    }

    pub fn set_enabled(&mut self, value: impl Into<Token<bool>>) {
        self.config.enabled = Some(value.into());
    }

    pub fn reset_enabled(&mut self) {
        self.config.enabled = None;
    }

    pub fn event_categories(&self) -> Option<&Token<Vec<String>>> {
        self.config.event_categories.as_ref()
    }

    pub fn set_event_categories(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.event_categories = Some(value.into());
    }

    pub fn reset_event_categories(&mut self) {
        self.config.event_categories = None;
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

    pub fn severity(&self) -> Option<&str> {
        self.config.severity.as_deref()
    }

    pub fn set_severity(&mut self, value: impl Into<String>) {
        self.config.severity = Some(value.into());
    }

    pub fn reset_severity(&mut self) {
        self.config.severity = None;
    }

    pub fn sns_topic_arn(&self) -> &str {
        &self.config.sns_topic_arn
    }

    pub fn set_sns_topic_arn(&mut self, value: impl Into<String>) {
        self.config.sns_topic_arn = value.into();
    }

    pub fn source_ids(&self) -> Option<&Token<Vec<String>>> {
        self.config.source_ids.as_ref()
    }

    pub fn set_source_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.source_ids = Some(value.into());
    }

    pub fn reset_source_ids(&mut self) {
        self.config.source_ids = None;
    }

    pub fn source_type(&self) -> Option<&str> {
        self.config.source_type.as_deref()
    }

    pub fn set_source_type(&mut self, value: impl Into<String>) {
        self.config.source_type = Some(value.into());
    }

    pub fn reset_source_type(&mut self) {
        self.config.source_type = None;
    }

    pub fn status(&self) -> Reference {
        self.interpolation_for_attribute("status")
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

    pub fn timeouts(&self) -> Option<&RedshiftEventSubscriptionTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: RedshiftEventSubscriptionTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }
}

impl TerraformElement for RedshiftEventSubscription {
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

/// Configuration of `aws_redshift_event_subscription`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftEventSubscriptionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_categories: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// The event severity to be published by the notification subscription. Valid values are `INFO`, `ERROR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub sns_topic_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ids: Option<Token<Vec<String>>>,
    /// The type of source that will be generating the events. Valid values are `cluster`, `cluster-parameter-group`, `cluster-security-group`, `cluster-snapshot`, `scheduled-action`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeouts: Option<RedshiftEventSubscriptionTimeouts>,
}

impl RedshiftEventSubscriptionConfig {
    pub fn builder() -> RedshiftEventSubscriptionConfigBuilder {
        RedshiftEventSubscriptionConfigBuilder::default()
    }
}

/// Builder for [`RedshiftEventSubscriptionConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftEventSubscriptionConfigBuilder {
    enabled: Option<Token<bool>>,
    event_categories: Option<Token<Vec<String>>>,
    id: Option<String>,
    name: Option<String>,
    severity: Option<String>,
    sns_topic_arn: Option<String>,
    source_ids: Option<Token<Vec<String>>>,
    source_type: Option<String>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
    timeouts: Option<RedshiftEventSubscriptionTimeouts>,
}

impl RedshiftEventSubscriptionConfigBuilder {
    pub fn enabled(mut self, value: impl Into<Token<bool>>) -> Self {
        self.enabled = Some(value.into());
        self
    }

    pub fn event_categories(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.event_categories = Some(value.into());
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

    pub fn severity(mut self, value: impl Into<String>) -> Self {
        self.severity = Some(value.into());
        self
    }

    pub fn sns_topic_arn(mut self, value: impl Into<String>) -> Self {
        self.sns_topic_arn = Some(value.into());
        self
    }

    pub fn source_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.source_ids = Some(value.into());
        self
    }

    pub fn source_type(mut self, value: impl Into<String>) -> Self {
        self.source_type = Some(value.into());
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

    pub fn timeouts(mut self, value: RedshiftEventSubscriptionTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    pub fn build(self) -> Result<RedshiftEventSubscriptionConfig, ConfigError> {
        Ok(RedshiftEventSubscriptionConfig {
            enabled: self.enabled,
            event_categories: self.event_categories,
            id: self.id,
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshift_event_subscription", "name"))?,
            severity: self.severity,
            sns_topic_arn: self
                .sns_topic_arn
                .ok_or_else(|| ConfigError::missing("aws_redshift_event_subscription", "sns_topic_arn"))?,
            source_ids: self.source_ids,
            source_type: self.source_type,
            tags: self.tags,
            tags_all: self.tags_all,
            timeouts: self.timeouts,
        })
    }
}

/// `timeouts` block of `aws_redshift_event_subscription`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftEventSubscriptionTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl RedshiftEventSubscriptionTimeouts {
    pub fn builder() -> RedshiftEventSubscriptionTimeoutsBuilder {
        RedshiftEventSubscriptionTimeoutsBuilder::default()
    }
}

/// Builder for [`RedshiftEventSubscriptionTimeouts`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftEventSubscriptionTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    update: Option<String>,
}

impl RedshiftEventSubscriptionTimeoutsBuilder {
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

    pub fn build(self) -> Result<RedshiftEventSubscriptionTimeouts, ConfigError> {
        Ok(RedshiftEventSubscriptionTimeouts {
            create: self.create,
            delete: self.delete,
            update: self.update,
        })
    }
}
