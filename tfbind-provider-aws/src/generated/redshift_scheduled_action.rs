//! redshift_scheduled_action bindings
//!
//! Generated from Terraform resource schema: aws_redshift_scheduled_action
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshift_scheduled_action`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_scheduled_action")
        .attribute(
            AttributeSchema::new("description", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("enable", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("end_time", AttributeType::String),
        )
        .attribute(
            AttributeSchema::new("iam_role", AttributeType::String)
                .required(),
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
            AttributeSchema::new("schedule", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("start_time", AttributeType::String),
        )
        .block(
            BlockSchema::new("target_action", NestingMode::List)
                .min_items(1)
                .max_items(1)
                .block(
                    BlockSchema::new("pause_cluster", NestingMode::List)
                        .max_items(1)
                        .attribute(
                            AttributeSchema::new("cluster_identifier", AttributeType::String)
                                .required(),
                        ),
                )
                .block(
                    BlockSchema::new("resize_cluster", NestingMode::List)
                        .max_items(1)
                        .attribute(
                            AttributeSchema::new("classic", AttributeType::Bool),
                        )
                        .attribute(
                            AttributeSchema::new("cluster_identifier", AttributeType::String)
                                .required(),
                        )
                        .attribute(
                            AttributeSchema::new("cluster_type", AttributeType::String),
                        )
                        .attribute(
                            AttributeSchema::new("node_type", AttributeType::String),
                        )
                        .attribute(
                            AttributeSchema::new("number_of_nodes", AttributeType::Int),
                        ),
                )
                .block(
                    BlockSchema::new("resume_cluster", NestingMode::List)
                        .max_items(1)
                        .attribute(
                            AttributeSchema::new("cluster_identifier", AttributeType::String)
                                .required(),
                        ),
                ),
        )
}

/// `aws_redshift_scheduled_action` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftScheduledAction {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftScheduledActionConfig,
}

impl RedshiftScheduledAction {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_scheduled_action";

    pub fn new(name: impl Into<String>, config: RedshiftScheduledActionConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftScheduledActionConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftScheduledActionConfig {
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

    pub fn enable(&self) -> Option<&Token<bool>> {
        self.config.enable.as_ref()
    }

    pub fn set_enable(&mut self, value: impl Into<Token<bool>>) {
        self.config.enable = Some(value.into());
    }

    pub fn reset_enable(&mut self) {
        self.config.enable = None;
    }

    pub fn end_time(&self) -> Option<&str> {
        self.config.end_time.as_deref()
    }

    pub fn set_end_time(&mut self, value: impl Into<String>) {
        self.config.end_time = Some(value.into());
    }

    pub fn reset_end_time(&mut self) {
        self.config.end_time = None;
    }

    pub fn iam_role(&self) -> &str {
        &self.config.iam_role
    }

    pub fn set_iam_role(&mut self, value: impl Into<String>) {
        self.config.iam_role = value.into();
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

    pub fn schedule(&self) -> &str {
        &self.config.schedule
    }

    pub fn set_schedule(&mut self, value: impl Into<String>) {
        self.config.schedule = value.into();
    }

    pub fn start_time(&self) -> Option<&str> {
        self.config.start_time.as_deref()
    }

    pub fn set_start_time(&mut self, value: impl Into<String>) {
        self.config.start_time = Some(value.into());
    }

    pub fn reset_start_time(&mut self) {
        self.config.start_time = None;
    }

    pub fn target_action(&self) -> &RedshiftScheduledActionTargetAction {
        &self.config.target_action
    }

    pub fn put_target_action(&mut self, value: RedshiftScheduledActionTargetAction) {
        self.config.target_action = value;
    }
}

impl TerraformElement for RedshiftScheduledAction {
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

/// Configuration of `aws_redshift_scheduled_action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftScheduledActionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub iam_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub schedule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "tfbind_core::block::required_block")]
    pub target_action: RedshiftScheduledActionTargetAction,
}

impl RedshiftScheduledActionConfig {
    pub fn builder() -> RedshiftScheduledActionConfigBuilder {
        RedshiftScheduledActionConfigBuilder::default()
    }
}

/// Builder for [`RedshiftScheduledActionConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftScheduledActionConfigBuilder {
    description: Option<String>,
    enable: Option<Token<bool>>,
    end_time: Option<String>,
    iam_role: Option<String>,
    id: Option<String>,
    name: Option<String>,
    schedule: Option<String>,
    start_time: Option<String>,
    target_action: Option<RedshiftScheduledActionTargetAction>,
}

impl RedshiftScheduledActionConfigBuilder {
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn enable(mut self, value: impl Into<Token<bool>>) -> Self {
        self.enable = Some(value.into());
        self
    }

    pub fn end_time(mut self, value: impl Into<String>) -> Self {
        self.end_time = Some(value.into());
        self
    }

    pub fn iam_role(mut self, value: impl Into<String>) -> Self {
        self.iam_role = Some(value.into());
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

    pub fn schedule(mut self, value: impl Into<String>) -> Self {
        self.schedule = Some(value.into());
        self
    }

    pub fn start_time(mut self, value: impl Into<String>) -> Self {
        self.start_time = Some(value.into());
        self
    }

    pub fn target_action(mut self, value: RedshiftScheduledActionTargetAction) -> Self {
        self.target_action = Some(value);
        self
    }

    pub fn build(self) -> Result<RedshiftScheduledActionConfig, ConfigError> {
        Ok(RedshiftScheduledActionConfig {
            description: self.description,
            enable: self.enable,
            end_time: self.end_time,
            iam_role: self
                .iam_role
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action", "iam_role"))?,
            id: self.id,
            name: self
                .name
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action", "name"))?,
            schedule: self
                .schedule
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action", "schedule"))?,
            start_time: self.start_time,
            target_action: self
                .target_action
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action", "target_action"))?,
        })
    }
}

/// `target_action` block of `aws_redshift_scheduled_action`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftScheduledActionTargetAction {
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub pause_cluster: Option<RedshiftScheduledActionTargetActionPauseCluster>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub resize_cluster: Option<RedshiftScheduledActionTargetActionResizeCluster>,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::optional_block",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_cluster: Option<RedshiftScheduledActionTargetActionResumeCluster>,
}

impl RedshiftScheduledActionTargetAction {
    pub fn builder() -> RedshiftScheduledActionTargetActionBuilder {
        RedshiftScheduledActionTargetActionBuilder::default()
    }
}

/// Builder for [`RedshiftScheduledActionTargetAction`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftScheduledActionTargetActionBuilder {
    pause_cluster: Option<RedshiftScheduledActionTargetActionPauseCluster>,
    resize_cluster: Option<RedshiftScheduledActionTargetActionResizeCluster>,
    resume_cluster: Option<RedshiftScheduledActionTargetActionResumeCluster>,
}

impl RedshiftScheduledActionTargetActionBuilder {
    pub fn pause_cluster(mut self, value: RedshiftScheduledActionTargetActionPauseCluster) -> Self {
        self.pause_cluster = Some(value);
        self
    }

    pub fn resize_cluster(mut self, value: RedshiftScheduledActionTargetActionResizeCluster) -> Self {
        self.resize_cluster = Some(value);
        self
    }

    pub fn resume_cluster(mut self, value: RedshiftScheduledActionTargetActionResumeCluster) -> Self {
        self.resume_cluster = Some(value);
        self
    }

    pub fn build(self) -> Result<RedshiftScheduledActionTargetAction, ConfigError> {
        Ok(RedshiftScheduledActionTargetAction {
            pause_cluster: self.pause_cluster,
            resize_cluster: self.resize_cluster,
            resume_cluster: self.resume_cluster,
        })
    }
}

/// `pause_cluster` block of `aws_redshift_scheduled_action.target_action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftScheduledActionTargetActionPauseCluster {
    pub cluster_identifier: String,
}

impl RedshiftScheduledActionTargetActionPauseCluster {
    pub fn builder() -> RedshiftScheduledActionTargetActionPauseClusterBuilder {
        RedshiftScheduledActionTargetActionPauseClusterBuilder::default()
    }
}

/// Builder for [`RedshiftScheduledActionTargetActionPauseCluster`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftScheduledActionTargetActionPauseClusterBuilder {
    cluster_identifier: Option<String>,
}

impl RedshiftScheduledActionTargetActionPauseClusterBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftScheduledActionTargetActionPauseCluster, ConfigError> {
        Ok(RedshiftScheduledActionTargetActionPauseCluster {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action.target_action.pause_cluster", "cluster_identifier"))?,
        })
    }
}

/// `resize_cluster` block of `aws_redshift_scheduled_action.target_action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftScheduledActionTargetActionResizeCluster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classic: Option<Token<bool>>,
    pub cluster_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_nodes: Option<Token<i64>>,
}

impl RedshiftScheduledActionTargetActionResizeCluster {
    pub fn builder() -> RedshiftScheduledActionTargetActionResizeClusterBuilder {
        RedshiftScheduledActionTargetActionResizeClusterBuilder::default()
    }
}

/// Builder for [`RedshiftScheduledActionTargetActionResizeCluster`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftScheduledActionTargetActionResizeClusterBuilder {
    classic: Option<Token<bool>>,
    cluster_identifier: Option<String>,
    cluster_type: Option<String>,
    node_type: Option<String>,
    number_of_nodes: Option<Token<i64>>,
}

impl RedshiftScheduledActionTargetActionResizeClusterBuilder {
    pub fn classic(mut self, value: impl Into<Token<bool>>) -> Self {
        self.classic = Some(value.into());
        self
    }

    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn cluster_type(mut self, value: impl Into<String>) -> Self {
        self.cluster_type = Some(value.into());
        self
    }

    pub fn node_type(mut self, value: impl Into<String>) -> Self {
        self.node_type = Some(value.into());
        self
    }

    pub fn number_of_nodes(mut self, value: impl Into<Token<i64>>) -> Self {
        self.number_of_nodes = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftScheduledActionTargetActionResizeCluster, ConfigError> {
        Ok(RedshiftScheduledActionTargetActionResizeCluster {
            classic: self.classic,
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action.target_action.resize_cluster", "cluster_identifier"))?,
            cluster_type: self.cluster_type,
            node_type: self.node_type,
            number_of_nodes: self.number_of_nodes,
        })
    }
}

/// `resume_cluster` block of `aws_redshift_scheduled_action.target_action`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftScheduledActionTargetActionResumeCluster {
    pub cluster_identifier: String,
}

impl RedshiftScheduledActionTargetActionResumeCluster {
    pub fn builder() -> RedshiftScheduledActionTargetActionResumeClusterBuilder {
        RedshiftScheduledActionTargetActionResumeClusterBuilder::default()
    }
}

/// Builder for [`RedshiftScheduledActionTargetActionResumeCluster`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftScheduledActionTargetActionResumeClusterBuilder {
    cluster_identifier: Option<String>,
}

impl RedshiftScheduledActionTargetActionResumeClusterBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftScheduledActionTargetActionResumeCluster, ConfigError> {
        Ok(RedshiftScheduledActionTargetActionResumeCluster {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_scheduled_action.target_action.resume_cluster", "cluster_identifier"))?,
        })
    }
}
