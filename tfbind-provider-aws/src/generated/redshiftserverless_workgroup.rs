//! redshiftserverless_workgroup bindings
//!
//! Generated from Terraform resource schema: aws_redshiftserverless_workgroup
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::block::{ComputedList, ComputedObject};
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, BlockSchema, NestingMode, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshiftserverless_workgroup`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftserverless_workgroup")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("base_capacity", AttributeType::Int)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("endpoint", AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("address".to_string(), AttributeType::String), ("port".to_string(), AttributeType::Int), ("vpc_endpoint".to_string(), AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("network_interface".to_string(), AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("availability_zone".to_string(), AttributeType::String), ("network_interface_id".to_string(), AttributeType::String), ("private_ip_address".to_string(), AttributeType::String), ("subnet_id".to_string(), AttributeType::String)]))))), ("vpc_endpoint_id".to_string(), AttributeType::String), ("vpc_id".to_string(), AttributeType::String)])))))])))))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("enhanced_vpc_routing", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("publicly_accessible", AttributeType::Bool),
        )
        .attribute(
            AttributeSchema::new("security_group_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("subnet_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("tags", AttributeType::Map(Box::new(AttributeType::String))),
        )
        .attribute(
            AttributeSchema::new("tags_all", AttributeType::Map(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("workgroup_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("workgroup_name", AttributeType::String)
                .required(),
        )
        .block(
            BlockSchema::new("config_parameter", NestingMode::Set)
                .attribute(
                    AttributeSchema::new("parameter_key", AttributeType::String)
                        .required(),
                )
                .attribute(
                    AttributeSchema::new("parameter_value", AttributeType::String)
                        .required(),
                ),
        )
}

/// `aws_redshiftserverless_workgroup` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftserverlessWorkgroup {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftserverlessWorkgroupConfig,
}

impl RedshiftserverlessWorkgroup {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_workgroup";

    pub fn new(name: impl Into<String>, config: RedshiftserverlessWorkgroupConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftserverlessWorkgroupConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftserverlessWorkgroupConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn base_capacity(&self) -> Option<&Token<i64>> {
        self.config.base_capacity.as_ref()
    }

    pub fn set_base_capacity(&mut self, value: impl Into<Token<i64>>) {
        self.config.base_capacity = Some(value.into());
    }

    pub fn reset_base_capacity(&mut self) {
        self.config.base_capacity = None;
    }

    pub fn endpoint(&self) -> RedshiftserverlessWorkgroupEndpointList {
        RedshiftserverlessWorkgroupEndpointList::new(self.interpolation_for_attribute("endpoint"))
    }

    pub fn enhanced_vpc_routing(&self) -> Option<&Token<bool>> {
        self.config.enhanced_vpc_routing.as_ref()
    }

    pub fn set_enhanced_vpc_routing(&mut self, value: impl Into<Token<bool>>) {
        self.config.enhanced_vpc_routing = Some(value.into());
    }

    pub fn reset_enhanced_vpc_routing(&mut self) {
        self.config.enhanced_vpc_routing = None;
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

    pub fn namespace_name(&self) -> &str {
        &self.config.namespace_name
    }

    pub fn set_namespace_name(&mut self, value: impl Into<String>) {
        self.config.namespace_name = value.into();
    }

    pub fn publicly_accessible(&self) -> Option<&Token<bool>> {
        self.config.publicly_accessible.as_ref()
    }

    pub fn set_publicly_accessible(&mut self, value: impl Into<Token<bool>>) {
        self.config.publicly_accessible = Some(value.into());
    }

    pub fn reset_publicly_accessible(&mut self) {
        self.config.publicly_accessible = None;
    }

    pub fn security_group_ids(&self) -> Option<&Token<Vec<String>>> {
        self.config.security_group_ids.as_ref()
    }

    pub fn set_security_group_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.security_group_ids = Some(value.into());
    }

    pub fn reset_security_group_ids(&mut self) {
        self.config.security_group_ids = None;
    }

    pub fn subnet_ids(&self) -> Option<&Token<Vec<String>>> {
        self.config.subnet_ids.as_ref()
    }

    pub fn set_subnet_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.subnet_ids = Some(value.into());
    }

    pub fn reset_subnet_ids(&mut self) {
        self.config.subnet_ids = None;
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

    pub fn workgroup_id(&self) -> Reference {
        self.interpolation_for_attribute("workgroup_id")
    }

    pub fn workgroup_name(&self) -> &str {
        &self.config.workgroup_name
    }

    pub fn set_workgroup_name(&mut self, value: impl Into<String>) {
        self.config.workgroup_name = value.into();
    }

    pub fn config_parameter(&self) -> &[RedshiftserverlessWorkgroupConfigParameter] {
        &self.config.config_parameter
    }

    pub fn put_config_parameter(&mut self, value: Vec<RedshiftserverlessWorkgroupConfigParameter>) {
        self.config.config_parameter = value;
    }

    pub fn reset_config_parameter(&mut self) {
        self.config.config_parameter.clear();
    }
}

impl TerraformElement for RedshiftserverlessWorkgroup {
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

/// Configuration of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessWorkgroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_capacity: Option<Token<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_vpc_routing: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub namespace_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<Token<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Token<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Token<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<Token<BTreeMap<String, String>>>,
    pub workgroup_name: String,
    #[serde(
        default,
        deserialize_with = "tfbind_core::block::block_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub config_parameter: Vec<RedshiftserverlessWorkgroupConfigParameter>,
}

impl RedshiftserverlessWorkgroupConfig {
    pub fn builder() -> RedshiftserverlessWorkgroupConfigBuilder {
        RedshiftserverlessWorkgroupConfigBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessWorkgroupConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessWorkgroupConfigBuilder {
    base_capacity: Option<Token<i64>>,
    enhanced_vpc_routing: Option<Token<bool>>,
    id: Option<String>,
    namespace_name: Option<String>,
    publicly_accessible: Option<Token<bool>>,
    security_group_ids: Option<Token<Vec<String>>>,
    subnet_ids: Option<Token<Vec<String>>>,
    tags: Option<Token<BTreeMap<String, String>>>,
    tags_all: Option<Token<BTreeMap<String, String>>>,
    workgroup_name: Option<String>,
    config_parameter: Vec<RedshiftserverlessWorkgroupConfigParameter>,
}

impl RedshiftserverlessWorkgroupConfigBuilder {
    pub fn base_capacity(mut self, value: impl Into<Token<i64>>) -> Self {
        self.base_capacity = Some(value.into());
        self
    }

    pub fn enhanced_vpc_routing(mut self, value: impl Into<Token<bool>>) -> Self {
        self.enhanced_vpc_routing = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn namespace_name(mut self, value: impl Into<String>) -> Self {
        self.namespace_name = Some(value.into());
        self
    }

    pub fn publicly_accessible(mut self, value: impl Into<Token<bool>>) -> Self {
        self.publicly_accessible = Some(value.into());
        self
    }

    pub fn security_group_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.security_group_ids = Some(value.into());
        self
    }

    pub fn subnet_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.subnet_ids = Some(value.into());
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

    pub fn workgroup_name(mut self, value: impl Into<String>) -> Self {
        self.workgroup_name = Some(value.into());
        self
    }

    pub fn config_parameter(mut self, value: Vec<RedshiftserverlessWorkgroupConfigParameter>) -> Self {
        self.config_parameter = value;
        self
    }

    pub fn build(self) -> Result<RedshiftserverlessWorkgroupConfig, ConfigError> {
        Ok(RedshiftserverlessWorkgroupConfig {
            base_capacity: self.base_capacity,
            enhanced_vpc_routing: self.enhanced_vpc_routing,
            id: self.id,
            namespace_name: self
                .namespace_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_workgroup", "namespace_name"))?,
            publicly_accessible: self.publicly_accessible,
            security_group_ids: self.security_group_ids,
            subnet_ids: self.subnet_ids,
            tags: self.tags,
            tags_all: self.tags_all,
            workgroup_name: self
                .workgroup_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_workgroup", "workgroup_name"))?,
            config_parameter: self.config_parameter,
        })
    }
}

/// `config_parameter` block of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessWorkgroupConfigParameter {
    pub parameter_key: String,
    pub parameter_value: String,
}

impl RedshiftserverlessWorkgroupConfigParameter {
    pub fn builder() -> RedshiftserverlessWorkgroupConfigParameterBuilder {
        RedshiftserverlessWorkgroupConfigParameterBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessWorkgroupConfigParameter`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessWorkgroupConfigParameterBuilder {
    parameter_key: Option<String>,
    parameter_value: Option<String>,
}

impl RedshiftserverlessWorkgroupConfigParameterBuilder {
    pub fn parameter_key(mut self, value: impl Into<String>) -> Self {
        self.parameter_key = Some(value.into());
        self
    }

    pub fn parameter_value(mut self, value: impl Into<String>) -> Self {
        self.parameter_value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftserverlessWorkgroupConfigParameter, ConfigError> {
        Ok(RedshiftserverlessWorkgroupConfigParameter {
            parameter_key: self
                .parameter_key
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_workgroup.config_parameter", "parameter_key"))?,
            parameter_value: self
                .parameter_value
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_workgroup.config_parameter", "parameter_value"))?,
        })
    }
}

/// Computed `endpoint` list of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessWorkgroupEndpointList {
    inner: ComputedList,
}

impl RedshiftserverlessWorkgroupEndpointList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftserverlessWorkgroupEndpointOutputReference {
        RedshiftserverlessWorkgroupEndpointOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftserverlessWorkgroupEndpointList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessWorkgroupEndpointOutputReference {
    inner: ComputedObject,
}

impl RedshiftserverlessWorkgroupEndpointOutputReference {
    pub fn address(&self) -> Reference {
        self.inner.attribute("address")
    }

    pub fn port(&self) -> Reference {
        self.inner.attribute("port")
    }

    pub fn vpc_endpoint(&self) -> RedshiftserverlessWorkgroupEndpointVpcEndpointList {
        RedshiftserverlessWorkgroupEndpointVpcEndpointList::new(self.inner.attribute("vpc_endpoint"))
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Computed `endpoint.vpc_endpoint` list of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessWorkgroupEndpointVpcEndpointList {
    inner: ComputedList,
}

impl RedshiftserverlessWorkgroupEndpointVpcEndpointList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
        RedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftserverlessWorkgroupEndpointVpcEndpointList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
    inner: ComputedObject,
}

impl RedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
    pub fn network_interface(&self) -> RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList {
        RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList::new(self.inner.attribute("network_interface"))
    }

    pub fn vpc_endpoint_id(&self) -> Reference {
        self.inner.attribute("vpc_endpoint_id")
    }

    pub fn vpc_id(&self) -> Reference {
        self.inner.attribute("vpc_id")
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Computed `endpoint.vpc_endpoint.network_interface` list of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList {
    inner: ComputedList,
}

impl RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
        RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
    inner: ComputedObject,
}

impl RedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
    pub fn availability_zone(&self) -> Reference {
        self.inner.attribute("availability_zone")
    }

    pub fn network_interface_id(&self) -> Reference {
        self.inner.attribute("network_interface_id")
    }

    pub fn private_ip_address(&self) -> Reference {
        self.inner.attribute("private_ip_address")
    }

    pub fn subnet_id(&self) -> Reference {
        self.inner.attribute("subnet_id")
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}
