//! redshiftserverless_endpoint_access bindings
//!
//! Generated from Terraform resource schema: aws_redshiftserverless_endpoint_access
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tfbind_core::block::{ComputedList, ComputedObject};
use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};
use tfbind_core::error::ConfigError;
use tfbind_core::resource::{MetaArguments, Reference, ResourceId};
use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema};
use tfbind_core::value::Token;

/// Terraform schema of `aws_redshiftserverless_endpoint_access`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshiftserverless_endpoint_access")
        .attribute(
            AttributeSchema::new("address", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("endpoint_name", AttributeType::String)
                .required(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("port", AttributeType::Int)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("subnet_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .required(),
        )
        .attribute(
            AttributeSchema::new("vpc_endpoint", AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("network_interface".to_string(), AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("availability_zone".to_string(), AttributeType::String), ("network_interface_id".to_string(), AttributeType::String), ("private_ip_address".to_string(), AttributeType::String), ("subnet_id".to_string(), AttributeType::String)]))))), ("vpc_endpoint_id".to_string(), AttributeType::String), ("vpc_id".to_string(), AttributeType::String)])))))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("vpc_security_group_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("workgroup_name", AttributeType::String)
                .required(),
        )
}

/// `aws_redshiftserverless_endpoint_access` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftserverlessEndpointAccess {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftserverlessEndpointAccessConfig,
}

impl RedshiftserverlessEndpointAccess {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_endpoint_access";

    pub fn new(name: impl Into<String>, config: RedshiftserverlessEndpointAccessConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftserverlessEndpointAccessConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftserverlessEndpointAccessConfig {
        self.config
    }

    pub fn address_attribute(&self) -> Reference {
        self.interpolation_for_attribute("address")
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn endpoint_name(&self) -> &str {
        &self.config.endpoint_name
    }

    pub fn set_endpoint_name(&mut self, value: impl Into<String>) {
        self.config.endpoint_name = value.into();
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

    pub fn port(&self) -> Reference {
        self.interpolation_for_attribute("port")
    }

    pub fn subnet_ids(&self) -> &Token<Vec<String>> {
        &self.config.subnet_ids
    }

    pub fn set_subnet_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.subnet_ids = value.into();
    }

    pub fn vpc_endpoint(&self) -> RedshiftserverlessEndpointAccessVpcEndpointList {
        RedshiftserverlessEndpointAccessVpcEndpointList::new(self.interpolation_for_attribute("vpc_endpoint"))
    }

    pub fn vpc_security_group_ids(&self) -> Option<&Token<Vec<String>>> {
        self.config.vpc_security_group_ids.as_ref()
    }

    pub fn set_vpc_security_group_ids(&mut self, value: impl Into<Token<Vec<String>>>) {
        self.config.vpc_security_group_ids = Some(value.into());
    }

    pub fn reset_vpc_security_group_ids(&mut self) {
        self.config.vpc_security_group_ids = None;
    }

    pub fn workgroup_name(&self) -> &str {
        &self.config.workgroup_name
    }

    pub fn set_workgroup_name(&mut self, value: impl Into<String>) {
        self.config.workgroup_name = value.into();
    }
}

impl TerraformElement for RedshiftserverlessEndpointAccess {
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

/// Configuration of `aws_redshiftserverless_endpoint_access`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftserverlessEndpointAccessConfig {
    pub endpoint_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub subnet_ids: Token<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Token<Vec<String>>>,
    pub workgroup_name: String,
}

impl RedshiftserverlessEndpointAccessConfig {
    pub fn builder() -> RedshiftserverlessEndpointAccessConfigBuilder {
        RedshiftserverlessEndpointAccessConfigBuilder::default()
    }
}

/// Builder for [`RedshiftserverlessEndpointAccessConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftserverlessEndpointAccessConfigBuilder {
    endpoint_name: Option<String>,
    id: Option<String>,
    subnet_ids: Option<Token<Vec<String>>>,
    vpc_security_group_ids: Option<Token<Vec<String>>>,
    workgroup_name: Option<String>,
}

impl RedshiftserverlessEndpointAccessConfigBuilder {
    pub fn endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn subnet_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.subnet_ids = Some(value.into());
        self
    }

    pub fn vpc_security_group_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.vpc_security_group_ids = Some(value.into());
        self
    }

    pub fn workgroup_name(mut self, value: impl Into<String>) -> Self {
        self.workgroup_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftserverlessEndpointAccessConfig, ConfigError> {
        Ok(RedshiftserverlessEndpointAccessConfig {
            endpoint_name: self
                .endpoint_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_endpoint_access", "endpoint_name"))?,
            id: self.id,
            subnet_ids: self
                .subnet_ids
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_endpoint_access", "subnet_ids"))?,
            vpc_security_group_ids: self.vpc_security_group_ids,
            workgroup_name: self
                .workgroup_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_endpoint_access", "workgroup_name"))?,
        })
    }
}

/// Computed `vpc_endpoint` list of `aws_redshiftserverless_endpoint_access`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessEndpointAccessVpcEndpointList {
    inner: ComputedList,
}

impl RedshiftserverlessEndpointAccessVpcEndpointList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftserverlessEndpointAccessVpcEndpointOutputReference {
        RedshiftserverlessEndpointAccessVpcEndpointOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftserverlessEndpointAccessVpcEndpointList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessEndpointAccessVpcEndpointOutputReference {
    inner: ComputedObject,
}

impl RedshiftserverlessEndpointAccessVpcEndpointOutputReference {
    pub fn network_interface(&self) -> RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceList {
        RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceList::new(self.inner.attribute("network_interface"))
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

/// Computed `vpc_endpoint.network_interface` list of `aws_redshiftserverless_endpoint_access`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceList {
    inner: ComputedList,
}

impl RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
        RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
    inner: ComputedObject,
}

impl RedshiftserverlessEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
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
