//! redshift_endpoint_access bindings
//!
//! Generated from Terraform resource schema: aws_redshift_endpoint_access
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

/// Terraform schema of `aws_redshift_endpoint_access`
pub fn schema() -> ResourceSchema {
    ResourceSchema::new("aws_redshift_endpoint_access")
        .attribute(
            AttributeSchema::new("address", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("cluster_identifier", AttributeType::String)
                .required(),
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
            AttributeSchema::new("resource_owner", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("subnet_group_name", AttributeType::String)
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
}

/// `aws_redshift_endpoint_access` resource
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftEndpointAccess {
    address: ResourceId,
    meta: MetaArguments,
    config: RedshiftEndpointAccessConfig,
}

impl RedshiftEndpointAccess {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshift_endpoint_access";

    pub fn new(name: impl Into<String>, config: RedshiftEndpointAccessConfig) -> Self {
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

    pub fn config(&self) -> &RedshiftEndpointAccessConfig {
        &self.config
    }

    pub fn into_config(self) -> RedshiftEndpointAccessConfig {
        self.config
    }

    pub fn address_attribute(&self) -> Reference {
        self.interpolation_for_attribute("address")
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.config.cluster_identifier
    }

    pub fn set_cluster_identifier(&mut self, value: impl Into<String>) {
        self.config.cluster_identifier = value.into();
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

    pub fn resource_owner(&self) -> Option<&str> {
        self.config.resource_owner.as_deref()
    }

    pub fn set_resource_owner(&mut self, value: impl Into<String>) {
        self.config.resource_owner = Some(value.into());
    }

    pub fn reset_resource_owner(&mut self) {
        self.config.resource_owner = None;
    }

    pub fn subnet_group_name(&self) -> &str {
        &self.config.subnet_group_name
    }

    pub fn set_subnet_group_name(&mut self, value: impl Into<String>) {
        self.config.subnet_group_name = value.into();
    }

    pub fn vpc_endpoint(&self) -> RedshiftEndpointAccessVpcEndpointList {
        RedshiftEndpointAccessVpcEndpointList::new(self.interpolation_for_attribute("vpc_endpoint"))
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
}

impl TerraformElement for RedshiftEndpointAccess {
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

/// Configuration of `aws_redshift_endpoint_access`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedshiftEndpointAccessConfig {
    pub cluster_identifier: String,
    pub endpoint_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_owner: Option<String>,
    pub subnet_group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Token<Vec<String>>>,
}

impl RedshiftEndpointAccessConfig {
    pub fn builder() -> RedshiftEndpointAccessConfigBuilder {
        RedshiftEndpointAccessConfigBuilder::default()
    }
}

/// Builder for [`RedshiftEndpointAccessConfig`]
#[derive(Debug, Clone, Default)]
pub struct RedshiftEndpointAccessConfigBuilder {
    cluster_identifier: Option<String>,
    endpoint_name: Option<String>,
    id: Option<String>,
    resource_owner: Option<String>,
    subnet_group_name: Option<String>,
    vpc_security_group_ids: Option<Token<Vec<String>>>,
}

impl RedshiftEndpointAccessConfigBuilder {
    pub fn cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.cluster_identifier = Some(value.into());
        self
    }

    pub fn endpoint_name(mut self, value: impl Into<String>) -> Self {
        self.endpoint_name = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn resource_owner(mut self, value: impl Into<String>) -> Self {
        self.resource_owner = Some(value.into());
        self
    }

    pub fn subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.subnet_group_name = Some(value.into());
        self
    }

    pub fn vpc_security_group_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {
        self.vpc_security_group_ids = Some(value.into());
        self
    }

    pub fn build(self) -> Result<RedshiftEndpointAccessConfig, ConfigError> {
        Ok(RedshiftEndpointAccessConfig {
            cluster_identifier: self
                .cluster_identifier
                .ok_or_else(|| ConfigError::missing("aws_redshift_endpoint_access", "cluster_identifier"))?,
            endpoint_name: self
                .endpoint_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_endpoint_access", "endpoint_name"))?,
            id: self.id,
            resource_owner: self.resource_owner,
            subnet_group_name: self
                .subnet_group_name
                .ok_or_else(|| ConfigError::missing("aws_redshift_endpoint_access", "subnet_group_name"))?,
            vpc_security_group_ids: self.vpc_security_group_ids,
        })
    }
}

/// Computed `vpc_endpoint` list of `aws_redshift_endpoint_access`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftEndpointAccessVpcEndpointList {
    inner: ComputedList,
}

impl RedshiftEndpointAccessVpcEndpointList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftEndpointAccessVpcEndpointOutputReference {
        RedshiftEndpointAccessVpcEndpointOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftEndpointAccessVpcEndpointList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftEndpointAccessVpcEndpointOutputReference {
    inner: ComputedObject,
}

impl RedshiftEndpointAccessVpcEndpointOutputReference {
    pub fn network_interface(&self) -> RedshiftEndpointAccessVpcEndpointNetworkInterfaceList {
        RedshiftEndpointAccessVpcEndpointNetworkInterfaceList::new(self.inner.attribute("network_interface"))
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

/// Computed `vpc_endpoint.network_interface` list of `aws_redshift_endpoint_access`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftEndpointAccessVpcEndpointNetworkInterfaceList {
    inner: ComputedList,
}

impl RedshiftEndpointAccessVpcEndpointNetworkInterfaceList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> RedshiftEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
        RedshiftEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`RedshiftEndpointAccessVpcEndpointNetworkInterfaceList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedshiftEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
    inner: ComputedObject,
}

impl RedshiftEndpointAccessVpcEndpointNetworkInterfaceOutputReference {
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
