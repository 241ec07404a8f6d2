//! data_aws_redshiftserverless_workgroup bindings
//!
//! Generated from Terraform data source schema: aws_redshiftserverless_workgroup
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

/// Terraform schema of `aws_redshiftserverless_workgroup`
pub fn schema() -> ResourceSchema {
    ResourceSchema::data_source("aws_redshiftserverless_workgroup")
        .attribute(
            AttributeSchema::new("arn", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("endpoint", AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("address".to_string(), AttributeType::String), ("port".to_string(), AttributeType::Int), ("vpc_endpoint".to_string(), AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("network_interface".to_string(), AttributeType::List(Box::new(AttributeType::Object(BTreeMap::from([("availability_zone".to_string(), AttributeType::String), ("network_interface_id".to_string(), AttributeType::String), ("private_ip_address".to_string(), AttributeType::String), ("subnet_id".to_string(), AttributeType::String)]))))), ("vpc_endpoint_id".to_string(), AttributeType::String), ("vpc_id".to_string(), AttributeType::String)])))))])))))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("enhanced_vpc_routing", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("id", AttributeType::String)
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("namespace_name", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("publicly_accessible", AttributeType::Bool)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("security_group_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("subnet_ids", AttributeType::Set(Box::new(AttributeType::String)))
                .computed(),
        )
        .attribute(
            AttributeSchema::new("workgroup_id", AttributeType::String)
                .computed(),
        )
        .attribute(
            AttributeSchema::new("workgroup_name", AttributeType::String)
                .required(),
        )
}

/// `aws_redshiftserverless_workgroup` data source
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsRedshiftserverlessWorkgroup {
    address: ResourceId,
    meta: MetaArguments,
    config: DataAwsRedshiftserverlessWorkgroupConfig,
}

impl DataAwsRedshiftserverlessWorkgroup {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_redshiftserverless_workgroup";

    pub fn new(name: impl Into<String>, config: DataAwsRedshiftserverlessWorkgroupConfig) -> Self {
        Self {
            address: ResourceId::data_source(Self::TF_RESOURCE_TYPE, name),
            meta: MetaArguments::default(),
            config,
        }
    }

    /// Build from the body of a Terraform JSON element
    pub fn from_json(name: impl Into<String>, body: Value) -> Result<Self, ConfigError> {
        let (meta, config) = from_terraform_json(Self::TF_RESOURCE_TYPE, body)?;
        Ok(Self {
            address: ResourceId::data_source(Self::TF_RESOURCE_TYPE, name),
            meta,
            config,
        })
    }

    pub fn config(&self) -> &DataAwsRedshiftserverlessWorkgroupConfig {
        &self.config
    }

    pub fn into_config(self) -> DataAwsRedshiftserverlessWorkgroupConfig {
        self.config
    }

    pub fn arn(&self) -> Reference {
        self.interpolation_for_attribute("arn")
    }

    pub fn endpoint(&self) -> DataAwsRedshiftserverlessWorkgroupEndpointList {
        DataAwsRedshiftserverlessWorkgroupEndpointList::new(self.interpolation_for_attribute("endpoint"))
    }

    pub fn enhanced_vpc_routing(&self) -> Reference {
        self.interpolation_for_attribute("enhanced_vpc_routing")
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

    pub fn namespace_name(&self) -> Reference {
        self.interpolation_for_attribute("namespace_name")
    }

    pub fn publicly_accessible(&self) -> Reference {
        self.interpolation_for_attribute("publicly_accessible")
    }

    pub fn security_group_ids(&self) -> Reference {
        self.interpolation_for_attribute("security_group_ids")
    }

    pub fn subnet_ids(&self) -> Reference {
        self.interpolation_for_attribute("subnet_ids")
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
}

impl TerraformElement for DataAwsRedshiftserverlessWorkgroup {
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
pub struct DataAwsRedshiftserverlessWorkgroupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub workgroup_name: String,
}

impl DataAwsRedshiftserverlessWorkgroupConfig {
    pub fn builder() -> DataAwsRedshiftserverlessWorkgroupConfigBuilder {
        DataAwsRedshiftserverlessWorkgroupConfigBuilder::default()
    }
}

/// Builder for [`DataAwsRedshiftserverlessWorkgroupConfig`]
#[derive(Debug, Clone, Default)]
pub struct DataAwsRedshiftserverlessWorkgroupConfigBuilder {
    id: Option<String>,
    workgroup_name: Option<String>,
}

impl DataAwsRedshiftserverlessWorkgroupConfigBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn workgroup_name(mut self, value: impl Into<String>) -> Self {
        self.workgroup_name = Some(value.into());
        self
    }

    pub fn build(self) -> Result<DataAwsRedshiftserverlessWorkgroupConfig, ConfigError> {
        Ok(DataAwsRedshiftserverlessWorkgroupConfig {
            id: self.id,
            workgroup_name: self
                .workgroup_name
                .ok_or_else(|| ConfigError::missing("aws_redshiftserverless_workgroup", "workgroup_name"))?,
        })
    }
}

/// Computed `endpoint` list of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftserverlessWorkgroupEndpointList {
    inner: ComputedList,
}

impl DataAwsRedshiftserverlessWorkgroupEndpointList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> DataAwsRedshiftserverlessWorkgroupEndpointOutputReference {
        DataAwsRedshiftserverlessWorkgroupEndpointOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`DataAwsRedshiftserverlessWorkgroupEndpointList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftserverlessWorkgroupEndpointOutputReference {
    inner: ComputedObject,
}

impl DataAwsRedshiftserverlessWorkgroupEndpointOutputReference {
    pub fn address(&self) -> Reference {
        self.inner.attribute("address")
    }

    pub fn port(&self) -> Reference {
        self.inner.attribute("port")
    }

    pub fn vpc_endpoint(&self) -> DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointList {
        DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointList::new(self.inner.attribute("vpc_endpoint"))
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Computed `endpoint.vpc_endpoint` list of `aws_redshiftserverless_workgroup`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointList {
    inner: ComputedList,
}

impl DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
        DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
    inner: ComputedObject,
}

impl DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointOutputReference {
    pub fn network_interface(&self) -> DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList {
        DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList::new(self.inner.attribute("network_interface"))
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
pub struct DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList {
    inner: ComputedList,
}

impl DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList {
    pub fn new(base: Reference) -> Self {
        Self {
            inner: ComputedList::new(base),
        }
    }

    pub fn get(&self, index: usize) -> DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
        DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
            inner: self.inner.get(index),
        }
    }

    pub fn reference(&self) -> &Reference {
        self.inner.reference()
    }
}

/// Element of [`DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
    inner: ComputedObject,
}

impl DataAwsRedshiftserverlessWorkgroupEndpointVpcEndpointNetworkInterfaceOutputReference {
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
