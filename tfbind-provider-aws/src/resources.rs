//! Resource type registry
//!
//! One `ResourceType` per generated binding, so that Terraform JSON
//! documents can be loaded back into typed elements.

use serde_json::Value;
use tfbind_core::element::TerraformElement;
use tfbind_core::error::ConfigError;
use tfbind_core::provider::ResourceType;
use tfbind_core::resource::ElementKind;
use tfbind_core::schema::ResourceSchema;

use crate::generated::*;

// =============================================================================
// Resource Type Definitions
// =============================================================================

macro_rules! define_resource_type {
    ($name:ident, $module:ident, $binding:ident, $kind:expr) => {
        pub struct $name;
        impl ResourceType for $name {
            fn name(&self) -> &'static str {
                $binding::TF_RESOURCE_TYPE
            }
            fn kind(&self) -> ElementKind {
                $kind
            }
            fn schema(&self) -> ResourceSchema {
                $module::schema()
            }
            fn from_json(
                &self,
                name: &str,
                body: Value,
            ) -> Result<Box<dyn TerraformElement>, ConfigError> {
                Ok(Box::new($binding::from_json(name, body)?))
            }
        }
    };
}

macro_rules! define_resource {
    ($name:ident, $module:ident, $binding:ident) => {
        define_resource_type!($name, $module, $binding, ElementKind::Resource);
    };
}

macro_rules! define_data_source {
    ($name:ident, $module:ident, $binding:ident) => {
        define_resource_type!($name, $module, $binding, ElementKind::DataSource);
    };
}

// Redshift
define_resource!(AuthenticationProfileType, redshift_authentication_profile, RedshiftAuthenticationProfile);
define_resource!(ClusterType, redshift_cluster, RedshiftCluster);
define_resource!(ClusterIamRolesType, redshift_cluster_iam_roles, RedshiftClusterIamRoles);
define_resource!(ClusterSnapshotType, redshift_cluster_snapshot, RedshiftClusterSnapshot);
define_resource!(EndpointAccessType, redshift_endpoint_access, RedshiftEndpointAccess);
define_resource!(EndpointAuthorizationType, redshift_endpoint_authorization, RedshiftEndpointAuthorization);
define_resource!(EventSubscriptionType, redshift_event_subscription, RedshiftEventSubscription);
define_resource!(HsmClientCertificateType, redshift_hsm_client_certificate, RedshiftHsmClientCertificate);
define_resource!(HsmConfigurationType, redshift_hsm_configuration, RedshiftHsmConfiguration);
define_resource!(ParameterGroupType, redshift_parameter_group, RedshiftParameterGroup);
define_resource!(PartnerType, redshift_partner, RedshiftPartner);
define_resource!(ScheduledActionType, redshift_scheduled_action, RedshiftScheduledAction);
define_resource!(SecurityGroupType, redshift_security_group, RedshiftSecurityGroup);
define_resource!(SnapshotCopyGrantType, redshift_snapshot_copy_grant, RedshiftSnapshotCopyGrant);
define_resource!(SnapshotScheduleType, redshift_snapshot_schedule, RedshiftSnapshotSchedule);
define_resource!(
    SnapshotScheduleAssociationType,
    redshift_snapshot_schedule_association,
    RedshiftSnapshotScheduleAssociation
);
define_resource!(SubnetGroupType, redshift_subnet_group, RedshiftSubnetGroup);
define_resource!(UsageLimitType, redshift_usage_limit, RedshiftUsageLimit);

// Redshift Data API
define_resource!(DataStatementType, redshiftdata_statement, RedshiftdataStatement);

// Redshift Serverless
define_resource!(
    ServerlessEndpointAccessType,
    redshiftserverless_endpoint_access,
    RedshiftserverlessEndpointAccess
);
define_resource!(ServerlessNamespaceType, redshiftserverless_namespace, RedshiftserverlessNamespace);
define_resource!(
    ServerlessResourcePolicyType,
    redshiftserverless_resource_policy,
    RedshiftserverlessResourcePolicy
);
define_resource!(ServerlessSnapshotType, redshiftserverless_snapshot, RedshiftserverlessSnapshot);
define_resource!(ServerlessUsageLimitType, redshiftserverless_usage_limit, RedshiftserverlessUsageLimit);
define_resource!(ServerlessWorkgroupType, redshiftserverless_workgroup, RedshiftserverlessWorkgroup);

// Data sources
define_data_source!(ClusterDataType, data_aws_redshift_cluster, DataAwsRedshiftCluster);
define_data_source!(
    ClusterCredentialsDataType,
    data_aws_redshift_cluster_credentials,
    DataAwsRedshiftClusterCredentials
);
define_data_source!(
    OrderableClusterDataType,
    data_aws_redshift_orderable_cluster,
    DataAwsRedshiftOrderableCluster
);
define_data_source!(
    ServiceAccountDataType,
    data_aws_redshift_service_account,
    DataAwsRedshiftServiceAccount
);
define_data_source!(SubnetGroupDataType, data_aws_redshift_subnet_group, DataAwsRedshiftSubnetGroup);
define_data_source!(
    ServerlessCredentialsDataType,
    data_aws_redshiftserverless_credentials,
    DataAwsRedshiftserverlessCredentials
);
define_data_source!(
    ServerlessNamespaceDataType,
    data_aws_redshiftserverless_namespace,
    DataAwsRedshiftserverlessNamespace
);
define_data_source!(
    ServerlessWorkgroupDataType,
    data_aws_redshiftserverless_workgroup,
    DataAwsRedshiftserverlessWorkgroup
);

/// Returns all resource and data source types supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(AuthenticationProfileType),
        Box::new(ClusterType),
        Box::new(ClusterIamRolesType),
        Box::new(ClusterSnapshotType),
        Box::new(EndpointAccessType),
        Box::new(EndpointAuthorizationType),
        Box::new(EventSubscriptionType),
        Box::new(HsmClientCertificateType),
        Box::new(HsmConfigurationType),
        Box::new(ParameterGroupType),
        Box::new(PartnerType),
        Box::new(ScheduledActionType),
        Box::new(SecurityGroupType),
        Box::new(SnapshotCopyGrantType),
        Box::new(SnapshotScheduleType),
        Box::new(SnapshotScheduleAssociationType),
        Box::new(SubnetGroupType),
        Box::new(UsageLimitType),
        Box::new(DataStatementType),
        Box::new(ServerlessEndpointAccessType),
        Box::new(ServerlessNamespaceType),
        Box::new(ServerlessResourcePolicyType),
        Box::new(ServerlessSnapshotType),
        Box::new(ServerlessUsageLimitType),
        Box::new(ServerlessWorkgroupType),
        Box::new(ClusterDataType),
        Box::new(ClusterCredentialsDataType),
        Box::new(OrderableClusterDataType),
        Box::new(ServiceAccountDataType),
        Box::new(SubnetGroupDataType),
        Box::new(ServerlessCredentialsDataType),
        Box::new(ServerlessNamespaceDataType),
        Box::new(ServerlessWorkgroupDataType),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};
    use std::collections::{BTreeMap, BTreeSet};
    use tfbind_core::schema::{AttributeSchema, AttributeType, BlockSchema};

    /// A value accepted by `attr_type`: a literal when one can be derived,
    /// otherwise an expression
    fn sample_value(attr_type: &AttributeType) -> Value {
        let literal = match attr_type {
            AttributeType::String => json!("example"),
            AttributeType::Int => json!(1),
            AttributeType::Bool => json!(true),
            AttributeType::Enum(values) => json!(values[0]),
            AttributeType::Custom { base, .. } => sample_value(base),
            AttributeType::List(inner) | AttributeType::Set(inner) => json!([sample_value(inner)]),
            AttributeType::Map(inner) => json!({ "key": sample_value(inner) }),
            AttributeType::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, t)| (name.clone(), sample_value(t)))
                    .collect(),
            ),
        };
        if attr_type.validate(&literal).is_ok() {
            literal
        } else {
            json!("${var.example}")
        }
    }

    /// Body holding only the required attributes and blocks
    fn required_body(
        attributes: &BTreeMap<String, AttributeSchema>,
        blocks: &BTreeMap<String, BlockSchema>,
    ) -> Map<String, Value> {
        let mut body = Map::new();
        for attr in attributes.values().filter(|a| a.required) {
            body.insert(attr.name.clone(), sample_value(&attr.attr_type));
        }
        for block in blocks.values().filter(|b| b.min_items >= 1) {
            let item = Value::Object(required_body(&block.attributes, &block.blocks));
            let value = if block.max_items == Some(1) {
                item
            } else {
                json!([item])
            };
            body.insert(block.name.clone(), value);
        }
        body
    }

    /// Names whose absence makes a body incomplete
    fn required_names(schema: &ResourceSchema) -> Vec<String> {
        schema
            .required_attributes()
            .map(|a| a.name.clone())
            .chain(
                schema
                    .blocks
                    .values()
                    .filter(|b| b.min_items >= 1 && b.max_items == Some(1))
                    .map(|b| b.name.clone()),
            )
            .collect()
    }

    #[test]
    fn test_every_type_rejects_missing_required() {
        for t in resource_types() {
            let schema = t.schema();
            let required = required_names(&schema);
            let result = t.from_json("example", json!({}));
            if required.is_empty() {
                assert!(result.is_ok(), "{} has no required fields", t.name());
                continue;
            }
            let Err(err) = result else {
                panic!("{} accepted an empty body", t.name());
            };
            let message = err.to_string();
            assert!(
                required.iter().any(|name| message.contains(name.as_str())),
                "{}: '{}' names none of {:?}",
                t.name(),
                message,
                required
            );
        }
    }

    #[test]
    fn test_every_type_round_trips_required_body() {
        for t in resource_types() {
            let schema = t.schema();
            let body = required_body(&schema.attributes, &schema.blocks);
            let element = t
                .from_json("example", Value::Object(body.clone()))
                .unwrap_or_else(|e| panic!("{}: {}", t.name(), e));
            assert_eq!(element.address().name, "example");
            assert_eq!(element.kind(), t.kind());

            let attributes = element.synthesize_attributes().unwrap();
            assert_eq!(attributes, body, "{}", t.name());
            if let Err(e) = element.validate() {
                panic!("{}: {}", t.name(), e);
            }
        }
    }

    #[test]
    fn test_every_type_is_registered_once() {
        let types = resource_types();
        assert_eq!(types.len(), 33);

        let keys: BTreeSet<(ElementKind, &str)> = types.iter().map(|t| (t.kind(), t.name())).collect();
        assert_eq!(keys.len(), 33);

        let data_sources = types
            .iter()
            .filter(|t| t.kind() == ElementKind::DataSource)
            .count();
        assert_eq!(data_sources, 8);
    }

    #[test]
    fn test_schema_matches_registered_name() {
        for t in resource_types() {
            let schema = t.schema();
            assert_eq!(schema.resource_type, t.name());
            assert_eq!(schema.kind, t.kind(), "{}", t.name());
        }
    }

    #[test]
    fn test_from_json_builds_typed_element() {
        let body = serde_json::json!({
            "name": "analytics",
            "subnet_ids": ["subnet-1", "subnet-2"],
            "depends_on": ["aws_redshift_cluster.main"],
        });
        let element = SubnetGroupType.from_json("analytics", body).unwrap();
        assert_eq!(element.terraform_address(), "aws_redshift_subnet_group.analytics");
        assert_eq!(element.meta().depends_on, vec!["aws_redshift_cluster.main"]);

        let data = ClusterDataType
            .from_json("existing", serde_json::json!({ "cluster_identifier": "main" }))
            .unwrap();
        assert_eq!(data.terraform_address(), "data.aws_redshift_cluster.existing");
    }

    #[test]
    fn test_from_json_rejects_unknown_attribute() {
        let body = serde_json::json!({ "name": "analytics", "subnet_ids": [], "colour": "blue" });
        let err = SubnetGroupType.from_json("analytics", body).unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize { .. }));
    }
}
