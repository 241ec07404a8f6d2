//! Generated Terraform bindings
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

pub mod data_aws_redshift_cluster;
pub mod data_aws_redshift_cluster_credentials;
pub mod data_aws_redshift_orderable_cluster;
pub mod data_aws_redshift_service_account;
pub mod data_aws_redshift_subnet_group;
pub mod data_aws_redshiftserverless_credentials;
pub mod data_aws_redshiftserverless_namespace;
pub mod data_aws_redshiftserverless_workgroup;
pub mod redshift_authentication_profile;
pub mod redshift_cluster;
pub mod redshift_cluster_iam_roles;
pub mod redshift_cluster_snapshot;
pub mod redshift_endpoint_access;
pub mod redshift_endpoint_authorization;
pub mod redshift_event_subscription;
pub mod redshift_hsm_client_certificate;
pub mod redshift_hsm_configuration;
pub mod redshift_parameter_group;
pub mod redshift_partner;
pub mod redshift_scheduled_action;
pub mod redshift_security_group;
pub mod redshift_snapshot_copy_grant;
pub mod redshift_snapshot_schedule;
pub mod redshift_snapshot_schedule_association;
pub mod redshift_subnet_group;
pub mod redshift_usage_limit;
pub mod redshiftdata_statement;
pub mod redshiftserverless_endpoint_access;
pub mod redshiftserverless_namespace;
pub mod redshiftserverless_resource_policy;
pub mod redshiftserverless_snapshot;
pub mod redshiftserverless_usage_limit;
pub mod redshiftserverless_workgroup;

pub use data_aws_redshift_cluster::{DataAwsRedshiftCluster, DataAwsRedshiftClusterConfig};
pub use data_aws_redshift_cluster_credentials::{DataAwsRedshiftClusterCredentials, DataAwsRedshiftClusterCredentialsConfig};
pub use data_aws_redshift_orderable_cluster::{DataAwsRedshiftOrderableCluster, DataAwsRedshiftOrderableClusterConfig};
pub use data_aws_redshift_service_account::{DataAwsRedshiftServiceAccount, DataAwsRedshiftServiceAccountConfig};
pub use data_aws_redshift_subnet_group::{DataAwsRedshiftSubnetGroup, DataAwsRedshiftSubnetGroupConfig};
pub use data_aws_redshiftserverless_credentials::{DataAwsRedshiftserverlessCredentials, DataAwsRedshiftserverlessCredentialsConfig};
pub use data_aws_redshiftserverless_namespace::{DataAwsRedshiftserverlessNamespace, DataAwsRedshiftserverlessNamespaceConfig};
pub use data_aws_redshiftserverless_workgroup::{DataAwsRedshiftserverlessWorkgroup, DataAwsRedshiftserverlessWorkgroupConfig};
pub use redshift_authentication_profile::{RedshiftAuthenticationProfile, RedshiftAuthenticationProfileConfig};
pub use redshift_cluster::{RedshiftCluster, RedshiftClusterConfig};
pub use redshift_cluster_iam_roles::{RedshiftClusterIamRoles, RedshiftClusterIamRolesConfig};
pub use redshift_cluster_snapshot::{RedshiftClusterSnapshot, RedshiftClusterSnapshotConfig};
pub use redshift_endpoint_access::{RedshiftEndpointAccess, RedshiftEndpointAccessConfig};
pub use redshift_endpoint_authorization::{RedshiftEndpointAuthorization, RedshiftEndpointAuthorizationConfig};
pub use redshift_event_subscription::{RedshiftEventSubscription, RedshiftEventSubscriptionConfig};
pub use redshift_hsm_client_certificate::{RedshiftHsmClientCertificate, RedshiftHsmClientCertificateConfig};
pub use redshift_hsm_configuration::{RedshiftHsmConfiguration, RedshiftHsmConfigurationConfig};
pub use redshift_parameter_group::{RedshiftParameterGroup, RedshiftParameterGroupConfig};
pub use redshift_partner::{RedshiftPartner, RedshiftPartnerConfig};
pub use redshift_scheduled_action::{RedshiftScheduledAction, RedshiftScheduledActionConfig};
pub use redshift_security_group::{RedshiftSecurityGroup, RedshiftSecurityGroupConfig};
pub use redshift_snapshot_copy_grant::{RedshiftSnapshotCopyGrant, RedshiftSnapshotCopyGrantConfig};
pub use redshift_snapshot_schedule::{RedshiftSnapshotSchedule, RedshiftSnapshotScheduleConfig};
pub use redshift_snapshot_schedule_association::{RedshiftSnapshotScheduleAssociation, RedshiftSnapshotScheduleAssociationConfig};
pub use redshift_subnet_group::{RedshiftSubnetGroup, RedshiftSubnetGroupConfig};
pub use redshift_usage_limit::{RedshiftUsageLimit, RedshiftUsageLimitConfig};
pub use redshiftdata_statement::{RedshiftdataStatement, RedshiftdataStatementConfig};
pub use redshiftserverless_endpoint_access::{RedshiftserverlessEndpointAccess, RedshiftserverlessEndpointAccessConfig};
pub use redshiftserverless_namespace::{RedshiftserverlessNamespace, RedshiftserverlessNamespaceConfig};
pub use redshiftserverless_resource_policy::{RedshiftserverlessResourcePolicy, RedshiftserverlessResourcePolicyConfig};
pub use redshiftserverless_snapshot::{RedshiftserverlessSnapshot, RedshiftserverlessSnapshotConfig};
pub use redshiftserverless_usage_limit::{RedshiftserverlessUsageLimit, RedshiftserverlessUsageLimitConfig};
pub use redshiftserverless_workgroup::{RedshiftserverlessWorkgroup, RedshiftserverlessWorkgroupConfig};
