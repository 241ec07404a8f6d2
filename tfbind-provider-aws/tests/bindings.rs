use std::collections::BTreeMap;

use serde_json::json;
use tfbind_core::element::TerraformElement;
use tfbind_core::error::ConfigError;
use tfbind_core::schema::TypeError;
use tfbind_core::value::Token;
use tfbind_provider_aws::redshift_cluster::{
    RedshiftClusterLogging, RedshiftClusterSnapshotCopy, RedshiftClusterTimeouts,
};
use tfbind_provider_aws::redshift_parameter_group::RedshiftParameterGroupParameter;
use tfbind_provider_aws::redshift_scheduled_action::{
    RedshiftScheduledActionTargetAction, RedshiftScheduledActionTargetActionResizeCluster,
};
use tfbind_provider_aws::redshift_security_group::RedshiftSecurityGroupIngress;
use tfbind_provider_aws::*;

fn cluster_config() -> RedshiftClusterConfig {
    RedshiftClusterConfig::builder()
        .cluster_identifier("analytics")
        .node_type("ra3.xlplus")
        .build()
        .unwrap()
}

fn missing(err: ConfigError) -> (String, String) {
    match err {
        ConfigError::MissingRequired {
            resource_type,
            attribute,
        } => (resource_type, attribute),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_required_attribute_is_rejected() {
    let err = RedshiftClusterConfig::builder()
        .cluster_identifier("analytics")
        .build()
        .unwrap_err();
    assert_eq!(
        missing(err),
        ("aws_redshift_cluster".to_string(), "node_type".to_string())
    );

    // The first omitted field in declaration order is reported
    let err = RedshiftUsageLimitConfig::builder()
        .limit_type("time")
        .build()
        .unwrap_err();
    assert_eq!(
        missing(err),
        ("aws_redshift_usage_limit".to_string(), "amount".to_string())
    );

    let err = RedshiftClusterLogging::builder().bucket_name("logs").build().unwrap_err();
    assert_eq!(
        missing(err),
        ("aws_redshift_cluster.logging".to_string(), "enable".to_string())
    );
}

#[test]
fn test_required_attributes_round_trip() {
    let mut cluster = RedshiftCluster::new("analytics", cluster_config());
    assert_eq!(cluster.cluster_identifier(), "analytics");
    assert_eq!(cluster.node_type(), "ra3.xlplus");

    cluster.set_node_type("dc2.large");
    assert_eq!(cluster.node_type(), "dc2.large");
    assert_eq!(cluster.config().node_type, "dc2.large");
}

#[test]
fn test_optional_attributes_set_and_reset() {
    let mut cluster = RedshiftCluster::new("analytics", cluster_config());
    assert_eq!(cluster.number_of_nodes(), None);
    assert_eq!(cluster.iam_roles(), None);

    cluster.set_number_of_nodes(4);
    cluster.set_encrypted(true);
    cluster.set_iam_roles(vec!["arn:aws:iam::123456789012:role/loader".to_string()]);
    cluster.set_tags(BTreeMap::from([("team".to_string(), "data".to_string())]));
    assert_eq!(cluster.number_of_nodes(), Some(&Token::Literal(4)));
    assert_eq!(cluster.encrypted(), Some(&Token::Literal(true)));
    assert_eq!(
        cluster.iam_roles().and_then(Token::literal),
        Some(&vec!["arn:aws:iam::123456789012:role/loader".to_string()])
    );
    assert_eq!(
        cluster.tags().and_then(Token::literal).map(|t| t.len()),
        Some(1)
    );

    cluster.reset_number_of_nodes();
    cluster.reset_encrypted();
    cluster.reset_iam_roles();
    cluster.reset_tags();
    assert_eq!(cluster.number_of_nodes(), None);
    assert_eq!(cluster.encrypted(), None);
    assert_eq!(cluster.iam_roles(), None);
    assert_eq!(cluster.tags(), None);
}

#[test]
fn test_single_blocks() {
    let mut cluster = RedshiftCluster::new("analytics", cluster_config());
    assert_eq!(cluster.logging(), None);

    let logging = RedshiftClusterLogging::builder()
        .enable(true)
        .log_destination_type("cloudwatch")
        .log_exports(vec!["useractivitylog".to_string()])
        .build()
        .unwrap();
    assert_eq!(logging.bucket_name, None);
    cluster.put_logging(logging.clone());
    assert_eq!(cluster.logging(), Some(&logging));

    let copy = RedshiftClusterSnapshotCopy::builder()
        .destination_region("us-west-2")
        .build()
        .unwrap();
    assert_eq!(copy.retention_period, None);
    cluster.put_snapshot_copy(copy);

    // Blocks without required fields have a default
    cluster.put_timeouts(RedshiftClusterTimeouts {
        create: Some("75m".to_string()),
        ..Default::default()
    });

    let attributes = cluster.synthesize_attributes().unwrap();
    assert_eq!(
        attributes["logging"],
        json!({
            "enable": true,
            "log_destination_type": "cloudwatch",
            "log_exports": ["useractivitylog"],
        })
    );
    assert_eq!(attributes["snapshot_copy"], json!({ "destination_region": "us-west-2" }));
    assert_eq!(attributes["timeouts"], json!({ "create": "75m" }));

    cluster.reset_logging();
    assert_eq!(cluster.logging(), None);
    assert!(!cluster.synthesize_attributes().unwrap().contains_key("logging"));
}

#[test]
fn test_repeated_blocks() {
    let parameter = |name: &str, value: &str| {
        RedshiftParameterGroupParameter::builder()
            .name(name)
            .value(value)
            .build()
            .unwrap()
    };
    let config = RedshiftParameterGroupConfig::builder()
        .name("analytics")
        .family("redshift-1.0")
        .parameter(vec![
            parameter("require_ssl", "true"),
            parameter("enable_user_activity_logging", "true"),
        ])
        .build()
        .unwrap();
    let mut group = RedshiftParameterGroup::new("analytics", config);
    assert_eq!(group.parameter().len(), 2);
    assert_eq!(group.parameter()[0].name, "require_ssl");

    group.reset_parameter();
    assert!(group.parameter().is_empty());
    assert!(!group.synthesize_attributes().unwrap().contains_key("parameter"));
}

#[test]
fn test_required_repeated_block() {
    let err = RedshiftSecurityGroupConfig::builder()
        .name("legacy")
        .build()
        .unwrap_err();
    assert_eq!(
        missing(err),
        ("aws_redshift_security_group".to_string(), "ingress".to_string())
    );

    let ingress = RedshiftSecurityGroupIngress::builder()
        .cidr("10.0.0.0/16")
        .build()
        .unwrap();
    let config = RedshiftSecurityGroupConfig::builder()
        .name("legacy")
        .ingress(vec![ingress])
        .build()
        .unwrap();
    assert_eq!(config.ingress.len(), 1);
}

#[test]
fn test_nested_required_block() {
    let resize = RedshiftScheduledActionTargetActionResizeCluster::builder()
        .cluster_identifier("analytics")
        .number_of_nodes(8)
        .build()
        .unwrap();
    let target = RedshiftScheduledActionTargetAction::builder()
        .resize_cluster(resize)
        .build()
        .unwrap();

    let err = RedshiftScheduledActionConfig::builder()
        .name("scale-up")
        .schedule("cron(00 08 ? * MON *)")
        .iam_role("arn:aws:iam::123456789012:role/scheduler")
        .build()
        .unwrap_err();
    assert_eq!(
        missing(err),
        (
            "aws_redshift_scheduled_action".to_string(),
            "target_action".to_string()
        )
    );

    let action = RedshiftScheduledAction::new(
        "scale_up",
        RedshiftScheduledActionConfig::builder()
            .name("scale-up")
            .schedule("cron(00 08 ? * MON *)")
            .iam_role("arn:aws:iam::123456789012:role/scheduler")
            .target_action(target)
            .build()
            .unwrap(),
    );
    assert_eq!(
        action
            .target_action()
            .resize_cluster
            .as_ref()
            .and_then(|r| r.number_of_nodes.clone()),
        Some(Token::Literal(8))
    );
    assert!(action.validate().is_ok());
}

#[test]
fn test_config_equality() {
    let a = cluster_config();
    let mut b = cluster_config();
    assert_eq!(a, b);
    b.port = Some(Token::Literal(5439));
    assert_ne!(a, b);

    let one = RedshiftCluster::new("analytics", a.clone());
    let other = RedshiftCluster::new("reporting", a);
    assert_ne!(one, other);
}

#[test]
fn test_synthesized_attributes_validate_against_schema() {
    let mut cluster = RedshiftCluster::new("analytics", cluster_config());
    cluster.set_cluster_type("multi-node");
    cluster.set_number_of_nodes(2);
    cluster.set_master_username("admin");
    cluster.set_master_password("Secret123");
    assert!(cluster.validate().is_ok());

    cluster.set_cluster_type("three-node");
    let err = cluster.validate().unwrap_err();
    let ConfigError::Invalid { address, errors } = err else {
        panic!("expected invalid config");
    };
    assert_eq!(address, "aws_redshift_cluster.analytics");
    assert_eq!(
        errors,
        vec![TypeError::Attribute {
            name: "cluster_type".to_string(),
            inner: Box::new(TypeError::ValidationFailed {
                message: "Invalid ClusterType 'three-node', expected one of: single-node, multi-node"
                    .to_string(),
            }),
        }]
    );
}

#[test]
fn test_cidr_is_checked() {
    let ingress = RedshiftSecurityGroupIngress::builder()
        .cidr("10.0.0.0/33")
        .build()
        .unwrap();
    let group = RedshiftSecurityGroup::new(
        "legacy",
        RedshiftSecurityGroupConfig::builder()
            .name("legacy")
            .ingress(vec![ingress])
            .build()
            .unwrap(),
    );
    let err = group.validate().unwrap_err();
    assert!(err.to_string().contains("Invalid prefix length '33'"));
}

#[test]
fn test_computed_attributes_are_references() {
    let cluster = RedshiftCluster::new("analytics", cluster_config());
    assert_eq!(cluster.arn().to_string(), "${aws_redshift_cluster.analytics.arn}");
    assert_eq!(
        cluster.cluster_nodes().get(0).private_ip_address().to_string(),
        "${aws_redshift_cluster.analytics.cluster_nodes[0].private_ip_address}"
    );
    assert_eq!(
        cluster.cluster_nodes().reference().to_string(),
        "${aws_redshift_cluster.analytics.cluster_nodes}"
    );

    let existing = DataAwsRedshiftCluster::new(
        "existing",
        DataAwsRedshiftClusterConfig::builder()
            .cluster_identifier("analytics")
            .build()
            .unwrap(),
    );
    assert_eq!(
        existing.endpoint().to_string(),
        "${data.aws_redshift_cluster.existing.endpoint}"
    );
}

#[test]
fn test_nested_computed_lists() {
    let workgroup = RedshiftserverlessWorkgroup::new(
        "etl",
        RedshiftserverlessWorkgroupConfig::builder()
            .namespace_name("etl")
            .workgroup_name("etl")
            .build()
            .unwrap(),
    );
    let interface = workgroup
        .endpoint()
        .get(0)
        .vpc_endpoint()
        .get(1)
        .network_interface()
        .get(2);
    assert_eq!(
        interface.private_ip_address().to_string(),
        "${aws_redshiftserverless_workgroup.etl.endpoint[0].vpc_endpoint[1].network_interface[2].private_ip_address}"
    );
}

#[test]
fn test_reference_as_attribute_value() {
    let cluster = RedshiftCluster::new("analytics", cluster_config());
    let limit = RedshiftUsageLimit::new(
        "spectrum",
        RedshiftUsageLimitConfig::builder()
            .amount(60)
            .cluster_identifier(cluster.interpolation_for_attribute("id"))
            .feature_type("spectrum")
            .limit_type("data-scanned")
            .build()
            .unwrap(),
    );
    assert_eq!(limit.cluster_identifier(), "${aws_redshift_cluster.analytics.id}");
    assert!(limit.validate().is_ok());
}

#[test]
fn test_keyword_and_colliding_attribute_names() {
    let endpoint = RedshiftEndpointAccess::new(
        "reader",
        RedshiftEndpointAccessConfig::builder()
            .cluster_identifier("analytics")
            .endpoint_name("reader")
            .subnet_group_name("private")
            .build()
            .unwrap(),
    );
    assert_eq!(
        endpoint.address_attribute().to_string(),
        "${aws_redshift_endpoint_access.reader.address}"
    );
    assert_eq!(
        endpoint.address().terraform_address(),
        "aws_redshift_endpoint_access.reader"
    );
}

#[test]
fn test_from_json_accepts_block_encodings() {
    let body = json!({
        "cluster_identifier": "analytics",
        "node_type": "ra3.xlplus",
        "logging": [{ "enable": false }],
        "timeouts": { "delete": "40m" },
        "lifecycle": { "prevent_destroy": true },
    });
    let cluster = RedshiftCluster::from_json("analytics", body).unwrap();
    assert_eq!(
        cluster.logging().map(|l| &l.enable),
        Some(&Token::Literal(false))
    );
    assert_eq!(
        cluster.timeouts().and_then(|t| t.delete.as_deref()),
        Some("40m")
    );
    assert_eq!(
        cluster.meta().lifecycle.as_ref().and_then(|l| l.prevent_destroy),
        Some(true)
    );

    let err = RedshiftCluster::from_json("analytics", json!({ "node_type": "dc2.large" }))
        .unwrap_err();
    assert!(err.to_string().contains("cluster_identifier"));
}

#[test]
fn test_non_string_attributes_accept_expressions() {
    let body = json!({
        "cluster_identifier": "analytics",
        "node_type": "ra3.xlplus",
        "encrypted": "${var.encrypted}",
        "number_of_nodes": "${var.node_count}",
        "iam_roles": "${aws_iam_role.loader[*].arn}",
        "logging": { "enable": "${var.audit_logging}" },
    });
    let cluster = RedshiftCluster::from_json("analytics", body.clone()).unwrap();
    assert_eq!(
        cluster.encrypted().and_then(Token::expression),
        Some("${var.encrypted}")
    );
    assert!(cluster.iam_roles().is_some_and(Token::is_expression));
    assert!(cluster.validate().is_ok());

    let attributes = cluster.synthesize_attributes().unwrap();
    assert_eq!(attributes["number_of_nodes"], json!("${var.node_count}"));
    assert_eq!(attributes["logging"], json!({ "enable": "${var.audit_logging}" }));

    // Only `${...}` strings stand in for non-string values
    let err = RedshiftCluster::from_json(
        "analytics",
        json!({ "cluster_identifier": "a", "node_type": "b", "encrypted": "yes" }),
    )
    .unwrap_err();
    assert!(err.to_string().contains("expected a boolean"));
}

#[test]
fn test_reference_into_non_string_attribute() {
    let existing = DataAwsRedshiftCluster::new(
        "existing",
        DataAwsRedshiftClusterConfig::builder()
            .cluster_identifier("legacy")
            .build()
            .unwrap(),
    );
    let config = RedshiftClusterConfig::builder()
        .cluster_identifier("analytics")
        .node_type("ra3.xlplus")
        .number_of_nodes(existing.number_of_nodes())
        .port(5439)
        .build()
        .unwrap();
    let cluster = RedshiftCluster::new("analytics", config);
    assert_eq!(
        cluster.number_of_nodes().and_then(Token::expression),
        Some("${data.aws_redshift_cluster.existing.number_of_nodes}")
    );
    assert_eq!(cluster.port(), Some(&Token::Literal(5439)));
    assert!(cluster.validate().is_ok());
}
