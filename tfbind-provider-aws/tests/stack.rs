use serde_json::json;
use tfbind_core::config::SynthConfig;
use tfbind_core::element::TerraformElement;
use tfbind_core::provider::Provider;
use tfbind_core::resource::{ElementKind, ResourceId};
use tfbind_core::stack::{Stack, StackError};
use tfbind_provider_aws::*;

fn analytics_stack() -> Stack {
    let mut stack = Stack::new("analytics").with_config(SynthConfig {
        include_metadata: false,
        ..Default::default()
    });
    stack.add_provider(AwsProvider::new().with_region("us-east-1").provider_config());

    let cluster = RedshiftCluster::new(
        "main",
        RedshiftClusterConfig::builder()
            .cluster_identifier("analytics")
            .node_type("ra3.xlplus")
            .number_of_nodes(2)
            .build()
            .unwrap(),
    );
    let mut limit = RedshiftUsageLimit::new(
        "spectrum",
        RedshiftUsageLimitConfig::builder()
            .amount(60)
            .cluster_identifier(cluster.interpolation_for_attribute("id"))
            .feature_type("spectrum")
            .limit_type("data-scanned")
            .breach_action("emit-metric")
            .build()
            .unwrap(),
    );
    limit.depends_on(&cluster);

    stack.add(cluster).unwrap();
    stack.add(limit).unwrap();
    stack
}

#[test]
fn test_synth_document() {
    let document = analytics_stack().synth().unwrap();
    assert_eq!(
        document,
        json!({
            "terraform": {
                "required_providers": {
                    "aws": { "source": "hashicorp/aws" }
                }
            },
            "provider": {
                "aws": [{ "region": "us-east-1" }]
            },
            "resource": {
                "aws_redshift_cluster": {
                    "main": {
                        "cluster_identifier": "analytics",
                        "node_type": "ra3.xlplus",
                        "number_of_nodes": 2,
                    }
                },
                "aws_redshift_usage_limit": {
                    "spectrum": {
                        "amount": 60,
                        "breach_action": "emit-metric",
                        "cluster_identifier": "${aws_redshift_cluster.main.id}",
                        "depends_on": ["aws_redshift_cluster.main"],
                        "feature_type": "spectrum",
                        "limit_type": "data-scanned",
                    }
                }
            }
        })
    );
}

#[test]
fn test_synth_includes_data_sources() {
    let mut stack = analytics_stack();
    let account = DataAwsRedshiftServiceAccount::new(
        "main",
        DataAwsRedshiftServiceAccountConfig::builder().build().unwrap(),
    );
    let arn = account.arn();
    stack.add(account).unwrap();

    let document = stack.synth().unwrap();
    assert_eq!(
        document["data"]["aws_redshift_service_account"]["main"],
        json!({})
    );
    assert_eq!(
        arn.to_string(),
        "${data.aws_redshift_service_account.main.arn}"
    );
}

#[test]
fn test_synth_reports_invalid_elements() {
    let mut stack = analytics_stack();
    let mut limit = RedshiftUsageLimit::new(
        "concurrency",
        RedshiftUsageLimitConfig::builder()
            .amount(10)
            .cluster_identifier("analytics")
            .feature_type("concurrency-scaling")
            .limit_type("time")
            .period("hourly")
            .build()
            .unwrap(),
    );
    limit.meta_mut().depends_on.push("aws_redshift_cluster.missing".to_string());
    stack.add(limit).unwrap();

    let err = stack.synth().unwrap_err();
    let StackError::Invalid(errors) = err else {
        panic!("expected every error to be reported");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().contains("Invalid Period 'hourly'"));
    assert!(matches!(errors[1], StackError::UnknownDependency { .. }));
}

#[test]
fn test_duplicate_address_is_rejected() {
    let mut stack = analytics_stack();
    let again = RedshiftCluster::new(
        "main",
        RedshiftClusterConfig::builder()
            .cluster_identifier("other")
            .node_type("dc2.large")
            .build()
            .unwrap(),
    );
    let err = stack.add(again).unwrap_err();
    assert!(matches!(err, StackError::DuplicateAddress(ref a) if a == "aws_redshift_cluster.main"));
}

#[test]
fn test_load_document_round_trip() {
    let document = analytics_stack().synth().unwrap();

    let provider = AwsProvider::new();
    let mut loaded = Stack::new("analytics").with_config(SynthConfig {
        include_metadata: false,
        ..Default::default()
    });
    loaded.load_document(&provider, &document).unwrap();

    assert_eq!(loaded.len(), 2);
    let limit = loaded
        .get(&ResourceId::new("aws_redshift_usage_limit", "spectrum"))
        .unwrap();
    assert_eq!(limit.kind(), ElementKind::Resource);
    assert_eq!(limit.meta().depends_on, vec!["aws_redshift_cluster.main"]);
    assert_eq!(loaded.synth().unwrap(), document);
}

#[test]
fn test_load_document_collects_errors() {
    let document = json!({
        "resource": {
            "aws_redshift_cluster": {
                "main": { "cluster_identifier": "analytics" }
            },
            "aws_redshift_subnet_group": {
                "private": { "name": "private", "subnet_ids": ["subnet-1"] }
            },
            "aws_s3_bucket": {
                "logs": { "bucket": "logs" }
            }
        },
        "data": {
            "aws_redshift_cluster": {
                "existing": { "cluster_identifier": "legacy" }
            }
        }
    });

    let mut stack = Stack::new("broken");
    let err = stack.load_document(&AwsProvider::new(), &document).unwrap_err();
    let StackError::Invalid(errors) = err else {
        panic!("expected every error to be reported");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().contains("node_type"));
    assert!(matches!(
        &errors[1],
        StackError::UnknownResourceType { resource_type, .. } if resource_type == "aws_s3_bucket"
    ));

    // Valid elements are still loaded
    assert_eq!(stack.len(), 2);
    assert!(
        stack
            .get(&ResourceId::data_source("aws_redshift_cluster", "existing"))
            .is_some()
    );
}
