//! AWS Provider implementation
//!
//! Registers the generated Redshift bindings and describes the `aws`
//! provider block emitted alongside them.

use tfbind_core::config::ProviderConfig;
use tfbind_core::provider::{Provider, ResourceType};

use crate::resources::resource_types;
use crate::utils::normalize_region;

/// AWS Provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwsProvider {
    region: Option<String>,
    version: Option<String>,
}

impl AwsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region written into the provider block (e.g., "ap_northeast_1", "ap-northeast-1"
    /// or a `${var.region}` expression)
    pub fn with_region(mut self, region: &str) -> Self {
        let normalized = normalize_region(region);
        log::debug!("aws provider region: {} -> {}", region, normalized);
        self.region = Some(normalized);
        self
    }

    /// Version constraint written into `required_providers` (e.g., "~> 5.0")
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Provider for AwsProvider {
    fn name(&self) -> &'static str {
        "aws"
    }

    fn source(&self) -> &'static str {
        "hashicorp/aws"
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        resource_types()
    }

    fn provider_config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::new(self.name(), self.source());
        if let Some(version) = &self.version {
            config = config.with_version(version.clone());
        }
        if let Some(region) = &self.region {
            config = config.with_argument("region", region.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tfbind_core::resource::ElementKind;

    #[test]
    fn test_find_type() {
        let provider = AwsProvider::new();
        let cluster = provider
            .find_type(ElementKind::Resource, "aws_redshift_cluster")
            .unwrap();
        assert_eq!(cluster.schema().resource_type, "aws_redshift_cluster");

        let data = provider
            .find_type(ElementKind::DataSource, "aws_redshift_service_account")
            .unwrap();
        assert_eq!(data.kind(), ElementKind::DataSource);

        assert!(
            provider
                .find_type(ElementKind::DataSource, "aws_redshift_partner")
                .is_none()
        );
        assert!(
            provider
                .find_type(ElementKind::Resource, "aws_s3_bucket")
                .is_none()
        );
    }

    #[test]
    fn test_provider_config() {
        let config = AwsProvider::new().provider_config();
        assert_eq!(config.name, "aws");
        assert_eq!(config.source, "hashicorp/aws");
        assert!(config.arguments.is_empty());

        let config = AwsProvider::new()
            .with_region("us_west_2")
            .with_version("~> 5.0")
            .provider_config();
        assert_eq!(config.version.as_deref(), Some("~> 5.0"));
        assert_eq!(
            config.arguments.get("region"),
            Some(&Value::String("us-west-2".to_string()))
        );
    }

    #[test]
    fn test_boxed_provider_keeps_region() {
        let provider: Box<dyn Provider> =
            Box::new(AwsProvider::new().with_region("us-east-1").with_version("~> 5.0"));
        let config = provider.provider_config();
        assert_eq!(config.version.as_deref(), Some("~> 5.0"));
        assert_eq!(
            config.arguments.get("region"),
            Some(&Value::String("us-east-1".to_string()))
        );
    }

    #[test]
    fn test_region_expression_is_kept() {
        let provider = AwsProvider::new().with_region("${var.aws_region}");
        assert_eq!(provider.region(), Some("${var.aws_region}"));
        assert_eq!(
            provider.provider_config().arguments.get("region"),
            Some(&Value::String("${var.aws_region}".to_string()))
        );
    }
}
