//! Synthesis configuration

use serde_json::{Map, Value};

/// Synthesis options
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Emit the `"//"` metadata block (default: true)
    pub include_metadata: bool,

    /// Validate every element against its schema before emitting (default: true)
    pub validate: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            include_metadata: true,
            validate: true,
        }
    }
}

/// Provider block emitted alongside the elements
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Local provider name (e.g., "aws")
    pub name: String,
    /// Registry source (e.g., "hashicorp/aws")
    pub source: String,
    /// Version constraint (e.g., "~> 4.0")
    pub version: Option<String>,
    pub alias: Option<String>,
    /// Provider arguments (e.g., region)
    pub arguments: Map<String, Value>,
}

impl ProviderConfig {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            version: None,
            alias: None,
            arguments: Map::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Reference used in an element's `provider` meta-argument (e.g., "aws.west")
    pub fn reference(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{}.{}", self.name, alias),
            None => self.name.clone(),
        }
    }

    /// Body of the provider block
    pub(crate) fn body(&self) -> Map<String, Value> {
        let mut body = self.arguments.clone();
        if let Some(alias) = &self.alias {
            body.insert("alias".to_string(), Value::String(alias.clone()));
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SynthConfig::default();
        assert!(config.include_metadata);
        assert!(config.validate);
    }

    #[test]
    fn provider_reference_uses_alias() {
        let provider = ProviderConfig::new("aws", "hashicorp/aws");
        assert_eq!(provider.reference(), "aws");
        let west = provider.with_alias("west").with_argument("region", "us-west-2");
        assert_eq!(west.reference(), "aws.west");
        assert_eq!(west.body().get("alias"), Some(&Value::String("west".to_string())));
        assert_eq!(
            west.body().get("region"),
            Some(&Value::String("us-west-2".to_string()))
        );
    }
}
