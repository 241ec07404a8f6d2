//! Stack - Hosts elements and synthesizes them into a Terraform JSON document
//!
//! Elements are added with their final configuration; synthesis validates
//! them (unless disabled) and emits `resource` and `data` sections keyed by
//! type and local name, with meta-arguments merged into each body.
//! Sections without bindings (`variable`, `output`, `locals`, `module`, ...)
//! are carried through unchanged.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::config::{ProviderConfig, SynthConfig};
use crate::element::{TerraformElement, json_kind};
use crate::error::ConfigError;
use crate::provider::Provider;
use crate::resource::{ElementKind, ResourceId};

/// Error type for Stack operations
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    #[error("Duplicate element address '{0}'")]
    DuplicateAddress(String),

    #[error("{address}: depends_on references unknown element '{target}'")]
    UnknownDependency { address: String, target: String },

    #[error("Unknown {kind} type '{resource_type}'")]
    UnknownResourceType {
        kind: ElementKind,
        resource_type: String,
    },

    #[error("{address}: provider '{provider}' has no provider block")]
    UnknownProvider { address: String, provider: String },

    #[error("Section '{0}' is generated from the stack's elements and providers")]
    ReservedSection(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error(transparent)]
    Element(#[from] ConfigError),

    #[error("{}", join_stack_errors(.0))]
    Invalid(Vec<StackError>),

    #[error("failed to render stack: {0}")]
    Render(#[from] serde_json::Error),
}

impl StackError {
    /// Flatten collected errors into a single error
    fn collect(mut errors: Vec<StackError>) -> Result<(), StackError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(StackError::Invalid(errors)),
        }
    }
}

fn join_stack_errors(errors: &[StackError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Top-level sections built from the stack itself
const GENERATED_SECTIONS: &[&str] = &["//", "data", "provider", "resource"];

/// Collection of elements synthesized together
#[derive(Debug, Default)]
pub struct Stack {
    name: String,
    config: SynthConfig,
    providers: Vec<ProviderConfig>,
    /// Top-level sections emitted as-is, keyed by section name
    sections: Map<String, Value>,
    elements: Vec<Box<dyn TerraformElement>>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: SynthConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Add a provider block; a block with the same name and alias is replaced
    pub fn add_provider(&mut self, provider: ProviderConfig) {
        let reference = provider.reference();
        match self.providers.iter_mut().find(|p| p.reference() == reference) {
            Some(existing) => {
                log::debug!("stack {}: replaced provider {}", self.name, reference);
                *existing = provider;
            }
            None => self.providers.push(provider),
        }
    }

    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    /// Add a top-level section emitted as-is (e.g., `variable`, `output`, `locals`, `module`).
    /// Entries of an object section already present are merged. `terraform` settings
    /// are merged with the `required_providers` of the stack's providers.
    pub fn add_section(&mut self, name: impl Into<String>, value: Value) -> Result<(), StackError> {
        let name = name.into();
        if GENERATED_SECTIONS.contains(&name.as_str()) {
            return Err(StackError::ReservedSection(name));
        }
        if name == "terraform" && !value.is_object() {
            return Err(StackError::InvalidDocument(
                "section 'terraform' must be an object".to_string(),
            ));
        }
        match self.sections.get_mut(&name) {
            Some(Value::Object(existing)) if value.is_object() => {
                if let Value::Object(entries) = value {
                    existing.extend(entries);
                }
            }
            _ => {
                self.sections.insert(name, value);
            }
        }
        Ok(())
    }

    pub fn sections(&self) -> &Map<String, Value> {
        &self.sections
    }

    /// Add an element; its address must be unique within the stack
    pub fn add<E: TerraformElement + 'static>(&mut self, element: E) -> Result<(), StackError> {
        self.add_boxed(Box::new(element))
    }

    pub fn add_boxed(&mut self, element: Box<dyn TerraformElement>) -> Result<(), StackError> {
        let address = element.terraform_address();
        if self.get(element.address()).is_some() {
            return Err(StackError::DuplicateAddress(address));
        }
        log::debug!("stack {}: added {}", self.name, address);
        self.elements.push(element);
        Ok(())
    }

    pub fn get(&self, address: &ResourceId) -> Option<&dyn TerraformElement> {
        self.elements
            .iter()
            .find(|e| e.address() == address)
            .map(|e| e.as_ref())
    }

    pub fn elements(&self) -> impl Iterator<Item = &dyn TerraformElement> {
        self.elements.iter().map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build elements from a Terraform JSON document (`resource` / `data` sections)
    /// using the types registered by `provider`. Provider blocks and the other
    /// top-level sections are kept. Every problem is reported.
    pub fn load_document(
        &mut self,
        provider: &dyn Provider,
        document: &Value,
    ) -> Result<(), StackError> {
        let Value::Object(root) = document else {
            return Err(StackError::InvalidDocument(format!(
                "expected a JSON object, got {}",
                json_kind(document)
            )));
        };

        let mut errors = Vec::new();
        for (key, value) in root {
            match key.as_str() {
                "//" | "resource" | "data" => {}
                "provider" => errors.extend(self.load_providers(provider, root, value)),
                _ => {
                    if let Err(e) = self.add_section(key.clone(), value.clone()) {
                        errors.push(e);
                    }
                }
            }
        }

        for kind in [ElementKind::Resource, ElementKind::DataSource] {
            let Some(section) = root.get(kind.section()) else {
                continue;
            };
            let Value::Object(types) = section else {
                errors.push(StackError::InvalidDocument(format!(
                    "section '{}' must be an object",
                    kind.section()
                )));
                continue;
            };

            for (type_name, instances) in types {
                let Some(resource_type) = provider.find_type(kind, type_name) else {
                    errors.push(StackError::UnknownResourceType {
                        kind,
                        resource_type: type_name.clone(),
                    });
                    continue;
                };
                let Value::Object(instances) = instances else {
                    errors.push(StackError::InvalidDocument(format!(
                        "'{}' must map names to element bodies",
                        type_name
                    )));
                    continue;
                };

                for (name, body) in instances {
                    log::trace!("loading {} {}.{}", kind, type_name, name);
                    let result = resource_type
                        .from_json(name, body.clone())
                        .map_err(StackError::from)
                        .and_then(|element| self.add_boxed(element));
                    if let Err(e) = result {
                        errors.push(e);
                    }
                }
            }
        }

        StackError::collect(errors)
    }

    /// Turn every block of the `provider` section into a `ProviderConfig`.
    /// Sources and versions come from `terraform.required_providers`.
    fn load_providers(
        &mut self,
        provider: &dyn Provider,
        root: &Map<String, Value>,
        section: &Value,
    ) -> Vec<StackError> {
        let Value::Object(blocks) = section else {
            return vec![StackError::InvalidDocument(
                "section 'provider' must be an object".to_string(),
            )];
        };
        let requirements = root
            .get("terraform")
            .and_then(|t| t.get("required_providers"));

        let mut errors = Vec::new();
        for (name, entries) in blocks {
            let requirement = requirements.and_then(|r| r.get(name));
            let source = match requirement.and_then(|r| r.get("source")).and_then(Value::as_str) {
                Some(source) => source.to_string(),
                None if name == provider.name() => provider.source().to_string(),
                None => format!("hashicorp/{}", name),
            };
            let version = requirement
                .and_then(|r| r.get("version"))
                .and_then(Value::as_str);

            let entries = match entries {
                Value::Array(items) => items.as_slice(),
                other => std::slice::from_ref(other),
            };
            for entry in entries {
                let Value::Object(body) = entry else {
                    errors.push(StackError::InvalidDocument(format!(
                        "provider '{}' blocks must be objects",
                        name
                    )));
                    continue;
                };
                let mut config = ProviderConfig::new(name.clone(), source.clone());
                if let Some(version) = version {
                    config = config.with_version(version);
                }
                for (key, value) in body {
                    config = match (key.as_str(), value) {
                        ("alias", Value::String(alias)) => config.with_alias(alias.clone()),
                        _ => config.with_argument(key.clone(), value.clone()),
                    };
                }
                log::trace!("loading provider {}", config.reference());
                self.add_provider(config);
            }
        }
        errors
    }

    /// True if `target` names an element of the stack or a declared module
    fn is_known_dependency(&self, target: &str) -> bool {
        if let Some(module) = target.strip_prefix("module.") {
            return self
                .sections
                .get("module")
                .is_some_and(|modules| modules.get(module).is_some());
        }
        self.elements.iter().any(|e| e.terraform_address() == target)
    }

    /// True if `reference` (e.g., `aws.west`) has a provider block.
    /// Unaliased references fall back to the provider's default configuration.
    fn is_known_provider(&self, reference: &str) -> bool {
        !reference.contains('.') || self.providers.iter().any(|p| p.reference() == reference)
    }

    /// Validate every element, every explicit dependency and every provider reference
    pub fn validate(&self) -> Result<(), StackError> {
        let mut errors = Vec::new();

        for element in &self.elements {
            if let Err(e) = element.validate() {
                errors.push(StackError::Element(e));
            }

            for target in &element.meta().depends_on {
                if !self.is_known_dependency(target) {
                    errors.push(StackError::UnknownDependency {
                        address: element.terraform_address(),
                        target: target.clone(),
                    });
                }
            }

            if let Some(reference) = &element.meta().provider
                && !self.is_known_provider(reference)
            {
                errors.push(StackError::UnknownProvider {
                    address: element.terraform_address(),
                    provider: reference.clone(),
                });
            }
        }

        StackError::collect(errors)
    }

    /// Synthesize the Terraform JSON document
    pub fn synth(&self) -> Result<Value, StackError> {
        log::debug!(
            "synthesizing stack {} ({} elements)",
            self.name,
            self.elements.len()
        );
        if self.config.validate {
            self.validate()?;
        }

        let mut root = Map::new();

        if self.config.include_metadata {
            root.insert(
                "//".to_string(),
                json!({
                    "metadata": {
                        "stackName": self.name,
                        "version": env!("CARGO_PKG_VERSION"),
                    }
                }),
            );
        }

        let mut terraform = match self.sections.get("terraform") {
            Some(Value::Object(settings)) => settings.clone(),
            _ => Map::new(),
        };
        if !self.providers.is_empty() {
            let mut required = match terraform.remove("required_providers") {
                Some(Value::Object(required)) => required,
                _ => Map::new(),
            };
            let mut blocks: BTreeMap<String, Vec<Value>> = BTreeMap::new();
            for provider in &self.providers {
                let mut requirement = Map::new();
                requirement.insert("source".to_string(), json!(provider.source));
                if let Some(version) = &provider.version {
                    requirement.insert("version".to_string(), json!(version));
                }
                required.insert(provider.name.clone(), Value::Object(requirement));
                blocks
                    .entry(provider.name.clone())
                    .or_default()
                    .push(Value::Object(provider.body()));
            }
            terraform.insert("required_providers".to_string(), Value::Object(required));
            root.insert("provider".to_string(), serde_json::to_value(blocks)?);
        }
        if !terraform.is_empty() {
            root.insert("terraform".to_string(), Value::Object(terraform));
        }
        for (name, value) in &self.sections {
            if name != "terraform" {
                root.insert(name.clone(), value.clone());
            }
        }

        let mut sections: BTreeMap<&'static str, BTreeMap<String, Map<String, Value>>> =
            BTreeMap::new();
        for element in &self.elements {
            let address = element.address();
            let mut body = element.synthesize_attributes()?;
            if let Value::Object(meta) = serde_json::to_value(element.meta())? {
                body.extend(meta);
            }
            sections
                .entry(address.kind.section())
                .or_default()
                .entry(address.resource_type.clone())
                .or_default()
                .insert(address.name.clone(), Value::Object(body));
        }
        for (section, types) in sections {
            root.insert(section.to_string(), serde_json::to_value(types)?);
        }

        Ok(Value::Object(root))
    }

    /// Synthesize and pretty-print the Terraform JSON document
    pub fn synth_to_string(&self) -> Result<String, StackError> {
        let document = self.synth()?;
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::tests::{Association, MockProvider};
    use crate::resource::Lifecycle;
    use crate::value::Token;

    #[test]
    fn add_rejects_duplicate_address() {
        let mut stack = Stack::new("analytics");
        stack.add(Association::new("nightly", "main")).unwrap();
        let err = stack.add(Association::new("nightly", "other")).unwrap_err();
        assert!(matches!(err, StackError::DuplicateAddress(ref a)
            if a == "aws_redshift_snapshot_schedule_association.nightly"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn synth_emits_resource_section() {
        let mut stack = Stack::new("analytics");
        let mut association = Association::new("nightly", "main");
        association.meta.lifecycle = Some(Lifecycle {
            prevent_destroy: Some(true),
            ..Default::default()
        });
        stack.add(association).unwrap();
        stack.add_provider(
            ProviderConfig::new("aws", "hashicorp/aws")
                .with_version("~> 4.0")
                .with_argument("region", "us-east-1"),
        );

        let document = stack.synth().unwrap();
        assert_eq!(
            document["resource"]["aws_redshift_snapshot_schedule_association"]["nightly"],
            json!({
                "cluster_identifier": "main",
                "schedule_identifier": "nightly",
                "lifecycle": { "prevent_destroy": true },
            })
        );
        assert_eq!(
            document["terraform"]["required_providers"]["aws"],
            json!({ "source": "hashicorp/aws", "version": "~> 4.0" })
        );
        assert_eq!(document["provider"]["aws"], json!([{ "region": "us-east-1" }]));
        assert_eq!(document["//"]["metadata"]["stackName"], json!("analytics"));
        assert!(document.get("data").is_none());
    }

    #[test]
    fn synth_without_metadata() {
        let stack = Stack::new("empty").with_config(SynthConfig {
            include_metadata: false,
            ..Default::default()
        });
        assert_eq!(stack.synth().unwrap(), json!({}));
        assert!(stack.is_empty());
    }

    #[test]
    fn validate_reports_unknown_dependency() {
        let mut stack = Stack::new("analytics");
        let mut association = Association::new("nightly", "main");
        association
            .meta
            .depends_on
            .push("aws_redshift_cluster.missing".to_string());
        stack.add(association).unwrap();

        let err = stack.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "aws_redshift_snapshot_schedule_association.nightly: depends_on references unknown element 'aws_redshift_cluster.missing'"
        );
        assert!(stack.synth().is_err());
    }

    #[test]
    fn validation_can_be_disabled() {
        let mut stack = Stack::new("analytics").with_config(SynthConfig {
            validate: false,
            ..Default::default()
        });
        let mut association = Association::new("nightly", "main");
        association
            .meta
            .depends_on
            .push("aws_redshift_cluster.missing".to_string());
        stack.add(association).unwrap();
        assert!(stack.synth().is_ok());
    }

    #[test]
    fn load_document_builds_elements() {
        let document = json!({
            "resource": {
                "aws_redshift_snapshot_schedule_association": {
                    "a": { "cluster_identifier": "one", "schedule_identifier": "s" },
                    "b": { "cluster_identifier": "two", "schedule_identifier": "s", "count": 1 },
                }
            }
        });
        let mut stack = Stack::new("loaded");
        stack.load_document(&MockProvider, &document).unwrap();
        assert_eq!(stack.len(), 2);

        let b = stack
            .get(&ResourceId::new("aws_redshift_snapshot_schedule_association", "b"))
            .unwrap();
        assert_eq!(b.meta().count, Some(Token::Literal(1)));
    }

    #[test]
    fn load_document_collects_errors() {
        let document = json!({
            "resource": {
                "aws_redshift_cluster": { "main": {} },
                "aws_redshift_snapshot_schedule_association": {
                    "a": { "cluster_identifier": "one" },
                }
            },
            "data": []
        });
        let mut stack = Stack::new("loaded");
        let err = stack.load_document(&MockProvider, &document).unwrap_err();
        match err {
            StackError::Invalid(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    StackError::UnknownResourceType { resource_type, .. }
                        if resource_type == "aws_redshift_cluster"
                )));
                assert!(errors.iter().any(|e| matches!(e, StackError::Element(_))));
                assert!(
                    errors
                        .iter()
                        .any(|e| matches!(e, StackError::InvalidDocument(_)))
                );
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn load_document_keeps_sections_and_providers() {
        let document = json!({
            "terraform": {
                "required_version": ">= 1.5",
                "required_providers": {
                    "aws": { "source": "hashicorp/aws", "version": "~> 5.0" },
                    "random": { "source": "hashicorp/random" }
                }
            },
            "provider": {
                "aws": [
                    { "region": "${var.aws_region}" },
                    { "alias": "west", "region": "us-west-2" }
                ],
                "mock": { "endpoint": "local" }
            },
            "variable": { "aws_region": { "type": "string" } },
            "output": { "schedule": { "value": "${aws_redshift_snapshot_schedule_association.a.id}" } },
            "resource": {
                "aws_redshift_snapshot_schedule_association": {
                    "a": { "cluster_identifier": "one", "schedule_identifier": "s", "provider": "aws.west" }
                }
            }
        });
        let mut stack = Stack::new("loaded").with_config(SynthConfig {
            include_metadata: false,
            ..Default::default()
        });
        stack.load_document(&MockProvider, &document).unwrap();

        let references: Vec<String> = stack.providers().iter().map(|p| p.reference()).collect();
        assert_eq!(references, vec!["aws", "aws.west", "mock"]);
        assert_eq!(stack.providers()[2].source, "example/mock");
        assert_eq!(stack.providers()[1].version.as_deref(), Some("~> 5.0"));
        assert_eq!(stack.sections().len(), 3);

        let synthesized = stack.synth().unwrap();
        assert_eq!(synthesized["variable"], document["variable"]);
        assert_eq!(synthesized["output"], document["output"]);
        assert_eq!(synthesized["provider"]["aws"], document["provider"]["aws"]);
        assert_eq!(synthesized["provider"]["mock"], json!([{ "endpoint": "local" }]));
        assert_eq!(synthesized["terraform"]["required_version"], ">= 1.5");
        assert_eq!(
            synthesized["terraform"]["required_providers"],
            json!({
                "aws": { "source": "hashicorp/aws", "version": "~> 5.0" },
                "mock": { "source": "example/mock" },
                "random": { "source": "hashicorp/random" }
            })
        );
        assert_eq!(
            synthesized["resource"]["aws_redshift_snapshot_schedule_association"]["a"]["provider"],
            "aws.west"
        );
    }

    #[test]
    fn add_section_rejects_generated_sections() {
        let mut stack = Stack::new("analytics");
        let err = stack.add_section("resource", json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Section 'resource' is generated from the stack's elements and providers"
        );
        assert!(matches!(
            stack.add_section("terraform", json!([])),
            Err(StackError::InvalidDocument(_))
        ));

        stack.add_section("locals", json!({ "team": "data" })).unwrap();
        stack.add_section("locals", json!({ "env": "prod" })).unwrap();
        assert_eq!(stack.sections()["locals"], json!({ "env": "prod", "team": "data" }));
    }

    #[test]
    fn add_provider_replaces_same_reference() {
        let mut stack = Stack::new("analytics");
        let aws = ProviderConfig::new("aws", "hashicorp/aws");
        stack.add_provider(aws.clone().with_argument("region", "us-east-1"));
        stack.add_provider(aws.clone().with_alias("west"));
        stack.add_provider(aws.with_argument("region", "eu-west-1"));

        assert_eq!(stack.providers().len(), 2);
        assert_eq!(
            stack.providers()[0].arguments.get("region"),
            Some(&json!("eu-west-1"))
        );
    }

    #[test]
    fn validate_reports_unknown_provider() {
        let mut stack = Stack::new("analytics");
        let mut association = Association::new("nightly", "main");
        association.meta.provider = Some("aws.west".to_string());
        stack.add(association).unwrap();

        let err = stack.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "aws_redshift_snapshot_schedule_association.nightly: provider 'aws.west' has no provider block"
        );

        stack.add_provider(ProviderConfig::new("aws", "hashicorp/aws").with_alias("west"));
        assert!(stack.validate().is_ok());
    }

    #[test]
    fn module_dependencies_are_known() {
        let mut stack = Stack::new("analytics");
        let mut association = Association::new("nightly", "main");
        association.meta.depends_on.push("module.network".to_string());
        stack.add(association).unwrap();
        assert!(stack.validate().is_err());

        stack
            .add_section("module", json!({ "network": { "source": "./network" } }))
            .unwrap();
        assert!(stack.validate().is_ok());
    }
}
