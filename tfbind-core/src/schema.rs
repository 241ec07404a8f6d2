//! Schema - Attribute and block schemas of Terraform resource types
//!
//! Generated bindings describe their Terraform schema with these types so
//! that synthesized attributes can be checked before they are emitted.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::resource::{ElementKind, is_expression};

/// Synthesized attributes of a single element
pub type Attributes = Map<String, Value>;

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    /// String
    String,
    /// Integer (Terraform `number`)
    Int,
    /// Boolean
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// Custom type (with validation function)
    Custom {
        name: String,
        base: Box<AttributeType>,
        validate: fn(&Value) -> Result<(), String>,
    },
    /// List
    List(Box<AttributeType>),
    /// Set (list without duplicates)
    Set(Box<AttributeType>),
    /// Map with string keys
    Map(Box<AttributeType>),
    /// Object with a fixed set of fields
    Object(BTreeMap<String, AttributeType>),
}

impl AttributeType {
    /// Check if a value conforms to this type
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        // Expressions resolve at apply time, so they are valid for any type
        if let Value::String(s) = value
            && is_expression(s)
        {
            return Ok(());
        }

        match (self, value) {
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::Custom { base, validate, .. }, v) => {
                base.validate(v)?;
                validate(v).map_err(|message| TypeError::ValidationFailed { message })
            }

            (AttributeType::List(inner), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Set(inner), Value::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                    if items[..i].contains(item) {
                        return Err(TypeError::DuplicateSetElement { index: i });
                    }
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Object(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Object(fields), Value::Object(map)) => {
                for (k, v) in map {
                    let Some(field_type) = fields.get(k) else {
                        return Err(TypeError::UnknownAttribute { name: k.clone() });
                    };
                    field_type
                        .validate(v)
                        .map_err(|e| TypeError::ObjectFieldError {
                            field: k.clone(),
                            inner: Box::new(e),
                        })?;
                }
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: json_type_name(value).to_string(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Custom { name, .. } => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Set(inner) => format!("Set<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Object(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|(name, t)| format!("{}: {}", name, t.type_name()))
                    .collect();
                format!("Object {{ {} }}", fields.join(", "))
            }
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Int",
        Value::String(_) => "String",
        Value::Array(_) => "List",
        Value::Object(_) => "Map",
    }
}

fn describe_range(min: usize, max: Option<usize>) -> String {
    match max {
        Some(max) if max == min => format!("exactly {}", min),
        Some(max) => format!("between {} and {}", min, max),
        None => format!("at least {}", min),
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Attribute '{name}' is read-only")]
    ReadOnlyAttribute { name: String },

    #[error("Attribute '{name}': {inner}")]
    Attribute { name: String, inner: Box<TypeError> },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },

    #[error("Object field '{field}': {inner}")]
    ObjectFieldError { field: String, inner: Box<TypeError> },

    #[error("Duplicate set element at index {index}")]
    DuplicateSetElement { index: usize },

    #[error("Block '{block}' has {got} item(s), expected {}", describe_range(*min, *max))]
    BlockItemCount {
        block: String,
        min: usize,
        max: Option<usize>,
        got: usize,
    },

    #[error("Block '{block}'[{index}]: {inner}")]
    BlockError {
        block: String,
        index: usize,
        inner: Box<TypeError>,
    },
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    /// Value may be assigned by the provider during apply
    pub computed: bool,
    pub sensitive: bool,
    pub description: Option<String>,
}

impl AttributeSchema {
    /// New optional attribute
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Read-only attribute assigned by the provider
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self.optional = false;
        self.required = false;
        self
    }

    /// Optional attribute that the provider fills in when left unset
    pub fn optional_computed(mut self) -> Self {
        self.computed = true;
        self.optional = true;
        self.required = false;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Returns true if the attribute cannot be configured
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// How a nested block is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingMode {
    Single,
    List,
    Set,
}

impl fmt::Display for NestingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestingMode::Single => write!(f, "single"),
            NestingMode::List => write!(f, "list"),
            NestingMode::Set => write!(f, "set"),
        }
    }
}

/// Nested block schema
#[derive(Debug, Clone)]
pub struct BlockSchema {
    pub name: String,
    pub nesting: NestingMode,
    pub min_items: usize,
    pub max_items: Option<usize>,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub blocks: BTreeMap<String, BlockSchema>,
}

impl BlockSchema {
    pub fn new(name: impl Into<String>, nesting: NestingMode) -> Self {
        let max_items = match nesting {
            NestingMode::Single => Some(1),
            NestingMode::List | NestingMode::Set => None,
        };
        Self {
            name: name.into(),
            nesting,
            min_items: 0,
            max_items,
            attributes: BTreeMap::new(),
            blocks: BTreeMap::new(),
        }
    }

    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = min;
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn block(mut self, schema: BlockSchema) -> Self {
        self.blocks.insert(schema.name.clone(), schema);
        self
    }

    /// Validate the value of this block (an object or an array of objects)
    fn validate_value(&self, value: &Value) -> Vec<TypeError> {
        let items: Vec<&Value> = match value {
            Value::Null => Vec::new(),
            Value::String(s) if is_expression(s) => return Vec::new(),
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        let mut errors = Vec::new();
        let got = items.len();
        if got < self.min_items || self.max_items.is_some_and(|max| got > max) {
            errors.push(TypeError::BlockItemCount {
                block: self.name.clone(),
                min: self.min_items,
                max: self.max_items,
                got,
            });
        }

        for (index, item) in items.iter().enumerate() {
            let wrap = |inner: TypeError| TypeError::BlockError {
                block: self.name.clone(),
                index,
                inner: Box::new(inner),
            };

            let Value::Object(body) = item else {
                errors.push(wrap(TypeError::TypeMismatch {
                    expected: "Block".to_string(),
                    got: json_type_name(item).to_string(),
                }));
                continue;
            };

            if self.nesting == NestingMode::Set && items[..index].contains(item) {
                errors.push(wrap(TypeError::DuplicateSetElement { index }));
            }

            errors.extend(
                validate_body(&self.attributes, &self.blocks, body)
                    .into_iter()
                    .map(wrap),
            );
        }

        errors
    }
}

/// Validate an object body against attribute and block schemas
fn validate_body(
    attributes: &BTreeMap<String, AttributeSchema>,
    blocks: &BTreeMap<String, BlockSchema>,
    body: &Attributes,
) -> Vec<TypeError> {
    let mut errors = Vec::new();

    // Check required attributes
    for (name, schema) in attributes {
        if schema.required && body.get(name).is_none_or(Value::is_null) {
            errors.push(TypeError::MissingRequired { name: name.clone() });
        }
    }

    // Check required blocks
    for (name, block) in blocks {
        if block.min_items > 0 && !body.contains_key(name) {
            errors.push(TypeError::BlockItemCount {
                block: name.clone(),
                min: block.min_items,
                max: block.max_items,
                got: 0,
            });
        }
    }

    for (key, value) in body {
        if let Some(schema) = attributes.get(key) {
            if schema.is_read_only() {
                errors.push(TypeError::ReadOnlyAttribute { name: key.clone() });
            } else if !value.is_null()
                && let Err(e) = schema.attr_type.validate(value)
            {
                errors.push(TypeError::Attribute {
                    name: key.clone(),
                    inner: Box::new(e),
                });
            }
        } else if let Some(block) = blocks.get(key) {
            errors.extend(block.validate_value(value));
        } else {
            errors.push(TypeError::UnknownAttribute { name: key.clone() });
        }
    }

    errors
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    /// Terraform type (e.g., "aws_redshift_cluster")
    pub resource_type: String,
    pub kind: ElementKind,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub blocks: BTreeMap<String, BlockSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            kind: ElementKind::Resource,
            attributes: BTreeMap::new(),
            blocks: BTreeMap::new(),
            description: None,
        }
    }

    pub fn data_source(resource_type: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::DataSource,
            ..Self::new(resource_type)
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn block(mut self, schema: BlockSchema) -> Self {
        self.blocks.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Attributes that must be configured
    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.values().filter(|a| a.required)
    }

    /// Attributes only known after apply
    pub fn computed_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.values().filter(|a| a.is_read_only())
    }

    /// Validate synthesized attributes, collecting every error
    pub fn validate(&self, attributes: &Attributes) -> Result<(), Vec<TypeError>> {
        let errors = validate_body(&self.attributes, &self.blocks, attributes);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    /// Positive integer type
    pub fn positive_int() -> AttributeType {
        AttributeType::Custom {
            name: "PositiveInt".to_string(),
            base: Box::new(AttributeType::Int),
            validate: |value| match value.as_i64() {
                Some(n) if n > 0 => Ok(()),
                Some(_) => Err("Value must be positive".to_string()),
                None => Err("Expected integer".to_string()),
            },
        }
    }

    /// CIDR block type (e.g., "10.0.0.0/16")
    pub fn cidr() -> AttributeType {
        AttributeType::Custom {
            name: "Cidr".to_string(),
            base: Box::new(AttributeType::String),
            validate: |value| match value.as_str() {
                Some(s) => validate_cidr(s),
                None => Err("Expected string".to_string()),
            },
        }
    }

    /// Enum type whose accepted values are fixed at generation time
    pub fn string_enum(values: &[&str]) -> AttributeType {
        AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Validate a string against the values of a generated enum type
pub fn validate_enum(value: &Value, type_name: &str, valid_values: &[&str]) -> Result<(), String> {
    match value.as_str() {
        Some(s) if valid_values.contains(&s) => Ok(()),
        Some(s) => Err(format!(
            "Invalid {} '{}', expected one of: {}",
            type_name,
            s,
            valid_values.join(", ")
        )),
        None => Err(format!("Expected string for {}", type_name)),
    }
}

/// Validate CIDR block format (e.g., "10.0.0.0/16")
pub fn validate_cidr(cidr: &str) -> Result<(), String> {
    let Some((ip, prefix)) = cidr.split_once('/') else {
        return Err(format!(
            "Invalid CIDR format '{}': expected IP/prefix",
            cidr
        ));
    };

    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() != 4 {
        return Err(format!("Invalid IP address '{}': expected 4 octets", ip));
    }
    if let Some(octet) = octets.iter().find(|o| o.parse::<u8>().is_err()) {
        return Err(format!(
            "Invalid octet '{}' in IP address: must be 0-255",
            octet
        ));
    }

    match prefix.parse::<u8>() {
        Ok(p) if p <= 32 => Ok(()),
        Ok(p) => Err(format!("Invalid prefix length '{}': must be 0-32", p)),
        Err(_) => Err(format!(
            "Invalid prefix length '{}': must be a number",
            prefix
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn subnet_group_schema() -> ResourceSchema {
        ResourceSchema::new("aws_redshift_subnet_group")
            .attribute(AttributeSchema::new("arn", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(
                AttributeSchema::new("subnet_ids", AttributeType::Set(Box::new(AttributeType::String)))
                    .required(),
            )
            .attribute(AttributeSchema::new(
                "tags",
                AttributeType::Map(Box::new(AttributeType::String)),
            ))
    }

    #[test]
    fn validate_string_type() {
        let t = AttributeType::String;
        assert!(t.validate(&json!("hello")).is_ok());
        assert!(t.validate(&json!(42)).is_err());
    }

    #[test]
    fn validate_int_rejects_float() {
        let t = AttributeType::Int;
        assert!(t.validate(&json!(7)).is_ok());
        assert_eq!(
            t.validate(&json!(1.5)),
            Err(TypeError::TypeMismatch {
                expected: "Int".to_string(),
                got: "Float".to_string(),
            })
        );
    }

    #[test]
    fn expressions_match_any_type() {
        let expr = json!("${aws_redshift_cluster.main.port}");
        assert!(AttributeType::Int.validate(&expr).is_ok());
        assert!(AttributeType::Bool.validate(&expr).is_ok());
        assert!(
            AttributeType::List(Box::new(AttributeType::String))
                .validate(&expr)
                .is_ok()
        );
    }

    #[test]
    fn validate_enum_type() {
        let t = types::string_enum(&["daily", "weekly"]);
        assert!(t.validate(&json!("daily")).is_ok());
        let err = t.validate(&json!("hourly")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid enum variant 'hourly', expected one of: daily, weekly"
        );
    }

    #[test]
    fn validate_set_rejects_duplicates() {
        let t = AttributeType::Set(Box::new(AttributeType::String));
        assert!(t.validate(&json!(["a", "b"])).is_ok());
        assert_eq!(
            t.validate(&json!(["a", "b", "a"])),
            Err(TypeError::DuplicateSetElement { index: 2 })
        );
    }

    #[test]
    fn validate_object_type() {
        let mut fields = BTreeMap::new();
        fields.insert("node_role".to_string(), AttributeType::String);
        let t = AttributeType::Object(fields);
        assert!(t.validate(&json!({ "node_role": "LEADER" })).is_ok());
        assert!(matches!(
            t.validate(&json!({ "node_role": 1 })),
            Err(TypeError::ObjectFieldError { .. })
        ));
        assert!(matches!(
            t.validate(&json!({ "other": "x" })),
            Err(TypeError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn validate_generated_enum() {
        fn validate_period(value: &Value) -> Result<(), String> {
            validate_enum(value, "Period", &["daily", "weekly", "monthly"])
        }
        let t = AttributeType::Custom {
            name: "Period".to_string(),
            base: Box::new(AttributeType::String),
            validate: validate_period,
        };
        assert!(t.validate(&json!("weekly")).is_ok());
        assert_eq!(
            t.validate(&json!("hourly")),
            Err(TypeError::ValidationFailed {
                message: "Invalid Period 'hourly', expected one of: daily, weekly, monthly"
                    .to_string()
            })
        );
        assert!(matches!(
            t.validate(&json!(1)),
            Err(TypeError::TypeMismatch { .. })
        ));
        assert!(t.validate(&json!("${var.period}")).is_ok());
    }

    #[test]
    fn validate_positive_int() {
        let t = types::positive_int();
        assert!(t.validate(&json!(1)).is_ok());
        assert!(t.validate(&json!(100)).is_ok());
        assert!(t.validate(&json!(0)).is_err());
        assert!(t.validate(&json!(-1)).is_err());
        assert!(t.validate(&json!("1")).is_err());
    }

    #[test]
    fn validate_resource_schema() {
        let schema = subnet_group_schema();
        let body = attrs(json!({
            "name": "analytics",
            "subnet_ids": ["subnet-1", "subnet-2"],
            "tags": { "team": "data" },
        }));
        assert!(schema.validate(&body).is_ok());
    }

    #[test]
    fn validate_reports_every_error() {
        let schema = subnet_group_schema();
        let body = attrs(json!({
            "arn": "arn:aws:redshift:::subnetgroup:x",
            "subnet_ids": "subnet-1",
            "owner": "me",
        }));
        let errors = schema.validate(&body).unwrap_err();
        assert!(errors.contains(&TypeError::MissingRequired {
            name: "name".to_string()
        }));
        assert!(errors.contains(&TypeError::ReadOnlyAttribute {
            name: "arn".to_string()
        }));
        assert!(errors.contains(&TypeError::UnknownAttribute {
            name: "owner".to_string()
        }));
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, TypeError::Attribute { name, .. } if name == "subnet_ids"))
        );
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn validate_block_item_counts() {
        let schema = ResourceSchema::new("aws_redshift_scheduled_action")
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .block(
                BlockSchema::new("target_action", NestingMode::List)
                    .min_items(1)
                    .max_items(1)
                    .block(
                        BlockSchema::new("pause_cluster", NestingMode::List)
                            .max_items(1)
                            .attribute(
                                AttributeSchema::new("cluster_identifier", AttributeType::String)
                                    .required(),
                            ),
                    ),
            );

        let missing = attrs(json!({ "name": "pause" }));
        let errors = schema.validate(&missing).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "Block 'target_action' has 0 item(s), expected exactly 1"
        );

        let object_form = attrs(json!({
            "name": "pause",
            "target_action": { "pause_cluster": { "cluster_identifier": "main" } },
        }));
        assert!(schema.validate(&object_form).is_ok());

        let nested_missing = attrs(json!({
            "name": "pause",
            "target_action": [{ "pause_cluster": [{}] }],
        }));
        let errors = schema.validate(&nested_missing).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "Block 'target_action'[0]: Block 'pause_cluster'[0]: Required attribute 'cluster_identifier' is missing"
        );
    }

    #[test]
    fn validate_set_block_duplicates() {
        let schema = ResourceSchema::new("aws_redshift_parameter_group").block(
            BlockSchema::new("parameter", NestingMode::Set)
                .attribute(AttributeSchema::new("name", AttributeType::String).required())
                .attribute(AttributeSchema::new("value", AttributeType::String).required()),
        );
        let body = attrs(json!({
            "parameter": [
                { "name": "enable_user_activity_logging", "value": "true" },
                { "name": "enable_user_activity_logging", "value": "true" },
            ],
        }));
        let errors = schema.validate(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TypeError::BlockError { index: 1, inner, .. }
                if **inner == TypeError::DuplicateSetElement { index: 1 }
        ));
    }

    #[test]
    fn null_values_count_as_unset() {
        let schema = subnet_group_schema();
        let body = attrs(json!({
            "name": "analytics",
            "subnet_ids": ["subnet-1"],
            "tags": null,
        }));
        assert!(schema.validate(&body).is_ok());
    }

    #[test]
    fn attribute_modes() {
        let computed = AttributeSchema::new("arn", AttributeType::String).computed();
        assert!(computed.is_read_only());
        let oc = AttributeSchema::new("id", AttributeType::String).optional_computed();
        assert!(!oc.is_read_only());
        assert!(oc.optional && oc.computed);
        let required = AttributeSchema::new("name", AttributeType::String).required();
        assert!(required.required && !required.optional);
    }

    #[test]
    fn validate_cidr_type() {
        let t = types::cidr();

        // Valid CIDRs
        assert!(t.validate(&json!("10.0.0.0/16")).is_ok());
        assert!(t.validate(&json!("0.0.0.0/0")).is_ok());
        assert!(t.validate(&json!("255.255.255.255/32")).is_ok());

        // Invalid CIDRs
        assert!(t.validate(&json!("10.0.0.0")).is_err()); // no prefix
        assert!(t.validate(&json!("10.0.0.0/33")).is_err()); // prefix too large
        assert!(t.validate(&json!("10.0.0.256/16")).is_err()); // octet > 255
        assert!(t.validate(&json!("10.0.0/16")).is_err()); // only 3 octets
        assert!(t.validate(&json!(42)).is_err()); // wrong type
    }
}
