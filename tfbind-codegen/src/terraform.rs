//! Terraform provider schema model
//!
//! Mirrors the document printed by `terraform providers schema -json`.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Root of `terraform providers schema -json`
#[derive(Debug, Deserialize)]
pub struct ProviderSchemas {
    #[serde(default)]
    pub format_version: Option<String>,
    pub provider_schemas: BTreeMap<String, ProviderSchema>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub provider: Option<Schema>,
    #[serde(default)]
    pub resource_schemas: BTreeMap<String, Schema>,
    #[serde(default)]
    pub data_source_schemas: BTreeMap<String, Schema>,
}

/// Schema of one resource or data source type
#[derive(Debug, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub version: i64,
    pub block: Block,
}

#[derive(Debug, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub block_types: BTreeMap<String, NestedBlock>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

#[derive(Debug, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: TfType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub deprecated: bool,
}

impl Attribute {
    /// Attribute only the provider can set
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    Single,
    Group,
    List,
    Set,
    Map,
}

#[derive(Debug, Deserialize)]
pub struct NestedBlock {
    pub nesting_mode: NestingMode,
    pub block: Block,
    #[serde(default)]
    pub min_items: usize,
    /// 0 means unbounded
    #[serde(default)]
    pub max_items: usize,
}

/// How a nested block is held by its parent struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockShape {
    /// `Option<Block>`
    Optional,
    /// `Block`
    Required,
    /// `Vec<Block>`
    Repeated { required: bool },
}

impl NestedBlock {
    pub fn shape(&self) -> BlockShape {
        let single = matches!(self.nesting_mode, NestingMode::Single | NestingMode::Group)
            || self.max_items == 1;
        match (single, self.min_items >= 1) {
            (true, true) => BlockShape::Required,
            (true, false) => BlockShape::Optional,
            (false, required) => BlockShape::Repeated { required },
        }
    }

    /// `NestingMode` variant used by the generated schema
    pub fn schema_nesting(&self) -> &'static str {
        match self.nesting_mode {
            NestingMode::Single | NestingMode::Group => "Single",
            NestingMode::List => "List",
            NestingMode::Set | NestingMode::Map => "Set",
        }
    }
}

/// Terraform type expression
#[derive(Debug, Clone, PartialEq)]
pub enum TfType {
    String,
    Number,
    Bool,
    List(Box<TfType>),
    Set(Box<TfType>),
    Map(Box<TfType>),
    Object(BTreeMap<String, TfType>),
}

impl TfType {
    /// Parse a cty type in its JSON encoding (e.g., `["list", "string"]`)
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(s) => match s.as_str() {
                "string" => Ok(TfType::String),
                "number" => Ok(TfType::Number),
                "bool" => Ok(TfType::Bool),
                other => Err(format!("unsupported primitive type '{}'", other)),
            },
            Value::Array(parts) => match parts.as_slice() {
                [Value::String(kind), inner] => match kind.as_str() {
                    "list" => Ok(TfType::List(Box::new(TfType::from_value(inner)?))),
                    "set" => Ok(TfType::Set(Box::new(TfType::from_value(inner)?))),
                    "map" => Ok(TfType::Map(Box::new(TfType::from_value(inner)?))),
                    "object" => {
                        let Value::Object(fields) = inner else {
                            return Err("object type must list its fields".to_string());
                        };
                        fields
                            .iter()
                            .map(|(name, t)| Ok((name.clone(), TfType::from_value(t)?)))
                            .collect::<Result<BTreeMap<_, _>, String>>()
                            .map(TfType::Object)
                    }
                    other => Err(format!("unsupported collection type '{}'", other)),
                },
                _ => Err(format!("unsupported type expression {}", value)),
            },
            _ => Err(format!("unsupported type expression {}", value)),
        }
    }

    /// Element type of a list or set of objects
    pub fn object_list_fields(&self) -> Option<&BTreeMap<String, TfType>> {
        match self {
            TfType::List(inner) | TfType::Set(inner) => match inner.as_ref() {
                TfType::Object(fields) => Some(fields),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn contains_object(&self) -> bool {
        match self {
            TfType::String | TfType::Number | TfType::Bool => false,
            TfType::List(inner) | TfType::Set(inner) | TfType::Map(inner) => inner.contains_object(),
            TfType::Object(_) => true,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, TfType::Map(_))
    }
}

impl fmt::Display for TfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfType::String => write!(f, "string"),
            TfType::Number => write!(f, "number"),
            TfType::Bool => write!(f, "bool"),
            TfType::List(inner) => write!(f, "list({})", inner),
            TfType::Set(inner) => write!(f, "set({})", inner),
            TfType::Map(inner) => write!(f, "map({})", inner),
            TfType::Object(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|(name, t)| format!("{} = {}", name, t))
                    .collect();
                write!(f, "object({{{}}})", fields.join(", "))
            }
        }
    }
}

impl<'de> Deserialize<'de> for TfType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TfType::from_value(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_primitive_and_collection_types() {
        assert_eq!(TfType::from_value(&json!("string")), Ok(TfType::String));
        assert_eq!(
            TfType::from_value(&json!(["set", "string"])),
            Ok(TfType::Set(Box::new(TfType::String)))
        );
        assert_eq!(
            TfType::from_value(&json!(["map", "number"])),
            Ok(TfType::Map(Box::new(TfType::Number)))
        );
    }

    #[test]
    fn parse_object_list() {
        let t = TfType::from_value(&json!(["list", ["object", {
            "node_role": "string",
            "private_ip_address": "string",
        }]]))
        .unwrap();
        let fields = t.object_list_fields().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(t.contains_object());
        assert_eq!(
            t.to_string(),
            "list(object({node_role = string, private_ip_address = string}))"
        );
    }

    #[test]
    fn reject_dynamic_type() {
        assert!(TfType::from_value(&json!("dynamic")).is_err());
        assert!(TfType::from_value(&json!(["tuple", ["string"]])).is_err());
    }

    #[test]
    fn block_shapes() {
        let block: NestedBlock = serde_json::from_value(json!({
            "nesting_mode": "list",
            "block": {},
            "max_items": 1,
        }))
        .unwrap();
        assert_eq!(block.shape(), BlockShape::Optional);

        let block: NestedBlock = serde_json::from_value(json!({
            "nesting_mode": "list",
            "block": {},
            "min_items": 1,
            "max_items": 1,
        }))
        .unwrap();
        assert_eq!(block.shape(), BlockShape::Required);

        let block: NestedBlock = serde_json::from_value(json!({
            "nesting_mode": "set",
            "block": {},
            "min_items": 1,
        }))
        .unwrap();
        assert_eq!(block.shape(), BlockShape::Repeated { required: true });

        let block: NestedBlock = serde_json::from_value(json!({
            "nesting_mode": "single",
            "block": { "attributes": { "create": { "type": "string", "optional": true } } },
        }))
        .unwrap();
        assert_eq!(block.shape(), BlockShape::Optional);
        assert_eq!(block.schema_nesting(), "Single");
    }
}
