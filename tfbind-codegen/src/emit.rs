//! Rust source emission for one Terraform type
//!
//! Each type becomes one module holding:
//! - enum validators detected from attribute descriptions
//! - `schema()`, the `ResourceSchema` of the type
//! - the binding struct with its accessors and `TerraformElement` impl
//! - the config struct and builder, one struct and builder per nested block
//! - `...List` / `...OutputReference` wrappers for computed nested objects

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use heck::ToPascalCase;

use crate::naming::{self, escape, getter_name, ident, one_line};
use crate::terraform::{Attribute, Block, BlockShape, NestedBlock, NestingMode, Schema, TfType};

/// A generated binding module
#[derive(Debug, Clone)]
pub struct Binding {
    /// Terraform type (e.g., "aws_redshift_cluster")
    pub tf_type: String,
    pub data_source: bool,
    /// Module name (e.g., "redshift_cluster")
    pub module: String,
    /// Binding type name (e.g., "RedshiftCluster")
    pub type_name: String,
    pub code: String,
}

/// Enum detected from an attribute description
#[derive(Debug, Clone, PartialEq)]
struct EnumInfo {
    const_name: String,
    fn_name: String,
    /// Attribute name in PascalCase (e.g., "ClusterType")
    type_name: String,
    values: Vec<String>,
}

impl EnumInfo {
    /// `path` is the block path of the attribute, `name` its name
    fn detect(path: &[&str], name: &str, attr: &Attribute) -> Option<Self> {
        if attr.attr_type != TfType::String || attr.is_read_only() {
            return None;
        }
        let values = naming::extract_enum_values(attr.description.as_deref()?)?;
        let mut parts: Vec<&str> = path.to_vec();
        parts.push(name);
        let snake = parts.join("_");
        Some(EnumInfo {
            const_name: format!("VALID_{}", snake.to_uppercase()),
            fn_name: format!("validate_{}", snake),
            type_name: name.to_pascal_case(),
            values,
        })
    }
}

/// Generate the module for one Terraform type
pub fn generate_binding(tf_type: &str, schema: &Schema, data_source: bool) -> Result<Binding> {
    check_supported(tf_type, &schema.block)?;

    let module = naming::module_name(tf_type, data_source);
    let type_name = naming::type_name(tf_type, data_source);
    log::debug!("generating {} as {}::{}", tf_type, module, type_name);

    let mut items: Vec<String> = Vec::new();
    emit_enums(&mut items, &[], &schema.block);
    items.push(emit_schema_fn(tf_type, data_source, &schema.block));
    items.push(emit_binding(tf_type, &type_name, data_source, &schema.block));
    emit_struct(
        &mut items,
        &format!("{}Config", type_name),
        &format!("/// Configuration of `{}`", tf_type),
        tf_type,
        &type_name,
        &schema.block,
    );
    emit_wrappers(&mut items, tf_type, &type_name, &schema.block);

    let body: String = items.iter().map(|item| format!("\n{}", item)).collect();
    let kind = if data_source { "data source" } else { "resource" };

    let mut code = format!(
        r#"//! {} bindings
//!
//! Generated from Terraform {} schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

"#,
        module, kind, tf_type
    );
    code.push_str(&imports(&body));
    code.push_str(&body);

    Ok(Binding {
        tf_type: tf_type.to_string(),
        data_source,
        module,
        type_name,
        code,
    })
}

/// Generate `mod.rs` declaring and re-exporting every binding
pub fn generate_mod(bindings: &[Binding]) -> String {
    let mut sorted: Vec<&Binding> = bindings.iter().collect();
    sorted.sort_by(|a, b| a.module.cmp(&b.module));

    let mut code = String::from(
        r#"//! Generated Terraform bindings
//!
//! DO NOT EDIT MANUALLY - regenerate with tfbind-codegen

"#,
    );
    for binding in &sorted {
        code.push_str(&format!("pub mod {};\n", binding.module));
    }
    code.push('\n');
    for binding in &sorted {
        code.push_str(&format!(
            "pub use {}::{{{}, {}Config}};\n",
            binding.module, binding.type_name, binding.type_name
        ));
    }
    code
}

fn check_supported(tf_type: &str, block: &Block) -> Result<()> {
    for (name, nested) in &block.block_types {
        if nested.nesting_mode == NestingMode::Map {
            bail!("{}: block '{}' uses unsupported map nesting", tf_type, name);
        }
        check_supported(tf_type, &nested.block)?;
    }
    Ok(())
}

// =============================================================================
// Imports
// =============================================================================

fn use_line(path: &str, items: &[&str]) -> String {
    match items {
        [single] => format!("use {}::{};\n", path, single),
        _ => format!("use {}::{{{}}};\n", path, items.join(", ")),
    }
}

/// Imports needed by the generated items
fn imports(body: &str) -> String {
    let mut code = String::new();
    if body.contains("BTreeMap") {
        code.push_str("use std::collections::BTreeMap;\n\n");
    }
    code.push_str("use serde::{Deserialize, Serialize};\n");
    code.push_str("use serde_json::Value;\n");

    let block_items: Vec<&str> = [
        ("ComputedList", "ComputedList"),
        ("ComputedObject", "ComputedObject"),
        ("non_empty(", "non_empty"),
    ]
    .iter()
    .filter(|(needle, _)| body.contains(needle))
    .map(|(_, item)| *item)
    .collect();
    if !block_items.is_empty() {
        code.push_str(&use_line("tfbind_core::block", &block_items));
    }

    code.push_str(
        "use tfbind_core::element::{TerraformElement, from_terraform_json, to_attributes};\n",
    );
    code.push_str("use tfbind_core::error::ConfigError;\n");

    let uses_reference = body.contains("-> Reference") || body.contains("&Reference");
    let resource_items: Vec<&str> = if uses_reference {
        vec!["MetaArguments", "Reference", "ResourceId"]
    } else {
        vec!["MetaArguments", "ResourceId"]
    };
    code.push_str(&use_line("tfbind_core::resource", &resource_items));

    let mut schema_items = vec!["AttributeSchema", "AttributeType", "Attributes"];
    if body.contains("BlockSchema::") {
        schema_items.extend(["BlockSchema", "NestingMode"]);
    }
    schema_items.push("ResourceSchema");
    if body.contains("types::") {
        schema_items.push("types");
    }
    if body.contains("validate_enum(") {
        schema_items.push("validate_enum");
    }
    code.push_str(&use_line("tfbind_core::schema", &schema_items));
    if body.contains("Token<") {
        code.push_str("use tfbind_core::value::Token;\n");
    }
    code
}

// =============================================================================
// Enums
// =============================================================================

fn emit_enums(items: &mut Vec<String>, path: &[&str], block: &Block) {
    for (name, attr) in &block.attributes {
        if let Some(info) = EnumInfo::detect(path, name, attr) {
            let values = info
                .values
                .iter()
                .map(|v| format!("\"{}\"", escape(v)))
                .collect::<Vec<_>>()
                .join(", ");
            items.push(format!(
                r#"const {}: &[&str] = &[{}];

fn {}(value: &Value) -> Result<(), String> {{
    validate_enum(value, "{}", {})
}}
"#,
                info.const_name, values, info.fn_name, info.type_name, info.const_name
            ));
        }
    }
    for (name, nested) in &block.block_types {
        let mut nested_path = path.to_vec();
        nested_path.push(name);
        emit_enums(items, &nested_path, &nested.block);
    }
}

// =============================================================================
// Schema
// =============================================================================

fn schema_type(t: &TfType, name: &str, enum_info: Option<&EnumInfo>) -> String {
    match t {
        TfType::String => {
            if let Some(info) = enum_info {
                format!(
                    "AttributeType::Custom {{ name: \"{}\".to_string(), base: Box::new(AttributeType::String), validate: {} }}",
                    info.type_name, info.fn_name
                )
            } else if name == "cidr" {
                "types::cidr()".to_string()
            } else {
                "AttributeType::String".to_string()
            }
        }
        TfType::Number => "AttributeType::Int".to_string(),
        TfType::Bool => "AttributeType::Bool".to_string(),
        TfType::List(inner) => format!("AttributeType::List(Box::new({}))", schema_type(inner, "", None)),
        TfType::Set(inner) => format!("AttributeType::Set(Box::new({}))", schema_type(inner, "", None)),
        TfType::Map(inner) => format!("AttributeType::Map(Box::new({}))", schema_type(inner, "", None)),
        TfType::Object(fields) => {
            let fields = fields
                .iter()
                .map(|(field, t)| format!("(\"{}\".to_string(), {})", field, schema_type(t, "", None)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("AttributeType::Object(BTreeMap::from([{}]))", fields)
        }
    }
}

/// Wrap expression lines in a chained call, e.g. `.attribute(` ... `)`
fn chain_call(method: &str, inner: Vec<String>) -> Vec<String> {
    let mut lines = vec![format!(".{}(", method)];
    let last = inner.len().saturating_sub(1);
    for (i, line) in inner.into_iter().enumerate() {
        let comma = if i == last { "," } else { "" };
        lines.push(format!("    {}{}", line, comma));
    }
    lines.push(")".to_string());
    lines
}

fn attribute_schema_expr(path: &[&str], name: &str, attr: &Attribute) -> Vec<String> {
    let enum_info = EnumInfo::detect(path, name, attr);
    let mut lines = vec![format!(
        "AttributeSchema::new(\"{}\", {})",
        name,
        schema_type(&attr.attr_type, name, enum_info.as_ref())
    )];
    if attr.required {
        lines.push("    .required()".to_string());
    } else if attr.is_read_only() {
        lines.push("    .computed()".to_string());
    } else if attr.computed {
        lines.push("    .optional_computed()".to_string());
    }
    if attr.sensitive {
        lines.push("    .sensitive()".to_string());
    }
    if let Some(desc) = attr.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!("    .with_description(\"{}\")", escape(desc)));
    }
    lines
}

fn block_schema_expr(path: &[&str], name: &str, nested: &NestedBlock) -> Vec<String> {
    let mut lines = vec![format!(
        "BlockSchema::new(\"{}\", NestingMode::{})",
        name,
        nested.schema_nesting()
    )];
    if nested.min_items > 0 {
        lines.push(format!("    .min_items({})", nested.min_items));
    }
    if nested.max_items > 0 && nested.schema_nesting() != "Single" {
        lines.push(format!("    .max_items({})", nested.max_items));
    }

    let mut nested_path = path.to_vec();
    nested_path.push(name);
    for (attr_name, attr) in &nested.block.attributes {
        let call = chain_call("attribute", attribute_schema_expr(&nested_path, attr_name, attr));
        lines.extend(call.into_iter().map(|l| format!("    {}", l)));
    }
    for (block_name, child) in &nested.block.block_types {
        let call = chain_call("block", block_schema_expr(&nested_path, block_name, child));
        lines.extend(call.into_iter().map(|l| format!("    {}", l)));
    }
    lines
}

fn emit_schema_fn(tf_type: &str, data_source: bool, block: &Block) -> String {
    let constructor = if data_source { "data_source" } else { "new" };
    let mut code = format!(
        "/// Terraform schema of `{}`\npub fn schema() -> ResourceSchema {{\n    ResourceSchema::{}(\"{}\")\n",
        tf_type, constructor, tf_type
    );

    let mut lines = Vec::new();
    if let Some(desc) = block.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!(".with_description(\"{}\")", escape(desc)));
    }
    for (name, attr) in &block.attributes {
        lines.extend(chain_call("attribute", attribute_schema_expr(&[], name, attr)));
    }
    for (name, nested) in &block.block_types {
        lines.extend(chain_call("block", block_schema_expr(&[], name, nested)));
    }
    for line in lines {
        code.push_str(&format!("        {}\n", line));
    }
    code.push_str("}\n");
    code
}

// =============================================================================
// Rust types
// =============================================================================

/// Rust type of a configurable attribute.
/// Strings carry expressions as-is; other types are wrapped in `Token`.
fn rust_type(t: &TfType) -> String {
    if t.contains_object() {
        return "Value".to_string();
    }
    match t {
        TfType::String => "String".to_string(),
        TfType::Number => "Token<i64>".to_string(),
        TfType::Bool => "Token<bool>".to_string(),
        TfType::List(inner) | TfType::Set(inner) => format!("Token<Vec<{}>>", rust_type(inner)),
        TfType::Map(inner) => format!("Token<BTreeMap<String, {}>>", rust_type(inner)),
        TfType::Object(_) => "Value".to_string(),
    }
}

/// How a configured value is read back
enum Access {
    /// `&str` / `Option<&str>`
    Str,
    /// `&T` / `Option<&T>`
    Ref,
}

fn access(t: &TfType) -> Access {
    match t {
        TfType::String => Access::Str,
        _ => Access::Ref,
    }
}

/// Setter parameter type and the expression converting it
fn setter_param(t: &TfType) -> (String, &'static str) {
    let ty = rust_type(t);
    match access(t) {
        Access::Str => ("impl Into<String>".to_string(), "value.into()"),
        Access::Ref if ty.starts_with("Token<") => {
            (format!("impl Into<{}>", ty), "value.into()")
        }
        Access::Ref => (ty, "value"),
    }
}

fn block_type_name(parent: &str, name: &str) -> String {
    format!("{}{}", parent, name.to_pascal_case())
}

/// Fields of a generated struct: configurable attributes, then blocks
fn configurable(block: &Block) -> impl Iterator<Item = (&String, &Attribute)> {
    block.attributes.iter().filter(|(_, attr)| !attr.is_read_only())
}

fn has_required(block: &Block) -> bool {
    configurable(block).any(|(_, attr)| attr.required)
        || block.block_types.values().any(|nested| {
            matches!(
                nested.shape(),
                BlockShape::Required | BlockShape::Repeated { required: true }
            )
        })
}

// =============================================================================
// Binding
// =============================================================================

fn emit_binding(tf_type: &str, type_name: &str, data_source: bool, block: &Block) -> String {
    let (kind, id_constructor) = if data_source {
        ("data source", "data_source")
    } else {
        ("resource", "new")
    };
    let config = format!("{}Config", type_name);

    let mut code = format!(
        r#"/// `{tf_type}` {kind}
#[derive(Debug, Clone, PartialEq)]
pub struct {type_name} {{
    address: ResourceId,
    meta: MetaArguments,
    config: {config},
}}

impl {type_name} {{
    pub const TF_RESOURCE_TYPE: &'static str = "{tf_type}";

    pub fn new(name: impl Into<String>, config: {config}) -> Self {{
        Self {{
            address: ResourceId::{id_constructor}(Self::TF_RESOURCE_TYPE, name),
            meta: MetaArguments::default(),
            config,
        }}
    }}

    /// Build from the body of a Terraform JSON element
    pub fn from_json(name: impl Into<String>, body: Value) -> Result<Self, ConfigError> {{
        let (meta, config) = from_terraform_json(Self::TF_RESOURCE_TYPE, body)?;
        Ok(Self {{
            address: ResourceId::{id_constructor}(Self::TF_RESOURCE_TYPE, name),
            meta,
            config,
        }})
    }}

    pub fn config(&self) -> &{config} {{
        &self.config
    }}

    pub fn into_config(self) -> {config} {{
        self.config
    }}
"#
    );

    for (name, attr) in &block.attributes {
        code.push_str(&attribute_accessors(type_name, name, attr));
    }
    for (name, nested) in &block.block_types {
        code.push_str(&block_accessors(type_name, name, nested));
    }

    code.push_str(&format!(
        r#"}}

impl TerraformElement for {type_name} {{
    fn address(&self) -> &ResourceId {{
        &self.address
    }}

    fn schema(&self) -> ResourceSchema {{
        schema()
    }}

    fn meta(&self) -> &MetaArguments {{
        &self.meta
    }}

    fn meta_mut(&mut self) -> &mut MetaArguments {{
        &mut self.meta
    }}

    fn synthesize_attributes(&self) -> Result<Attributes, ConfigError> {{
        to_attributes(&self.address, &self.config)
    }}
}}
"#
    ));
    code
}

fn method(signature: &str, body: &str) -> String {
    format!("\n    {} {{\n        {}\n    }}\n", signature, body)
}

fn attribute_accessors(type_name: &str, name: &str, attr: &Attribute) -> String {
    let getter = getter_name(name);
    let field = ident(name);

    if attr.is_read_only() {
        let base = block_type_name(type_name, name);
        return if attr.attr_type.object_list_fields().is_some() {
            method(
                &format!("pub fn {}(&self) -> {}List", getter, base),
                &format!(
                    "{}List::new(self.interpolation_for_attribute(\"{}\"))",
                    base, name
                ),
            )
        } else if matches!(attr.attr_type, TfType::Object(_)) {
            format!(
                "\n    pub fn {}(&self) -> {}OutputReference {{\n        {}OutputReference {{\n            inner: ComputedObject::new(self.interpolation_for_attribute(\"{}\")),\n        }}\n    }}\n",
                getter, base, base, name
            )
        } else {
            method(
                &format!("pub fn {}(&self) -> Reference", getter),
                &format!("self.interpolation_for_attribute(\"{}\")", name),
            )
        };
    }

    let (param, convert) = setter_param(&attr.attr_type);
    let mut code = String::new();
    if attr.required {
        let (ret, expr) = match access(&attr.attr_type) {
            Access::Str => ("&str".to_string(), format!("&self.config.{}", field)),
            Access::Ref => (
                format!("&{}", rust_type(&attr.attr_type)),
                format!("&self.config.{}", field),
            ),
        };
        code.push_str(&method(&format!("pub fn {}(&self) -> {}", getter, ret), &expr));
        code.push_str(&method(
            &format!("pub fn set_{}(&mut self, value: {})", name, param),
            &format!("self.config.{} = {};", field, convert),
        ));
    } else {
        let (ret, expr) = match access(&attr.attr_type) {
            Access::Str => (
                "Option<&str>".to_string(),
                format!("self.config.{}.as_deref()", field),
            ),
            Access::Ref => (
                format!("Option<&{}>", rust_type(&attr.attr_type)),
                format!("self.config.{}.as_ref()", field),
            ),
        };
        code.push_str(&method(&format!("pub fn {}(&self) -> {}", getter, ret), &expr));
        code.push_str(&method(
            &format!("pub fn set_{}(&mut self, value: {})", name, param),
            &format!("self.config.{} = Some({});", field, convert),
        ));
        code.push_str(&method(
            &format!("pub fn reset_{}(&mut self)", name),
            &format!("self.config.{} = None;", field),
        ));
    }
    code
}

fn block_accessors(type_name: &str, name: &str, nested: &NestedBlock) -> String {
    let getter = getter_name(name);
    let field = ident(name);
    let block_type = block_type_name(type_name, name);

    let mut code = String::new();
    match nested.shape() {
        BlockShape::Optional => {
            code.push_str(&method(
                &format!("pub fn {}(&self) -> Option<&{}>", getter, block_type),
                &format!("self.config.{}.as_ref()", field),
            ));
            code.push_str(&method(
                &format!("pub fn put_{}(&mut self, value: {})", name, block_type),
                &format!("self.config.{} = Some(value);", field),
            ));
            code.push_str(&method(
                &format!("pub fn reset_{}(&mut self)", name),
                &format!("self.config.{} = None;", field),
            ));
        }
        BlockShape::Required => {
            code.push_str(&method(
                &format!("pub fn {}(&self) -> &{}", getter, block_type),
                &format!("&self.config.{}", field),
            ));
            code.push_str(&method(
                &format!("pub fn put_{}(&mut self, value: {})", name, block_type),
                &format!("self.config.{} = value;", field),
            ));
        }
        BlockShape::Repeated { required } => {
            code.push_str(&method(
                &format!("pub fn {}(&self) -> &[{}]", getter, block_type),
                &format!("&self.config.{}", field),
            ));
            code.push_str(&method(
                &format!("pub fn put_{}(&mut self, value: Vec<{}>)", name, block_type),
                &format!("self.config.{} = value;", field),
            ));
            if !required {
                code.push_str(&method(
                    &format!("pub fn reset_{}(&mut self)", name),
                    &format!("self.config.{}.clear();", field),
                ));
            }
        }
    }
    code
}

// =============================================================================
// Config and block structs
// =============================================================================

/// Emit a struct, its builder and (recursively) the structs of its blocks.
/// `label` names the struct in errors (e.g., "aws_redshift_cluster.logging").
fn emit_struct(
    items: &mut Vec<String>,
    struct_name: &str,
    doc: &str,
    label: &str,
    type_prefix: &str,
    block: &Block,
) {
    let builder_name = format!("{}Builder", struct_name);
    let derive = if has_required(block) {
        "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]"
    } else {
        "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]"
    };

    // Struct
    let mut code = format!(
        "{}\n{}\n#[serde(deny_unknown_fields)]\npub struct {} {{\n",
        doc, derive, struct_name
    );
    for (name, attr) in configurable(block) {
        if let Some(desc) = attr.description.as_deref().filter(|d| !d.trim().is_empty()) {
            code.push_str(&format!("    /// {}\n", one_line(desc)));
        }
        let ty = rust_type(&attr.attr_type);
        if attr.required {
            code.push_str(&format!("    pub {}: {},\n", ident(name), ty));
        } else {
            code.push_str("    #[serde(default, skip_serializing_if = \"Option::is_none\")]\n");
            code.push_str(&format!("    pub {}: Option<{}>,\n", ident(name), ty));
        }
    }
    for (name, nested) in &block.block_types {
        let block_type = block_type_name(type_prefix, name);
        match nested.shape() {
            BlockShape::Optional => {
                code.push_str("    #[serde(\n        default,\n        deserialize_with = \"tfbind_core::block::optional_block\",\n        skip_serializing_if = \"Option::is_none\"\n    )]\n");
                code.push_str(&format!("    pub {}: Option<{}>,\n", ident(name), block_type));
            }
            BlockShape::Required => {
                code.push_str(
                    "    #[serde(deserialize_with = \"tfbind_core::block::required_block\")]\n",
                );
                code.push_str(&format!("    pub {}: {},\n", ident(name), block_type));
            }
            BlockShape::Repeated { .. } => {
                code.push_str("    #[serde(\n        default,\n        deserialize_with = \"tfbind_core::block::block_list\",\n        skip_serializing_if = \"Vec::is_empty\"\n    )]\n");
                code.push_str(&format!("    pub {}: Vec<{}>,\n", ident(name), block_type));
            }
        }
    }
    code.push_str("}\n");
    items.push(code);

    items.push(format!(
        "impl {} {{\n    pub fn builder() -> {} {{\n        {}::default()\n    }}\n}}\n",
        struct_name, builder_name, builder_name
    ));

    // Builder
    let mut fields = String::new();
    let mut setters = String::new();
    let mut build = String::new();
    for (name, attr) in configurable(block) {
        let field = ident(name);
        let (param, convert) = setter_param(&attr.attr_type);
        fields.push_str(&format!("    {}: Option<{}>,\n", field, rust_type(&attr.attr_type)));
        setters.push_str(&format!(
            "\n    pub fn {}(mut self, value: {}) -> Self {{\n        self.{} = Some({});\n        self\n    }}\n",
            field, param, field, convert
        ));
        if attr.required {
            build.push_str(&required_field(&field, label, name));
        } else {
            build.push_str(&format!("            {}: self.{},\n", field, field));
        }
    }
    for (name, nested) in &block.block_types {
        let field = ident(name);
        let block_type = block_type_name(type_prefix, name);
        match nested.shape() {
            BlockShape::Optional | BlockShape::Required => {
                fields.push_str(&format!("    {}: Option<{}>,\n", field, block_type));
                setters.push_str(&format!(
                    "\n    pub fn {}(mut self, value: {}) -> Self {{\n        self.{} = Some(value);\n        self\n    }}\n",
                    field, block_type, field
                ));
                if nested.shape() == BlockShape::Required {
                    build.push_str(&required_field(&field, label, name));
                } else {
                    build.push_str(&format!("            {}: self.{},\n", field, field));
                }
            }
            BlockShape::Repeated { required } => {
                fields.push_str(&format!("    {}: Vec<{}>,\n", field, block_type));
                setters.push_str(&format!(
                    "\n    pub fn {}(mut self, value: Vec<{}>) -> Self {{\n        self.{} = value;\n        self\n    }}\n",
                    field, block_type, field
                ));
                if required {
                    build.push_str(&format!(
                        "            {}: non_empty(self.{}, \"{}\", \"{}\")?,\n",
                        field, field, label, name
                    ));
                } else {
                    build.push_str(&format!("            {}: self.{},\n", field, field));
                }
            }
        }
    }

    items.push(format!(
        "/// Builder for [`{}`]\n#[derive(Debug, Clone, Default)]\npub struct {} {{\n{}}}\n",
        struct_name, builder_name, fields
    ));
    items.push(format!(
        "impl {} {{{}\n    pub fn build(self) -> Result<{}, ConfigError> {{\n        Ok({} {{\n{}        }})\n    }}\n}}\n",
        builder_name, setters, struct_name, struct_name, build
    ));

    // Nested blocks
    for (name, nested) in &block.block_types {
        let block_type = block_type_name(type_prefix, name);
        emit_struct(
            items,
            &block_type,
            &format!("/// `{}` block of `{}`", name, label),
            &format!("{}.{}", label, name),
            &block_type,
            &nested.block,
        );
    }
}

fn required_field(field: &str, label: &str, name: &str) -> String {
    format!(
        "            {}: self\n                .{}\n                .ok_or_else(|| ConfigError::missing(\"{}\", \"{}\"))?,\n",
        field, field, label, name
    )
}

// =============================================================================
// Computed nested objects
// =============================================================================

fn emit_wrappers(items: &mut Vec<String>, tf_type: &str, type_name: &str, block: &Block) {
    for (name, attr) in &block.attributes {
        if !attr.is_read_only() {
            continue;
        }
        let base = block_type_name(type_name, name);
        if let Some(fields) = attr.attr_type.object_list_fields() {
            emit_list_wrapper(items, tf_type, name, &base, fields);
        } else if let TfType::Object(fields) = &attr.attr_type {
            emit_object_wrapper(
                items,
                &format!("/// Computed `{}` object of `{}`", name, tf_type),
                tf_type,
                name,
                &base,
                fields,
            );
        }
    }
}

fn emit_list_wrapper(
    items: &mut Vec<String>,
    tf_type: &str,
    path: &str,
    base: &str,
    fields: &BTreeMap<String, TfType>,
) {
    items.push(format!(
        r#"/// Computed `{path}` list of `{tf_type}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct {base}List {{
    inner: ComputedList,
}}

impl {base}List {{
    pub fn new(base: Reference) -> Self {{
        Self {{
            inner: ComputedList::new(base),
        }}
    }}

    pub fn get(&self, index: usize) -> {base}OutputReference {{
        {base}OutputReference {{
            inner: self.inner.get(index),
        }}
    }}

    pub fn reference(&self) -> &Reference {{
        self.inner.reference()
    }}
}}
"#
    ));
    emit_object_wrapper(
        items,
        &format!("/// Element of [`{}List`]", base),
        tf_type,
        path,
        base,
        fields,
    );
}

fn emit_object_wrapper(
    items: &mut Vec<String>,
    doc: &str,
    tf_type: &str,
    path: &str,
    base: &str,
    fields: &BTreeMap<String, TfType>,
) {
    let mut code = format!(
        "{}\n#[derive(Debug, Clone, PartialEq, Eq)]\npub struct {}OutputReference {{\n    inner: ComputedObject,\n}}\n\nimpl {}OutputReference {{",
        doc, base, base
    );
    for (name, t) in fields {
        let nested = block_type_name(base, name);
        if t.object_list_fields().is_some() {
            code.push_str(&format!(
                "\n    pub fn {}(&self) -> {}List {{\n        {}List::new(self.inner.attribute(\"{}\"))\n    }}\n",
                ident(name), nested, nested, name
            ));
        } else if matches!(t, TfType::Object(_)) {
            code.push_str(&format!(
                "\n    pub fn {}(&self) -> {}OutputReference {{\n        {}OutputReference {{\n            inner: ComputedObject::new(self.inner.attribute(\"{}\")),\n        }}\n    }}\n",
                ident(name), nested, nested, name
            ));
        } else {
            code.push_str(&format!(
                "\n    pub fn {}(&self) -> Reference {{\n        self.inner.attribute(\"{}\")\n    }}\n",
                ident(name), name
            ));
        }
    }
    code.push_str("\n    pub fn reference(&self) -> &Reference {\n        self.inner.reference()\n    }\n}\n");
    items.push(code);

    for (name, t) in fields {
        let nested = block_type_name(base, name);
        let nested_path = format!("{}.{}", path, name);
        if let Some(nested_fields) = t.object_list_fields() {
            emit_list_wrapper(items, tf_type, &nested_path, &nested, nested_fields);
        } else if let TfType::Object(nested_fields) = t {
            emit_object_wrapper(
                items,
                &format!("/// Computed `{}` object of `{}`", nested_path, tf_type),
                tf_type,
                &nested_path,
                &nested,
                nested_fields,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> Schema {
        serde_json::from_value(value).unwrap()
    }

    fn snapshot_copy_grant() -> Schema {
        schema(json!({
            "version": 0,
            "block": {
                "attributes": {
                    "arn": { "type": "string", "computed": true },
                    "id": { "type": "string", "optional": true, "computed": true },
                    "kms_key_id": { "type": "string", "optional": true, "computed": true },
                    "snapshot_copy_grant_name": { "type": "string", "required": true },
                    "tags": { "type": ["map", "string"], "optional": true },
                }
            }
        }))
    }

    #[test]
    fn test_header_and_imports() {
        let binding =
            generate_binding("aws_redshift_snapshot_copy_grant", &snapshot_copy_grant(), false)
                .unwrap();
        assert_eq!(binding.module, "redshift_snapshot_copy_grant");
        assert_eq!(binding.type_name, "RedshiftSnapshotCopyGrant");
        assert!(binding.code.starts_with(
            "//! redshift_snapshot_copy_grant bindings\n//!\n//! Generated from Terraform resource schema: aws_redshift_snapshot_copy_grant\n"
        ));
        assert!(binding.code.contains("use std::collections::BTreeMap;\n"));
        assert!(
            binding
                .code
                .contains("use tfbind_core::resource::{MetaArguments, Reference, ResourceId};\n")
        );
        assert!(binding.code.contains("use tfbind_core::value::Token;\n"));
        assert!(!binding.code.contains("tfbind_core::block"));
        assert!(!binding.code.contains("BlockSchema"));
    }

    #[test]
    fn test_accessors_follow_attribute_modes() {
        let code =
            generate_binding("aws_redshift_snapshot_copy_grant", &snapshot_copy_grant(), false)
                .unwrap()
                .code;
        // Required
        assert!(code.contains("pub fn snapshot_copy_grant_name(&self) -> &str {"));
        assert!(code.contains(
            "pub fn set_snapshot_copy_grant_name(&mut self, value: impl Into<String>) {"
        ));
        assert!(!code.contains("reset_snapshot_copy_grant_name"));
        // Optional
        assert!(code.contains("pub fn tags(&self) -> Option<&Token<BTreeMap<String, String>>> {"));
        assert!(code.contains(
            "pub fn set_tags(&mut self, value: impl Into<Token<BTreeMap<String, String>>>) {"
        ));
        assert!(code.contains("pub fn reset_tags(&mut self) {"));
        // Computed-only
        assert!(code.contains(
            "pub fn arn(&self) -> Reference {\n        self.interpolation_for_attribute(\"arn\")\n    }"
        ));
        assert!(!code.contains("pub arn:"));
        // Builder reports the missing attribute
        assert!(code.contains(
            ".ok_or_else(|| ConfigError::missing(\"aws_redshift_snapshot_copy_grant\", \"snapshot_copy_grant_name\"))?,"
        ));
    }

    #[test]
    fn test_non_string_attributes_accept_expressions() {
        let s = schema(json!({
            "block": {
                "attributes": {
                    "amount": { "type": "number", "required": true },
                    "encrypted": { "type": "bool", "optional": true },
                    "subnet_ids": { "type": ["set", "string"], "optional": true },
                    "name": { "type": "string", "optional": true },
                }
            }
        }));
        let code = generate_binding("aws_example_thing", &s, false).unwrap().code;
        assert!(code.contains("pub amount: Token<i64>,"));
        assert!(code.contains("pub fn amount(&self) -> &Token<i64> {"));
        assert!(code.contains("pub fn set_amount(&mut self, value: impl Into<Token<i64>>) {"));
        assert!(code.contains("pub encrypted: Option<Token<bool>>,"));
        assert!(code.contains("pub fn encrypted(&self) -> Option<&Token<bool>> {"));
        assert!(code.contains(
            "pub fn subnet_ids(mut self, value: impl Into<Token<Vec<String>>>) -> Self {\n        self.subnet_ids = Some(value.into());"
        ));
        assert!(code.contains("pub name: Option<String>,"));
        assert!(code.contains("use tfbind_core::value::Token;\n"));
    }

    #[test]
    fn test_enum_detection() {
        let s = schema(json!({
            "block": {
                "attributes": {
                    "period": {
                        "type": "string",
                        "optional": true,
                        "description": "The time period. Valid values are `daily`, `weekly`, `monthly`.",
                    },
                }
            }
        }));
        let code = generate_binding("aws_redshift_usage_limit", &s, false).unwrap().code;
        assert!(code.contains("const VALID_PERIOD: &[&str] = &[\"daily\", \"weekly\", \"monthly\"];"));
        assert!(code.contains("validate_enum(value, \"Period\", VALID_PERIOD)"));
        assert!(code.contains("validate: validate_period }"));
        assert!(code.contains(
            "use tfbind_core::schema::{AttributeSchema, AttributeType, Attributes, ResourceSchema, validate_enum};"
        ));
    }

    #[test]
    fn test_blocks() {
        let s = schema(json!({
            "block": {
                "attributes": {
                    "name": { "type": "string", "required": true },
                },
                "block_types": {
                    "ingress": {
                        "nesting_mode": "set",
                        "min_items": 1,
                        "block": {
                            "attributes": {
                                "cidr": { "type": "string", "optional": true },
                            }
                        }
                    },
                    "timeouts": {
                        "nesting_mode": "single",
                        "block": {
                            "attributes": {
                                "create": { "type": "string", "optional": true },
                            }
                        }
                    }
                }
            }
        }));
        let code = generate_binding("aws_redshift_security_group", &s, false)
            .unwrap()
            .code;
        assert!(code.contains("pub struct RedshiftSecurityGroupIngress {"));
        assert!(code.contains("pub ingress: Vec<RedshiftSecurityGroupIngress>,"));
        assert!(code.contains(
            "ingress: non_empty(self.ingress, \"aws_redshift_security_group\", \"ingress\")?,"
        ));
        assert!(code.contains("pub timeouts: Option<RedshiftSecurityGroupTimeouts>,"));
        assert!(code.contains("pub fn put_timeouts(&mut self, value: RedshiftSecurityGroupTimeouts) {"));
        assert!(code.contains("AttributeSchema::new(\"cidr\", types::cidr())"));
        assert!(code.contains("BlockSchema::new(\"ingress\", NestingMode::Set)"));
        // Blocks without required fields implement Default
        assert!(code.contains(
            "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n#[serde(deny_unknown_fields)]\npub struct RedshiftSecurityGroupTimeouts {"
        ));
        assert!(!code.contains("reset_ingress"));
    }

    #[test]
    fn test_computed_object_list() {
        let s = schema(json!({
            "block": {
                "attributes": {
                    "cluster_identifier": { "type": "string", "required": true },
                    "cluster_nodes": {
                        "type": ["list", ["object", {
                            "node_role": "string",
                            "private_ip_address": "string",
                        }]],
                        "computed": true,
                    },
                }
            }
        }));
        let code = generate_binding("aws_redshift_cluster", &s, true).unwrap().code;
        assert!(code.contains("pub struct DataAwsRedshiftClusterClusterNodesList {"));
        assert!(code.contains(
            "pub fn get(&self, index: usize) -> DataAwsRedshiftClusterClusterNodesOutputReference {"
        ));
        assert!(code.contains("pub fn node_role(&self) -> Reference {"));
        assert!(code.contains("ResourceSchema::data_source(\"aws_redshift_cluster\")"));
        assert!(code.contains("ResourceId::data_source(Self::TF_RESOURCE_TYPE, name)"));
        assert!(code.contains("use tfbind_core::block::{ComputedList, ComputedObject};"));
    }

    #[test]
    fn test_keyword_attribute() {
        let s = schema(json!({
            "block": {
                "attributes": {
                    "type": { "type": "string", "required": true },
                }
            }
        }));
        let code = generate_binding("aws_example_thing", &s, false).unwrap().code;
        assert!(code.contains("pub r#type: String,"));
        assert!(code.contains("pub fn set_type(&mut self, value: impl Into<String>) {"));
        assert!(code.contains("self.config.r#type = value.into();"));
    }

    #[test]
    fn test_map_nesting_is_rejected() {
        let s = schema(json!({
            "block": {
                "block_types": {
                    "rule": { "nesting_mode": "map", "block": {} }
                }
            }
        }));
        let err = generate_binding("aws_example_thing", &s, false).unwrap_err();
        assert!(err.to_string().contains("unsupported map nesting"));
    }

    #[test]
    fn test_generate_mod() {
        let s = snapshot_copy_grant();
        let bindings = vec![
            generate_binding("aws_redshift_snapshot_copy_grant", &s, false).unwrap(),
            generate_binding("aws_redshift_cluster", &s, true).unwrap(),
        ];
        let code = generate_mod(&bindings);
        assert!(code.contains(
            "pub mod data_aws_redshift_cluster;\npub mod redshift_snapshot_copy_grant;\n"
        ));
        assert!(code.contains(
            "pub use redshift_snapshot_copy_grant::{RedshiftSnapshotCopyGrant, RedshiftSnapshotCopyGrantConfig};"
        ));
    }
}
