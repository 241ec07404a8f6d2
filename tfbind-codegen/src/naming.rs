//! Naming rules for generated modules, types and identifiers

use std::collections::HashSet;

use heck::ToPascalCase;
use regex::Regex;

/// Rust keywords that cannot be used as plain identifiers
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Methods every generated binding already has
const BINDING_METHODS: &[&str] = &[
    "address",
    "config",
    "depends_on",
    "from_json",
    "interpolation_for_attribute",
    "into_config",
    "kind",
    "meta",
    "meta_mut",
    "new",
    "schema",
    "synthesize_attributes",
    "terraform_address",
    "validate",
];

/// Module name of a generated binding
/// - resource `aws_redshift_cluster` -> `redshift_cluster`
/// - data source `aws_redshift_cluster` -> `data_aws_redshift_cluster`
pub fn module_name(tf_type: &str, data_source: bool) -> String {
    if data_source {
        format!("data_{}", tf_type)
    } else {
        tf_type.strip_prefix("aws_").unwrap_or(tf_type).to_string()
    }
}

/// Type name of a generated binding (e.g., `RedshiftCluster`, `DataAwsRedshiftCluster`)
pub fn type_name(tf_type: &str, data_source: bool) -> String {
    module_name(tf_type, data_source).to_pascal_case()
}

/// Identifier for a field or method (`type` -> `r#type`)
pub fn ident(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Getter name on a binding, avoiding its built-in methods
pub fn getter_name(name: &str) -> String {
    if BINDING_METHODS.contains(&name) {
        format!("{}_attribute", name)
    } else {
        ident(name)
    }
}

/// Escape text for a Rust string literal on one line
pub fn escape(text: &str) -> String {
    one_line(text).replace('\\', "\\\\").replace('"', "\\\"")
}

/// Collapse a description onto a single line
pub fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract enum values from a description such as
/// "Valid values are `s3`, `cloudwatch`."
pub fn extract_enum_values(description: &str) -> Option<Vec<String>> {
    let sentence = Regex::new(r"Valid values are((?:[^`.]*`[^`]+`)+)").ok()?;
    let value = Regex::new(r"`([^`]+)`").ok()?;

    let captures = sentence.captures(description)?;
    let mut seen = HashSet::new();
    let values: Vec<String> = value
        .captures_iter(&captures[1])
        .map(|cap| cap[1].to_string())
        .filter(|v| seen.insert(v.clone()))
        .collect();

    // A single value is a default or an example, not an enum
    if values.len() >= 2 { Some(values) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_and_type_names() {
        assert_eq!(module_name("aws_redshift_cluster", false), "redshift_cluster");
        assert_eq!(type_name("aws_redshift_cluster", false), "RedshiftCluster");
        assert_eq!(
            module_name("aws_redshift_cluster", true),
            "data_aws_redshift_cluster"
        );
        assert_eq!(type_name("aws_redshift_cluster", true), "DataAwsRedshiftCluster");
        assert_eq!(
            type_name("aws_redshiftserverless_workgroup", false),
            "RedshiftserverlessWorkgroup"
        );
    }

    #[test]
    fn test_keyword_identifiers() {
        assert_eq!(ident("type"), "r#type");
        assert_eq!(ident("cluster_type"), "cluster_type");
        assert_eq!(getter_name("address"), "address_attribute");
        assert_eq!(getter_name("match"), "r#match");
        assert_eq!(getter_name("port"), "port");
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("The \"name\" of\n  the group\\"),
            "The \\\"name\\\" of the group\\\\"
        );
    }

    #[test]
    fn test_extract_enum_values() {
        let values =
            extract_enum_values("The log destination type. Valid values are `s3`, `cloudwatch`.");
        assert_eq!(
            values,
            Some(vec!["s3".to_string(), "cloudwatch".to_string()])
        );
    }

    #[test]
    fn test_extract_enum_values_with_and() {
        let values = extract_enum_values(
            "The action to take. Valid values are `log`, `emit-metric` and `disable`. Default is `log`.",
        );
        assert_eq!(
            values,
            Some(vec![
                "log".to_string(),
                "emit-metric".to_string(),
                "disable".to_string()
            ])
        );
    }

    #[test]
    fn test_extract_enum_values_requires_two() {
        assert_eq!(extract_enum_values("Valid values are `true`."), None);
        assert_eq!(extract_enum_values("Defaults to `single-node`."), None);
        assert_eq!(extract_enum_values("A plain description."), None);
    }
}
