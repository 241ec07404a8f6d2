//! tfbind Codegen
//!
//! Generates typed Rust bindings from `terraform providers schema -json` output.

pub mod emit;
pub mod naming;
pub mod terraform;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use similar::TextDiff;

use emit::{generate_binding, generate_mod};
use terraform::ProviderSchema;

/// Default provider address in the schema document
pub const DEFAULT_PROVIDER: &str = "registry.terraform.io/hashicorp/aws";

/// A file to be written to the output directory
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// File name relative to the output directory (e.g., "redshift_cluster.rs")
    pub file_name: String,
    pub code: String,
}

/// Generate one module per selected type plus `mod.rs`.
/// Types are selected when their name starts with one of `prefixes`.
pub fn generate_provider(provider: &ProviderSchema, prefixes: &[String]) -> Result<Vec<GeneratedFile>> {
    let selected = |name: &str| prefixes.iter().any(|p| name.starts_with(p.as_str()));

    let mut bindings = Vec::new();
    for (name, schema) in provider.resource_schemas.iter().filter(|(n, _)| selected(n.as_str())) {
        bindings.push(
            generate_binding(name, schema, false)
                .with_context(|| format!("Failed to generate resource {}", name))?,
        );
    }
    for (name, schema) in provider.data_source_schemas.iter().filter(|(n, _)| selected(n.as_str())) {
        bindings.push(
            generate_binding(name, schema, true)
                .with_context(|| format!("Failed to generate data source {}", name))?,
        );
    }

    if bindings.is_empty() {
        bail!("No types match prefixes: {}", prefixes.join(", "));
    }
    log::info!("generated {} bindings", bindings.len());

    let mut files: Vec<GeneratedFile> = bindings
        .iter()
        .map(|b| GeneratedFile {
            file_name: format!("{}.rs", b.module),
            code: b.code.clone(),
        })
        .collect();
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    files.push(GeneratedFile {
        file_name: "mod.rs".to_string(),
        code: generate_mod(&bindings),
    });
    Ok(files)
}

/// Write generated files into `dir`, creating it if needed
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.code)
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
        eprintln!("Generated: {}", path.display());
    }
    Ok(())
}

/// Compare generated files with the contents of `dir`.
/// Returns one report (a unified diff or a stale file notice) per difference.
pub fn check_files(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<String>> {
    let mut reports = Vec::new();

    for file in files {
        let path = dir.join(&file.file_name);
        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read file: {}", path.display()));
            }
        };
        if existing != file.code {
            let name = path.display().to_string();
            let diff = TextDiff::from_lines(&existing, &file.code)
                .unified_diff()
                .header(&name, &name)
                .to_string();
            reports.push(diff);
        }
    }

    if dir.is_dir() {
        let expected: BTreeSet<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        let entries =
            fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let mut stale = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(".rs") && !expected.contains(name.as_str()) {
                stale.push(format!("Stale file: {}", entry.path().display()));
            }
        }
        stale.sort();
        reports.extend(stale);
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> ProviderSchema {
        serde_json::from_value(json!({
            "resource_schemas": {
                "aws_redshift_subnet_group": {
                    "block": {
                        "attributes": {
                            "name": { "type": "string", "required": true },
                            "subnet_ids": { "type": ["set", "string"], "required": true },
                        }
                    }
                },
                "aws_s3_bucket": {
                    "block": { "attributes": { "bucket": { "type": "string", "optional": true } } }
                }
            },
            "data_source_schemas": {
                "aws_redshift_subnet_group": {
                    "block": {
                        "attributes": {
                            "arn": { "type": "string", "computed": true },
                            "name": { "type": "string", "required": true },
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_prefix_selection() {
        let files = generate_provider(&provider(), &["aws_redshift".to_string()]).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["data_aws_redshift_subnet_group.rs", "redshift_subnet_group.rs", "mod.rs"]
        );
    }

    #[test]
    fn test_no_matching_types() {
        let err = generate_provider(&provider(), &["aws_glue".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "No types match prefixes: aws_glue");
    }

    #[test]
    fn test_write_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate_provider(&provider(), &["aws_redshift".to_string()]).unwrap();

        // Nothing written yet: every file drifts
        assert_eq!(check_files(dir.path(), &files).unwrap().len(), 3);

        write_files(dir.path(), &files).unwrap();
        assert!(check_files(dir.path(), &files).unwrap().is_empty());

        let target = dir.path().join("redshift_subnet_group.rs");
        fs::write(&target, "// edited by hand\n").unwrap();
        fs::write(dir.path().join("old_binding.rs"), "").unwrap();
        let reports = check_files(dir.path(), &files).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].contains("-// edited by hand"));
        assert!(reports[0].contains("+//! redshift_subnet_group bindings"));
        assert!(reports[1].starts_with("Stale file: "));
        assert!(reports[1].ends_with("old_binding.rs"));
    }
}
