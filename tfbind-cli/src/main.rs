use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use similar::{ChangeTag, TextDiff};

use tfbind_core::config::SynthConfig;
use tfbind_core::provider::Provider;
use tfbind_core::resource::ElementKind;
use tfbind_core::schema::{AttributeSchema, BlockSchema, ResourceSchema};
use tfbind_core::stack::Stack;
use tfbind_provider_aws::{AwsProvider, normalize_region};

#[derive(Parser)]
#[command(name = "tfbind")]
#[command(about = "Typed Terraform bindings for AWS Redshift", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the Terraform types that have bindings
    Schemas {
        /// List data sources instead of resources
        #[arg(long)]
        data: bool,
    },
    /// Show the attributes and blocks of a Terraform type
    Describe {
        /// Terraform type (e.g., aws_redshift_cluster)
        resource_type: String,

        /// Describe the data source of that name
        #[arg(long)]
        data: bool,
    },
    /// Validate a Terraform JSON document through the typed bindings
    Validate {
        /// Path to .tf.json file
        #[arg(default_value = "main.tf.json")]
        file: PathBuf,
    },
    /// Re-synthesize a Terraform JSON document through the typed bindings
    Synth {
        /// Path to .tf.json file
        #[arg(default_value = "main.tf.json")]
        file: PathBuf,

        /// Write the document to this file (stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Omit the "//" metadata block
        #[arg(long)]
        no_metadata: bool,

        /// Region of the aws provider block (defaults to the document's)
        #[arg(long)]
        region: Option<String>,

        /// Show the changes made to the output file
        #[arg(long, requires = "output")]
        diff: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schemas { data } => run_schemas(data),
        Commands::Describe {
            resource_type,
            data,
        } => run_describe(&resource_type, data),
        Commands::Validate { file } => run_validate(&file),
        Commands::Synth {
            file,
            output,
            no_metadata,
            region,
            diff,
        } => run_synth(&file, output.as_deref(), no_metadata, region.as_deref(), diff),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn element_kind(data: bool) -> ElementKind {
    if data {
        ElementKind::DataSource
    } else {
        ElementKind::Resource
    }
}

fn run_schemas(data: bool) -> Result<(), String> {
    let kind = element_kind(data);
    let mut names: Vec<&'static str> = AwsProvider::new()
        .resource_types()
        .iter()
        .filter(|t| t.kind() == kind)
        .map(|t| t.name())
        .collect();
    names.sort();

    println!("{}", format!("{} {} type(s):", names.len(), kind).cyan().bold());
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

fn run_describe(resource_type: &str, data: bool) -> Result<(), String> {
    let kind = element_kind(data);
    let Some(found) = AwsProvider::new().find_type(kind, resource_type) else {
        return Err(format!("Unknown {} type '{}'", kind, resource_type));
    };
    print!("{}", describe_schema(&found.schema()));
    Ok(())
}

/// Render a schema as an indented listing
fn describe_schema(schema: &ResourceSchema) -> String {
    let mut out = format!("{} ({})\n", schema.resource_type, schema.kind);
    if let Some(description) = &schema.description {
        out.push_str(&format!("  {}\n", description));
    }
    describe_body(&mut out, 1, &schema.attributes, &schema.blocks);
    out
}

fn describe_body<'a>(
    out: &mut String,
    depth: usize,
    attributes: impl IntoIterator<Item = (&'a String, &'a AttributeSchema)>,
    blocks: impl IntoIterator<Item = (&'a String, &'a BlockSchema)>,
) {
    let indent = "  ".repeat(depth);
    for (name, attr) in attributes {
        out.push_str(&format!(
            "{}{}: {} [{}]\n",
            indent,
            name,
            attr.attr_type,
            attribute_flags(attr)
        ));
    }
    for (name, block) in blocks {
        let max = block
            .max_items
            .map(|m| m.to_string())
            .unwrap_or_else(|| "*".to_string());
        out.push_str(&format!(
            "{}{} {{ {}, {}..{} }}\n",
            indent, name, block.nesting, block.min_items, max
        ));
        describe_body(out, depth + 1, &block.attributes, &block.blocks);
    }
}

fn attribute_flags(attr: &AttributeSchema) -> String {
    let mut flags = Vec::new();
    if attr.required {
        flags.push("required");
    } else if attr.is_read_only() {
        flags.push("computed");
    } else {
        flags.push("optional");
        if attr.computed {
            flags.push("computed");
        }
    }
    if attr.sensitive {
        flags.push("sensitive");
    }
    flags.join(", ")
}

/// Derive the stack name from a document path
/// - infra/analytics.tf.json -> analytics
/// - main.json -> main
fn derive_stack_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("stack");
    file_name
        .strip_suffix(".tf.json")
        .or_else(|| file_name.strip_suffix(".json"))
        .unwrap_or(file_name)
        .to_string()
}

fn read_document(file: &Path) -> Result<Value, String> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("Parse error: {}", e))
}

/// Load every element of the document into a stack through the typed bindings.
/// `region` overrides the region of the default `aws` provider block.
fn load_stack(file: &Path, config: SynthConfig, region: Option<&str>) -> Result<Stack, String> {
    let document = read_document(file)?;
    let provider = AwsProvider::new();

    let mut stack = Stack::new(derive_stack_name(file)).with_config(config);
    stack
        .load_document(&provider, &document)
        .map_err(|e| e.to_string())?;

    let default_block = stack
        .providers()
        .iter()
        .find(|p| p.name == provider.name() && p.alias.is_none())
        .cloned();
    match (default_block, region) {
        (Some(mut block), Some(region)) => {
            block.arguments.insert(
                "region".to_string(),
                Value::String(normalize_region(region)),
            );
            stack.add_provider(block);
        }
        (None, region) => {
            let provider = match region {
                Some(region) => provider.with_region(region),
                None => provider,
            };
            stack.add_provider(provider.provider_config());
        }
        (Some(_), None) => {}
    }
    log::debug!("loaded {} element(s) from {}", stack.len(), file.display());
    Ok(stack)
}

fn run_validate(file: &Path) -> Result<(), String> {
    println!("{}", "Validating...".cyan());

    let stack = load_stack(file, SynthConfig::default(), None)?;
    stack.validate().map_err(|e| e.to_string())?;

    println!(
        "{}",
        format!("✓ {} elements validated successfully.", stack.len())
            .green()
            .bold()
    );
    for element in stack.elements() {
        println!("  • {}", element.terraform_address());
    }
    Ok(())
}

fn run_synth(
    file: &Path,
    output: Option<&Path>,
    no_metadata: bool,
    region: Option<&str>,
    show_diff: bool,
) -> Result<(), String> {
    let config = SynthConfig {
        include_metadata: !no_metadata,
        ..Default::default()
    };
    let stack = load_stack(file, config, region)?;
    let document = stack.synth_to_string().map_err(|e| e.to_string())? + "\n";

    let Some(output) = output else {
        print!("{}", document);
        return Ok(());
    };

    let existing = match fs::read_to_string(output) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(format!("Failed to read {}: {}", output.display(), e)),
    };
    if existing == document {
        println!("{} {}", "Up to date:".green(), output.display());
        return Ok(());
    }
    if show_diff {
        print_diff(output, &existing, &document);
    }
    fs::write(output, &document)
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    println!("{} {}", "Synthesized:".green(), output.display());
    Ok(())
}

fn print_diff(file: &Path, original: &str, synthesized: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, synthesized);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_document(dir: &Path, name: &str, document: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
        path
    }

    fn analytics_document() -> Value {
        json!({
            "provider": { "aws": [{ "region": "eu-west-1" }] },
            "resource": {
                "aws_redshift_cluster": {
                    "main": {
                        "cluster_identifier": "analytics",
                        "node_type": "ra3.xlplus",
                        "logging": [{ "enable": true, "log_destination_type": "cloudwatch" }]
                    }
                },
                "aws_redshift_snapshot_schedule_association": {
                    "main": {
                        "cluster_identifier": "${aws_redshift_cluster.main.id}",
                        "schedule_identifier": "nightly",
                        "depends_on": ["aws_redshift_cluster.main"]
                    }
                }
            },
            "data": {
                "aws_redshift_service_account": { "main": {} }
            }
        })
    }

    #[test]
    fn test_derive_stack_name() {
        assert_eq!(derive_stack_name(Path::new("infra/analytics.tf.json")), "analytics");
        assert_eq!(derive_stack_name(Path::new("main.json")), "main");
        assert_eq!(derive_stack_name(Path::new("stack")), "stack");
    }

    #[test]
    fn test_describe_schema() {
        let provider = AwsProvider::new();
        let cluster = provider
            .find_type(ElementKind::Resource, "aws_redshift_cluster")
            .unwrap();
        let text = describe_schema(&cluster.schema());
        assert!(text.starts_with("aws_redshift_cluster (resource)\n"));
        assert!(text.contains("\n  cluster_identifier: String [required]\n"));
        assert!(text.contains("\n  arn: String [computed]\n"));
        assert!(text.contains("\n  master_password: String [optional, sensitive]\n"));
        assert!(text.contains("\n  cluster_type: ClusterType [optional, computed]\n"));
        assert!(text.contains("\n  logging { list, 0..1 }\n    bucket_name: String [optional"));
    }

    #[test]
    fn test_attribute_flags() {
        use tfbind_core::schema::AttributeType;

        let attr = AttributeSchema::new("id", AttributeType::String).optional_computed();
        assert_eq!(attribute_flags(&attr), "optional, computed");
        let attr = AttributeSchema::new("password", AttributeType::String)
            .required()
            .sensitive();
        assert_eq!(attribute_flags(&attr), "required, sensitive");
    }

    #[test]
    fn test_load_stack_uses_document_region() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(dir.path(), "analytics.tf.json", &analytics_document());

        let stack = load_stack(&file, SynthConfig::default(), None).unwrap();
        assert_eq!(stack.name(), "analytics");
        assert_eq!(stack.len(), 3);
        assert!(stack.validate().is_ok());

        let document = stack.synth().unwrap();
        assert_eq!(document["provider"]["aws"], json!([{ "region": "eu-west-1" }]));
        assert_eq!(document["//"]["metadata"]["stackName"], "analytics");
    }

    #[test]
    fn test_load_stack_adds_default_provider() {
        let dir = tempfile::tempdir().unwrap();
        let mut document = analytics_document();
        document.as_object_mut().unwrap().remove("provider");
        let file = write_document(dir.path(), "analytics.tf.json", &document);

        let stack = load_stack(&file, SynthConfig::default(), None).unwrap();
        assert_eq!(stack.synth().unwrap()["provider"]["aws"], json!([{}]));

        let stack = load_stack(&file, SynthConfig::default(), Some("us_east_2")).unwrap();
        assert_eq!(
            stack.synth().unwrap()["provider"]["aws"],
            json!([{ "region": "us-east-2" }])
        );
    }

    #[test]
    fn test_synth_keeps_every_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut document = analytics_document();
        let root = document.as_object_mut().unwrap();
        root.insert(
            "provider".to_string(),
            json!({
                "aws": [
                    { "region": "${var.aws_region}" },
                    { "alias": "west", "region": "us-west-2" }
                ]
            }),
        );
        root.insert(
            "terraform".to_string(),
            json!({
                "required_version": ">= 1.5",
                "required_providers": { "aws": { "source": "hashicorp/aws", "version": "~> 5.0" } }
            }),
        );
        root.insert(
            "variable".to_string(),
            json!({ "aws_region": { "type": "string", "default": "eu-west-1" } }),
        );
        root.insert("locals".to_string(), json!({ "team": "analytics" }));
        root.insert(
            "output".to_string(),
            json!({ "cluster_arn": { "value": "${aws_redshift_cluster.main.arn}" } }),
        );
        root.insert(
            "module".to_string(),
            json!({ "network": { "source": "./network" } }),
        );
        document["resource"]["aws_redshift_cluster"]["main"]["provider"] = json!("aws.west");
        document["resource"]["aws_redshift_cluster"]["main"]["depends_on"] =
            json!(["module.network"]);
        let file = write_document(dir.path(), "analytics.tf.json", &document);
        let output = dir.path().join("out.tf.json");

        run_synth(&file, Some(&output), true, None, false).unwrap();
        let written: Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written["provider"]["aws"],
            json!([
                { "region": "${var.aws_region}" },
                { "alias": "west", "region": "us-west-2" }
            ])
        );
        assert_eq!(written["terraform"]["required_version"], ">= 1.5");
        assert_eq!(
            written["terraform"]["required_providers"]["aws"],
            json!({ "source": "hashicorp/aws", "version": "~> 5.0" })
        );
        for section in ["variable", "locals", "output", "module"] {
            assert_eq!(written[section], document[section], "{}", section);
        }
        assert_eq!(
            written["resource"]["aws_redshift_cluster"]["main"]["provider"],
            "aws.west"
        );
    }

    #[test]
    fn test_synth_rejects_unknown_provider_alias() {
        let dir = tempfile::tempdir().unwrap();
        let mut document = analytics_document();
        document["resource"]["aws_redshift_cluster"]["main"]["provider"] = json!("aws.east");
        let file = write_document(dir.path(), "analytics.tf.json", &document);

        let err = run_synth(&file, None, false, None, false).unwrap_err();
        assert_eq!(
            err,
            "aws_redshift_cluster.main: provider 'aws.east' has no provider block"
        );
    }

    #[test]
    fn test_synth_reports_unreadable_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(dir.path(), "analytics.tf.json", &analytics_document());
        let output = dir.path().join("out.tf.json");
        fs::create_dir(&output).unwrap();

        let err = run_synth(&file, Some(&output), true, None, false).unwrap_err();
        assert!(err.starts_with("Failed to read "), "{}", err);
        assert!(output.is_dir());
    }

    #[test]
    fn test_load_stack_reports_every_error() {
        let dir = tempfile::tempdir().unwrap();
        let document = json!({
            "resource": {
                "aws_redshift_cluster": { "main": { "node_type": "ra3.xlplus" } },
                "aws_redshift_widget": { "main": {} }
            }
        });
        let file = write_document(dir.path(), "broken.tf.json", &document);

        let err = load_stack(&file, SynthConfig::default(), None).unwrap_err();
        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("cluster_identifier"));
        assert_eq!(lines[1], "Unknown resource type 'aws_redshift_widget'");
    }

    #[test]
    fn test_synth_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_document(dir.path(), "analytics.tf.json", &analytics_document());
        let output = dir.path().join("out.tf.json");

        run_synth(&file, Some(&output), true, Some("ap_northeast_1"), false).unwrap();
        let written: Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(written.get("//").is_none());
        assert_eq!(written["provider"]["aws"], json!([{ "region": "ap-northeast-1" }]));
        assert_eq!(
            written["resource"]["aws_redshift_cluster"]["main"]["logging"],
            json!({ "enable": true, "log_destination_type": "cloudwatch" })
        );
        assert_eq!(
            written["resource"]["aws_redshift_snapshot_schedule_association"]["main"]["depends_on"],
            json!(["aws_redshift_cluster.main"])
        );

        // A second run leaves the file unchanged
        let before = fs::read_to_string(&output).unwrap();
        run_synth(&file, Some(&output), true, Some("ap_northeast_1"), false).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), before);
    }

    #[test]
    fn test_synth_rejects_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut document = analytics_document();
        document["resource"]["aws_redshift_cluster"]["main"]["cluster_type"] = json!("huge");
        let file = write_document(dir.path(), "analytics.tf.json", &document);

        let err = run_synth(&file, None, false, None, false).unwrap_err();
        assert!(err.contains("Invalid ClusterType 'huge'"));
    }
}
