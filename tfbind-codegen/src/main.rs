//! Terraform Schema to tfbind Binding Code Generator
//!
//! This tool generates typed Rust bindings for tfbind-provider-aws
//! from the JSON schema printed by Terraform.
//!
//! Usage:
//!   # Generate from stdin
//!   terraform providers schema -json | tfbind-codegen --output-dir src/generated
//!
//!   # Generate from file
//!   tfbind-codegen --file schemas/aws_redshift.json \
//!     --output-dir tfbind-provider-aws/src/generated
//!
//!   # Verify checked-in bindings are up to date
//!   tfbind-codegen --file schemas/aws_redshift.json \
//!     --output-dir tfbind-provider-aws/src/generated --check

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tfbind_codegen::terraform::ProviderSchemas;
use tfbind_codegen::{DEFAULT_PROVIDER, check_files, generate_provider, write_files};

#[derive(Parser, Debug)]
#[command(name = "tfbind-codegen")]
#[command(about = "Generate typed Terraform bindings from provider schemas")]
struct Args {
    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Provider address in the schema document
    #[arg(long, default_value = DEFAULT_PROVIDER)]
    provider: String,

    /// Generate types whose name starts with this prefix (repeatable)
    #[arg(long = "prefix", default_value = "aws_redshift")]
    prefixes: Vec<String>,

    /// Output directory (writes to stdout if not specified)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Compare with the files in the output directory instead of writing them
    #[arg(long, requires = "output_dir")]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Read schema JSON
    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    // Parse schema
    let schemas: ProviderSchemas =
        serde_json::from_str(&schema_json).context("Failed to parse Terraform provider schema")?;
    let provider = schemas
        .provider_schemas
        .get(&args.provider)
        .with_context(|| format!("Provider '{}' not found in schema", args.provider))?;

    // Generate code
    let files = generate_provider(provider, &args.prefixes)?;

    // Output
    match &args.output_dir {
        Some(dir) if args.check => {
            let reports = check_files(dir, &files)?;
            if !reports.is_empty() {
                for report in &reports {
                    println!("{}", report);
                }
                eprintln!(
                    "{} generated file(s) out of date in {}",
                    reports.len(),
                    dir.display()
                );
                std::process::exit(1);
            }
            eprintln!("Up to date: {}", dir.display());
        }
        Some(dir) => write_files(dir, &files)?,
        None => {
            for file in &files {
                println!("// ===== {} =====", file.file_name);
                println!("{}", file.code);
            }
        }
    }

    Ok(())
}
