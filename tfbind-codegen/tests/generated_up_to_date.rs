use std::fs;
use std::path::Path;

use tfbind_codegen::terraform::ProviderSchemas;
use tfbind_codegen::{DEFAULT_PROVIDER, check_files, generate_provider};

#[test]
fn checked_in_bindings_match_generator_output() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let schema = fs::read_to_string(root.join("schemas/aws_redshift.json")).unwrap();
    let schemas: ProviderSchemas = serde_json::from_str(&schema).unwrap();
    let provider = &schemas.provider_schemas[DEFAULT_PROVIDER];

    let files = generate_provider(provider, &["aws_redshift".to_string()]).unwrap();
    assert_eq!(files.len(), 34);

    let reports =
        check_files(&root.join("tfbind-provider-aws/src/generated"), &files).unwrap();
    assert!(
        reports.is_empty(),
        "generated bindings are stale, rerun tfbind-codegen:\n{}",
        reports.join("\n")
    );
}
