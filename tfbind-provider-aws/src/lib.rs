//! tfbind AWS Provider
//!
//! Typed bindings for the AWS Redshift resources and data sources of the
//! Terraform AWS provider.
//!
//! ## Module Structure
//!
//! - `generated` - One binding module per Terraform type (tfbind-codegen output)
//! - `resources` - Resource type registry over the generated bindings
//! - `provider` - AwsProvider implementation
//! - `utils` - Helper functions for value normalization

pub mod generated;
pub mod provider;
pub mod resources;
pub mod utils;

// Re-export main types
pub use generated::*;
pub use provider::AwsProvider;
pub use utils::normalize_region;
