//! tfbind Core
//!
//! Typed-binding model for Terraform resources: addresses and references,
//! attribute schemas, expression-aware values, the element capability
//! and stack synthesis

pub mod block;
pub mod config;
pub mod element;
pub mod error;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod stack;
pub mod value;

pub use config::{ProviderConfig, SynthConfig};
pub use element::TerraformElement;
pub use error::ConfigError;
pub use resource::{ElementKind, MetaArguments, Reference, ResourceId};
pub use stack::{Stack, StackError};
pub use value::Token;
