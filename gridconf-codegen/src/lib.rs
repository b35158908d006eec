//! Java source builder for the gridconf configuration generator.
//!
//! This crate provides the primitives the configuration generators emit
//! code through:
//!
//! - [`JavaBuilder`] - Indentation-aware text accumulator with a
//!   deduplicating import registry
//! - [`ImportRegistry`] - Short-name to fully-qualified-name import map
//! - [`JavaFile`] - Composition of provenance comment, package declaration,
//!   import block, and body

mod builder;
mod imports;
mod java_file;

pub use builder::JavaBuilder;
pub use imports::ImportRegistry;
pub use java_file::JavaFile;
