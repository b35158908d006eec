//! Static configuration metadata for the gridconf generator.
//!
//! Maps the symbolic option names used by the web client (eviction policy
//! kinds, database dialects, marshallers, store factories) to the
//! target-framework class names and field schemas the generators emit.
//! All tables are immutable `&'static` data resolved at compile time.

mod cluster;
mod descriptor;
mod error;
mod eviction;
mod marshaller;
mod store;

pub use cluster::{ATOMIC_CONFIGURATION, SWAP_SPACE_SPI, TRANSACTION_CONFIGURATION};
pub use descriptor::{ClassDescriptor, FieldDescriptor, FieldKind};
pub use error::{Error, Result};
pub use eviction::EvictionPolicyKind;
pub use marshaller::MarshallerKind;
pub use store::{DatabaseKind, StoreFactoryKind};
