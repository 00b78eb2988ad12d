//! Shared stores for reflected types and their compiled accessors.
//!
//! - [`TypeRegistry`]: type lookup by `TypeId`, name or path.
//! - [`AccessorCache`]: compiled accessors keyed by declaring type and
//!   member name.

// -----------------------------------------------------------------------------
// Modules

mod accessor_cache;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use accessor_cache::{AccessorCache, MemberAccessors};
pub use type_registry::TypeRegistry;
