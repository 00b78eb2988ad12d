//! The uniform boxed value passed through compiled accessors.
//!
//! - [`ErasedValue`]: an owned, type-erased value with checked unboxing.

// -----------------------------------------------------------------------------
// Modules

mod erased;

// -----------------------------------------------------------------------------
// Exports

pub use erased::ErasedValue;
