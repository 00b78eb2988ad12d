//! Compiled, type-erased member accessors.
//!
//! Given a [`MemberInfo`](crate::info::MemberInfo), the `compile_*`
//! functions build a [`Getter`] and/or a [`Setter`] once; each call then
//! costs a `TypeId` check plus the member read or write, with no lookup by
//! name.
//!
//! ```
//! use ya_reflect::{derive::Reflect, info::Typed, value::ErasedValue};
//! use ya_reflect::access::{compile_getter, compile_setter};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let y = Point::type_info().member("y").unwrap();
//! let get = compile_getter(y).unwrap();
//! let set = compile_setter(y).unwrap();
//!
//! let mut p = Point { x: 1, y: 2 };
//! set.set(&mut p, ErasedValue::new(5_i32)).unwrap();
//!
//! assert_eq!(get.get(&p).unwrap().take::<i32>().unwrap(), 5);
//! assert_eq!(p.x, 1);
//! ```
//!
//! Fields of `#[repr(packed)]` types may be unaligned and are never
//! referenced directly: their accessors go through the type's
//! [`Reflect`](crate::Reflect) impl and report [`AccessPath::Fallback`].

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod compile;
mod error;
mod fallback;
mod field;
mod property;
mod value_ops;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{AccessPath, Getter, Setter};
pub use compile::{compile_field_getter, compile_field_setter};
pub use compile::{compile_getter, compile_setter};
pub use compile::{compile_property_getter, compile_property_setter};
pub use error::AccessError;

pub(crate) use accessor::AccessorMeta;
pub(crate) use property::{PropertyFns, TypedPropertyFns};
pub(crate) use value_ops::ValueOps;
