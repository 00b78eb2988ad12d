use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), allowing
/// access to the member list without an instance of the type.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A {
///     value: u32,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert_eq!(info.len(), 1);
/// assert_eq!(info.ty().type_name(), "A");
/// ```
pub trait Typed: Reflect {
    /// Returns the type information, built on first access.
    fn type_info() -> &'static TypeInfo;
}
