use core::any::Any;

use crate::access::AccessError;
use crate::value::ErasedValue;

// -----------------------------------------------------------------------------
// Reflect

/// Generic, name-keyed access to the members of a type.
///
/// This is the slow primitive: every call matches `member` against the
/// member names of the type. Compiled accessors only fall back to it for
/// types whose fields cannot be referenced directly (`#[repr(packed)]`).
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect); manual
/// implementations are possible but rarely needed.
///
/// # Examples
///
/// ```
/// use ya_reflect::{Reflect, derive::Reflect, value::ErasedValue};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut p = Point { x: 1, y: 2 };
/// p.reflect_set("y", ErasedValue::new(5_i32)).unwrap();
///
/// let y = p.reflect_get("y").unwrap();
/// assert_eq!(y.take::<i32>().unwrap(), 5);
/// assert!(p.reflect_get("z").is_err());
/// ```
pub trait Reflect: Any + Send + Sync {
    /// Reads the member named `member`.
    ///
    /// Returns [`AccessError::MissingMember`] if the type has no readable
    /// member with that name.
    fn reflect_get(&self, member: &str) -> Result<ErasedValue, AccessError>;

    /// Writes `value` to the member named `member`.
    ///
    /// Returns [`AccessError::MissingMember`] if the type has no writable
    /// member with that name, and [`AccessError::TypeMismatch`] if `value`
    /// has the wrong type. `self` is unchanged on error.
    fn reflect_set(&mut self, member: &str, value: ErasedValue) -> Result<(), AccessError>;
}
