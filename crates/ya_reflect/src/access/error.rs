use alloc::string::{String, ToString};
use core::any::TypeId;

use thiserror::Error;

use crate::value::ErasedValue;

// -----------------------------------------------------------------------------
// AccessError

/// An error returned by a compiled [`Getter`](crate::access::Getter) or
/// [`Setter`](crate::access::Setter), or by [`Reflect`](crate::Reflect).
///
/// Errors are reported, never retried. A failed call leaves the target
/// instance unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The instance is not of the declaring type of the member.
    #[error("instance of {found:?} is not a `{expected}`")]
    InvalidTarget {
        /// The declaring type the accessor was compiled for.
        expected: &'static str,
        /// The type of the instance that was passed in.
        found: TypeId,
    },
    /// The value passed to a setter is not of the member type.
    #[error("member `{member}` holds `{expected}`, got a value of type `{found}`")]
    TypeMismatch {
        member: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// Name-keyed access named a member the type does not have, or one
    /// that cannot be accessed in the requested direction.
    #[error("type `{type_name}` has no accessible member `{member}`")]
    MissingMember {
        type_name: &'static str,
        member: String,
    },
}

impl AccessError {
    #[inline]
    pub const fn invalid_target(expected: &'static str, found: TypeId) -> Self {
        Self::InvalidTarget { expected, found }
    }

    #[inline]
    pub fn type_mismatch(member: &'static str, expected: &'static str, found: &ErasedValue) -> Self {
        Self::TypeMismatch {
            member,
            expected,
            found: found.type_name(),
        }
    }

    #[inline]
    pub fn missing_member(type_name: &'static str, member: &str) -> Self {
        Self::MissingMember {
            type_name,
            member: member.to_string(),
        }
    }
}
