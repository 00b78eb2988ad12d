//! Static descriptions of reflected types and their members.
//!
//! - [`TypeInfo`]: the members of one type, in declaration order.
//! - [`MemberInfo`]: either a [`FieldInfo`] or a [`PropertyInfo`].
//! - [`DeclaringType`]: identity and [`TypeLayout`] of the type owning a member.
//! - [`SerializationPolicy`]: per-member hint for serializers.
//!
//! All of these are produced by [`#[derive(Reflect)]`](crate::derive::Reflect)
//! and reached through [`Typed::type_info`].

// -----------------------------------------------------------------------------
// Modules

mod declaring;
mod field_info;
mod layout;
mod member_info;
mod policy;
mod property_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use declaring::DeclaringType;
pub use field_info::FieldInfo;
pub use layout::TypeLayout;
pub use member_info::{MemberInfo, MemberKind};
pub use policy::SerializationPolicy;
pub use property_info::PropertyInfo;
pub use type_info::{TypeInfo, TypeInfoCell};
pub use typed::Typed;
