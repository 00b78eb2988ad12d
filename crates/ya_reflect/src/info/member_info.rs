use core::any::TypeId;

use crate::info::{DeclaringType, FieldInfo, PropertyInfo, SerializationPolicy};

// -----------------------------------------------------------------------------
// MemberKind

/// The kind of a [`MemberInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

// -----------------------------------------------------------------------------
// MemberInfo

/// A member of a reflected type: a field or a property.
///
/// This is the descriptor the accessor compiler works from.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::{MemberKind, Typed}};
///
/// #[derive(Reflect)]
/// #[reflect(property(name = "len", get = Buffer::len))]
/// struct Buffer {
///     data: Vec<u8>,
/// }
///
/// impl Buffer {
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
///
/// let kinds: Vec<_> = Buffer::type_info().iter().map(|m| (m.name(), m.kind())).collect();
/// assert_eq!(kinds, [("data", MemberKind::Field), ("len", MemberKind::Property)]);
/// ```
#[derive(Clone, Debug)]
pub enum MemberInfo {
    Field(FieldInfo),
    Property(PropertyInfo),
}

impl From<FieldInfo> for MemberInfo {
    #[inline]
    fn from(value: FieldInfo) -> Self {
        Self::Field(value)
    }
}

impl From<PropertyInfo> for MemberInfo {
    #[inline]
    fn from(value: PropertyInfo) -> Self {
        Self::Property(value)
    }
}

impl MemberInfo {
    /// Returns the kind of the member.
    #[inline]
    pub const fn kind(&self) -> MemberKind {
        match self {
            Self::Field(_) => MemberKind::Field,
            Self::Property(_) => MemberKind::Property,
        }
    }

    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Field(info) => info.name(),
            Self::Property(info) => info.name(),
        }
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> &DeclaringType {
        match self {
            Self::Field(info) => info.owner(),
            Self::Property(info) => info.owner(),
        }
    }

    /// Returns the `TypeId` of the member value.
    #[inline]
    pub const fn value_type_id(&self) -> TypeId {
        match self {
            Self::Field(info) => info.value_type_id(),
            Self::Property(info) => info.value_type_id(),
        }
    }

    /// Returns the name of the member value type.
    #[inline]
    pub const fn value_type_name(&self) -> &'static str {
        match self {
            Self::Field(info) => info.value_type_name(),
            Self::Property(info) => info.value_type_name(),
        }
    }

    /// Returns `true` if a getter can be compiled for the member.
    #[inline]
    pub fn can_read(&self) -> bool {
        match self {
            Self::Field(info) => info.can_read(),
            Self::Property(info) => info.can_read(),
        }
    }

    /// Returns `true` if a setter can be compiled for the member.
    #[inline]
    pub fn can_write(&self) -> bool {
        match self {
            Self::Field(info) => info.can_write(),
            Self::Property(info) => info.can_write(),
        }
    }

    /// Returns the serialization policy, if one was declared.
    #[inline]
    pub const fn policy(&self) -> Option<SerializationPolicy> {
        match self {
            Self::Field(info) => info.policy(),
            Self::Property(info) => info.policy(),
        }
    }

    #[inline]
    pub const fn as_field(&self) -> Option<&FieldInfo> {
        match self {
            Self::Field(info) => Some(info),
            Self::Property(_) => None,
        }
    }

    #[inline]
    pub const fn as_property(&self) -> Option<&PropertyInfo> {
        match self {
            Self::Property(info) => Some(info),
            Self::Field(_) => None,
        }
    }
}
