use alloc::boxed::Box;
use alloc::vec::Vec;
use std::sync::OnceLock;

use ya_utils::hash::HashMap;

use crate::info::{DeclaringType, FieldInfo, MemberInfo, PropertyInfo};

// -----------------------------------------------------------------------------
// TypeInfo

/// The members of a reflected type, in declaration order.
///
/// Fields come first, followed by properties in attribute order.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let info = Point::type_info();
/// assert_eq!(info.len(), 2);
/// assert_eq!(info.member("y").unwrap().value_type_name(), "i32");
/// assert!(info.member("z").is_none());
/// ```
#[derive(Debug)]
pub struct TypeInfo {
    ty: DeclaringType,
    members: Box<[MemberInfo]>,
    index: HashMap<&'static str, usize>,
}

impl TypeInfo {
    /// Creates the info of the type `ty` with the given members.
    ///
    /// # Panics
    ///
    /// Panics if two members share a name, or if a member belongs to
    /// another type.
    pub fn new(ty: DeclaringType, members: impl IntoIterator<Item = MemberInfo>) -> Self {
        let members: Box<[MemberInfo]> = members.into_iter().collect::<Vec<_>>().into_boxed_slice();

        let mut index = HashMap::with_capacity_and_hasher(members.len(), Default::default());
        for (i, member) in members.iter().enumerate() {
            assert!(
                member.owner().ty_id() == ty.ty_id(),
                "member `{}` of `{}` is declared on `{}`",
                member.name(),
                ty.type_path(),
                member.owner().type_path(),
            );
            if index.insert(member.name(), i).is_some() {
                panic!("duplicate member `{}` in `{}`", member.name(), ty.type_path());
            }
        }

        Self { ty, members, index }
    }

    /// Returns the type these members belong to.
    #[inline]
    pub const fn ty(&self) -> &DeclaringType {
        &self.ty
    }

    /// Returns the member named `name`.
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.index.get(name).map(|&i| &self.members[i])
    }

    /// Returns the member at `index` in declaration order.
    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&MemberInfo> {
        self.members.get(index)
    }

    /// Returns the field named `name`.
    ///
    /// Returns `None` if there is no such member or it is a property.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.member(name).and_then(MemberInfo::as_field)
    }

    /// Returns the property named `name`.
    ///
    /// Returns `None` if there is no such member or it is a field.
    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.member(name).and_then(MemberInfo::as_property)
    }

    /// Iterates the members in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MemberInfo> {
        self.members.iter()
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the type has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeInfo {
    type Item = &'a MemberInfo;
    type IntoIter = core::slice::Iter<'a, MemberInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

// -----------------------------------------------------------------------------
// TypeInfoCell

/// Lazily initialized static storage for a [`TypeInfo`].
///
/// Used by the code [`#[derive(Reflect)]`](crate::derive::Reflect) emits,
/// and by manual [`Typed`](crate::info::Typed) impls.
///
/// # Examples
///
/// ```
/// use ya_reflect::info::{DeclaringType, TypeInfo, TypeInfoCell, TypeLayout, Typed};
/// use ya_reflect::{Reflect, access::AccessError, value::ErasedValue};
///
/// struct Marker;
///
/// impl Reflect for Marker {
///     fn reflect_get(&self, member: &str) -> Result<ErasedValue, AccessError> {
///         Err(AccessError::missing_member("Marker", member))
///     }
///     fn reflect_set(&mut self, member: &str, _: ErasedValue) -> Result<(), AccessError> {
///         Err(AccessError::missing_member("Marker", member))
///     }
/// }
///
/// impl Typed for Marker {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: TypeInfoCell = TypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::new(DeclaringType::of::<Self>(TypeLayout::Rust), []))
///     }
/// }
///
/// assert!(Marker::type_info().is_empty());
/// ```
pub struct TypeInfoCell(OnceLock<TypeInfo>);

impl TypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&'static self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        self.0.get_or_init(f)
    }
}
