use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::access::AccessError;
use crate::info::TypeLayout;
use crate::value::ErasedValue;

// -----------------------------------------------------------------------------
// DeclaringType

type DynamicGet = fn(&dyn Any, &str) -> Result<ErasedValue, AccessError>;
type DynamicSet = fn(&mut dyn Any, &str, ErasedValue) -> Result<(), AccessError>;

/// The type that owns a member.
///
/// Besides identity and layout, it keeps monomorphized entry points into
/// the type's [`Reflect`] impl, used when accessors cannot touch fields
/// directly.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use ya_reflect::{derive::Reflect, info::{Typed, TypeLayout}};
///
/// #[derive(Reflect)]
/// #[repr(C)]
/// struct Pixel {
///     r: u8,
///     g: u8,
///     b: u8,
/// }
///
/// let ty = Pixel::type_info().ty();
/// assert_eq!(ty.ty_id(), TypeId::of::<Pixel>());
/// assert_eq!(ty.type_name(), "Pixel");
/// assert_eq!(ty.layout(), TypeLayout::C);
/// assert_eq!(ty.size(), 3);
/// ```
#[derive(Clone, Copy)]
pub struct DeclaringType {
    ty_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    size: usize,
    layout: TypeLayout,
    dynamic_get: DynamicGet,
    dynamic_set: DynamicSet,
}

impl DeclaringType {
    /// Describes `T` with the given layout.
    pub fn of<T: Reflect>(layout: TypeLayout) -> Self {
        let type_path = core::any::type_name::<T>();
        Self {
            ty_id: TypeId::of::<T>(),
            type_path,
            type_name: short_name(type_path),
            size: size_of::<T>(),
            layout,
            dynamic_get: dynamic_get::<T>,
            dynamic_set: dynamic_set::<T>,
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the full type path, such as `my_crate::shapes::Point`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type name without its module path, such as `Point`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `size_of` the type.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the declared layout.
    #[inline]
    pub const fn layout(&self) -> TypeLayout {
        self.layout
    }

    /// Name-keyed read through [`Reflect::reflect_get`].
    ///
    /// Returns [`AccessError::InvalidTarget`] if `instance` is not of this type.
    #[inline]
    pub fn reflect_get(&self, instance: &dyn Any, member: &str) -> Result<ErasedValue, AccessError> {
        (self.dynamic_get)(instance, member)
    }

    /// Name-keyed write through [`Reflect::reflect_set`].
    ///
    /// Returns [`AccessError::InvalidTarget`] if `instance` is not of this type.
    #[inline]
    pub fn reflect_set(
        &self,
        instance: &mut dyn Any,
        member: &str,
        value: ErasedValue,
    ) -> Result<(), AccessError> {
        (self.dynamic_set)(instance, member, value)
    }
}

impl fmt::Debug for DeclaringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaringType")
            .field("type_path", &self.type_path)
            .field("size", &self.size)
            .field("layout", &self.layout)
            .finish()
    }
}

impl PartialEq for DeclaringType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ty_id == other.ty_id
    }
}

impl Eq for DeclaringType {}

// `a::b::C` -> `C`. Generic types are rejected by the derive, so the last
// segment is the whole name.
fn short_name(type_path: &'static str) -> &'static str {
    match type_path.rfind("::") {
        Some(index) => &type_path[index + 2..],
        None => type_path,
    }
}

fn dynamic_get<T: Reflect>(instance: &dyn Any, member: &str) -> Result<ErasedValue, AccessError> {
    match instance.downcast_ref::<T>() {
        Some(target) => target.reflect_get(member),
        None => Err(AccessError::invalid_target(
            core::any::type_name::<T>(),
            instance.type_id(),
        )),
    }
}

fn dynamic_set<T: Reflect>(
    instance: &mut dyn Any,
    member: &str,
    value: ErasedValue,
) -> Result<(), AccessError> {
    let found = (*instance).type_id();
    match instance.downcast_mut::<T>() {
        Some(target) => target.reflect_set(member, value),
        None => Err(AccessError::invalid_target(core::any::type_name::<T>(), found)),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::short_name;

    #[test]
    fn short_name_strips_module_path() {
        assert_eq!(short_name("a::b::Point"), "Point");
        assert_eq!(short_name("Point"), "Point");
    }
}
