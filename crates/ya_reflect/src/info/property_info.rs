use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::access::{PropertyFns, TypedPropertyFns};
use crate::info::{DeclaringType, SerializationPolicy};

// -----------------------------------------------------------------------------
// PropertyInfo

/// A member accessed through getter and/or setter functions.
///
/// A property has at least one of the two; the missing direction makes the
/// property read-only or write-only and the matching accessor compiles to
/// `None`.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(property(name = "name", get = Person::name))]
/// struct Person {
///     first: String,
///     last: String,
/// }
///
/// impl Person {
///     fn name(&self) -> String {
///         format!("{} {}", self.first, self.last)
///     }
/// }
///
/// let name = Person::type_info().property("name").unwrap();
/// assert!(name.can_read());
/// assert!(!name.can_write());
/// assert!(name.type_is::<String>());
/// ```
#[derive(Clone)]
pub struct PropertyInfo {
    owner: DeclaringType,
    name: &'static str,
    value_ty: TypeId,
    value_type_name: &'static str,
    fns: Arc<dyn PropertyFns>,
    policy: Option<SerializationPolicy>,
}

impl PropertyInfo {
    fn new<T: Reflect, V: Any + Send + Sync>(
        owner: DeclaringType,
        name: &'static str,
        get: Option<fn(&T) -> V>,
        set: Option<fn(&mut T, V)>,
    ) -> Self {
        debug_assert!(
            owner.type_is::<T>(),
            "property `{}` declared on `{}` but implemented for `{}`",
            name,
            owner.type_path(),
            core::any::type_name::<T>(),
        );
        Self {
            owner,
            name,
            value_ty: TypeId::of::<V>(),
            value_type_name: core::any::type_name::<V>(),
            fns: Arc::new(TypedPropertyFns { get, set }),
            policy: None,
        }
    }

    /// Creates a property with both a getter and a setter.
    pub fn read_write<T: Reflect, V: Any + Send + Sync>(
        owner: DeclaringType,
        name: &'static str,
        get: fn(&T) -> V,
        set: fn(&mut T, V),
    ) -> Self {
        Self::new(owner, name, Some(get), Some(set))
    }

    /// Creates a property with only a getter.
    pub fn read_only<T: Reflect, V: Any + Send + Sync>(
        owner: DeclaringType,
        name: &'static str,
        get: fn(&T) -> V,
    ) -> Self {
        Self::new(owner, name, Some(get), None)
    }

    /// Creates a property with only a setter.
    pub fn write_only<T: Reflect, V: Any + Send + Sync>(
        owner: DeclaringType,
        name: &'static str,
        set: fn(&mut T, V),
    ) -> Self {
        Self::new(owner, name, None, Some(set))
    }

    /// Sets the serialization policy.
    #[inline]
    pub fn with_policy(mut self, policy: SerializationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> &DeclaringType {
        &self.owner
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the property value.
    #[inline]
    pub const fn value_type_id(&self) -> TypeId {
        self.value_ty
    }

    /// Returns the name of the property value type.
    #[inline]
    pub const fn value_type_name(&self) -> &'static str {
        self.value_type_name
    }

    /// Check if the property value type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.value_ty == TypeId::of::<T>()
    }

    /// Returns `true` if the property has a getter.
    #[inline]
    pub fn can_read(&self) -> bool {
        self.fns.can_read()
    }

    /// Returns `true` if the property has a setter.
    #[inline]
    pub fn can_write(&self) -> bool {
        self.fns.can_write()
    }

    /// Returns the serialization policy, if one was declared.
    #[inline]
    pub const fn policy(&self) -> Option<SerializationPolicy> {
        self.policy
    }

    #[inline]
    pub(crate) fn fns(&self) -> &dyn PropertyFns {
        &*self.fns
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("owner", &self.owner.type_path())
            .field("name", &self.name)
            .field("value_type", &self.value_type_name)
            .field("can_read", &self.can_read())
            .field("can_write", &self.can_write())
            .field("policy", &self.policy)
            .finish()
    }
}
