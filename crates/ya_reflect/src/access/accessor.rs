use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::access::AccessError;
use crate::value::ErasedValue;

// -----------------------------------------------------------------------------
// AccessPath

/// How a compiled accessor reaches the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessPath {
    /// Direct access: a field offset or a property function.
    Fast,
    /// Name-keyed access through [`Reflect`](crate::Reflect), used for
    /// fields of `#[repr(packed)]` types.
    Fallback,
}

// -----------------------------------------------------------------------------
// AccessorMeta

#[derive(Debug, Clone, Copy)]
pub(crate) struct AccessorMeta {
    pub member: &'static str,
    pub declaring_type: &'static str,
    pub path: AccessPath,
}

// An `ErasedValue` passed as the instance stands for its content.
#[inline]
fn look_through(instance: &dyn Any) -> &dyn Any {
    match instance.downcast_ref::<ErasedValue>() {
        Some(boxed) => boxed.as_any(),
        None => instance,
    }
}

#[inline]
fn look_through_mut(instance: &mut dyn Any) -> &mut dyn Any {
    if instance.is::<ErasedValue>() {
        match instance.downcast_mut::<ErasedValue>() {
            Some(boxed) => boxed.as_any_mut(),
            None => unreachable!(),
        }
    } else {
        instance
    }
}

// -----------------------------------------------------------------------------
// Getter

type GetFn = dyn Fn(&dyn Any) -> Result<ErasedValue, AccessError> + Send + Sync;

/// A compiled, reusable reader for one member.
///
/// Holds no reference to any instance; cloning is cheap and the getter can
/// be shared between threads.
#[derive(Clone)]
pub struct Getter {
    func: Arc<GetFn>,
    meta: AccessorMeta,
}

impl Getter {
    pub(crate) fn new(
        meta: AccessorMeta,
        func: impl Fn(&dyn Any) -> Result<ErasedValue, AccessError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            func: Arc::new(func),
            meta,
        }
    }

    /// Reads the member of `instance` into a new [`ErasedValue`].
    ///
    /// `instance` may also be an [`ErasedValue`] holding the instance.
    ///
    /// Returns [`AccessError::InvalidTarget`] if `instance` is not of the
    /// declaring type.
    #[inline]
    pub fn get(&self, instance: &dyn Any) -> Result<ErasedValue, AccessError> {
        (self.func)(look_through(instance))
    }

    /// Returns `true` if both getters share the same compiled closure.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.func, &other.func)
    }

    /// Returns the member name.
    #[inline]
    pub fn member(&self) -> &'static str {
        self.meta.member
    }

    /// Returns the declaring type name.
    #[inline]
    pub fn declaring_type(&self) -> &'static str {
        self.meta.declaring_type
    }

    /// Returns how the member is reached.
    #[inline]
    pub fn path(&self) -> AccessPath {
        self.meta.path
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter")
            .field("member", &self.meta.member)
            .field("declaring_type", &self.meta.declaring_type)
            .field("path", &self.meta.path)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Setter

type SetFn = dyn Fn(&mut dyn Any, ErasedValue) -> Result<(), AccessError> + Send + Sync;

/// A compiled, reusable writer for one member.
///
/// Holds no reference to any instance; cloning is cheap and the setter can
/// be shared between threads.
#[derive(Clone)]
pub struct Setter {
    func: Arc<SetFn>,
    meta: AccessorMeta,
}

impl Setter {
    pub(crate) fn new(
        meta: AccessorMeta,
        func: impl Fn(&mut dyn Any, ErasedValue) -> Result<(), AccessError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            func: Arc::new(func),
            meta,
        }
    }

    /// Writes `value` to the member of `instance`.
    ///
    /// `instance` may also be an [`ErasedValue`] holding the instance; the
    /// boxed instance is updated in place.
    ///
    /// Returns [`AccessError::InvalidTarget`] if `instance` is not of the
    /// declaring type, and [`AccessError::TypeMismatch`] if `value` is not
    /// of the member type. `instance` is unchanged on error.
    #[inline]
    pub fn set(&self, instance: &mut dyn Any, value: ErasedValue) -> Result<(), AccessError> {
        (self.func)(look_through_mut(instance), value)
    }

    /// Returns `true` if both setters share the same compiled closure.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.func, &other.func)
    }

    /// Returns the member name.
    #[inline]
    pub fn member(&self) -> &'static str {
        self.meta.member
    }

    /// Returns the declaring type name.
    #[inline]
    pub fn declaring_type(&self) -> &'static str {
        self.meta.declaring_type
    }

    /// Returns how the member is reached.
    #[inline]
    pub fn path(&self) -> AccessPath {
        self.meta.path
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("member", &self.meta.member)
            .field("declaring_type", &self.meta.declaring_type)
            .field("path", &self.meta.path)
            .finish()
    }
}
