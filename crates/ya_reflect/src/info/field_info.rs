#![expect(unsafe_code, reason = "the field offset is trusted by the fast accessor path")]

use core::any::{Any, TypeId};

use crate::access::ValueOps;
use crate::info::{DeclaringType, SerializationPolicy};

// -----------------------------------------------------------------------------
// FieldInfo

/// A data member stored directly in the declaring type.
///
/// Carries the byte offset of the field and the typed read/write routines
/// the fast accessor path needs.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(readonly)]
///     id: u64,
///     label: String,
/// }
///
/// let info = Foo::type_info();
/// let id = info.field("id").unwrap();
///
/// assert!(id.type_is::<u64>());
/// assert!(id.can_read());
/// assert!(!id.can_write());
/// assert!(info.field("label").unwrap().can_write());
/// ```
#[derive(Clone, Debug)]
pub struct FieldInfo {
    owner: DeclaringType,
    name: &'static str,
    offset: usize,
    ops: ValueOps,
    readonly: bool,
    policy: Option<SerializationPolicy>,
}

impl FieldInfo {
    /// Creates a [`FieldInfo`] for the field `name` of type `V`.
    ///
    /// # Safety
    ///
    /// - `owner` must describe the type that declares the field.
    /// - The field `name` of that type must have type `V` and be located at
    ///   `offset` bytes from the start of the instance (`core::mem::offset_of!`).
    ///
    /// Accessors compiled from this info read and write through the offset
    /// without further checks.
    pub unsafe fn new<V: Any + Clone + Send + Sync>(
        owner: DeclaringType,
        name: &'static str,
        offset: usize,
    ) -> Self {
        debug_assert!(
            offset + size_of::<V>() <= owner.size(),
            "field `{}` at offset {} does not fit in `{}`",
            name,
            offset,
            owner.type_path(),
        );
        Self {
            owner,
            name,
            offset,
            ops: ValueOps::of::<V>(),
            readonly: false,
            policy: None,
        }
    }

    /// Marks the field as not writable through accessors.
    #[inline]
    pub const fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Sets the serialization policy.
    #[inline]
    pub const fn with_policy(mut self, policy: SerializationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> &DeclaringType {
        &self.owner
    }

    /// Returns the field name.
    ///
    /// Tuple fields are named by their index, `"0"`, `"1"`...
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the byte offset of the field in the declaring type.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn value_type_id(&self) -> TypeId {
        self.ops.ty_id()
    }

    /// Returns the name of the field type.
    #[inline]
    pub const fn value_type_name(&self) -> &'static str {
        self.ops.type_name()
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ops.ty_id() == TypeId::of::<T>()
    }

    /// Fields are always readable.
    #[inline]
    pub const fn can_read(&self) -> bool {
        true
    }

    /// Returns `false` for fields marked `#[reflect(readonly)]`.
    #[inline]
    pub const fn can_write(&self) -> bool {
        !self.readonly
    }

    /// Returns the serialization policy, if one was declared.
    #[inline]
    pub const fn policy(&self) -> Option<SerializationPolicy> {
        self.policy
    }

    #[inline]
    pub(crate) const fn ops(&self) -> ValueOps {
        self.ops
    }
}
