#![expect(unsafe_code, reason = "typed reads and writes through type-erased pointers")]

use core::any::{Any, TypeId};
use core::fmt;

use ya_ptr::{Ptr, PtrMut};

use crate::value::ErasedValue;

// -----------------------------------------------------------------------------
// ValueOps

/// Monomorphic read/write routines for one value type.
///
/// Captured by field accessors so that a call only moves a pointer and
/// invokes these, with no generic code left to dispatch.
#[derive(Clone, Copy)]
pub(crate) struct ValueOps {
    ty_id: TypeId,
    type_name: &'static str,
    read: unsafe fn(Ptr<'_>) -> ErasedValue,
    write: unsafe fn(PtrMut<'_>, ErasedValue) -> Result<(), ErasedValue>,
}

impl ValueOps {
    pub(crate) fn of<V: Any + Clone + Send + Sync>() -> Self {
        Self {
            ty_id: TypeId::of::<V>(),
            type_name: core::any::type_name::<V>(),
            read: read_value::<V>,
            write: write_value::<V>,
        }
    }

    #[inline(always)]
    pub(crate) const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline(always)]
    pub(crate) const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Clones the value behind `ptr` into a box.
    ///
    /// # Safety
    /// `ptr` must point to a valid, aligned value of the type of these ops.
    #[inline(always)]
    pub(crate) unsafe fn read(&self, ptr: Ptr<'_>) -> ErasedValue {
        // SAFETY: upheld by the caller.
        unsafe { (self.read)(ptr) }
    }

    /// Moves `value` into the place behind `ptr`, dropping the old value.
    ///
    /// Returns `value` untouched if it is not of the type of these ops.
    ///
    /// # Safety
    /// `ptr` must point to a valid, aligned value of the type of these ops.
    #[inline(always)]
    pub(crate) unsafe fn write(&self, ptr: PtrMut<'_>, value: ErasedValue) -> Result<(), ErasedValue> {
        // SAFETY: upheld by the caller.
        unsafe { (self.write)(ptr, value) }
    }
}

impl fmt::Debug for ValueOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueOps({})", self.type_name)
    }
}

unsafe fn read_value<V: Any + Clone + Send + Sync>(ptr: Ptr<'_>) -> ErasedValue {
    ptr.debug_assert_aligned::<V>();
    // SAFETY: `ptr` points to an aligned `V`, see `ValueOps::read`.
    let value = unsafe { ptr.as_ref::<V>() };
    ErasedValue::new(value.clone())
}

unsafe fn write_value<V: Any + Send + Sync>(
    mut ptr: PtrMut<'_>,
    value: ErasedValue,
) -> Result<(), ErasedValue> {
    let value = value.take::<V>()?;
    ptr.debug_assert_aligned::<V>();
    // SAFETY: `ptr` points to an aligned `V`, see `ValueOps::write`.
    unsafe {
        *ptr.as_mut::<V>() = value;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ValueOps;
    use crate::value::ErasedValue;
    use alloc::string::String;
    use ya_ptr::{Ptr, PtrMut};

    #[test]
    fn read_clones_value() {
        let ops = ValueOps::of::<String>();
        let text = String::from("hello");

        let value = unsafe { ops.read(Ptr::from_ref(&text)) };
        assert_eq!(value.downcast_ref::<String>(), Some(&text));
        assert_ne!(value.downcast_ref::<String>().unwrap().as_ptr(), text.as_ptr());
    }

    #[test]
    fn write_rejects_other_types() {
        let ops = ValueOps::of::<u32>();
        let mut slot = 1_u32;

        let back = unsafe { ops.write(PtrMut::from_mut(&mut slot), ErasedValue::new(2_i32)) };
        assert_eq!(back.unwrap_err().take::<i32>().unwrap(), 2);
        assert_eq!(slot, 1);

        unsafe { ops.write(PtrMut::from_mut(&mut slot), ErasedValue::new(3_u32)) }.unwrap();
        assert_eq!(slot, 3);
    }
}
