use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// ErasedValue

/// An owned, type-erased value.
///
/// Getters return the member value in this box and setters take the new
/// value in it. The box always owns its content:
///
/// - plain values (`i32`, `String`, structs...) are boxed as a fresh copy,
///   so the box never aliases the member it was read from;
/// - shared references are expressed with [`Arc`](alloc::sync::Arc): the box
///   owns a clone of the `Arc`, so the referent is the same object.
///
/// Getting the value back out is a checked conversion; asking for the wrong
/// type returns the box unchanged.
///
/// # Examples
///
/// ```
/// use ya_reflect::value::ErasedValue;
///
/// let value = ErasedValue::new(5_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.type_name(), "i32");
///
/// let value = value.take::<u64>().unwrap_err();
/// assert_eq!(value.take::<i32>().unwrap(), 5);
/// ```
pub struct ErasedValue {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ErasedValue {
    /// Boxes `value`.
    #[inline]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Returns the type name of the contained value.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the contained value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns a reference to the contained value if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns a mutable reference to the contained value if it is a `T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Unboxes the contained value.
    ///
    /// If the value is not a `T`, the box is returned untouched.
    pub fn take<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_name }),
        }
    }

    /// Borrows the contained value as `&dyn Any`.
    ///
    /// Use this to pass a boxed instance to [`Getter::get`](crate::access::Getter::get).
    #[inline]
    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    /// Borrows the contained value as `&mut dyn Any`.
    ///
    /// Use this to pass a boxed instance to [`Setter::set`](crate::access::Setter::set).
    #[inline]
    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut *self.value
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErasedValue({})", self.type_name)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ErasedValue;
    use alloc::string::String;
    use alloc::sync::Arc;
    use core::any::{Any, TypeId};

    #[test]
    fn type_identity() {
        let value = ErasedValue::new(String::from("text"));
        assert_eq!(value.type_id(), TypeId::of::<String>());
        assert!(value.is::<String>());
        assert!(!value.is::<&str>());
        assert_eq!(value.as_any().type_id(), TypeId::of::<String>());
    }

    #[test]
    fn take_wrong_type_keeps_value() {
        let value = ErasedValue::new(7_u8);
        let value = value.take::<i8>().unwrap_err();
        assert_eq!(value.type_name(), "u8");
        assert_eq!(value.take::<u8>().unwrap(), 7);
    }

    #[test]
    fn shared_reference_is_not_copied() {
        let shared = Arc::new(String::from("shared"));
        let value = ErasedValue::new(Arc::clone(&shared));

        let back = value.take::<Arc<String>>().unwrap();
        assert!(Arc::ptr_eq(&back, &shared));
    }

    #[test]
    fn mutate_in_place() {
        let mut value = ErasedValue::new(1_i64);
        *value.downcast_mut::<i64>().unwrap() += 1;
        assert_eq!(value.downcast_ref::<i64>(), Some(&2));

        let any: &mut dyn Any = value.as_any_mut();
        assert!(any.is::<i64>());
    }
}
