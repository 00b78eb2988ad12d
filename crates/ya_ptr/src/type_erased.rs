use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

// -----------------------------------------------------------------------------
// Ptr

/// The address of a borrowed value whose type has been erased.
///
/// Behaves like `&'a T` for an unknown `T`: the pointee is valid and not
/// mutated for `'a`. Stepping to a member with [`byte_add`](Ptr::byte_add)
/// keeps the borrow.
///
/// # Examples
///
/// ```
/// # use ya_ptr::Ptr;
/// struct Point { x: i32, y: i32 }
///
/// let p = Point { x: 1, y: 2 };
/// let ptr = Ptr::from_ref(&p);
///
/// let y = unsafe { ptr.byte_add(core::mem::offset_of!(Point, y)) };
/// y.debug_assert_aligned::<i32>();
/// assert_eq!(unsafe { *y.as_ref::<i32>() }, 2);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Ptr<'a>(NonNull<u8>, PhantomData<&'a u8>);

impl<'a> Ptr<'a> {
    /// Erases the type of `value`.
    ///
    /// For unsized referents such as `dyn Any` only the data address is
    /// kept.
    #[inline(always)]
    pub const fn from_ref<T: ?Sized>(value: &'a T) -> Self {
        Self(NonNull::from_ref(value).cast(), PhantomData)
    }

    /// Moves the pointer `count` bytes forward, to a member of the pointee.
    ///
    /// # Safety
    /// The result must stay inside the pointee.
    #[inline(always)]
    pub const unsafe fn byte_add(self, count: usize) -> Self {
        // SAFETY: in bounds of the same object, see above.
        Self(unsafe { self.0.add(count) }, PhantomData)
    }

    /// Returns `true` if the address is aligned for `T`.
    #[inline]
    pub fn is_aligned<T>(&self) -> bool {
        self.0.cast::<T>().is_aligned()
    }

    /// Panics in debug builds if the address is not aligned for `T`.
    #[cfg_attr(debug_assertions, track_caller)]
    #[inline(always)]
    pub fn debug_assert_aligned<T>(&self) {
        debug_assert!(
            self.is_aligned::<T>(),
            "{:p} is not aligned to {} for `{}`",
            self.0,
            align_of::<T>(),
            core::any::type_name::<T>(),
        );
    }

    /// Gets the raw address.
    #[inline(always)]
    pub const fn as_ptr(self) -> *const u8 {
        self.0.as_ptr()
    }

    /// Reinterprets the pointee as a `T`, for the whole borrow `'a`.
    ///
    /// # Safety
    /// The pointee must be a valid `T` and the address aligned for `T`.
    #[inline(always)]
    pub const unsafe fn as_ref<T>(self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { self.0.cast::<T>().as_ref() }
    }
}

impl fmt::Debug for Ptr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr({:p})", self.0)
    }
}

// -----------------------------------------------------------------------------
// PtrMut

/// The address of an exclusively borrowed value whose type has been erased.
///
/// Behaves like `&'a mut T` for an unknown `T`; not `Copy`.
///
/// # Examples
///
/// ```
/// # use ya_ptr::PtrMut;
/// struct Point { x: i32, y: i32 }
///
/// let mut p = Point { x: 1, y: 2 };
/// let ptr = PtrMut::from_mut(&mut p);
///
/// let mut x = unsafe { ptr.byte_add(core::mem::offset_of!(Point, x)) };
/// unsafe { *x.as_mut::<i32>() = 5 };
/// assert_eq!(p.x, 5);
/// ```
#[repr(transparent)]
pub struct PtrMut<'a>(NonNull<u8>, PhantomData<&'a mut u8>);

impl<'a> PtrMut<'a> {
    /// Erases the type of `value`.
    #[inline(always)]
    pub const fn from_mut<T: ?Sized>(value: &'a mut T) -> Self {
        Self(NonNull::from_mut(value).cast(), PhantomData)
    }

    /// Moves the pointer `count` bytes forward, to a member of the pointee.
    ///
    /// # Safety
    /// The result must stay inside the pointee.
    #[inline(always)]
    pub const unsafe fn byte_add(self, count: usize) -> Self {
        // SAFETY: in bounds of the same object, see above.
        Self(unsafe { self.0.add(count) }, PhantomData)
    }

    /// Returns `true` if the address is aligned for `T`.
    #[inline]
    pub fn is_aligned<T>(&self) -> bool {
        self.0.cast::<T>().is_aligned()
    }

    /// Panics in debug builds if the address is not aligned for `T`.
    #[cfg_attr(debug_assertions, track_caller)]
    #[inline(always)]
    pub fn debug_assert_aligned<T>(&self) {
        debug_assert!(
            self.is_aligned::<T>(),
            "{:p} is not aligned to {} for `{}`",
            self.0,
            align_of::<T>(),
            core::any::type_name::<T>(),
        );
    }

    /// Gets the raw address.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut u8 {
        self.0.as_ptr()
    }

    /// A shorter-lived shared view.
    #[inline(always)]
    pub const fn borrow(&self) -> Ptr<'_> {
        Ptr(self.0, PhantomData)
    }

    /// A shorter-lived exclusive view.
    #[inline(always)]
    pub const fn reborrow(&mut self) -> PtrMut<'_> {
        PtrMut(self.0, PhantomData)
    }

    /// Reinterprets the pointee as a `T`, for as long as `self` is borrowed.
    ///
    /// # Safety
    /// The pointee must be a valid `T` and the address aligned for `T`.
    #[inline(always)]
    pub const unsafe fn as_mut<T>(&mut self) -> &mut T {
        // SAFETY: upheld by the caller.
        unsafe { self.0.cast::<T>().as_mut() }
    }
}

impl fmt::Debug for PtrMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PtrMut({:p})", self.0)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Ptr, PtrMut};
    use core::any::Any;
    use core::mem::offset_of;

    #[repr(C)]
    struct Pair {
        a: u8,
        b: u64,
    }

    #[test]
    fn offset_reaches_member() {
        let pair = Pair { a: 3, b: 99 };
        let ptr = Ptr::from_ref(&pair);

        let b = unsafe { ptr.byte_add(offset_of!(Pair, b)) };
        assert!(b.is_aligned::<u64>());
        assert_eq!(unsafe { *b.as_ref::<u64>() }, 99);

        let a = unsafe { ptr.byte_add(offset_of!(Pair, a)) };
        assert_eq!(unsafe { *a.as_ref::<u8>() }, 3);
    }

    #[test]
    fn erased_reference_keeps_data_address() {
        let mut pair = Pair { a: 1, b: 2 };
        let expected = &raw const pair as *const u8;

        let erased: &mut dyn Any = &mut pair;
        let mut ptr = PtrMut::from_mut(erased);
        assert_eq!(ptr.as_ptr().cast_const(), expected);

        let mut b = unsafe { ptr.reborrow().byte_add(offset_of!(Pair, b)) };
        unsafe { *b.as_mut::<u64>() = 42 };
        assert_eq!(unsafe { *ptr.borrow().byte_add(offset_of!(Pair, b)).as_ref::<u64>() }, 42);
        assert_eq!(pair.b, 42);
    }
}
