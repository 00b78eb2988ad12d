// -----------------------------------------------------------------------------
// TypeLayout

/// The memory layout a type declares through `#[repr(...)]`.
///
/// Recorded by the derive macro. Only [`TypeLayout::Packed`] changes how
/// accessors are compiled: fields of a packed type may be unaligned, so no
/// reference to them may ever be formed and accessors go through
/// [`Reflect`](crate::Reflect) instead.
///
/// `align(N)` modifiers do not affect member access and are not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeLayout {
    /// The default Rust layout.
    #[default]
    Rust,
    /// `#[repr(C)]`.
    C,
    /// `#[repr(transparent)]`.
    Transparent,
    /// `#[repr(packed)]` or `#[repr(packed(N))]`, possibly combined with `C`.
    Packed {
        /// The maximum field alignment, `1` for plain `packed`.
        align: usize,
    },
}

impl TypeLayout {
    /// Returns `true` if fields may be stored unaligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ya_reflect::info::TypeLayout;
    ///
    /// assert!(TypeLayout::Packed { align: 1 }.is_packed());
    /// assert!(!TypeLayout::C.is_packed());
    /// ```
    #[inline]
    pub const fn is_packed(self) -> bool {
        matches!(self, Self::Packed { .. })
    }
}
