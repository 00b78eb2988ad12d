//! Lightweight type-erased pointers used by the member accessors.
//!
//! A compiled field accessor only knows the byte offset of its member inside
//! the declaring type. It reaches the member by taking a pointer to the
//! (already type-checked) instance, adding the offset and reinterpreting the
//! result as the member type. These wrappers keep the lifetime of the borrow
//! they came from, so that step stays tied to the original `&T` / `&mut T`.
//!
//! **Ptr** and **PtrMut**
//!
//! [`Ptr<'a>`] and [`PtrMut<'a>`] are type-erased `&T` and `&mut T` equivalents.
//! Compared to raw pointers, they add a lifetime and optional alignment checks to
//! better approximate the safety of references.
#![expect(unsafe_code, reason = "Raw pointers are inherently unsafe.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod type_erased;

// -----------------------------------------------------------------------------
// Top-level exports

pub use type_erased::{Ptr, PtrMut};
