//! Hash containers and small collections shared by the `ya_*` crates.
//!
//! - [`hash`]: `hashbrown` containers with fixed (`foldhash`) or
//!   pass-through hashing.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
