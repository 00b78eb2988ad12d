//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_meta;
mod reflect_struct;
mod repr;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, PolicyAttr, TypeAttributes};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::ReflectStruct;
pub(crate) use repr::ReprLayout;
