#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use ya_ptr as ptr;
pub use ya_reflect as reflect;
pub use ya_utils as utils;
