#![expect(unsafe_code, reason = "fields are reached through their recorded offset")]

use core::any::Any;

use ya_ptr::{Ptr, PtrMut};

use crate::access::{AccessError, AccessPath, AccessorMeta, Getter, Setter};
use crate::info::FieldInfo;
use crate::value::ErasedValue;

fn meta(field: &FieldInfo) -> AccessorMeta {
    AccessorMeta {
        member: field.name(),
        declaring_type: field.owner().type_name(),
        path: AccessPath::Fast,
    }
}

/// Reads the field at its offset and clones it into the box.
///
/// The owner must not be packed.
pub(super) fn getter(field: &FieldInfo) -> Getter {
    let owner = field.owner().ty_id();
    let expected = field.owner().type_path();
    let offset = field.offset();
    let ops = field.ops();

    Getter::new(meta(field), move |instance: &dyn Any| {
        let found = instance.type_id();
        if found != owner {
            return Err(AccessError::invalid_target(expected, found));
        }
        // SAFETY: `instance` is the declaring type, whose field of the ops'
        // type lives at `offset` (`FieldInfo::new`). The type is not packed.
        unsafe {
            let ptr = Ptr::from_ref(instance).byte_add(offset);
            Ok(ops.read(ptr))
        }
    })
}

/// Moves the unboxed value into the field at its offset.
///
/// The owner must not be packed.
pub(super) fn setter(field: &FieldInfo) -> Setter {
    let owner = field.owner().ty_id();
    let expected = field.owner().type_path();
    let member = field.name();
    let offset = field.offset();
    let ops = field.ops();

    Setter::new(meta(field), move |instance: &mut dyn Any, value: ErasedValue| {
        let found = (*instance).type_id();
        if found != owner {
            return Err(AccessError::invalid_target(expected, found));
        }
        if value.type_id() != ops.ty_id() {
            return Err(AccessError::type_mismatch(member, ops.type_name(), &value));
        }
        // SAFETY: same as the getter; exclusive access through `instance`.
        unsafe {
            let ptr = PtrMut::from_mut(instance).byte_add(offset);
            ops.write(ptr, value)
        }
        .map_err(|value| AccessError::type_mismatch(member, ops.type_name(), &value))
    })
}
