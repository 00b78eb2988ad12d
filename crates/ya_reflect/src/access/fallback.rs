use core::any::Any;

use crate::access::{AccessPath, AccessorMeta, Getter, Setter};
use crate::info::FieldInfo;
use crate::value::ErasedValue;

fn meta(field: &FieldInfo) -> AccessorMeta {
    AccessorMeta {
        member: field.name(),
        declaring_type: field.owner().type_name(),
        path: AccessPath::Fallback,
    }
}

/// Reads the field by name through the owner's `Reflect` impl.
pub(super) fn getter(field: &FieldInfo) -> Getter {
    log::warn!(
        "`{}::{}`: type is `{:?}`, compiling getter with name-keyed reflection",
        field.owner().type_name(),
        field.name(),
        field.owner().layout(),
    );

    let owner = *field.owner();
    let member = field.name();
    Getter::new(meta(field), move |instance: &dyn Any| {
        owner.reflect_get(instance, member)
    })
}

/// Writes the field by name through the owner's `Reflect` impl.
pub(super) fn setter(field: &FieldInfo) -> Setter {
    log::warn!(
        "`{}::{}`: type is `{:?}`, compiling setter with name-keyed reflection",
        field.owner().type_name(),
        field.name(),
        field.owner().layout(),
    );

    let owner = *field.owner();
    let member = field.name();
    Setter::new(meta(field), move |instance: &mut dyn Any, value: ErasedValue| {
        owner.reflect_set(instance, member, value)
    })
}
