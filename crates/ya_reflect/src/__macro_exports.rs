//! Items used by the code `#[derive(Reflect)]` emits. Not public API.

use core::any::Any;

use crate::access::AccessError;
use crate::value::ErasedValue;

/// Calls a property getter and boxes its result.
#[inline]
pub fn call_getter<T, V: Any + Send + Sync>(target: &T, get: fn(&T) -> V) -> ErasedValue {
    ErasedValue::new(get(target))
}

/// Unboxes `value` and passes it to a property setter.
///
/// `target` is untouched if `value` has the wrong type.
#[inline]
pub fn call_setter<T, V: Any + Send + Sync>(
    target: &mut T,
    member: &'static str,
    set: fn(&mut T, V),
    value: ErasedValue,
) -> Result<(), AccessError> {
    let value = value
        .take::<V>()
        .map_err(|value| AccessError::type_mismatch(member, core::any::type_name::<V>(), &value))?;
    set(target, value);
    Ok(())
}

/// Unboxes `value` for a field assignment.
#[inline]
pub fn take_field<V: Any>(member: &'static str, value: ErasedValue) -> Result<V, AccessError> {
    value
        .take::<V>()
        .map_err(|value| AccessError::type_mismatch(member, core::any::type_name::<V>(), &value))
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::registry::TypeRegistry;

    /// A registration function submitted by `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    #[inline]
    pub fn register_type<T: Typed>(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }

    /// Registered by every successful `auto_register` run; its presence
    /// means link-time collection works on this platform.
    #[derive(Reflect)]
    #[reflect(auto_register)]
    pub struct __AvailFlag;

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
