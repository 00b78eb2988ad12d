use core::any::{Any, TypeId};

use crate::Reflect;
use crate::access::{AccessError, AccessorMeta, Getter, Setter};
use crate::value::ErasedValue;

// -----------------------------------------------------------------------------
// PropertyFns

/// Type-erased view of a property's getter and setter functions.
pub(crate) trait PropertyFns: Send + Sync {
    fn can_read(&self) -> bool;
    fn can_write(&self) -> bool;
    fn compile_get(&self, meta: AccessorMeta, expected: &'static str) -> Option<Getter>;
    fn compile_set(&self, meta: AccessorMeta, expected: &'static str) -> Option<Setter>;
}

pub(crate) struct TypedPropertyFns<T, V> {
    pub get: Option<fn(&T) -> V>,
    pub set: Option<fn(&mut T, V)>,
}

impl<T: Reflect, V: Any + Send + Sync> PropertyFns for TypedPropertyFns<T, V> {
    #[inline]
    fn can_read(&self) -> bool {
        self.get.is_some()
    }

    #[inline]
    fn can_write(&self) -> bool {
        self.set.is_some()
    }

    fn compile_get(&self, meta: AccessorMeta, expected: &'static str) -> Option<Getter> {
        let get = self.get?;

        Some(Getter::new(meta, move |instance: &dyn Any| {
            let found = instance.type_id();
            let target = instance
                .downcast_ref::<T>()
                .ok_or(AccessError::invalid_target(expected, found))?;
            Ok(ErasedValue::new(get(target)))
        }))
    }

    fn compile_set(&self, meta: AccessorMeta, expected: &'static str) -> Option<Setter> {
        let set = self.set?;
        let member = meta.member;

        Some(Setter::new(meta, move |instance: &mut dyn Any, value: ErasedValue| {
            let found = (*instance).type_id();
            if found != TypeId::of::<T>() {
                return Err(AccessError::invalid_target(expected, found));
            }
            let value = value.take::<V>().map_err(|value| {
                AccessError::type_mismatch(member, core::any::type_name::<V>(), &value)
            })?;
            let target = instance
                .downcast_mut::<T>()
                .ok_or(AccessError::invalid_target(expected, found))?;
            set(target, value);
            Ok(())
        }))
    }
}
