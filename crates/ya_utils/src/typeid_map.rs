use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map from [`TypeId`] to `V`.
///
/// Keys skip rehashing ([`NoOpHashState`]). Used for per-type tables such
/// as registered type info and cached member accessors.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use ya_utils::TypeIdMap;
///
/// let mut sizes = TypeIdMap::new();
/// sizes.insert(TypeId::of::<u32>(), 4_usize);
///
/// assert_eq!(sizes.get_type::<u32>(), Some(&4));
/// assert_eq!(sizes.get_type::<u8>(), None);
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty map without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Inserts the value built by `f` if `type_id` is absent.
    ///
    /// Returns `false`, without calling `f`, if the key already exists.
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => {
                entry.insert(f());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the value of `type_id`, inserting the one built by `f` first
    /// if the key is absent.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        self.0.entry(type_id).or_insert_with(f)
    }

    /// Inserts a value, returning the previous one.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.0.insert(type_id, value)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn try_insert_keeps_first_value() {
        let mut map = TypeIdMap::new();
        assert!(map.try_insert(TypeId::of::<u8>(), || "first"));
        assert!(!map.try_insert(TypeId::of::<u8>(), || unreachable!()));
        assert_eq!(map.get_type::<u8>(), Some(&"first"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_or_insert_then_clear() {
        let mut map = TypeIdMap::new();
        *map.get_or_insert(TypeId::of::<i64>(), || 10) += 5;
        *map.get_or_insert(TypeId::of::<i64>(), || 0) += 1;
        assert_eq!(map.get_type::<i64>(), Some(&16));
        assert_eq!(map.values().sum::<i32>(), 16);

        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains(&TypeId::of::<i64>()));
    }
}
