use core::any::TypeId;

use ya_utils::TypeIdMap;
use ya_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [reflected](crate::info::Typed) types.
///
/// Given a type, or only its name, the registry hands out its
/// [`TypeInfo`] so the members can be enumerated and compiled.
///
/// # Example
///
/// ```
/// use core::any::TypeId;
/// use ya_reflect::{derive::Reflect, registry::TypeRegistry};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Point>();
///
/// let info = registry.get_with_type_name("Point").unwrap();
/// assert_eq!(info.ty().ty_id(), TypeId::of::<Point>());
/// assert_eq!(info.len(), 2);
/// ```
pub struct TypeRegistry {
    type_info_table: TypeIdMap<&'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            type_info_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        info: &'static TypeInfo,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = info.ty();
        let type_name = ty.type_name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                log::debug!("type name `{type_name}` is ambiguous, use the full type path");
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.ty_id());
            }
        }

        // For new type, assuming that the full path cannot be duplicated.
        type_path_to_id.insert(ty.type_path(), ty.ty_id());
    }

    /// Registers the type `T` if it has not yet been registered.
    ///
    /// Returns `true` if the type was newly added.
    pub fn register<T: Typed>(&mut self) -> bool {
        self.type_info_table.try_insert(TypeId::of::<T>(), || {
            let info = T::type_info();
            Self::add_new_type_indices(
                info,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            info
        })
    }

    /// Registers every type derived with `#[reflect(auto_register)]`.
    ///
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform. Always `false` without the `auto_register` feature.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use ya_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            // Reduce the cost of duplicate registrations.
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether the type with given [`TypeId`] has been registered in this registry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_info_table.contains(&type_id)
    }

    /// Returns the [`TypeInfo`] of the type with the given [`TypeId`].
    ///
    /// If the specified type has not been registered, returns `None`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.type_info_table.get(&type_id).copied()
    }

    /// Returns the [`TypeInfo`] of the type with the given full type path.
    ///
    /// If no type with the given path has been registered, returns `None`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the [`TypeInfo`] of the type with the given short type name.
    ///
    /// If the type name is ambiguous, or if no type with the given name
    /// has been registered, returns `None`.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeInfo> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given short type name is shared by more than
    /// one registered type.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns an iterator over the registered types, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.type_info_table.values().copied()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_info_table.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeRegistry;
    use crate::derive::Reflect;
    use core::any::TypeId;

    mod first {
        use crate::derive::Reflect;

        #[derive(Reflect)]
        pub struct Config {
            pub level: u8,
        }
    }

    mod second {
        use crate::derive::Reflect;

        #[derive(Reflect)]
        pub struct Config(pub bool);
    }

    #[derive(Reflect)]
    struct Unique;

    #[cfg(feature = "auto_register")]
    #[derive(Reflect)]
    #[reflect(auto_register)]
    struct Marked {
        id: u64,
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register::<Unique>());
        assert!(!registry.register::<Unique>());
        assert_eq!(registry.len(), 1);

        let info = registry.get(TypeId::of::<Unique>()).unwrap();
        assert!(info.is_empty());
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn ambiguous_names_need_full_path() {
        let mut registry = TypeRegistry::new();
        registry.register::<first::Config>();
        assert!(registry.get_with_type_name("Config").is_some());

        registry.register::<second::Config>();
        assert!(registry.is_ambiguous("Config"));
        assert!(registry.get_with_type_name("Config").is_none());

        let path = core::any::type_name::<second::Config>();
        let info = registry.get_with_type_path(path).unwrap();
        assert_eq!(info.ty().ty_id(), TypeId::of::<second::Config>());
        assert_eq!(info.member_at(0).unwrap().name(), "0");
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_finds_marked_types() {
        let mut registry = TypeRegistry::new();
        if registry.auto_register() {
            let info = registry.get(TypeId::of::<Marked>()).unwrap();
            assert!(info.field("id").is_some());
            assert!(registry.auto_register());
        }
    }
}
