use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use ya_utils::TypeIdMap;
use ya_utils::hash::{FixedHashState, HashMap};

use crate::access::{Getter, Setter, compile_getter, compile_setter};
use crate::info::{MemberInfo, MemberKind, SerializationPolicy, Typed};

// -----------------------------------------------------------------------------
// MemberAccessors

/// The compiled accessors of one member, with the data a serializer needs
/// alongside them.
#[derive(Clone, Debug)]
pub struct MemberAccessors {
    getter: Option<Getter>,
    setter: Option<Setter>,
    kind: MemberKind,
    policy: Option<SerializationPolicy>,
}

impl MemberAccessors {
    /// Compiles both directions of `member`.
    pub fn compile(member: &MemberInfo) -> Self {
        Self {
            getter: compile_getter(member),
            setter: compile_setter(member),
            kind: member.kind(),
            policy: member.policy(),
        }
    }

    /// Returns the getter, `None` if the member cannot be read.
    #[inline]
    pub fn getter(&self) -> Option<&Getter> {
        self.getter.as_ref()
    }

    /// Returns the setter, `None` if the member cannot be written.
    #[inline]
    pub fn setter(&self) -> Option<&Setter> {
        self.setter.as_ref()
    }

    #[inline]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    #[inline]
    pub fn policy(&self) -> Option<SerializationPolicy> {
        self.policy
    }
}

// -----------------------------------------------------------------------------
// AccessorCache

type MemberTable = HashMap<&'static str, MemberAccessors>;

/// Compiled accessors, keyed by declaring type and member name.
///
/// Each member is compiled at most once per cache in the common case.
/// Compilation runs outside the lock: two threads asking for the same
/// uncached member may both compile it, and the first stored entry wins.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::Typed, registry::AccessorCache};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let cache = AccessorCache::new();
/// let members = cache.accessors_of::<Point>();
///
/// assert_eq!(members.len(), 2);
/// assert_eq!(cache.len(), 2);
///
/// let x = members[0].getter().unwrap();
/// assert_eq!(x.get(&Point { x: 3, y: 4 }).unwrap().take::<i32>().unwrap(), 3);
/// ```
pub struct AccessorCache {
    types: RwLock<TypeIdMap<MemberTable>>,
}

impl Default for AccessorCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl AccessorCache {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            types: RwLock::new(TypeIdMap::new()),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static AccessorCache {
        static GLOBAL: AccessorCache = AccessorCache::new();
        &GLOBAL
    }

    /// Returns the cached accessors of the member `name` of type `type_id`.
    pub fn get(&self, type_id: TypeId, name: &str) -> Option<MemberAccessors> {
        let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
        types.get(&type_id)?.get(name).cloned()
    }

    /// Returns the accessors of `member`, compiling and caching them if needed.
    pub fn get_or_compile(&self, member: &MemberInfo) -> MemberAccessors {
        let type_id = member.owner().ty_id();
        if let Some(cached) = self.get(type_id, member.name()) {
            return cached;
        }

        let compiled = MemberAccessors::compile(member);

        let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);
        types
            .get_or_insert(type_id, || HashMap::with_hasher(FixedHashState))
            .entry(member.name())
            .or_insert(compiled)
            .clone()
    }

    /// Returns the accessors of every member of `T`, in declaration order.
    pub fn accessors_of<T: Typed>(&self) -> Vec<MemberAccessors> {
        T::type_info()
            .iter()
            .map(|member| self.get_or_compile(member))
            .collect()
    }

    /// Returns the number of cached members, over all types.
    pub fn len(&self) -> usize {
        let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
        types.values().map(|table| table.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached accessor.
    ///
    /// Accessors already handed out stay valid.
    pub fn clear(&self) {
        self.types
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::AccessorCache;
    use crate::access::{AccessPath, Getter};
    use crate::derive::Reflect;
    use crate::info::{MemberKind, SerializationPolicy, Typed};
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::any::TypeId;

    #[derive(Reflect)]
    #[reflect(property(name = "title", get = Doc::title, serialize = never))]
    struct Doc {
        #[reflect(serialize = content)]
        body: String,
        #[reflect(readonly)]
        version: u32,
    }

    impl Doc {
        fn title(&self) -> String {
            self.body.lines().next().unwrap_or_default().into()
        }
    }

    #[test]
    fn repeated_lookups_share_accessors() {
        let cache = AccessorCache::new();
        let member = Doc::type_info().member("body").unwrap();

        let first = cache.get_or_compile(member);
        let second = cache.get_or_compile(member);
        assert_eq!(cache.len(), 1);

        let a = first.getter().unwrap();
        let b = second.getter().unwrap();
        assert!(Getter::ptr_eq(a, b));
        assert!(first.setter().is_some());
    }

    #[test]
    fn members_keep_kind_and_policy() {
        let cache = AccessorCache::new();
        let members = cache.accessors_of::<Doc>();

        let summary: Vec<_> = members
            .iter()
            .map(|m| (m.kind(), m.policy(), m.getter().is_some(), m.setter().is_some()))
            .collect();
        assert_eq!(
            summary,
            [
                (MemberKind::Field, Some(SerializationPolicy::Content), true, true),
                (MemberKind::Field, None, true, false),
                (MemberKind::Property, Some(SerializationPolicy::Never), true, false),
            ]
        );

        let title = cache.get(TypeId::of::<Doc>(), "title").unwrap();
        let doc = Doc { body: String::from("Intro\ntext"), version: 1 };
        let value = title.getter().unwrap().get(&doc).unwrap();
        assert_eq!(value.take::<String>().unwrap(), "Intro");
        assert_eq!(title.getter().unwrap().path(), AccessPath::Fast);
    }

    #[test]
    fn clear_forgets_everything() {
        let cache = AccessorCache::new();
        cache.accessors_of::<Doc>();
        assert!(!cache.is_empty());
        assert!(cache.get(TypeId::of::<Doc>(), "version").is_some());

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(TypeId::of::<Doc>(), "version").is_none());
    }

    #[test]
    fn concurrent_compilation_is_consistent() {
        let cache = Arc::new(AccessorCache::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    let body = cache.accessors_of::<Doc>().remove(0);
                    let doc = Doc { body: alloc::format!("doc {i}"), version: 0 };
                    let value = body.getter().unwrap().get(&doc).unwrap();
                    value.take::<String>().unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), alloc::format!("doc {i}"));
        }
        assert_eq!(cache.len(), 3);
    }
}
