use crate::access::{AccessPath, AccessorMeta, Getter, Setter};
use crate::access::{fallback, field};
use crate::info::{FieldInfo, MemberInfo, PropertyInfo};

// -----------------------------------------------------------------------------
// Properties

fn property_meta(property: &PropertyInfo) -> AccessorMeta {
    AccessorMeta {
        member: property.name(),
        declaring_type: property.owner().type_name(),
        path: AccessPath::Fast,
    }
}

/// Compiles a getter calling the property's getter function.
///
/// Returns `None` for write-only properties.
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::Typed, value::ErasedValue};
/// use ya_reflect::access::{compile_property_getter, compile_property_setter};
///
/// #[derive(Reflect)]
/// #[reflect(property(name = "name", get = Person::name))]
/// struct Person {
///     given: String,
/// }
///
/// impl Person {
///     fn name(&self) -> String {
///         self.given.clone()
///     }
/// }
///
/// let info = Person::type_info().property("name").unwrap();
/// assert!(compile_property_setter(info).is_none());
///
/// let get = compile_property_getter(info).unwrap();
/// let p = Person { given: "Ada".into() };
/// assert_eq!(get.get(&p).unwrap().take::<String>().unwrap(), "Ada");
/// ```
pub fn compile_property_getter(property: &PropertyInfo) -> Option<Getter> {
    property
        .fns()
        .compile_get(property_meta(property), property.owner().type_path())
}

/// Compiles a setter calling the property's setter function.
///
/// Returns `None` for read-only properties.
pub fn compile_property_setter(property: &PropertyInfo) -> Option<Setter> {
    property
        .fns()
        .compile_set(property_meta(property), property.owner().type_path())
}

// -----------------------------------------------------------------------------
// Fields

/// Compiles a getter reading the field.
///
/// Fields are always readable, so this only returns `None` for
/// descriptors that forbid reading; none currently do.
///
/// For `#[repr(packed)]` declaring types the getter reads by name through
/// [`Reflect`](crate::Reflect) and reports [`AccessPath::Fallback`].
pub fn compile_field_getter(field: &FieldInfo) -> Option<Getter> {
    if !field.can_read() {
        return None;
    }
    if field.owner().layout().is_packed() {
        return Some(fallback::getter(field));
    }
    Some(field::getter(field))
}

/// Compiles a setter writing the field.
///
/// Returns `None` for fields marked `#[reflect(readonly)]`.
///
/// For `#[repr(packed)]` declaring types the setter writes by name through
/// [`Reflect`](crate::Reflect) and reports [`AccessPath::Fallback`].
///
/// # Examples
///
/// ```
/// use ya_reflect::{derive::Reflect, info::Typed, value::ErasedValue};
/// use ya_reflect::access::{AccessPath, compile_field_setter};
///
/// #[derive(Reflect)]
/// #[repr(C, packed)]
/// struct Header {
///     tag: u8,
///     len: u32,
/// }
///
/// let len = Header::type_info().field("len").unwrap();
/// let set = compile_field_setter(len).unwrap();
/// assert_eq!(set.path(), AccessPath::Fallback);
///
/// let mut header = Header { tag: 1, len: 0 };
/// set.set(&mut header, ErasedValue::new(64_u32)).unwrap();
/// assert_eq!({ header.len }, 64);
/// ```
pub fn compile_field_setter(field: &FieldInfo) -> Option<Setter> {
    if !field.can_write() {
        return None;
    }
    if field.owner().layout().is_packed() {
        return Some(fallback::setter(field));
    }
    Some(field::setter(field))
}

// -----------------------------------------------------------------------------
// Members

/// Compiles a getter for any member.
///
/// See [`compile_field_getter`] and [`compile_property_getter`].
#[inline]
pub fn compile_getter(member: &MemberInfo) -> Option<Getter> {
    match member {
        MemberInfo::Field(info) => compile_field_getter(info),
        MemberInfo::Property(info) => compile_property_getter(info),
    }
}

/// Compiles a setter for any member.
///
/// See [`compile_field_setter`] and [`compile_property_setter`].
#[inline]
pub fn compile_setter(member: &MemberInfo) -> Option<Setter> {
    match member {
        MemberInfo::Field(info) => compile_field_setter(info),
        MemberInfo::Property(info) => compile_property_setter(info),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{compile_field_getter, compile_field_setter, compile_getter, compile_setter};
    use super::{compile_property_getter, compile_property_setter};
    use crate::access::{AccessError, AccessPath, Getter, Setter};
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::value::ErasedValue;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::any::TypeId;

    #[derive(Reflect, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect)]
    #[reflect(property(name = "name", get = User::name))]
    #[reflect(property(name = "password", set = User::set_password))]
    #[reflect(property(name = "age", get = User::age, set = User::set_age))]
    struct User {
        #[reflect(skip)]
        name: String,
        #[reflect(skip)]
        hash: u64,
        #[reflect(skip)]
        age: u8,
        #[reflect(readonly)]
        id: u32,
        shared: Arc<String>,
    }

    impl User {
        fn new() -> Self {
            Self {
                name: String::from("ada"),
                hash: 0,
                age: 36,
                id: 7,
                shared: Arc::new(String::from("shared")),
            }
        }

        fn name(&self) -> String {
            self.name.clone()
        }

        fn set_password(&mut self, password: String) {
            self.hash = password.len() as u64;
        }

        fn age(&self) -> u8 {
            self.age
        }

        fn set_age(&mut self, age: u8) {
            self.age = age.min(150);
        }
    }

    #[derive(Reflect)]
    #[repr(C, packed)]
    struct Packed {
        tag: u8,
        value: u64,
    }

    #[derive(Reflect)]
    struct Pair(u16, String);

    fn getter<T: Typed>(name: &str) -> Getter {
        compile_getter(T::type_info().member(name).unwrap()).unwrap()
    }

    fn setter<T: Typed>(name: &str) -> Setter {
        compile_setter(T::type_info().member(name).unwrap()).unwrap()
    }

    #[test]
    fn field_round_trip() {
        let mut p = Point { x: 1, y: 2 };

        setter::<Point>("x").set(&mut p, ErasedValue::new(5_i32)).unwrap();
        let x = getter::<Point>("x").get(&p).unwrap();

        assert_eq!(x.take::<i32>().unwrap(), 5);
        assert_eq!(p, Point { x: 5, y: 2 });
    }

    #[test]
    fn accessors_describe_themselves() {
        let get = getter::<Point>("y");
        assert_eq!(get.member(), "y");
        assert_eq!(get.declaring_type(), "Point");
        assert_eq!(get.path(), AccessPath::Fast);

        let set = setter::<User>("age");
        assert_eq!(set.member(), "age");
        assert_eq!(set.declaring_type(), "User");
        assert_eq!(set.path(), AccessPath::Fast);
    }

    #[test]
    fn missing_direction_compiles_to_none() {
        let info = User::type_info();

        let name = info.property("name").unwrap();
        assert!(compile_property_getter(name).is_some());
        assert!(compile_property_setter(name).is_none());

        let password = info.property("password").unwrap();
        assert!(compile_property_getter(password).is_none());
        assert!(compile_property_setter(password).is_some());

        let id = info.field("id").unwrap();
        assert!(compile_field_getter(id).is_some());
        assert!(compile_field_setter(id).is_none());
    }

    #[test]
    fn skipped_fields_are_not_members() {
        let info = User::type_info();
        assert!(info.field("hash").is_none());
        assert!(info.field("name").is_none());

        let names: Vec<_> = info.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["id", "shared", "name", "password", "age"]);
    }

    #[test]
    fn property_accessors_call_functions() {
        let mut user = User::new();

        let name = getter::<User>("name").get(&user).unwrap();
        assert_eq!(name.take::<String>().unwrap(), "ada");

        setter::<User>("password")
            .set(&mut user, ErasedValue::new(String::from("secret")))
            .unwrap();
        assert_eq!(user.hash, 6);

        setter::<User>("age").set(&mut user, ErasedValue::new(200_u8)).unwrap();
        let age = getter::<User>("age").get(&user).unwrap();
        assert_eq!(age.take::<u8>().unwrap(), 150);
    }

    #[test]
    fn values_are_copied_out() {
        let mut p = Pair(1, String::from("before"));
        let get = getter::<Pair>("1");

        let first = get.get(&p).unwrap();
        p.1.push_str(" and after");

        assert_eq!(first.downcast_ref::<String>().unwrap(), "before");
        let second = get.get(&p).unwrap();
        assert_eq!(second.take::<String>().unwrap(), "before and after");
    }

    #[test]
    fn repeated_reads_are_equal() {
        let p = Pair(9, String::from("same"));
        let get = getter::<Pair>("0");

        let a = get.get(&p).unwrap().take::<u16>().unwrap();
        let b = get.get(&p).unwrap().take::<u16>().unwrap();
        assert_eq!(a, b);
        assert_eq!(p.0, 9);
    }

    #[test]
    fn shared_references_keep_identity() {
        let mut user = User::new();
        let get = getter::<User>("shared");
        let set = setter::<User>("shared");

        let read = get.get(&user).unwrap().take::<Arc<String>>().unwrap();
        assert!(Arc::ptr_eq(&read, &user.shared));

        let replacement = Arc::new(String::from("replacement"));
        set.set(&mut user, ErasedValue::new(Arc::clone(&replacement))).unwrap();

        let read = get.get(&user).unwrap().take::<Arc<String>>().unwrap();
        assert!(Arc::ptr_eq(&read, &replacement));
    }

    #[test]
    fn wrong_instance_is_invalid_target() {
        let pair = Pair(0, String::new());
        let err = getter::<Point>("x").get(&pair).unwrap_err();
        assert_eq!(
            err,
            AccessError::InvalidTarget {
                expected: core::any::type_name::<Point>(),
                found: TypeId::of::<Pair>(),
            }
        );

        let mut pair = Pair(0, String::new());
        let err = setter::<User>("age")
            .set(&mut pair, ErasedValue::new(1_u8))
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidTarget { .. }));
        assert_eq!(pair.0, 0);
    }

    #[test]
    fn wrong_value_is_type_mismatch() {
        let mut p = Point { x: 1, y: 2 };
        let err = setter::<Point>("x")
            .set(&mut p, ErasedValue::new(5_i64))
            .unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                member: "x",
                expected: "i32",
                found: "i64",
            }
        );
        assert_eq!(p, Point { x: 1, y: 2 });

        let mut user = User::new();
        let err = setter::<User>("age")
            .set(&mut user, ErasedValue::new("40"))
            .unwrap_err();
        assert!(matches!(err, AccessError::TypeMismatch { member: "age", .. }));
        assert_eq!(user.age, 36);
    }

    #[test]
    fn packed_fields_use_fallback() {
        let info = Packed::type_info();
        let value = info.field("value").unwrap();
        let get = compile_field_getter(value).unwrap();
        let set = compile_field_setter(value).unwrap();

        assert_eq!(get.path(), AccessPath::Fallback);
        assert_eq!(set.path(), AccessPath::Fallback);

        let mut packed = Packed { tag: 3, value: 1 };
        set.set(&mut packed, ErasedValue::new(u64::MAX)).unwrap();

        assert_eq!(get.get(&packed).unwrap().take::<u64>().unwrap(), u64::MAX);
        assert_eq!({ packed.tag }, 3);
    }

    #[test]
    fn packed_fallback_reports_errors() {
        let set = setter::<Packed>("tag");

        let mut packed = Packed { tag: 3, value: 1 };
        let err = set.set(&mut packed, ErasedValue::new(4_u16)).unwrap_err();
        assert!(matches!(err, AccessError::TypeMismatch { member: "tag", .. }));
        assert_eq!({ packed.tag }, 3);

        let mut p = Point { x: 0, y: 0 };
        let err = set.set(&mut p, ErasedValue::new(4_u8)).unwrap_err();
        assert!(matches!(err, AccessError::InvalidTarget { .. }));
    }

    #[test]
    fn boxed_instances_are_looked_through() {
        let mut boxed = ErasedValue::new(Point { x: 1, y: 2 });

        setter::<Point>("y").set(&mut boxed, ErasedValue::new(8_i32)).unwrap();
        let y = getter::<Point>("y").get(&boxed).unwrap();

        assert_eq!(y.take::<i32>().unwrap(), 8);
        assert_eq!(boxed.take::<Point>().unwrap(), Point { x: 1, y: 8 });
    }

    #[test]
    fn accessors_are_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Getter>();
        assert_send_sync::<Setter>();

        let get = getter::<Point>("x");
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let get = get.clone();
                std::thread::spawn(move || {
                    let p = Point { x: i, y: -i };
                    get.get(&p).unwrap().take::<i32>().unwrap()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, [0, 1, 2, 3]);
    }
}
