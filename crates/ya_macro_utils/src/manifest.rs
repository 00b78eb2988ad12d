use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name `ya_reflect` the way the *invoking* crate can
/// reach it: directly, through the `ya_core` facade, or under a renamed
/// dependency key.
///
/// # Example
///
/// ```no_run
/// # use ya_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("ya_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If a `dependencies` entry renames the requested crate
///    (`alias = { package = "crate_name", .. }`), return `::alias`.
/// 3. If requested crate name begins with `ya_`, and target crate depends on
///    the facade crate `ya_core`, return `::ya_core::short_name`
///    (e.g. `ya_reflect` -> `::ya_core::reflect`).
/// 4. Repeat step 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// When a crate needs to reference itself, add
/// `extern crate self as ya_reflect;` in the crate root so that rule 5 resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "ya_core";
const CRATE_PREFIX: &str = "ya_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    // `alias = { package = "name" }` or `[dependencies.alias] package = "name"`.
    fn find_renamed(deps: &Table, name: &str) -> Option<String> {
        deps.iter().find_map(|(key, item)| {
            let package = item.get("package").and_then(Item::as_str)?;
            (package == name).then(|| key.to_owned())
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        if let Some(alias) = Self::find_renamed(deps, name) {
            return Some(Self::parse_str(&format!("::{alias}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// Manifests are cached per path and re-read when the file's modified time
    /// changes. Callers should still resolve paths once per macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn path_string(path: &syn::Path) -> String {
        let segments = path
            .segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::");
        if path.leading_colon.is_some() {
            format!("::{segments}")
        } else {
            segments
        }
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nya_reflect = { path = \"../ya_reflect\" }\n");
        assert_eq!(path_string(&m.get_crate_path("ya_reflect")), "::ya_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\nya_core = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("ya_reflect")), "::ya_core::reflect");
    }

    #[test]
    fn renamed_dependency() {
        let m = manifest("[dependencies]\nrefl = { package = \"ya_reflect\", version = \"0.0.1\" }\n");
        assert_eq!(path_string(&m.get_crate_path("ya_reflect")), "::refl");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nya_core = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("ya_reflect")), "::ya_core::reflect");

        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(path_string(&m.get_crate_path("ya_reflect")), "::ya_reflect");
    }
}
