use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

use super::fields::PATH_SEPARATOR;

/// Reserved namespace for pre-placed level assets. Identifiers under it
/// keep their human-readable names.
pub const STATIC_NAMESPACE: &str = "Static";

lazy_static! {
    static ref EXCLUDED_IDENTS: FxHashSet<&'static str> =
        FxHashSet::from_iter([STATIC_NAMESPACE]);
    static ref EXCLUDED_PREFIX: String = format!("{}{}", STATIC_NAMESPACE, PATH_SEPARATOR);
}

/// True when `ident` must never be aliased: exact member of the exclusion
/// set, or anything under the reserved namespace prefix.
pub fn is_excluded(ident: &str) -> bool {
    EXCLUDED_IDENTS.contains(ident) || ident.starts_with(EXCLUDED_PREFIX.as_str())
}
