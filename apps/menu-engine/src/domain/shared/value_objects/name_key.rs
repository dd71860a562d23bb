//! Case-insensitive name keys.
//!
//! Menu names keep the casing an editor typed; every lookup goes through
//! these helpers so that "burger", "Burger" and "BURGER" agree.

/// Lookup key for a menu name.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Returns true if two names are equal ignoring case.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || name_key(a) == name_key(b)
}
