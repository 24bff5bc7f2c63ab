//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used for diagram node identifiers.
//! Node ids are short strings (`"etl"`, `"cdf"`, ...) that are compared far
//! more often than they are created, which makes interning a good fit.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient node identifier type using string interning.
///
/// Ids are unique within a scenario; the same textual id may appear in
/// different scenarios (independent namespaces) and interns to the same
/// symbol, which is harmless because ids are only ever resolved against the
/// elements of a single scenario.
///
/// # Examples
///
/// ```
/// use flujo_core::identifier::Id;
///
/// let source = Id::new("etl");
/// let target = Id::new("grp");
/// assert_ne!(source, target);
/// assert_eq!(source, "etl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice, equivalent to [`Id::new`].
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
