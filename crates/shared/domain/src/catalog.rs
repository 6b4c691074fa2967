//! Coffee catalog: which flavors and sizes each coffee type may be ordered with.
//!
//! The catalog is an immutable value. It is `Arc`-backed so every form instance and
//! every clone of the application config share one allocation.

use crate::order::CoffeeType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Allowed options for a single coffee type, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    pub flavors: Vec<String>,
    pub sizes: Vec<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(flavors: &[&str], sizes: &[&str]) -> Self {
        Self {
            flavors: flavors.iter().map(|f| (*f).to_owned()).collect(),
            sizes: sizes.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn allows_flavor(&self, flavor: &str) -> bool {
        self.flavors.iter().any(|f| f == flavor)
    }

    #[must_use]
    pub fn allows_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// Mapping from coffee type to its permitted flavors and sizes.
///
/// A type that has no entry permits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoffeeCatalog {
    entries: Arc<BTreeMap<CoffeeType, CatalogEntry>>,
}

impl CoffeeCatalog {
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (CoffeeType, CatalogEntry)>) -> Self {
        Self { entries: Arc::new(entries.into_iter().collect()) }
    }

    #[must_use]
    pub fn entry(&self, coffee_type: CoffeeType) -> Option<&CatalogEntry> {
        self.entries.get(&coffee_type)
    }

    /// Coffee types that have an entry, in declaration order of [`CoffeeType`].
    pub fn types(&self) -> impl Iterator<Item = CoffeeType> + '_ {
        self.entries.keys().copied()
    }

    /// Flavors allowed for `coffee_type`, or an empty slice when it is unset or unknown.
    #[must_use]
    pub fn flavors(&self, coffee_type: Option<CoffeeType>) -> &[String] {
        coffee_type.and_then(|t| self.entry(t)).map(|e| e.flavors.as_slice()).unwrap_or_default()
    }

    /// Sizes allowed for `coffee_type`, or an empty slice when it is unset or unknown.
    #[must_use]
    pub fn sizes(&self, coffee_type: Option<CoffeeType>) -> &[String] {
        coffee_type.and_then(|t| self.entry(t)).map(|e| e.sizes.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn allows_flavor(&self, coffee_type: CoffeeType, flavor: &str) -> bool {
        self.entry(coffee_type).is_some_and(|e| e.allows_flavor(flavor))
    }

    #[must_use]
    pub fn allows_size(&self, coffee_type: CoffeeType, size: &str) -> bool {
        self.entry(coffee_type).is_some_and(|e| e.allows_size(size))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CoffeeCatalog {
    fn default() -> Self {
        Self::new([
            (
                CoffeeType::Espresso,
                CatalogEntry::new(
                    &["none", "vanilla", "lemon tarts", "orange-infused chocolate"],
                    &["short", "tall"],
                ),
            ),
            (
                CoffeeType::Cappuccino,
                CatalogEntry::new(
                    &["none", "vanilla", "caramel", "cinnamon"],
                    &["short", "tall", "grand"],
                ),
            ),
            (
                CoffeeType::Latte,
                CatalogEntry::new(
                    &["none", "vanilla", "caramel", "hazelnut"],
                    &["short", "tall", "grand"],
                ),
            ),
            (
                CoffeeType::Americano,
                CatalogEntry::new(&["none", "hazelnut", "maple"], &["tall", "grand", "venti"]),
            ),
        ])
    }
}

/// Title-cases a catalog value for display, e.g. `"lemon tarts"` -> `"Lemon Tarts"`.
#[must_use]
pub fn display_label(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
