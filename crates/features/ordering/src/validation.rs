//! # Validation Engine
//!
//! Maps an [`OrderDraft`] to field-level error messages. Every field is checked on its own
//! and all failures are collected; one bad field never hides another.
//!
//! ## Rules
//! 1. **Required**: type, flavor, size and strength must be filled in.
//! 2. **Bounds**: strength must lie in `0..=100`.
//! 3. **Catalog** (opt-in via [`ValidationPolicy::strict_catalog`]): flavor and size must be
//!    listed for the chosen type. Off by default; the form only offers listed options.

use barista_domain::config::ValidationPolicy;
use barista_domain::{CoffeeCatalog, CoffeeOrder, CoffeeType, FormField, OrderDraft};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;

pub const STRENGTH_MIN: i64 = 0;
pub const STRENGTH_MAX: i64 = 100;

pub const TYPE_REQUIRED: &str = "Please select a coffee type";
pub const FLAVOR_REQUIRED: &str = "Please choose a flavor";
pub const SIZE_REQUIRED: &str = "Please select a size";
pub const STRENGTH_REQUIRED: &str = "Please enter strength";
pub const STRENGTH_TOO_LOW: &str = "Strength must be at least 0";
pub const STRENGTH_TOO_HIGH: &str = "Strength cannot exceed 100";

type Message = Cow<'static, str>;
type Checked<T> = Result<T, Message>;

/// Field-level error messages, ordered by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<FormField, Message>,
}

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.messages.get(&field).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.messages.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Fields with an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.messages.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.messages.iter().map(|(field, message)| (*field, message.as_ref()))
    }

    /// Replaces the message for `field`; `None` clears it.
    pub(crate) fn set(&mut self, field: FormField, message: Option<Message>) {
        match message {
            Some(message) => {
                self.messages.insert(field, message);
            },
            None => {
                self.messages.remove(&field);
            },
        }
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a FormField, &'a Message);
    type IntoIter = btree_map::Iter<'a, FormField, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Validation rules bound to a catalog and a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationEngine {
    catalog: CoffeeCatalog,
    policy: ValidationPolicy,
}

impl ValidationEngine {
    #[must_use]
    pub const fn new(catalog: CoffeeCatalog, policy: ValidationPolicy) -> Self {
        Self { catalog, policy }
    }

    #[must_use]
    pub const fn catalog(&self) -> &CoffeeCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Collects every applicable error for `draft`.
    #[must_use]
    pub fn validate(&self, draft: &OrderDraft) -> ValidationErrors {
        self.check(draft).err().unwrap_or_default()
    }

    /// Validates `draft` and, when it passes, builds the finished order.
    ///
    /// # Errors
    /// Returns every field error found; never a partial set.
    pub fn check(&self, draft: &OrderDraft) -> Result<CoffeeOrder, ValidationErrors> {
        let coffee_type = check_type(draft);
        let flavor = self.check_flavor(draft);
        let size = self.check_size(draft);
        let strength = check_strength(draft);

        match (coffee_type, flavor, size, strength) {
            (Ok(coffee_type), Ok(flavor), Ok(size), Ok(strength)) => Ok(CoffeeOrder {
                coffee_type,
                flavor: flavor.to_owned(),
                size: size.to_owned(),
                strength,
            }),
            (coffee_type, flavor, size, strength) => {
                let mut errors = ValidationErrors::default();
                errors.set(FormField::Type, coffee_type.err());
                errors.set(FormField::Flavor, flavor.err());
                errors.set(FormField::Size, size.err());
                errors.set(FormField::Strength, strength.err());
                Err(errors)
            },
        }
    }

    /// Error for a single field, as [`ValidationEngine::validate`] would report it.
    #[must_use]
    pub fn validate_field(&self, draft: &OrderDraft, field: FormField) -> Option<Cow<'static, str>> {
        match field {
            FormField::Type => check_type(draft).err(),
            FormField::Flavor => self.check_flavor(draft).err(),
            FormField::Size => self.check_size(draft).err(),
            FormField::Strength => check_strength(draft).err(),
        }
    }

    fn check_flavor<'d>(&self, draft: &'d OrderDraft) -> Checked<&'d str> {
        let flavor = required(&draft.flavor, FLAVOR_REQUIRED)?;
        match draft.coffee_type {
            Some(t) if self.policy.strict_catalog && !self.catalog.allows_flavor(t, flavor) => {
                Err(format!("Please choose a flavor available for {t}").into())
            },
            _ => Ok(flavor),
        }
    }

    fn check_size<'d>(&self, draft: &'d OrderDraft) -> Checked<&'d str> {
        let size = required(&draft.size, SIZE_REQUIRED)?;
        match draft.coffee_type {
            Some(t) if self.policy.strict_catalog && !self.catalog.allows_size(t, size) => {
                Err(format!("Please select a size available for {t}").into())
            },
            _ => Ok(size),
        }
    }
}

/// Validates `draft` with the default rules (no catalog membership check).
#[must_use]
pub fn validate(draft: &OrderDraft) -> ValidationErrors {
    ValidationEngine::default().validate(draft)
}

fn check_type(draft: &OrderDraft) -> Checked<CoffeeType> {
    draft.coffee_type.ok_or(Cow::Borrowed(TYPE_REQUIRED))
}

fn check_strength(draft: &OrderDraft) -> Checked<u8> {
    match draft.strength {
        None => Err(STRENGTH_REQUIRED.into()),
        Some(s) if s < STRENGTH_MIN => Err(STRENGTH_TOO_LOW.into()),
        Some(s) if s > STRENGTH_MAX => Err(STRENGTH_TOO_HIGH.into()),
        Some(s) => u8::try_from(s).map_err(|_| STRENGTH_TOO_HIGH.into()),
    }
}

fn required<'d>(value: &'d str, message: &'static str) -> Checked<&'d str> {
    if value.trim().is_empty() { Err(message.into()) } else { Ok(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_domain::CatalogEntry;

    fn draft(t: Option<CoffeeType>, flavor: &str, size: &str, strength: Option<i64>) -> OrderDraft {
        OrderDraft { coffee_type: t, flavor: flavor.to_owned(), size: size.to_owned(), strength }
    }

    #[test]
    fn empty_draft_reports_all_four_fields() {
        let errors = validate(&OrderDraft::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::Type), Some(TYPE_REQUIRED));
        assert_eq!(errors.get(FormField::Flavor), Some(FLAVOR_REQUIRED));
        assert_eq!(errors.get(FormField::Size), Some(SIZE_REQUIRED));
        assert_eq!(errors.get(FormField::Strength), Some(STRENGTH_REQUIRED));
    }

    #[test]
    fn strength_bounds() {
        let base = |s| draft(Some(CoffeeType::Latte), "caramel", "grand", Some(s));

        assert_eq!(validate(&base(-1)).get(FormField::Strength), Some(STRENGTH_TOO_LOW));
        assert_eq!(validate(&base(101)).get(FormField::Strength), Some(STRENGTH_TOO_HIGH));
        assert!(validate(&base(0)).is_empty());
        assert!(validate(&base(100)).is_empty());
    }

    #[test]
    fn whitespace_only_flavor_counts_as_missing() {
        let errors = validate(&draft(Some(CoffeeType::Latte), "  ", "tall", Some(10)));
        assert_eq!(errors.fields().collect::<Vec<_>>(), [FormField::Flavor]);
    }

    #[test]
    fn default_rules_ignore_catalog_membership() {
        let off_menu = draft(Some(CoffeeType::Espresso), "caramel", "grand", Some(50));
        assert!(validate(&off_menu).is_empty());
    }

    #[test]
    fn strict_rules_check_catalog_membership() {
        let engine = ValidationEngine::new(
            CoffeeCatalog::default(),
            ValidationPolicy { strict_catalog: true },
        );
        let off_menu = draft(Some(CoffeeType::Espresso), "caramel", "grand", Some(50));
        let errors = engine.validate(&off_menu);

        assert_eq!(errors.get(FormField::Flavor), Some("Please choose a flavor available for espresso"));
        assert_eq!(errors.get(FormField::Size), Some("Please select a size available for espresso"));
        assert!(!errors.contains(FormField::Strength));

        let on_menu = draft(Some(CoffeeType::Espresso), "vanilla", "short", Some(50));
        assert!(engine.validate(&on_menu).is_empty());
    }

    #[test]
    fn strict_rules_without_type_only_require_values() {
        let engine = ValidationEngine::new(
            CoffeeCatalog::new([(CoffeeType::Latte, CatalogEntry::new(&["oat"], &["tall"]))]),
            ValidationPolicy { strict_catalog: true },
        );
        let errors = engine.validate(&draft(None, "caramel", "grand", Some(5)));
        assert_eq!(errors.fields().collect::<Vec<_>>(), [FormField::Type]);
    }

    #[test]
    fn check_builds_the_finished_order() {
        let order = ValidationEngine::default()
            .check(&draft(Some(CoffeeType::Latte), "caramel", "grand", Some(70)))
            .expect("valid draft");
        assert_eq!(
            order,
            CoffeeOrder {
                coffee_type: CoffeeType::Latte,
                flavor: "caramel".to_owned(),
                size: "grand".to_owned(),
                strength: 70,
            }
        );
    }

    #[test]
    fn validate_field_matches_full_validation() {
        let engine = ValidationEngine::default();
        let d = draft(Some(CoffeeType::Americano), "", "venti", Some(250));
        let errors = engine.validate(&d);
        for field in [FormField::Type, FormField::Flavor, FormField::Size, FormField::Strength] {
            assert_eq!(engine.validate_field(&d, field).as_deref(), errors.get(field));
        }
    }
}
