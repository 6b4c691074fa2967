//! # Order Form Model
//!
//! Working state of one mounted order form: the draft, its inline errors, and the
//! flavor/size options derived from the chosen coffee type.
//!
//! Errors follow a validate-on-submit flow. Nothing is reported while the user fills the
//! form in for the first time; once a submission has been attempted, every edit
//! re-validates the fields it touched so inline messages clear as soon as they are fixed.

use crate::error::{OrderingError, OrderingErrorExt};
use crate::submission::{self, OrderHandler, SubmitOutcome};
use crate::validation::{ValidationEngine, ValidationErrors};
use barista_domain::config::ValidationPolicy;
use barista_domain::{CoffeeCatalog, CoffeeType, FormField, OrderDraft};
use std::num::IntErrorKind;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormModel {
    engine: ValidationEngine,
    draft: OrderDraft,
    errors: ValidationErrors,
    submit_count: u32,
}

impl Default for OrderFormModel {
    fn default() -> Self {
        Self::new(CoffeeCatalog::default())
    }
}

impl OrderFormModel {
    /// Creates an empty form backed by `catalog`, using the default validation policy.
    #[must_use]
    pub fn new(catalog: CoffeeCatalog) -> Self {
        Self {
            engine: ValidationEngine::new(catalog, ValidationPolicy::default()),
            draft: OrderDraft::new(),
            errors: ValidationErrors::default(),
            submit_count: 0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.engine = ValidationEngine::new(self.engine.catalog().clone(), policy);
        self
    }

    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inline message for `field`, if any.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    #[must_use]
    pub const fn catalog(&self) -> &CoffeeCatalog {
        self.engine.catalog()
    }

    #[must_use]
    pub const fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Flavors offered for the current type; empty while no type is chosen.
    #[must_use]
    pub fn allowed_flavors(&self) -> &[String] {
        self.catalog().flavors(self.draft.coffee_type)
    }

    /// Sizes offered for the current type; empty while no type is chosen.
    #[must_use]
    pub fn allowed_sizes(&self) -> &[String] {
        self.catalog().sizes(self.draft.coffee_type)
    }

    /// Updates one field from raw input text.
    ///
    /// Blank input clears the field. A strength that is not a whole number is treated as
    /// blank, the way a number input reports unparseable text; whole numbers outside the
    /// `i64` range saturate so they still read as out of bounds.
    ///
    /// # Errors
    /// Returns [`OrderingError::UnknownCoffeeType`] when `field` is [`FormField::Type`] and
    /// `raw` names no coffee type, and [`OrderingError::NotOffered`] for a flavor or size the
    /// chosen type does not list. The model is left unchanged in both cases.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), OrderingError> {
        let value = raw.trim();
        debug!(%field, value, "Field edited");
        match field {
            FormField::Type => {
                let coffee_type =
                    parse_coffee_type(value).context("Parsing coffee type selection")?;
                self.set_type(coffee_type);
            },
            FormField::Flavor => self.set_flavor(value)?,
            FormField::Size => self.set_size(value)?,
            FormField::Strength => self.set_strength(parse_strength(value)),
        }
        Ok(())
    }

    /// [`OrderFormModel::set_field`] addressed by field name (`"type"`, `"flavor"`, ...).
    ///
    /// # Errors
    /// Returns [`OrderingError::UnknownField`] for names the form does not have, plus the
    /// errors of [`OrderFormModel::set_field`].
    pub fn set_field_by_name(&mut self, name: &str, raw: &str) -> Result<(), OrderingError> {
        let field = FormField::from_str(name)
            .map_err(|_| OrderingError::UnknownField { name: name.to_owned(), context: None })?;
        self.set_field(field, raw)
    }

    /// Sets the coffee type, dropping a flavor or size the new type does not offer.
    pub fn set_type(&mut self, coffee_type: Option<CoffeeType>) {
        self.draft.coffee_type = coffee_type;

        let catalog = self.engine.catalog();
        let drop_flavor = !self.draft.flavor.is_empty()
            && !catalog.flavors(coffee_type).contains(&self.draft.flavor);
        let drop_size =
            !self.draft.size.is_empty() && !catalog.sizes(coffee_type).contains(&self.draft.size);

        if drop_flavor {
            debug!(flavor = %self.draft.flavor, ?coffee_type, "Clearing flavor not offered for type");
            self.draft.flavor.clear();
        }
        if drop_size {
            debug!(size = %self.draft.size, ?coffee_type, "Clearing size not offered for type");
            self.draft.size.clear();
        }

        // Catalog checks on flavor and size depend on the type.
        self.revalidate(&[FormField::Type, FormField::Flavor, FormField::Size]);
    }

    /// Sets the flavor; surrounding whitespace is dropped and blank input clears it.
    ///
    /// # Errors
    /// Returns [`OrderingError::NotOffered`] when a type is chosen and does not list the
    /// flavor. The model is left unchanged.
    pub fn set_flavor(&mut self, flavor: &str) -> Result<(), OrderingError> {
        let flavor = self.offered(FormField::Flavor, flavor, self.allowed_flavors())?;
        self.draft.flavor = flavor;
        self.revalidate(&[FormField::Flavor]);
        Ok(())
    }

    /// Sets the size; surrounding whitespace is dropped and blank input clears it.
    ///
    /// # Errors
    /// Returns [`OrderingError::NotOffered`] when a type is chosen and does not list the
    /// size. The model is left unchanged.
    pub fn set_size(&mut self, size: &str) -> Result<(), OrderingError> {
        let size = self.offered(FormField::Size, size, self.allowed_sizes())?;
        self.draft.size = size;
        self.revalidate(&[FormField::Size]);
        Ok(())
    }

    pub fn set_strength(&mut self, strength: Option<i64>) {
        self.draft.strength = strength;
        self.revalidate(&[FormField::Strength]);
    }

    /// Clears all fields, errors and submission tracking.
    pub fn reset(&mut self) {
        self.draft = OrderDraft::new();
        self.errors.clear();
        self.submit_count = 0;
    }

    /// `true` when any field differs from the empty draft.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Fields that currently hold a value, in form order.
    #[must_use]
    pub fn dirty_fields(&self) -> Vec<FormField> {
        let d = &self.draft;
        [
            (FormField::Type, d.coffee_type.is_some()),
            (FormField::Flavor, !d.flavor.is_empty()),
            (FormField::Size, !d.size.is_empty()),
            (FormField::Strength, d.strength.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, dirty)| dirty.then_some(field))
        .collect()
    }

    /// Submission attempts since the form was created or last reset.
    #[must_use]
    pub const fn submit_count(&self) -> u32 {
        self.submit_count
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// Validates the draft and hands the finished order to `handler`.
    ///
    /// See [`submission::submit`].
    ///
    /// # Errors
    /// Propagates the handler's error unchanged.
    pub fn submit<H>(&mut self, handler: &mut H) -> Result<SubmitOutcome, H::Error>
    where
        H: OrderHandler + ?Sized,
    {
        submission::submit(self, handler)
    }

    pub(crate) const fn record_attempt(&mut self) {
        self.submit_count = self.submit_count.saturating_add(1);
    }

    pub(crate) fn replace_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    fn offered(
        &self,
        field: FormField,
        raw: &str,
        allowed: &[String],
    ) -> Result<String, OrderingError> {
        let value = raw.trim();
        match self.draft.coffee_type {
            Some(coffee_type) if !value.is_empty() && !allowed.iter().any(|a| a == value) => {
                Err(OrderingError::NotOffered {
                    field,
                    value: value.to_owned(),
                    coffee_type,
                    context: None,
                })
            },
            _ => Ok(value.to_owned()),
        }
    }

    fn revalidate(&mut self, fields: &[FormField]) {
        if !self.is_submitted() {
            return;
        }
        for &field in fields {
            let message = self.engine.validate_field(&self.draft, field);
            self.errors.set(field, message);
        }
    }
}

fn parse_coffee_type(value: &str) -> Result<Option<CoffeeType>, OrderingError> {
    if value.is_empty() {
        return Ok(None);
    }
    CoffeeType::from_str(value)
        .map(Some)
        .map_err(|_| OrderingError::UnknownCoffeeType { value: value.to_owned(), context: None })
}

fn parse_strength(value: &str) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(strength) => Some(strength),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
