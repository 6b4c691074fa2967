//! # Coffee Ordering
//!
//! Feature slice for the coffee order form: collects type, flavor, size and strength,
//! validates them, and hands the finished [`CoffeeOrder`] to a host-supplied handler.
//!
//! ## Architecture
//!
//! 1.  **Model ([`model`]):** the working draft, inline errors and the options derived
//!     from the chosen coffee type.
//! 2.  **Validation ([`validation`]):** pure rules mapping a draft to field messages.
//! 3.  **Submission ([`submission`]):** validate, call the handler, reset.
//! 4.  **UI (`ui`):** the Dioxus component. Gated behind the `client` feature.
//!
//! ## Example
//!
//! ```rust
//! use barista_ordering::{CoffeeOrder, FormField, OrderFormModel, SubmitOutcome};
//! use std::convert::Infallible;
//!
//! let mut form = OrderFormModel::default();
//! form.set_field(FormField::Type, "latte").unwrap();
//! form.set_field(FormField::Flavor, "caramel").unwrap();
//! form.set_field(FormField::Size, "grand").unwrap();
//! form.set_field(FormField::Strength, "70").unwrap();
//!
//! let mut received = Vec::new();
//! let outcome = form
//!     .submit(&mut |order: CoffeeOrder| -> Result<(), Infallible> {
//!         received.push(order);
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(outcome, SubmitOutcome::Submitted);
//! assert_eq!(received.len(), 1);
//! assert!(form.draft().is_empty());
//! ```

mod error;
pub mod model;
pub mod submission;
#[cfg(feature = "client")]
mod ui;
pub mod validation;

pub use crate::error::{OrderingError, OrderingErrorExt};
pub use crate::model::OrderFormModel;
pub use crate::submission::{OrderHandler, SubmitOutcome, submit};
#[cfg(feature = "client")]
pub use crate::ui::CoffeeOrderForm;
pub use crate::validation::{ValidationEngine, ValidationErrors, validate};
pub use barista_domain::config::ValidationPolicy;
pub use barista_domain::{CatalogEntry, CoffeeCatalog, CoffeeOrder, CoffeeType, FormField, OrderDraft};
