//! # Submission
//!
//! Validate, hand off, reset. The handler is supplied by the host application and is called
//! at most once per submission, synchronously. Its failures are not caught here: they
//! propagate to whoever called [`submit`], and the draft is kept so the user can retry.

use crate::model::OrderFormModel;
use crate::validation::ValidationErrors;
use barista_domain::CoffeeOrder;
use tracing::{debug, info, warn};

/// Receiver of finished orders.
///
/// Implemented for every `FnMut(CoffeeOrder) -> Result<(), E>`; hosts that cannot fail can
/// use [`std::convert::Infallible`] as the error type.
pub trait OrderHandler {
    type Error;

    /// Takes ownership of a validated order.
    ///
    /// # Errors
    /// Whatever the host reports; it is returned from [`submit`] as is.
    fn handle(&mut self, order: CoffeeOrder) -> Result<(), Self::Error>;
}

impl<F, E> OrderHandler for F
where
    F: FnMut(CoffeeOrder) -> Result<(), E>,
{
    type Error = E;

    fn handle(&mut self, order: CoffeeOrder) -> Result<(), E> {
        self(order)
    }
}

/// What happened to a submission that did not fail in the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler received the order and the form was reset.
    Submitted,
    /// Validation failed; the errors are also stored on the form.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// Runs validation and, on success, hands the order to `handler` and resets `form`.
///
/// # Errors
/// Returns the handler's error unchanged. In that case the form keeps its draft.
pub fn submit<H>(form: &mut OrderFormModel, handler: &mut H) -> Result<SubmitOutcome, H::Error>
where
    H: OrderHandler + ?Sized,
{
    form.record_attempt();

    let order = match form.engine().check(form.draft()) {
        Ok(order) => order,
        Err(errors) => {
            debug!(
                attempt = form.submit_count(),
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Order rejected by validation"
            );
            form.replace_errors(errors.clone());
            return Ok(SubmitOutcome::Rejected(errors));
        },
    };

    form.replace_errors(ValidationErrors::default());

    info!(
        coffee_type = %order.coffee_type,
        flavor = %order.flavor,
        size = %order.size,
        strength = order.strength,
        "Order submitted"
    );

    handler.handle(order).inspect_err(|_| warn!("Order handler failed; keeping draft"))?;

    form.reset();
    Ok(SubmitOutcome::Submitted)
}
