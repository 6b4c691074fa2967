use barista_domain::{CoffeeType, FormField};
use std::borrow::Cow;

/// A specialized [`OrderingError`] enum of this crate.
#[barista_derive::barista_error]
pub enum OrderingError {
    /// Raw input that does not name a known coffee type.
    #[error("Unknown coffee type '{value}'{}", format_context(.context))]
    UnknownCoffeeType { value: String, context: Option<Cow<'static, str>> },
    /// Flavor or size that the chosen coffee type does not list.
    #[error("{field} '{value}' is not offered for {coffee_type}{}", format_context(.context))]
    NotOffered {
        field: FormField,
        value: String,
        coffee_type: CoffeeType,
        context: Option<Cow<'static, str>>,
    },
    /// Field name that the form does not have.
    #[error("Unknown form field '{name}'{}", format_context(.context))]
    UnknownField { name: String, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal ordering error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
