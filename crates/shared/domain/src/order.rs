use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Kind of coffee that can be ordered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CoffeeType {
    Espresso,
    Cappuccino,
    Latte,
    Americano,
}

impl CoffeeType {
    /// Human-readable name used as an option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Espresso => "Espresso",
            Self::Cappuccino => "Cappuccino",
            Self::Latte => "Latte",
            Self::Americano => "Americano",
        }
    }
}

/// A finished, validated coffee order handed to the host application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CoffeeOrder {
    #[serde(rename = "type")]
    pub coffee_type: CoffeeType,
    pub flavor: String,
    pub size: String,
    /// Percentage in `0..=100`.
    pub strength: u8,
}

/// The in-progress, possibly invalid order held by the form.
///
/// Empty strings and `None` both mean "not filled in yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub coffee_type: Option<CoffeeType>,
    pub flavor: String,
    pub size: String,
    pub strength: Option<i64>,
}

impl OrderDraft {
    #[must_use]
    pub const fn new() -> Self {
        Self { coffee_type: None, flavor: String::new(), size: String::new(), strength: None }
    }

    /// `true` when no field holds a value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.coffee_type.is_none()
            && self.flavor.is_empty()
            && self.size.is_empty()
            && self.strength.is_none()
    }
}

impl From<CoffeeOrder> for OrderDraft {
    fn from(order: CoffeeOrder) -> Self {
        Self {
            coffee_type: Some(order.coffee_type),
            flavor: order.flavor,
            size: order.size,
            strength: Some(i64::from(order.strength)),
        }
    }
}

/// Input fields of the order form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Type,
    Flavor,
    Size,
    Strength,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn coffee_type_names_are_lowercase() {
        let names: Vec<String> = CoffeeType::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["espresso", "cappuccino", "latte", "americano"]);
        assert_eq!(CoffeeType::from_str("latte").ok(), Some(CoffeeType::Latte));
        assert!(CoffeeType::from_str("mocha").is_err());
    }

    #[test]
    fn draft_from_order_keeps_every_field() {
        let order = CoffeeOrder {
            coffee_type: CoffeeType::Latte,
            flavor: "caramel".to_owned(),
            size: "grand".to_owned(),
            strength: 70,
        };
        let draft = OrderDraft::from(order);
        assert_eq!(draft.coffee_type, Some(CoffeeType::Latte));
        assert_eq!(draft.strength, Some(70));
        assert!(!draft.is_empty());
        assert!(OrderDraft::new().is_empty());
    }
}
