//! Facade crate for the Barista feature slices and shared modules.
//! Re-exports domain/kernel primitives alongside the ordering slice.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `barista` with the desired feature flags (`client` pulls in the Dioxus form).
//! - Load a [`domain::config::BaristaConfig`] through [`kernel::config`] and hand its
//!   catalog and policy to the form.

pub use barista_domain as domain;
pub use barista_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use barista_ordering as ordering;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "ordering",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn ordering_is_always_enabled() {
        assert!(features::is_enabled("ordering"));
        assert!(!features::is_enabled("licensing"));
        assert_eq!(features::is_enabled("client"), cfg!(feature = "client"));
    }
}
