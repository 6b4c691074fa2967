//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and hosts configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use barista_kernel::config::load_config_or_default;
//!     use barista_kernel::domain::config::BaristaConfig;
//!     let cfg: BaristaConfig = load_config_or_default(Some("barista")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use barista_domain as domain;
