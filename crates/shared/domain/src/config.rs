use crate::catalog::CoffeeCatalog;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BaristaConfigInner {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationPolicy,
    pub catalog: CoffeeCatalog,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BaristaConfig {
    #[serde(flatten, default)]
    inner: Arc<BaristaConfigInner>,
}

impl Deref for BaristaConfig {
    type Target = BaristaConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BaristaConfig {
    fn deref_mut(&mut self) -> &mut BaristaConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Desktop window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging settings consumed by the application entry point.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Module-directed filter, e.g. `barista_ordering=debug`.
    pub env_filter: Option<String>,
    /// Directory for rolling log files. Console only when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

/// Validation knobs for the order form.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Also reject flavors and sizes that the catalog does not list for the chosen type.
    pub strict_catalog: bool,
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Order Your Coffee".to_owned(), width: 480.0, height: 640.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, directory: None, json: false }
    }
}
