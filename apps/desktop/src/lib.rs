use barista::domain::catalog::display_label;
use barista::domain::config::{BaristaConfig, LoggingConfig, WindowConfig};
use barista::domain::CoffeeOrder;
use barista::features::ordering::CoffeeOrderForm;
use barista::kernel::config::DEFAULT_CONFIG_FILE;
use barista_logger::{Logger, parse_level};
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl From<&WindowConfig> for DesktopApp {
    fn from(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The entry point for launching the app.
    ///
    /// `config` is provided as root context; [`App`] reads the catalog and validation policy
    /// from it.
    pub fn launch(self, config: BaristaConfig, root: fn() -> Element) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(config).launch(root);
    }
}

/// Installs the global logger from `config.logging` and records where the configuration
/// came from, which could not be logged while it was still loading.
///
/// # Errors
/// Returns an error for an unknown level name, an invalid env filter, an unusable log
/// directory, or when a global subscriber is already installed.
pub fn init_logging(config: &BaristaConfig) -> anyhow::Result<Logger> {
    let logger = build_logger(&config.logging)?;

    info!(
        file = DEFAULT_CONFIG_FILE,
        level = %config.logging.level,
        strict_catalog = config.validation.strict_catalog,
        coffee_types = config.catalog.types().count(),
        "Configuration loaded"
    );

    Ok(logger)
}

fn build_logger(logging: &LoggingConfig) -> anyhow::Result<Logger> {
    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(parse_level(&logging.level)?);
    if let Some(filter) = &logging.env_filter {
        builder = builder.env_filter(filter.clone());
    }

    let logger = match &logging.directory {
        Some(directory) => builder.path(directory).json(logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

/// Root component: the order form plus a summary of the last order placed.
#[component]
pub fn App() -> Element {
    let config = use_context::<BaristaConfig>();
    let mut last_order = use_signal(|| None::<CoffeeOrder>);

    rsx! {
        CoffeeOrderForm {
            catalog: config.catalog.clone(),
            policy: config.validation,
            on_submit: move |order: CoffeeOrder| {
                info!(summary = %order_summary(&order), "Order received");
                last_order.set(Some(order));
            },
        }
        if let Some(order) = last_order() {
            pre { class: "order-summary", {order_summary(&order)} }
        }
    }
}

/// One-line human readable description of an order.
#[must_use]
pub fn order_summary(order: &CoffeeOrder) -> String {
    format!(
        "{} {}, {} flavor, strength {}%",
        display_label(&order.size),
        order.coffee_type.label(),
        display_label(&order.flavor),
        order.strength
    )
}
