use barista_domain::config::{BaristaConfig, LoggingConfig, ValidationPolicy, WindowConfig};
use barista_domain::{CoffeeCatalog, CoffeeType};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "Order Your Coffee");
    assert!(window.width > 0.0 && window.height > 0.0);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);

    assert!(!ValidationPolicy::default().strict_catalog);

    let cfg = BaristaConfig::default();
    assert_eq!(cfg.catalog, CoffeeCatalog::default());
}

#[test]
fn barista_config_deserializes() {
    let raw = json!({
        "window": { "title": "Kiosk", "width": 800.0, "height": 600.0 },
        "logging": { "level": "debug", "directory": "/tmp/logs", "json": true },
        "validation": { "strict_catalog": true },
        "catalog": {
            "latte": { "flavors": ["oat"], "sizes": ["tall"] }
        }
    });

    let cfg: BaristaConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "Kiosk");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
    assert!(cfg.validation.strict_catalog);
    assert_eq!(cfg.catalog.flavors(Some(CoffeeType::Latte)), ["oat"]);
    assert!(cfg.catalog.flavors(Some(CoffeeType::Espresso)).is_empty());
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg: BaristaConfig =
        serde_json::from_value(json!({ "validation": { "strict_catalog": true } }))
            .expect("config deserialize");
    assert!(cfg.validation.strict_catalog);
    assert_eq!(cfg.window.title, "Order Your Coffee");
    assert_eq!(cfg.catalog, CoffeeCatalog::default());
}

#[test]
fn config_clone_is_copy_on_write() {
    let original = BaristaConfig::default();
    let mut edited = original.clone();
    edited.validation.strict_catalog = true;

    assert!(!original.validation.strict_catalog);
    assert!(edited.validation.strict_catalog);
}
