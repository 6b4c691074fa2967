use barista::domain::config::BaristaConfig;
use barista_desktop::init_logging;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configuration_source_is_logged_once_logging_is_up() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let mut config = BaristaConfig::default();
    config.logging.directory = Some(log_dir.clone());
    config.logging.json = true;
    config.validation.strict_catalog = true;

    let logger = init_logging(&config)?;
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("Configuration loaded")).expect("record written");
    assert!(line.contains("\"file\":\"barista\""), "config source should be recorded: {line}");
    assert!(line.contains("\"strict_catalog\":true"), "policy should be recorded: {line}");

    Ok(())
}
