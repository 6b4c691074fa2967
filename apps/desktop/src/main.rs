#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use barista::domain::config::BaristaConfig;
use barista::kernel::config::load_config_or_default;
use barista_desktop::{App, DesktopApp, init_logging};

fn main() -> anyhow::Result<()> {
    let config: BaristaConfig =
        load_config_or_default(None::<&str>).context("Critical: Configuration is malformed")?;

    let _logger = init_logging(&config)?;

    DesktopApp::from(&config.window).launch(config, App);

    Ok(())
}
