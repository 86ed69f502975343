#![windows_subsystem = "windows"]

use anyhow::{Context, anyhow};
use pcat::catalog::Catalog;
use pcat::catalog::ui::CatalogPage;
use pcat::domain::config::AppConfig;
use pcat::kernel::config::load_config;
use pcat_desktop::DesktopApp;
use pcat_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let slices = pcat::init().map_err(|e| anyhow!(e))?;
    let catalog = pcat::slice::<Catalog>(&slices)
        .cloned()
        .context("Critical: Catalog slice is not registered")?;

    DesktopApp::from_config(&cfg.window).launch(catalog, CatalogPage);

    Ok(())
}
