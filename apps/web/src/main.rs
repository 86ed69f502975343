use anyhow::{Context, anyhow};
use dioxus::prelude::*;
use pcat::catalog::Catalog;
use pcat::catalog::ui::CatalogPage;

fn main() -> anyhow::Result<()> {
    dioxus::logger::initialize_default();

    let slices = pcat::init().map_err(|e| anyhow!(e))?;
    let catalog = pcat::slice::<Catalog>(&slices)
        .cloned()
        .context("Critical: Catalog slice is not registered")?;

    LaunchBuilder::web().with_context(catalog).launch(CatalogPage);

    Ok(())
}
