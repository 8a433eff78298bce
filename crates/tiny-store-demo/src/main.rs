use anyhow::Result;
use std::io::{self, Write};

mod actions;
mod app;
mod config;
mod logger;
mod reducer;
mod render;
mod state;

use config::AppConfig;

fn main() -> Result<()> {
    logger::init()?;

    log::info!("Starting tiny-store-demo");

    let config = AppConfig::load();
    let renderer = app::run(&config.actions, io::stdout())?;
    log::debug!("{} render(s) written", renderer.renders());
    renderer.into_inner().flush()?;

    log::info!("Exiting tiny-store-demo");
    Ok(())
}
