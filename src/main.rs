//! restohead - SEO head tags and schema.org data for restaurant websites.

#![allow(dead_code)]

mod brand;
mod cli;
mod config;
mod logger;
mod pipeline;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::HeadConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = HeadConfig::load(&cli)?;

    debug_do! {
        let ids: Vec<_> = config.profiles().into_iter().map(|p| p.id).collect();
        debug!("config"; "brands: {}", ids.join(", "));
    }

    cli::run(&cli, &config)
}
