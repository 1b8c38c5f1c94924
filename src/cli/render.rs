//! `tags`, `jsonld` and `brands` commands.

use std::io::{self, Write};

use anyhow::Result;
use owo_colors::{Stream, Style};
use rustc_hash::FxHashSet;

use crate::brand::BrandProfile;
use crate::config::HeadConfig;
use crate::log;
use crate::logger::paint;
use crate::seo::{HtmlSink, MetadataConfig, MetadataInjector};

/// Print the head tags to stdout.
pub fn print_tags(brand: &BrandProfile, meta: &MetadataConfig, indent: usize) -> Result<()> {
    let mut sink = HtmlSink::new(io::stdout().lock()).with_indent(indent);
    MetadataInjector::new(brand).render(meta, &mut sink)
}

/// Print the structured-data document to stdout.
pub fn print_jsonld(brand: &BrandProfile, meta: &MetadataConfig, pretty: bool) -> Result<()> {
    let json = structured_data(brand, meta, pretty)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

fn structured_data(
    brand: &BrandProfile,
    meta: &MetadataConfig,
    pretty: bool,
) -> serde_json::Result<String> {
    let injector = MetadataInjector::new(brand);
    let record = injector.record(&injector.resolve(meta));
    if pretty {
        record.to_json_pretty()
    } else {
        record.to_json()
    }
}

/// List every available brand, marking the default one.
pub fn list_brands(config: &HeadConfig) -> Result<()> {
    let default = default_brand(config);
    let mut out = io::stdout().lock();

    let mut seen = FxHashSet::default();
    for profile in config.profiles() {
        if !seen.insert(profile.id.clone()) {
            continue;
        }
        let is_default = default.as_deref() == Some(profile.id.as_str());
        writeln!(out, "{}", brand_line(&profile, is_default))?;
    }
    Ok(())
}

/// Id of the brand used without `--brand`, if the config names a known one.
fn default_brand(config: &HeadConfig) -> Option<String> {
    match config.select_brand(None) {
        Ok(profile) => Some(profile.id),
        Err(err) => {
            log!("warning"; "no default brand: {err}");
            None
        }
    }
}

fn brand_line(profile: &BrandProfile, is_default: bool) -> String {
    let marker = if is_default { "*" } else { " " };
    format!(
        "{} {} {}",
        paint(marker, Stream::Stdout, Style::new().green().bold()),
        paint(&profile.id, Stream::Stdout, Style::new().bold()),
        paint(
            format!("({}, {})", profile.name, profile.address.locality),
            Stream::Stdout,
            Style::new().dimmed()
        )
    )
}
