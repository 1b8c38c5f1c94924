//! Command-line interface module.

mod args;
pub mod inject;
pub mod render;

pub use args::{Cli, Commands, MetaArgs};

use anyhow::Result;

use crate::brand::BrandProfile;
use crate::config::HeadConfig;
use crate::debug;
use crate::seo::MetadataConfig;

/// Brand and merged metadata for a rendering command.
///
/// Metadata layers, lowest first: brand defaults, config `[meta]`, CLI flags.
pub fn page_context(
    config: &HeadConfig,
    brand: Option<&str>,
    meta: &MetaArgs,
) -> Result<(BrandProfile, MetadataConfig)> {
    let profile = config.select_brand(brand)?;
    let meta = config.meta.clone().merge(meta.to_config());
    debug!("brand"; "{} ({})", profile.id, profile.name);
    Ok((profile, meta))
}

/// Run the parsed command.
pub fn run(cli: &Cli, config: &HeadConfig) -> Result<()> {
    let brand = cli.brand.as_deref();

    match &cli.command {
        Commands::Tags { meta, indent } => {
            let (profile, meta) = page_context(config, brand, meta)?;
            render::print_tags(&profile, &meta, *indent)
        }
        Commands::Jsonld { meta, pretty } => {
            let (profile, meta) = page_context(config, brand, meta)?;
            render::print_jsonld(&profile, &meta, *pretty)
        }
        Commands::Inject { files, meta, dry } => {
            let (profile, meta) = page_context(config, brand, meta)?;
            inject::inject_files(files, &profile, &meta, *dry)
        }
        Commands::Brands => render::list_brands(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_context_layers() {
        let config = HeadConfig::from_str(
            r#"
            [meta]
            title = "From file"
            keywords = "file, keywords"
            "#,
        )
        .unwrap();
        let args = MetaArgs {
            title: Some("From flag".into()),
            ..Default::default()
        };

        let (profile, meta) = page_context(&config, None, &args).unwrap();
        let resolved = meta.resolve(&profile.defaults);
        assert_eq!(resolved.title, "From flag");
        assert_eq!(resolved.keywords, "file, keywords");
        assert_eq!(resolved.url, profile.defaults.url);
    }

    #[test]
    fn test_page_context_unknown_brand() {
        let config = HeadConfig::default();
        let err = page_context(&config, Some("ghost"), &MetaArgs::default()).unwrap_err();
        assert!(err.to_string().contains("unknown brand `ghost`"));
    }
}
