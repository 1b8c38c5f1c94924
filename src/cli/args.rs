//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::seo::MetadataConfig;

/// Restaurant SEO head tag generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: restohead.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Brand profile id (default: `brand` from config, else la-porte-du-bengale)
    #[arg(short, long, global = true)]
    pub brand: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the head tags as HTML
    #[command(visible_alias = "t")]
    Tags {
        #[command(flatten)]
        meta: MetaArgs,

        /// Indent every line by this many spaces
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },

    /// Print the schema.org structured data (JSON-LD)
    #[command(visible_alias = "j")]
    Jsonld {
        #[command(flatten)]
        meta: MetaArgs,

        /// Pretty-print instead of the compact form embedded in pages
        #[arg(short, long)]
        pretty: bool,
    },

    /// Inject head tags into HTML files in place
    #[command(visible_alias = "i")]
    Inject {
        /// HTML files to patch
        #[arg(required = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        meta: MetaArgs,

        /// Print patched documents instead of writing them
        #[arg(short, long)]
        dry: bool,
    },

    /// List available brand profiles
    Brands,
}

/// Page metadata overrides shared by rendering commands.
///
/// Flags win over `[meta]` in the config file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MetaArgs {
    /// Page and social title
    #[arg(long)]
    pub title: Option<String>,

    /// Meta and social description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Absolute URL of the social preview image
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub image: Option<String>,

    /// Canonical page URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,
}

impl MetaArgs {
    pub fn to_config(&self) -> MetadataConfig {
        MetadataConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            image: self.image.clone(),
            url: self.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tags_with_overrides() {
        let cli = Cli::parse_from([
            "restohead",
            "tags",
            "--title",
            "Menu",
            "--url",
            "https://x.test",
            "-b",
            "chez-test",
        ]);
        assert_eq!(cli.brand.as_deref(), Some("chez-test"));

        let Commands::Tags { meta, indent } = cli.command else {
            panic!("expected tags");
        };
        assert_eq!(indent, 0);
        let meta = meta.to_config();
        assert_eq!(meta.title.as_deref(), Some("Menu"));
        assert_eq!(meta.url.as_deref(), Some("https://x.test"));
        assert_eq!(meta.description, None);
    }

    #[test]
    fn test_parse_inject_requires_files() {
        assert!(Cli::try_parse_from(["restohead", "inject"]).is_err());

        let cli = Cli::try_parse_from(["restohead", "inject", "a.html", "b.html", "--dry"]).unwrap();
        let Commands::Inject { files, dry, .. } = cli.command else {
            panic!("expected inject");
        };
        assert_eq!(files, [PathBuf::from("a.html"), PathBuf::from("b.html")]);
        assert!(dry);
    }

    #[test]
    fn test_empty_string_override_is_kept() {
        let cli = Cli::parse_from(["restohead", "jsonld", "--description", ""]);
        let Commands::Jsonld { meta, pretty } = cli.command else {
            panic!("expected jsonld");
        };
        assert!(!pretty);
        assert_eq!(meta.to_config().description.as_deref(), Some(""));
    }
}
