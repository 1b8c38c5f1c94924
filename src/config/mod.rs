//! Configuration management for `restohead.toml`.
//!
//! # Sections
//!
//! | Key / Section      | Purpose                                             |
//! |--------------------|-----------------------------------------------------|
//! | `brand`            | Brand used when `--brand` is not given              |
//! | `[meta]`           | Page metadata overrides (title, description, ...)   |
//! | `[brands.<id>]`    | Additional brand profiles                           |
//!
//! The file is optional: without it, only built-in brands are available and
//! every metadata field takes the brand default.
//!
//! # Example
//!
//! ```toml
//! brand = "la-porte-du-bengale"
//!
//! [meta]
//! title = "Commander en ligne"
//! url = "https://la-porte-du-bengale.netlify.app/commander"
//! ```

mod error;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
use util::{check_http_url, find_config_file, is_time_of_day};

use crate::brand::{BENGALE_ID, BrandProfile, builtin_profiles, find_profile};
use crate::cli::Cli;
use crate::seo::MetadataConfig;
use crate::{debug, log};
use anyhow::{Result, bail};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

/// Config file searched for when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "restohead.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing restohead.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadConfig {
    /// Default brand id.
    #[serde(default)]
    pub brand: Option<String>,

    /// Metadata overrides applied before CLI flags.
    #[serde(default)]
    pub meta: MetadataConfig,

    /// Brand profiles keyed by id. These shadow built-in brands of the same id.
    #[serde(default)]
    pub brands: BTreeMap<String, BrandProfile>,
}

impl HeadConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let requested = cli.config.as_deref();
        let name = requested.unwrap_or(Path::new(DEFAULT_CONFIG));

        let mut config = match find_config_file(name) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(&path)?
            }
            None if requested.is_some() => {
                bail!("config file '{}' not found", name.display());
            }
            None => {
                debug!("config"; "no {} found, using built-in brands", DEFAULT_CONFIG);
                Self::default()
            }
        };

        config.finalize();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.finalize();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Fill profile ids from their table keys.
    fn finalize(&mut self) {
        for (id, profile) in &mut self.brands {
            profile.id.clone_from(id);
        }
    }

    // ========================================================================
    // brands
    // ========================================================================

    /// Every available profile: config brands first, then built-in ones.
    pub fn profiles(&self) -> Vec<BrandProfile> {
        let mut profiles: Vec<_> = self.brands.values().cloned().collect();
        profiles.extend(builtin_profiles());
        profiles
    }

    /// Pick the brand to render.
    ///
    /// Priority: `requested` (CLI) > `brand` key > the built-in default.
    pub fn select_brand(&self, requested: Option<&str>) -> Result<BrandProfile, ConfigError> {
        let id = requested
            .or(self.brand.as_deref())
            .unwrap_or(BENGALE_ID);

        let profiles = self.profiles();
        match find_profile(&profiles, id) {
            Some(profile) => Ok(profile.clone()),
            None => Err(ConfigError::UnknownBrand {
                id: id.to_owned(),
                available: brand_ids(&profiles).join(", "),
            }),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate brand profiles declared in the config file.
    ///
    /// All problems are collected and reported together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        for (id, profile) in &self.brands {
            validate_profile(&format!("brands.{id}"), profile, &mut diag);
        }
        diag.into_result()
    }
}

/// Distinct ids in first-seen order.
pub fn brand_ids(profiles: &[BrandProfile]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    profiles
        .iter()
        .map(|p| p.id.as_str())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Check one brand profile, reporting under the `section` field path.
///
/// # Checks
/// - `name` must not be empty
/// - `defaults.url` and `defaults.image` must be absolute http(s) URLs
/// - `geo` coordinates must be decimal numbers within range
/// - every opening interval must be `HH:MM`
fn validate_profile(section: &str, profile: &BrandProfile, diag: &mut ConfigDiagnostics) {
    if profile.name.trim().is_empty() {
        diag.error(format!("{section}.name"), "brand name is empty");
    }

    for (field, value) in [
        ("defaults.url", &profile.defaults.url),
        ("defaults.image", &profile.defaults.image),
    ] {
        if let Some(problem) = check_http_url(value) {
            diag.error_with_hint(
                format!("{section}.{field}"),
                problem,
                "use format like https://example.com",
            );
        }
    }

    for (field, value, limit) in [
        ("geo.latitude", &profile.geo.latitude, 90.0),
        ("geo.longitude", &profile.geo.longitude, 180.0),
    ] {
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v.abs() <= limit => {}
            Ok(_) => diag.error(
                format!("{section}.{field}"),
                format!("'{value}' is out of range (±{limit})"),
            ),
            Err(_) => diag.error_with_hint(
                format!("{section}.{field}"),
                format!("'{value}' is not a decimal number"),
                "write coordinates as strings, e.g. \"48.1747\"",
            ),
        }
    }

    for (i, hours) in profile.opening_hours.iter().enumerate() {
        for (field, value) in [("opens", &hours.opens), ("closes", &hours.closes)] {
            if !is_time_of_day(value) {
                diag.error_with_hint(
                    format!("{section}.opening_hours[{i}].{field}"),
                    format!("'{value}' is not a time of day"),
                    "use 24-hour HH:MM, e.g. \"18:30\"",
                );
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
