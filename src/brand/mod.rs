//! Restaurant brand profiles.
//!
//! A brand profile carries everything about a restaurant that never changes
//! between page renders: identity, postal address, coordinates, phone,
//! opening hours and the default page metadata.
//!
//! Profiles come from two places:
//! - built-in profiles compiled into the binary (see [`builtin`])
//! - `[brands.<id>]` tables in `restohead.toml`

mod builtin;

pub use builtin::{BENGALE_ID, builtin_profiles};

use serde::{Deserialize, Serialize};

/// Days an opening-hours interval applies to, in schema.org order.
pub const ALL_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Everything known about one restaurant brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Registry key (e.g. `la-porte-du-bengale`). Filled from the table key
    /// when loaded from config.
    #[serde(default)]
    pub id: String,

    /// Display name, also used as the `author` meta.
    pub name: String,

    pub address: PostalAddress,

    pub geo: GeoCoordinates,

    pub telephone: String,

    /// schema.org `servesCuisine`.
    pub cuisine: String,

    /// schema.org `priceRange` (e.g. `€€`).
    pub price_range: String,

    #[serde(default = "default_accepts_reservations")]
    pub accepts_reservations: bool,

    /// Path appended to the resolved url to form the menu link.
    pub menu_suffix: String,

    /// Daily opening intervals, applied to all seven days.
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,

    /// Human-readable language for the `language` meta (e.g. `French`).
    pub language: String,

    /// BCP-47 code set on `<html lang>` when patching documents.
    pub lang: String,

    /// Page metadata used when the caller does not override a field.
    pub defaults: MetadataDefaults,
}

const fn default_accepts_reservations() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// Coordinates are kept as the published decimal strings so the structured
/// data reproduces them digit for digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: String,
    pub longitude: String,
}

/// One daily opening interval (`HH:MM` local time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub opens: String,
    pub closes: String,
}

impl OpeningHours {
    pub fn new(opens: impl Into<String>, closes: impl Into<String>) -> Self {
        Self {
            opens: opens.into(),
            closes: closes.into(),
        }
    }
}

/// Default values for every overridable metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDefaults {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
}

/// Find a profile by id. The first match wins.
pub fn find_profile<'a>(profiles: &'a [BrandProfile], id: &str) -> Option<&'a BrandProfile> {
    profiles.iter().find(|p| p.id == id)
}

// ============================================================================
// tests
// ============================================================================
