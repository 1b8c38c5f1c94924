//! schema.org `Restaurant` structured data (JSON-LD).
//!
//! Field order follows the serialized document:
//!
//! ```json
//! {
//!   "@context": "https://schema.org",
//!   "@type": "Restaurant",
//!   "name": "...", "image": "...", "description": "...",
//!   "address": { "@type": "PostalAddress", ... },
//!   "geo": { "@type": "GeoCoordinates", ... },
//!   "url": "...", "telephone": "...", "servesCuisine": "...",
//!   "priceRange": "...", "acceptsReservations": true, "menu": "...",
//!   "openingHoursSpecification": [ ... ]
//! }
//! ```

use serde::Serialize;

use crate::brand::{ALL_WEEK, BrandProfile};
use crate::seo::metadata::ResolvedMetadata;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// MIME type of the script element carrying the document.
pub const JSON_LD_MIME: &str = "application/ld+json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub image: String,
    pub description: String,
    pub address: PostalAddressLd,
    pub geo: GeoCoordinatesLd,
    pub url: String,
    pub telephone: String,
    pub serves_cuisine: String,
    pub price_range: String,
    pub accepts_reservations: bool,
    pub menu: String,
    pub opening_hours_specification: Vec<OpeningHoursLd>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinatesLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub day_of_week: Vec<&'static str>,
    pub opens: String,
    pub closes: String,
}

impl RestaurantRecord {
    /// Build the record for `brand` with the resolved page metadata.
    ///
    /// Only `image`, `description`, `url` and `menu` depend on the metadata;
    /// everything else is brand identity.
    pub fn new(brand: &BrandProfile, meta: &ResolvedMetadata) -> Self {
        let address = &brand.address;

        Self {
            context: SCHEMA_CONTEXT,
            kind: "Restaurant",
            name: brand.name.clone(),
            image: meta.image.clone(),
            description: meta.description.clone(),
            address: PostalAddressLd {
                kind: "PostalAddress",
                street_address: address.street_address.clone(),
                address_locality: address.locality.clone(),
                address_region: address.region.clone(),
                postal_code: address.postal_code.clone(),
                address_country: address.country.clone(),
            },
            geo: GeoCoordinatesLd {
                kind: "GeoCoordinates",
                latitude: brand.geo.latitude.clone(),
                longitude: brand.geo.longitude.clone(),
            },
            url: meta.url.clone(),
            telephone: brand.telephone.clone(),
            serves_cuisine: brand.cuisine.clone(),
            price_range: brand.price_range.clone(),
            accepts_reservations: brand.accepts_reservations,
            menu: format!("{}{}", meta.url, brand.menu_suffix),
            opening_hours_specification: brand
                .opening_hours
                .iter()
                .map(|hours| OpeningHoursLd {
                    kind: "OpeningHoursSpecification",
                    day_of_week: ALL_WEEK.to_vec(),
                    opens: hours.opens.clone(),
                    closes: hours.closes.clone(),
                })
                .collect(),
        }
    }

    /// Compact JSON, the form embedded in the page.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON for humans.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
