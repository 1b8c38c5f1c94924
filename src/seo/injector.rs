//! Head metadata injector.
//!
//! Maps a brand profile plus optional page metadata to the full, ordered set
//! of `<head>` tags:
//!
//! | Group        | Tags                                                         |
//! |--------------|--------------------------------------------------------------|
//! | basic        | title, description, keywords                                 |
//! | crawler      | robots, language, revisit-after, author                      |
//! | canonical    | `<link rel="canonical">`                                     |
//! | Open Graph   | og:type, og:url, og:title, og:description, og:image          |
//! | Twitter Card | twitter:card, twitter:url, twitter:title, ..., twitter:image |
//! | JSON-LD      | one `application/ld+json` script (schema.org `Restaurant`)   |

use anyhow::Result;

use crate::brand::BrandProfile;
use crate::debug;
use crate::seo::jsonld::{JSON_LD_MIME, RestaurantRecord};
use crate::seo::metadata::{MetadataConfig, ResolvedMetadata};
use crate::seo::og::{OgTags, TwitterTags};
use crate::seo::sink::HeadSink;
use crate::seo::tag::HeadTag;

pub const ROBOTS: &str = "index, follow";
pub const REVISIT_AFTER: &str = "7 days";

/// Number of tags in every render.
pub const TAG_COUNT: usize = 19;

pub struct MetadataInjector<'a> {
    brand: &'a BrandProfile,
}

impl<'a> MetadataInjector<'a> {
    pub fn new(brand: &'a BrandProfile) -> Self {
        Self { brand }
    }

    pub fn brand(&self) -> &BrandProfile {
        self.brand
    }

    pub fn resolve(&self, config: &MetadataConfig) -> ResolvedMetadata {
        config.resolve(&self.brand.defaults)
    }

    pub fn record(&self, meta: &ResolvedMetadata) -> RestaurantRecord {
        RestaurantRecord::new(self.brand, meta)
    }

    /// Build the ordered tag set for `config`.
    pub fn tags(&self, config: &MetadataConfig) -> serde_json::Result<Vec<HeadTag>> {
        let meta = self.resolve(config);
        let structured = self.record(&meta).to_json()?;

        let mut tags = Vec::with_capacity(TAG_COUNT);

        tags.push(HeadTag::title(&meta.title));
        tags.push(HeadTag::meta_name("description", &meta.description));
        tags.push(HeadTag::meta_name("keywords", &meta.keywords));

        tags.push(HeadTag::meta_name("robots", ROBOTS));
        tags.push(HeadTag::meta_name("language", &self.brand.language));
        tags.push(HeadTag::meta_name("revisit-after", REVISIT_AFTER));
        tags.push(HeadTag::meta_name("author", &self.brand.name));

        tags.push(HeadTag::link("canonical", &meta.url));

        tags.extend(OgTags::from_meta(&meta).into_tags());
        tags.extend(TwitterTags::from_meta(&meta).into_tags());

        tags.push(HeadTag::script(JSON_LD_MIME, structured));

        Ok(tags)
    }

    /// Build the tag set and hand it to `sink` in one call.
    pub fn render(&self, config: &MetadataConfig, sink: &mut impl HeadSink) -> Result<()> {
        let tags = self.tags(config)?;
        debug!("seo"; "{}: {} head tags", self.brand.id, tags.len());
        sink.register(&tags)
    }
}

// ============================================================================
// tests
// ============================================================================
