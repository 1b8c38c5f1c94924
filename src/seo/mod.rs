//! Head metadata for restaurant pages.
//!
//! - [`metadata`]: caller overrides and their resolution
//! - [`jsonld`]: schema.org `Restaurant` document
//! - [`og`]: Open Graph / Twitter Card tag sets
//! - [`tag`]: head element descriptors
//! - [`sink`]: where rendered tags go
//! - [`injector`]: ties it all together

pub mod injector;
pub mod jsonld;
pub mod metadata;
pub mod og;
pub mod sink;
pub mod tag;

pub use injector::MetadataInjector;
pub use metadata::MetadataConfig;
pub use sink::{HeadSink, HtmlSink};
pub use tag::HeadTag;
