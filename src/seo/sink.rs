//! Destinations for rendered head tags.

use std::io::Write;

use anyhow::Result;

use crate::seo::tag::HeadTag;

/// Something that accepts the complete head tag set of one render.
///
/// `register` is called once per render with every tag in emission order.
pub trait HeadSink {
    fn register(&mut self, tags: &[HeadTag]) -> Result<()>;
}

/// Collects the tags of the latest render, replacing earlier ones.
impl HeadSink for Vec<HeadTag> {
    fn register(&mut self, tags: &[HeadTag]) -> Result<()> {
        self.clear();
        self.extend_from_slice(tags);
        Ok(())
    }
}

/// Writes tags as HTML, one element per line.
pub struct HtmlSink<W: Write> {
    out: W,
    indent: usize,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, indent: 0 }
    }

    /// Prefix every line with `indent` spaces.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HeadSink for HtmlSink<W> {
    fn register(&mut self, tags: &[HeadTag]) -> Result<()> {
        for tag in tags {
            writeln!(self.out, "{:indent$}{tag}", "", indent = self.indent)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
