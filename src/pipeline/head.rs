//! Head content injector for existing HTML documents.
//!
//! Inserts rendered head tags right before `</head>`, wrapped in marker
//! comments so a later run replaces the block instead of appending a second
//! one. Also sets `lang` on the `<html>` root if not present.
//!
//! ```html
//! <head>
//!   <meta charset="utf-8">
//!   <!-- restohead:begin -->
//!   <title>...</title>
//!   ...
//!   <!-- restohead:end -->
//! </head>
//! ```
//!
//! Positions come from a `tl` parse of the document, so comments and text
//! inside `<script>` are never mistaken for `<html>`, `</head>` or markers.
//! Everything outside the edited spans is copied byte for byte.

use std::ops::Range;

use anyhow::Result;
use thiserror::Error;
use tl::{HTMLTag, Node, Parser, ParserOptions};

use crate::seo::{HeadSink, HeadTag};
use crate::utils::html::escape_attr;

pub const BLOCK_BEGIN: &str = "<!-- restohead:begin -->";
pub const BLOCK_END: &str = "<!-- restohead:end -->";

const BEGIN_LABEL: &str = "restohead:begin";
const END_LABEL: &str = "restohead:end";

/// Extra indentation of the injected block relative to `</head>`.
const INDENT: &str = "  ";

#[derive(Debug, Error)]
pub enum HeadError {
    #[error("document has no <head>...</head> element to inject into")]
    MissingHead,

    #[error("unbalanced restohead markers in <head>: {0}")]
    UnbalancedMarkers(&'static str),

    #[error("failed to parse document: {0}")]
    Parse(#[from] tl::ParseError),
}

/// Inject `tags` into `html`.
///
/// - an earlier injected block is replaced
/// - `<title>` elements already in `<head>` are dropped, ours is the only one
/// - `<html>` gets `lang` if it has none
///
/// A begin marker without its end marker (or the reverse) is an error; the
/// document is left for the user to fix.
pub fn inject(html: &str, tags: &[HeadTag], lang: &str) -> Result<String, HeadError> {
    let cleaned = strip(html, lang)?;

    // Every removed span sat inside <head>, so `</head>` survives.
    let close = Outline::parse(&cleaned)?.head_close;
    let (head, rest) = cleaned.split_at(close);

    Ok(insert_block(head, rest, tags))
}

/// Byte positions of the parts of a document we touch.
struct Outline {
    /// Right after `<html`, when the root has no `lang` attribute.
    lang_at: Option<usize>,
    /// Start of the `</head>` closing tag.
    head_close: usize,
    /// Earlier injected blocks and `<title>` elements directly in `<head>`,
    /// widened to their whole lines.
    stale: Vec<Range<usize>>,
}

impl Outline {
    fn parse(html: &str) -> Result<Self, HeadError> {
        let dom = tl::parse(html, ParserOptions::default())?;
        let parser = dom.parser();
        let elements = || dom.nodes().iter().filter_map(|node| node.as_tag());

        let lang_at = elements()
            .find(|tag| is_named(tag, "html"))
            .filter(|tag| {
                !tag.attributes()
                    .iter()
                    .any(|(key, _)| key.eq_ignore_ascii_case("lang"))
            })
            .map(|tag| tag.boundaries(parser).0 + 1 + tag.name().as_bytes().len());

        let head = elements()
            .find(|tag| is_named(tag, "head"))
            .ok_or(HeadError::MissingHead)?;

        // An unclosed element keeps only its opening tag as raw source.
        let closing = format!("</{}>", head.name().as_utf8_str());
        if !head.raw().as_bytes().ends_with(closing.as_bytes()) {
            return Err(HeadError::MissingHead);
        }
        let (_, last) = head.boundaries(parser);
        let head_close = last + 1 - closing.len();

        let stale = stale_spans(html, head, parser)?;

        Ok(Self {
            lang_at,
            head_close,
            stale,
        })
    }
}

/// Drop stale spans and add `lang`, leaving everything else as is.
fn strip(html: &str, lang: &str) -> Result<String, HeadError> {
    let outline = Outline::parse(html)?;

    let mut edits: Vec<(Range<usize>, String)> = Vec::with_capacity(outline.stale.len() + 1);
    if let Some(at) = outline.lang_at.filter(|_| !lang.is_empty()) {
        edits.push((at..at, format!(" lang=\"{}\"", escape_attr(lang))));
    }
    edits.extend(outline.stale.into_iter().map(|span| (span, String::new())));
    edits.sort_by_key(|(span, _)| span.start);

    let mut out = String::with_capacity(html.len() + 16);
    let mut pos = 0;
    for (span, text) in edits {
        if span.start < pos {
            continue;
        }
        out.push_str(&html[pos..span.start]);
        out.push_str(&text);
        pos = span.end;
    }
    out.push_str(&html[pos..]);
    Ok(out)
}

enum Marker {
    Begin,
    End,
}

/// Spans to remove from the direct children of `<head>`.
fn stale_spans(
    html: &str,
    head: &HTMLTag<'_>,
    parser: &Parser<'_>,
) -> Result<Vec<Range<usize>>, HeadError> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for node in head.children().top().iter().filter_map(|h| h.get(parser)) {
        match node {
            Node::Comment(raw) => {
                let raw = raw.as_bytes();
                match marker(raw) {
                    Some(Marker::Begin) => {
                        if open.is_some() {
                            return Err(HeadError::UnbalancedMarkers("begin marker repeated"));
                        }
                        open = Some(offset_of(html, raw));
                    }
                    Some(Marker::End) => {
                        let start = open
                            .take()
                            .ok_or(HeadError::UnbalancedMarkers("end marker without begin"))?;
                        spans.push(start..offset_of(html, raw) + raw.len());
                    }
                    None => {}
                }
            }
            // Titles inside a block go with the block.
            Node::Tag(tag) if open.is_none() && is_named(tag, "title") => {
                let (start, last) = tag.boundaries(parser);
                spans.push(start..last + 1);
            }
            _ => {}
        }
    }

    if open.is_some() {
        return Err(HeadError::UnbalancedMarkers("begin marker without end"));
    }

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans.into_iter().map(|span| whole_line(html, span)) {
        match merged.last_mut() {
            Some(prev) if span.start <= prev.end => prev.end = prev.end.max(span.end),
            _ => merged.push(span),
        }
    }
    Ok(merged)
}

fn marker(comment: &[u8]) -> Option<Marker> {
    let text = std::str::from_utf8(comment).ok()?;
    let label = text.strip_prefix("<!--")?.strip_suffix("-->")?.trim();
    match label {
        BEGIN_LABEL => Some(Marker::Begin),
        END_LABEL => Some(Marker::End),
        _ => None,
    }
}

fn is_named(tag: &HTMLTag<'_>, name: &str) -> bool {
    tag.name().as_bytes().eq_ignore_ascii_case(name.as_bytes())
}

/// Position of `part` in `html`. `part` must borrow from `html`.
fn offset_of(html: &str, part: &[u8]) -> usize {
    part.as_ptr() as usize - html.as_ptr() as usize
}

/// Widen `span` over surrounding blanks and its line break.
fn whole_line(html: &str, span: Range<usize>) -> Range<usize> {
    let bytes = html.as_bytes();

    let mut start = span.start;
    while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
        start -= 1;
    }

    let mut end = span.end;
    while end < bytes.len() && matches!(bytes[end], b' ' | b'\t') {
        end += 1;
    }
    if bytes[end..].starts_with(b"\r\n") {
        end += 2;
    } else if bytes[end..].starts_with(b"\n") {
        end += 1;
    }

    start..end
}

/// Join `head` (everything before `</head>`) and `rest` with the tag block.
fn insert_block(head: &str, rest: &str, tags: &[HeadTag]) -> String {
    let line_start = head.rfind('\n').map_or(0, |i| i + 1);
    let last_line = &head[line_start..];

    let mut out = String::with_capacity(head.len() + rest.len() + tags.len() * 96);

    // `</head>` alone on its line: reuse its indentation and insert above it.
    // Otherwise (e.g. `<head></head>`), break the line first.
    let base = if last_line.trim().is_empty() {
        out.push_str(&head[..line_start]);
        last_line
    } else {
        out.push_str(head);
        out.push('\n');
        ""
    };

    let pad = format!("{base}{INDENT}");
    out.push_str(&pad);
    out.push_str(BLOCK_BEGIN);
    out.push('\n');
    for tag in tags {
        out.push_str(&pad);
        out.push_str(&tag.to_html());
        out.push('\n');
    }
    out.push_str(&pad);
    out.push_str(BLOCK_END);
    out.push('\n');
    out.push_str(base);
    out.push_str(rest);
    out
}

/// A head sink backed by an HTML document.
///
/// Each `register` call patches the document held by the sink.
pub struct DocumentSink {
    html: String,
    lang: String,
}

impl DocumentSink {
    pub fn new(html: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            lang: lang.into(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl HeadSink for DocumentSink {
    fn register(&mut self, tags: &[HeadTag]) -> Result<()> {
        self.html = inject(&self.html, tags, &self.lang)?;
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
