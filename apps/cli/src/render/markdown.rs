//! Markdown to HTML conversion for the generated résumé.
//!
//! Backend output is untrusted. Raw HTML events are downgraded to text
//! before rendering, so anything that looks like markup comes out as
//! visible characters instead of live elements, and link/image
//! destinations are restricted to a small set of safe schemes.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_URL_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Converts résumé Markdown to an HTML fragment. Raw HTML in the input is
/// neutralized; standard Markdown (headings, lists, emphasis, tables)
/// renders normally.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        // Re-emitted as text, these get entity-escaped by the HTML writer.
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Empties any destination whose scheme is outside the allow list.
/// Relative destinations (no scheme) pass through unchanged.
fn sanitize_url(url: CowStr) -> CowStr {
    let Some(colon) = url.find(':') else {
        return url;
    };
    // A '/', '?' or '#' before the colon means there is no scheme at all.
    if url[..colon].chars().any(|c| matches!(c, '/' | '?' | '#')) {
        return url;
    }
    let scheme = &url[..colon];
    if ALLOWED_URL_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    {
        url
    } else {
        CowStr::from("")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
