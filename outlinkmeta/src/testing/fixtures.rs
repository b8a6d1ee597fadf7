//! Page fixtures.

use crate::core::Outlink;
use crate::document::{Content, Parse};

/// A page the harness can "fetch": its raw bytes and what parsing it yields.
#[derive(Debug, Clone)]
pub struct SimulatedPage {
    /// The page URL.
    pub url: String,
    /// Raw body.
    pub body: Vec<u8>,
    /// Parser output for the body.
    pub parse: Parse,
}

impl SimulatedPage {
    /// Creates a page.
    #[must_use]
    pub fn new(url: impl Into<String>, body: impl Into<Vec<u8>>, parse: Parse) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            parse,
        }
    }

    /// Builds the fetched content for this page.
    #[must_use]
    pub fn content(&self) -> Content {
        Content::new(self.url.as_str(), self.body.clone())
    }
}

/// A page with plain outlinks and no outlinkmeta request.
#[must_use]
pub fn plain_page(url: &str, title: &str, links: &[&str]) -> SimulatedPage {
    let mut parse = Parse::new(title);
    parse.data.title = title.to_string();
    parse.data.set_outlinks(
        links
            .iter()
            .map(|link| Outlink::new(*link, *link))
            .collect::<Vec<_>>(),
    );
    SimulatedPage::new(url, title.as_bytes().to_vec(), parse)
}

/// A page whose parse metadata requests an annotated outlink to
/// `destination` carrying `fields`.
#[must_use]
pub fn annotated_source(
    url: &str,
    url_field: &str,
    destination: &str,
    fields: &[(&str, &str)],
) -> SimulatedPage {
    let mut page = plain_page(url, url, &[]);
    page.parse.data.parse_meta.add(url_field, destination);
    for (name, value) in fields {
        page.parse.data.parse_meta.add(*name, *value);
    }
    page
}

/// Content already marked as a target by the crawl.
#[must_use]
pub fn target_content(url: &str, url_field: &str, body: &[u8]) -> Content {
    Content::new(url, body.to_vec()).with_metadata(url_field, url)
}
