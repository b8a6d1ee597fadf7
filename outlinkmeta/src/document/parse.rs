//! Parse output.

use crate::core::{append_outlink, Metadata, Outlink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Structured data extracted by the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseData {
    /// Title of the document.
    #[serde(default)]
    pub title: String,
    /// Metadata produced by parsing.
    #[serde(default)]
    pub parse_meta: Metadata,
    /// Outgoing links. Replaced as a whole, never edited in place.
    #[serde(default = "empty_outlinks")]
    outlinks: Arc<[Outlink]>,
}

fn empty_outlinks() -> Arc<[Outlink]> {
    Arc::from(Vec::new())
}

impl Default for ParseData {
    fn default() -> Self {
        Self {
            title: String::new(),
            parse_meta: Metadata::new(),
            outlinks: empty_outlinks(),
        }
    }
}

impl ParseData {
    /// Creates empty parse data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the outlinks. The returned handle is unaffected by later
    /// changes to this parse data.
    #[must_use]
    pub fn outlinks(&self) -> Arc<[Outlink]> {
        Arc::clone(&self.outlinks)
    }

    /// Replaces the outlink sequence.
    pub fn set_outlinks(&mut self, outlinks: impl Into<Arc<[Outlink]>>) {
        self.outlinks = outlinks.into();
    }

    /// Appends an outlink by building a new sequence.
    pub fn push_outlink(&mut self, outlink: Outlink) {
        self.outlinks = append_outlink(&self.outlinks, outlink);
    }
}

/// A parsed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parse {
    /// Extracted text.
    #[serde(default)]
    pub text: String,
    /// Extracted structured data.
    #[serde(default)]
    pub data: ParseData,
}

impl Parse {
    /// Creates a parse with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: ParseData::new(),
        }
    }

    /// Adds a parse metadata value.
    #[must_use]
    pub fn with_parse_meta(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.parse_meta.add(name, value);
        self
    }

    /// Sets the outlinks.
    #[must_use]
    pub fn with_outlinks(mut self, outlinks: Vec<Outlink>) -> Self {
        self.data.set_outlinks(outlinks);
        self
    }
}

/// Parses produced for one fetched document, keyed by URL.
///
/// Container formats can yield several parses; the filters only look at the
/// one for the fetched URL itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseResult {
    parses: BTreeMap<String, Parse>,
}

impl ParseResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result holding a single parse.
    #[must_use]
    pub fn single(url: impl Into<String>, parse: Parse) -> Self {
        let mut result = Self::new();
        result.insert(url, parse);
        result
    }

    /// Inserts a parse.
    pub fn insert(&mut self, url: impl Into<String>, parse: Parse) {
        self.parses.insert(url.into(), parse);
    }

    /// Gets a parse.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Parse> {
        self.parses.get(url)
    }

    /// Gets a parse mutably.
    pub fn get_mut(&mut self, url: &str) -> Option<&mut Parse> {
        self.parses.get_mut(url)
    }

    /// Removes and returns a parse.
    pub fn remove(&mut self, url: &str) -> Option<Parse> {
        self.parses.remove(url)
    }

    /// Returns the number of parses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parses.len()
    }

    /// Returns true if there are no parses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_outlink_leaves_held_sequence() {
        let mut data = ParseData::new();
        data.set_outlinks(vec![Outlink::new("http://a.example/", "a")]);
        let before = data.outlinks();

        data.push_outlink(Outlink::new("http://b.example/", "b"));

        assert_eq!(before.len(), 1);
        assert_eq!(data.outlinks().len(), 2);
        assert_eq!(data.outlinks()[0], before[0]);
    }

    #[test]
    fn test_parse_result_lookup() {
        let mut result = ParseResult::single("http://a.example/", Parse::new("text"));
        assert_eq!(result.len(), 1);
        assert!(result.get("http://b.example/").is_none());

        result.get_mut("http://a.example/").unwrap().text.push_str(" more");
        assert_eq!(result.get("http://a.example/").unwrap().text, "text more");
    }

    #[test]
    fn test_parse_data_serde_defaults() {
        let data: ParseData = serde_json::from_str("{}").unwrap();
        assert!(data.outlinks().is_empty());
        assert!(data.parse_meta.is_empty());
    }
}
