//! Annotation packing on the source document.
//!
//! Collects the configured parse metadata fields into an annotation bag and
//! attaches it to a new outlink pointing at the destination URL named by the
//! document itself.

use crate::config::OutlinkMetaConfig;
use crate::core::{IndexField, Metadata, Outlink, OutlinkAnnotations};
use crate::document::ParseData;
use crate::errors::MalformedDestinationError;
use std::sync::Arc;
use url::Url;

/// What [`AnnotationPacker::pack`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum PackOutcome {
    /// An annotated outlink was appended.
    Appended(Outlink),
    /// None of the configured fields had values; nothing was appended.
    SkippedEmpty,
    /// The parse metadata names no destination URL.
    NoDestination,
}

impl PackOutcome {
    /// Returns the appended outlink, if any.
    #[must_use]
    pub fn outlink(&self) -> Option<&Outlink> {
        match self {
            Self::Appended(outlink) => Some(outlink),
            Self::SkippedEmpty | Self::NoDestination => None,
        }
    }
}

/// Builds annotated outlinks.
#[derive(Debug, Clone)]
pub struct AnnotationPacker {
    config: Arc<OutlinkMetaConfig>,
}

impl AnnotationPacker {
    /// Creates a packer.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self { config }
    }

    /// Collects the configured fields from the metadata. Fields without
    /// values are left out.
    #[must_use]
    pub fn build_annotations(&self, metadata: &Metadata) -> OutlinkAnnotations {
        let mut annotations = OutlinkAnnotations::new();
        for name in &self.config.fields {
            let field = IndexField::from_values(metadata.values(name).iter().cloned());
            annotations.insert(name.as_str(), field);
        }
        annotations
    }

    /// Resolves `raw` against `base_url`.
    ///
    /// A leading `scheme:` must be a valid scheme, so strings such as
    /// `ht!tp://host` are rejected instead of being read as relative paths.
    pub fn resolve_destination(base_url: &str, raw: &str) -> Result<Url, MalformedDestinationError> {
        let raw = raw.trim();
        if let Some(scheme) = scheme_prefix(raw) {
            if !is_valid_scheme(scheme) {
                return Err(MalformedDestinationError::new(
                    raw,
                    base_url,
                    format!("invalid scheme '{scheme}'"),
                ));
            }
        }

        let base = Url::parse(base_url)
            .map_err(|e| MalformedDestinationError::new(raw, base_url, format!("bad base url: {e}")))?;
        base.join(raw)
            .map_err(|e| MalformedDestinationError::new(raw, base_url, e.to_string()))
    }

    /// Appends an annotated outlink to the parse data.
    ///
    /// On error the parse data is left as it was. On success the resolved URL
    /// also replaces the raw destination in the parse metadata.
    pub fn pack(&self, base_url: &str, parse: &mut ParseData) -> Result<PackOutcome, MalformedDestinationError> {
        let Some(raw) = parse.parse_meta.get(&self.config.url_field).filter(|u| !u.is_empty()) else {
            return Ok(PackOutcome::NoDestination);
        };

        let annotations = self.build_annotations(&parse.parse_meta);
        if annotations.is_empty() {
            tracing::debug!(url = raw, "No configured fields with values, not adding outlink");
            return Ok(PackOutcome::SkippedEmpty);
        }

        let resolved = Self::resolve_destination(base_url, raw)?.to_string();

        parse.parse_meta.set(self.config.url_field.as_str(), resolved.as_str());
        let outlink = Outlink::new(resolved, self.config.url_description.as_str()).with_annotations(annotations);
        parse.push_outlink(outlink.clone());

        Ok(PackOutcome::Appended(outlink))
    }
}

fn scheme_prefix(raw: &str) -> Option<&str> {
    let end = raw.find([':', '/', '?', '#'])?;
    if raw[end..].starts_with(':') {
        Some(&raw[..end])
    } else {
        None
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn packer() -> AnnotationPacker {
        AnnotationPacker::new(Arc::new(
            OutlinkMetaConfig::new()
                .with_fields(["tag", "author"])
                .with_url_field("link.url")
                .with_url_description("attached"),
        ))
    }

    #[test]
    fn test_build_annotations_keeps_order_and_skips_empty() {
        let md: Metadata = [("tag", "a"), ("tag", "b"), ("unrelated", "x")].into_iter().collect();
        let annotations = packer().build_annotations(&md);

        assert_eq!(annotations.names(), vec!["tag"]);
        assert_eq!(annotations.get("tag").unwrap().values(), &[json!("a"), json!("b")]);
    }

    #[test]
    fn test_resolve_relative() {
        let url = AnnotationPacker::resolve_destination("http://example.com/dir/page.html", "../other.html").unwrap();
        assert_eq!(url.as_str(), "http://example.com/other.html");
    }

    #[test]
    fn test_resolve_absolute() {
        let url = AnnotationPacker::resolve_destination("http://example.com/", "https://other.example/x").unwrap();
        assert_eq!(url.as_str(), "https://other.example/x");
    }

    #[test]
    fn test_resolve_rejects_bad_scheme() {
        let err = AnnotationPacker::resolve_destination("http://example.com/", "ht!tp://bad").unwrap_err();
        assert_eq!(err.url, "ht!tp://bad");
    }

    #[test]
    fn test_resolve_rejects_bad_base() {
        assert!(AnnotationPacker::resolve_destination("not a url", "page.html").is_err());
    }

    #[test]
    fn test_scheme_prefix() {
        assert_eq!(scheme_prefix("http://x"), Some("http"));
        assert_eq!(scheme_prefix("dir/a:b"), None);
        assert_eq!(scheme_prefix("page.html"), None);
        assert!(is_valid_scheme("svn+ssh"));
        assert!(!is_valid_scheme("1http"));
        assert!(!is_valid_scheme(""));
    }

    #[test]
    fn test_pack_appends_outlink() {
        let mut parse = ParseData::new();
        parse.set_outlinks(vec![Outlink::new("http://example.com/existing", "existing")]);
        parse.parse_meta.add("link.url", "target.html");
        parse.parse_meta.add("tag", "a");
        parse.parse_meta.add("tag", "b");

        let outcome = packer().pack("http://example.com/dir/", &mut parse).unwrap();

        let outlink = outcome.outlink().unwrap();
        assert_eq!(outlink.to_url, "http://example.com/dir/target.html");
        assert_eq!(outlink.anchor, "attached");
        assert_eq!(outlink.annotations.get("tag").unwrap().values(), &[json!("a"), json!("b")]);

        let outlinks = parse.outlinks();
        assert_eq!(outlinks.len(), 2);
        assert_eq!(outlinks[0].to_url, "http://example.com/existing");
        assert_eq!(&outlinks[1], outlink);
        assert_eq!(parse.parse_meta.get("link.url"), Some("http://example.com/dir/target.html"));
    }

    #[test]
    fn test_pack_skips_empty_bag() {
        let mut parse = ParseData::new();
        parse.parse_meta.add("link.url", "target.html");

        let outcome = packer().pack("http://example.com/", &mut parse).unwrap();

        assert_eq!(outcome, PackOutcome::SkippedEmpty);
        assert!(parse.outlinks().is_empty());
        assert_eq!(parse.parse_meta.get("link.url"), Some("target.html"));
    }

    #[test]
    fn test_pack_without_destination() {
        let mut parse = ParseData::new();
        parse.parse_meta.add("tag", "a");

        assert_eq!(packer().pack("http://example.com/", &mut parse).unwrap(), PackOutcome::NoDestination);
    }

    #[test]
    fn test_pack_malformed_leaves_parse_untouched() {
        let mut parse = ParseData::new();
        parse.set_outlinks(vec![
            Outlink::new("http://example.com/a", "a"),
            Outlink::new("http://example.com/b", "b"),
        ]);
        parse.parse_meta.add("link.url", "ht!tp://bad");
        parse.parse_meta.add("tag", "a");
        let before = parse.clone();

        assert!(packer().pack("http://example.com/", &mut parse).is_err());

        assert_eq!(&parse.outlinks()[..], &before.outlinks()[..]);
        assert_eq!(parse.parse_meta, before.parse_meta);
    }
}
