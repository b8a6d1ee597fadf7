//! Pass-through between outlink discovery and the fetched target.
//!
//! The scoring stage owns the crawl record of every discovered URL. For
//! annotated outlinks it copies the annotations into the new record and marks
//! the record with the destination URL; before the target is parsed it copies
//! that marker into the content metadata, where the role detector looks for
//! it.

use crate::config::OutlinkMetaConfig;
use crate::core::{IndexField, Outlink};
use crate::document::{Content, CrawlRecord};
use std::sync::Arc;

/// Moves annotations from outlinks to crawl records and on to content.
#[derive(Debug, Clone)]
pub struct ScoringRelay {
    config: Arc<OutlinkMetaConfig>,
}

impl ScoringRelay {
    /// Creates a relay.
    #[must_use]
    pub fn new(config: Arc<OutlinkMetaConfig>) -> Self {
        Self { config }
    }

    /// Builds the crawl record for a newly discovered outlink.
    ///
    /// Outlinks without annotations get a plain record.
    #[must_use]
    pub fn initial_record(&self, outlink: &Outlink) -> CrawlRecord {
        let mut record = CrawlRecord::new(outlink.to_url.as_str());
        if outlink.annotations.is_empty() {
            return record;
        }

        for (name, field) in outlink.annotations.iter() {
            record.metadata.insert_field(name, field);
        }
        record
            .metadata
            .insert_field(self.config.url_field.as_str(), &IndexField::single(outlink.to_url.as_str()));
        record
    }

    /// Copies the destination marker from the record into the content
    /// metadata. Returns true if the content was marked.
    pub fn before_parsing(&self, record: &CrawlRecord, content: &mut Content) -> bool {
        let url_field = self.config.url_field.as_str();
        let marker = match record.metadata.field(url_field) {
            Some(Ok(field)) => field.first_str().map(String::from),
            Some(Err(err)) => {
                tracing::warn!(url = %record.url, "{err}");
                None
            }
            None => None,
        };

        match marker.filter(|url| !url.is_empty()) {
            Some(url) => {
                content.metadata.set(url_field, url);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutlinkAnnotations;

    fn relay() -> ScoringRelay {
        ScoringRelay::new(Arc::new(OutlinkMetaConfig::new().with_fields(["tag"])))
    }

    fn annotated(url: &str) -> Outlink {
        let mut annotations = OutlinkAnnotations::new();
        annotations.insert("tag", IndexField::from_values(["a", "b"]));
        Outlink::new(url, "outlinkmeta").with_annotations(annotations)
    }

    #[test]
    fn test_plain_outlink_gets_plain_record() {
        let record = relay().initial_record(&Outlink::new("http://b.example/", "b"));
        assert_eq!(record.url, "http://b.example/");
        assert!(record.metadata.is_empty());
    }

    #[test]
    fn test_annotated_outlink_is_copied_and_marked() {
        let record = relay().initial_record(&annotated("http://b.example/"));

        assert_eq!(
            record.metadata.field("tag").unwrap().unwrap(),
            IndexField::from_values(["a", "b"])
        );
        assert_eq!(
            record.metadata.field("outlinkmeta.url").unwrap().unwrap(),
            IndexField::single("http://b.example/")
        );
    }

    #[test]
    fn test_before_parsing_marks_content() {
        let relay = relay();
        let record = relay.initial_record(&annotated("http://b.example/"));
        let mut content = Content::new("http://b.example/", "body");

        assert!(relay.before_parsing(&record, &mut content));
        assert_eq!(content.metadata.get("outlinkmeta.url"), Some("http://b.example/"));
    }

    #[test]
    fn test_before_parsing_ignores_plain_and_foreign() {
        let relay = relay();
        let mut content = Content::new("http://b.example/", "body");

        assert!(!relay.before_parsing(&CrawlRecord::new("http://b.example/"), &mut content));

        let foreign = CrawlRecord::new("http://b.example/").with_raw("outlinkmeta.url", serde_json::json!(1));
        assert!(!relay.before_parsing(&foreign, &mut content));
        assert!(content.metadata.is_empty());
    }
}
