//! Core data model for carrying metadata along outlinks.
//!
//! This module contains:
//! - The weighted multi-valued index field and its comparer
//! - Multi-valued string metadata
//! - Outlink annotations and outlinks
//! - The codec used at the crawl record boundary

mod annotations;
pub mod carrier;
mod comparer;
mod field;
mod metadata;
mod outlink;

pub use annotations::OutlinkAnnotations;
pub use carrier::{decode_field, encode_field, value_kind};
pub use comparer::{fields_equal, FieldComparer};
pub use field::IndexField;
pub use metadata::Metadata;
pub use outlink::{append_outlink, Outlink};
