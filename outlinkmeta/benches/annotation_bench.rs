//! Benchmarks for packing and merging annotations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outlinkmeta::prelude::*;
use std::sync::Arc;

fn config() -> Arc<OutlinkMetaConfig> {
    Arc::new(OutlinkMetaConfig::new().with_fields(["tag", "author", "subject"]))
}

fn source_parse() -> ParseData {
    let mut data = ParseData::new();
    data.parse_meta.add("outlinkmeta.url", "files/report.pdf");
    for i in 0..16 {
        data.parse_meta.add("tag", format!("tag-{i}"));
    }
    data.parse_meta.add("author", "ann");
    data.set_outlinks(
        (0..64)
            .map(|i| Outlink::new(format!("http://example.com/{i}"), "link"))
            .collect::<Vec<_>>(),
    );
    data
}

fn annotation_benchmark(c: &mut Criterion) {
    let packer = AnnotationPacker::new(config());
    let parse = source_parse();

    c.bench_function("pack", |b| {
        b.iter(|| {
            let mut data = parse.clone();
            black_box(packer.pack("http://example.com/list.html", &mut data))
        })
    });

    let mut data = parse.clone();
    let outcome = packer.pack("http://example.com/list.html", &mut data).unwrap();
    let record = ScoringRelay::new(config()).initial_record(outcome.outlink().unwrap());
    let unpacker = AnnotationUnpacker::new(config());

    c.bench_function("merge", |b| {
        b.iter(|| {
            let mut doc = IndexDocument::new();
            black_box(unpacker.merge(DocumentRole::Target, &mut doc, &record));
            doc
        })
    });
}

criterion_group!(benches, annotation_benchmark);
criterion_main!(benches);
