//! Benchmarks for the vitrine-core sanitation pipeline.

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use std::hint::black_box;
use std::io::Cursor;
use std::io::Write;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use vitrine_core::BundleLimits;
use vitrine_core::inject_policy;
use vitrine_core::prepare_files_from_zip;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Creates a bundle with an entry document and many small asset files.
fn create_bundle_zip(asset_count: usize) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("root/index.html", options).unwrap();
    zip.write_all(b"<html><head><title>drop</title></head><body></body></html>")
        .unwrap();

    for i in 0..asset_count {
        let filename = format!("root/assets/file{i:04}.js");
        zip.start_file(&filename, options).unwrap();
        zip.write_all(format!("let v{i} = {i};").as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Creates an HTML document with the given number of body paragraphs.
fn create_document(paragraphs: usize) -> String {
    let mut html = String::from("<html><head><title>bench</title></head><body>");
    for i in 0..paragraphs {
        html.push_str(&format!("<p>paragraph {i}</p>"));
    }
    html.push_str("</body></html>");
    html
}

fn bench_inject_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("inject_policy");

    for paragraphs in [10, 100, 1000] {
        let html = create_document(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &html,
            |b, html| b.iter(|| inject_policy(black_box(html)).unwrap()),
        );
    }

    group.finish();
}

fn bench_prepare_files_from_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_files_from_zip");
    let limits = BundleLimits::default();

    for asset_count in [10, 100, 500] {
        let buffer = create_bundle_zip(asset_count);
        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(asset_count),
            &buffer,
            |b, buffer| b.iter(|| prepare_files_from_zip(black_box(buffer), &limits).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_inject_policy, bench_prepare_files_from_zip);
criterion_main!(benches);
