//! Attack-scenario tests: hostile bundles trying to defeat the isolation
//! policy or the extraction limits.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{Cursor, Write};

use vitrine_core::{
    BundleError, BundleLimits, CONTENT_SECURITY_POLICY, inject_policy, prepare_files_from_zip,
};
use zip::write::SimpleFileOptions;

fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (path, data) in files {
        writer.start_file(*path, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn policy_header_count(html: &str) -> usize {
    html.to_ascii_lowercase()
        .matches("content-security-policy")
        .count()
}

#[test]
fn test_smuggled_loose_policy_is_replaced() {
    // A bundle ships its own wide-open policy hoping it is kept or merged.
    let html = br#"<html><head>
        <meta http-equiv="Content-Security-Policy" content="default-src * 'unsafe-eval'; script-src *">
        <title>wide open</title>
    </head><body><script src="https://evil.example/x.js"></script></body></html>"#;
    let buffer = build_zip(&[("root/index.html", html)]);

    let files = prepare_files_from_zip(&buffer, &BundleLimits::default()).unwrap();
    let index = files.iter().find(|f| f.path == "index.html").unwrap();
    let sanitized = String::from_utf8(index.data.clone()).unwrap();

    assert_eq!(policy_header_count(&sanitized), 1);
    assert!(sanitized.contains(CONTENT_SECURITY_POLICY));
    assert!(!sanitized.contains("unsafe-eval"));
    assert!(!sanitized.contains("script-src *"));
}

#[test]
fn test_smuggled_policy_in_body_is_removed() {
    // Some parsers hoist late meta tags into effect; remove them anywhere.
    let html = r#"<html><head></head><body>
        <meta http-equiv="Content-Security-Policy" content="default-src *">
    </body></html>"#;

    let sanitized = inject_policy(html).unwrap();
    assert_eq!(policy_header_count(&sanitized), 1);
    assert!(!sanitized.contains("default-src *"));
}

#[test]
fn test_smuggled_policy_exotic_casing() {
    let html = r#"<html><head>
        <meta http-equiv="cOnTeNt-SeCuRiTy-PoLiCy" content="default-src *">
        <META HTTP-EQUIV="CONTENT-SECURITY-POLICY" CONTENT="script-src *">
    </head></html>"#;

    let sanitized = inject_policy(html).unwrap();
    assert_eq!(policy_header_count(&sanitized), 1);
    assert!(!sanitized.contains("default-src *"));
    assert!(!sanitized.contains("script-src *"));
}

#[test]
fn test_policy_lands_before_attacker_content() {
    // The policy must be the first child of head so nothing can run ahead
    // of it.
    let html = r#"<html><head><script>steal()</script></head><body></body></html>"#;
    let sanitized = inject_policy(html).unwrap();

    let policy_pos = sanitized.to_ascii_lowercase().find("content-security-policy").unwrap();
    let script_pos = sanitized.find("steal()").unwrap();
    assert!(policy_pos < script_pos);
}

#[test]
fn test_double_sanitation_never_doubles_the_header() {
    let html = "<html><head><title>t</title></head><body></body></html>";
    let once = inject_policy(html).unwrap();
    let twice = inject_policy(&once).unwrap();

    assert_eq!(policy_header_count(&once), 1);
    assert_eq!(policy_header_count(&twice), 1);
}

#[test]
fn test_headless_document_is_rejected_not_rendered() {
    let buffer = build_zip(&[("root/index.html", b"<body onload=run()>no head</body>")]);
    let result = prepare_files_from_zip(&buffer, &BundleLimits::default());
    assert!(matches!(result, Err(BundleError::MissingHeadSection)));
}

#[test]
fn test_sibling_directory_prefix_confusion() {
    // `root2/` must not be re-rooted by a root of `root`.
    let buffer = build_zip(&[
        ("root/index.html", b"<html><head></head></html>"),
        ("root2/secret.js", b"leak();"),
    ]);

    let files = prepare_files_from_zip(&buffer, &BundleLimits::default()).unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["index.html", "root2/secret.js"]);
}

#[test]
fn test_traversal_style_paths_stay_inert_keys() {
    // The core never touches a filesystem; hostile paths survive only as
    // opaque keys for the caller to validate before materializing.
    let buffer = build_zip(&[
        ("root/index.html", b"<html><head></head></html>"),
        ("root/../../etc/passwd", b"x"),
    ]);

    let files = prepare_files_from_zip(&buffer, &BundleLimits::default()).unwrap();
    let hostile = files.iter().find(|f| f.path.contains("..")).unwrap();
    assert_eq!(hostile.path, "../../etc/passwd");
}

#[test]
fn test_zip_bomb_rejected() {
    let payload = vec![0u8; 8 * 1024 * 1024];
    let buffer = build_zip(&[
        ("root/index.html", b"<html><head></head></html>"),
        ("root/bomb.bin", payload.as_slice()),
    ]);
    let limits = BundleLimits {
        max_compression_ratio: 20.0,
        ..Default::default()
    };

    let result = prepare_files_from_zip(&buffer, &limits);
    match result {
        Err(err) => assert!(err.is_security_violation(), "unexpected error: {err}"),
        Ok(_) => panic!("zip bomb must be rejected"),
    }
}

#[test]
fn test_file_count_flood_rejected() {
    let docs: Vec<(String, &[u8])> = (0..64)
        .map(|i| (format!("root/f{i}.txt"), b"x".as_slice()))
        .collect();
    let mut entries: Vec<(&str, &[u8])> = docs.iter().map(|(p, d)| (p.as_str(), *d)).collect();
    entries.insert(0, ("root/index.html", b"<html><head></head></html>"));
    let buffer = build_zip(&entries);

    let limits = BundleLimits {
        max_file_count: 16,
        ..Default::default()
    };

    let result = prepare_files_from_zip(&buffer, &limits);
    assert!(matches!(result, Err(BundleError::QuotaExceeded { .. })));
}
