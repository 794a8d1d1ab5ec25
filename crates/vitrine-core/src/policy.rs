//! Content-isolation policy injection.
//!
//! Untrusted bundles run inside a trusted origin, so the entry document
//! gets a Content-Security-Policy `<meta>` header installed before it is
//! ever rendered. The policy is a compiled-in constant: changing it is a
//! deliberate security-policy update reviewed as a single diff, never a
//! runtime configuration value.

use std::cell::Cell;

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str};

use crate::BundleError;
use crate::Result;

/// The fixed content-isolation policy installed into every entry document.
///
/// Versioned constant. Per resource category it allows `'self'`, inline
/// content where the category needs it, and a fixed allow-list of named
/// hosts (decentralized-storage gateways, chain indexers, a few named
/// APIs). Nothing in this string may ever be derived from bundle input.
pub const CONTENT_SECURITY_POLICY: &str = "upgrade-insecure-requests; \
    default-src 'none'; \
    script-src 'self' 'unsafe-inline'; \
    manifest-src 'self'; \
    media-src 'self' https://ipfs.infura.io https://cloudflare-ipfs.com/; \
    img-src 'self' data: https://ipfs.infura.io https://cloudflare-ipfs.com/; \
    font-src 'self' https://ipfs.infura.io https://cloudflare-ipfs.com/ https://fonts.googleapis.com/; \
    connect-src 'self' https://better-call.dev https://*.better-call.dev \
    https://*.cryptonomic-infra.tech https://cryptonomic-infra.tech \
    https://*.infura.io https://infura.io ws: wss: bootstrap.libp2p.io \
    preload.ipfs.io https://api.etherscan.io https://api.thegraph.com \
    https://*.tzkt.io https://*.wikidata.org https://*.coinmarketcap.com \
    https://api.openweathermap.org https://hicetnunc.xyz https://*.hicetnunc.xyz; \
    worker-src 'self' 'unsafe-inline'; \
    script-src-elem 'self' 'unsafe-inline'; \
    script-src-attr 'self' 'unsafe-inline'; \
    style-src-elem 'self'; \
    style-src-attr 'self'; \
    base-uri 'self'; \
    form-action 'none'; \
    prefetch-src 'self'";

/// HTTP header name the policy is declared under.
const POLICY_HEADER_NAME: &str = "Content-Security-Policy";

/// Renders the `<meta>` tag that carries [`CONTENT_SECURITY_POLICY`].
#[must_use]
pub fn policy_meta_tag() -> String {
    format!(r#"<meta http-equiv="{POLICY_HEADER_NAME}" content="{CONTENT_SECURITY_POLICY}">"#)
}

/// Rewrites an untrusted HTML document to enforce the content-isolation
/// policy.
///
/// The input is parsed tolerantly; malformed markup never fails. Every
/// pre-existing `Content-Security-Policy` meta header is removed wherever
/// it appears (an attacker may ship a looser policy hoping it is additive;
/// removal is unconditional, never a merge), and the fixed policy tag is
/// inserted as the first child of the first `<head>`. All other content,
/// including the doctype, passes through byte-for-byte.
///
/// # Errors
///
/// Returns [`BundleError::MissingHeadSection`] when the document has no
/// `<head>` at all: with nowhere to install the policy, the document must
/// not be rendered.
pub fn inject_policy(html: &str) -> Result<String> {
    let head_seen = Cell::new(false);

    let rewritten = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("head", |el| {
                    // Only the first head receives the policy; duplicate
                    // heads in tag soup must not duplicate the header.
                    if !head_seen.get() {
                        head_seen.set(true);
                        el.prepend(&policy_meta_tag(), ContentType::Html);
                    }
                    Ok(())
                }),
                element!("meta[http-equiv]", |el| {
                    let header = el.get_attribute("http-equiv").unwrap_or_default();
                    if header.eq_ignore_ascii_case(POLICY_HEADER_NAME) {
                        el.remove();
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| BundleError::Rewrite(e.to_string()))?;

    if !head_seen.get() {
        return Err(BundleError::MissingHeadSection);
    }

    Ok(rewritten)
}
