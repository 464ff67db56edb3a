//! Content-type detection from file bytes.
//!
//! Implements the WHATWG MIME-sniffing rules over the first 512 bytes:
//! markup signatures first, then byte-order marks, then a text/binary split.
//! Binary payloads are identified by magic number through `infer`.

use crate::domain::value_objects::ContentType;

/// Number of leading bytes considered
pub const SNIFF_LEN: usize = 512;

/// Tags that mark a document as HTML when followed by a space or `>`
const HTML_SIGNATURES: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// Detect the content type of a payload.
///
/// Always returns a type: data that matches nothing is either
/// `text/plain; charset=utf-8` or `application/octet-stream`.
pub fn detect_content_type(data: &[u8]) -> ContentType {
    let head = &data[..data.len().min(SNIFF_LEN)];
    let markup = skip_leading_whitespace(head);

    if HTML_SIGNATURES
        .iter()
        .any(|signature| matches_html_signature(markup, signature))
    {
        return ContentType::from(mime::TEXT_HTML_UTF_8);
    }

    if markup.starts_with(b"<?xml") {
        return ContentType::known("text/xml; charset=utf-8");
    }

    if head.starts_with(b"%PDF-") {
        return ContentType::from(mime::APPLICATION_PDF);
    }

    if head.starts_with(b"%!PS-Adobe-") {
        return ContentType::known("application/postscript");
    }

    if head.starts_with(&[0xFE, 0xFF]) {
        return ContentType::known("text/plain; charset=utf-16be");
    }

    if head.starts_with(&[0xFF, 0xFE]) {
        return ContentType::known("text/plain; charset=utf-16le");
    }

    if head.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return ContentType::plain_text();
    }

    // Magic numbers only count for payloads that are not text.
    if !head.iter().copied().any(is_binary_byte) {
        return ContentType::plain_text();
    }

    match infer::get(head) {
        Some(kind) if kind.matcher_type() != infer::MatcherType::Text => {
            ContentType::known(canonical_mime(kind.extension(), kind.mime_type()))
        }
        _ => ContentType::from(mime::APPLICATION_OCTET_STREAM),
    }
}

/// Spell a detected format the way browsers and HTTP servers usually do
fn canonical_mime(extension: &str, detected: &'static str) -> &'static str {
    match extension {
        "gz" => "application/x-gzip",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "ico" => "image/x-icon",
        "wav" => "audio/wave",
        "rar" => "application/x-rar-compressed",
        _ => detected,
    }
}

fn skip_leading_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

fn matches_html_signature(data: &[u8], signature: &[u8]) -> bool {
    data.len() > signature.len()
        && data[..signature.len()].eq_ignore_ascii_case(signature)
        && matches!(data[signature.len()], b' ' | b'>')
}

/// Control bytes that never appear in text
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
