//! Byte-to-text decoding ahead of XML parsing.
//!
//! The CBR feed is served in `windows-1251`. [`SniffingDecoder`] picks the
//! charset from, in order: a byte-order mark, the `charset` parameter of the
//! `Content-Type` header, the `encoding` attribute of the XML declaration.
//! Without any of those the body is read as UTF-8.

use encoding_rs::{Encoding, UTF_8};
use mime::Mime;

use crate::error::DecodeError;

/// Longest prefix inspected for an XML declaration.
const DECLARATION_WINDOW: usize = 256;

/// Converts a response body into UTF-8 text.
pub trait TextDecoder: Send + Sync {
    /// `content_type` is the raw `Content-Type` header, when the transport saw one.
    fn decode(&self, body: &[u8], content_type: Option<&str>) -> Result<String, DecodeError>;
}

/// Charset-sniffing decoder backed by `encoding_rs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SniffingDecoder;

impl TextDecoder for SniffingDecoder {
    fn decode(&self, body: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
        if let Some((encoding, bom_len)) = Encoding::for_bom(body) {
            return decode_with(encoding, &body[bom_len..]);
        }

        let label = content_type
            .and_then(charset_from_content_type)
            .or_else(|| xml_declared_encoding(body));

        let encoding = match label {
            Some(label) => Encoding::for_label(label.as_bytes())
                .ok_or(DecodeError::UnknownCharset { label })?,
            None => UTF_8,
        };

        decode_with(encoding, body)
    }
}

/// Decoder for fixtures that are already UTF-8; ignores any declared charset.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Decoder;

impl TextDecoder for Utf8Decoder {
    fn decode(&self, body: &[u8], _content_type: Option<&str>) -> Result<String, DecodeError> {
        std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|_| DecodeError::Malformed { encoding: "UTF-8" })
    }
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> Result<String, DecodeError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

/// Extracts the `charset` parameter of a `Content-Type` header value.
/// An unparseable header yields `None`.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    let media_type: Mime = content_type.trim().parse().ok()?;
    let charset = media_type.get_param(mime::CHARSET)?;
    let label = charset.as_str().trim_matches('"');
    (!label.is_empty()).then(|| label.to_owned())
}

/// Extracts the `encoding` attribute of a leading `<?xml ...?>` declaration.
pub fn xml_declared_encoding(body: &[u8]) -> Option<String> {
    let window = &body[..body.len().min(DECLARATION_WINDOW)];
    let head = String::from_utf8_lossy(window);
    let head = head.trim_start();
    if !head.starts_with("<?xml") {
        return None;
    }

    let declaration = &head[..head.find("?>")?];
    let after = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let after = after.trim_start().strip_prefix('=')?.trim_start();
    let quote = after.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &after[1..];
    let end = value.find(quote)?;

    Some(value[..end].to_owned())
}
