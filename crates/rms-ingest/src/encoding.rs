//! Ordered text-encoding fallback for monitoring exports.
//!
//! Field exports arrive in whatever encoding the reporting tool of the day
//! produced. Decoding walks a fixed candidate list and stops at the first
//! encoding that decodes the whole byte stream without error.

use encoding_rs::Encoding;

/// Candidate encodings, tried in order.
pub const ENCODING_CANDIDATES: [&str; 4] = ["utf-8", "latin1", "windows-1252", "iso-8859-1"];

/// Decodes `bytes` with the first candidate that reports no decode errors.
///
/// Returns the decoded text together with the label that succeeded. In the
/// WHATWG registry the `latin1` and `iso-8859-1` labels resolve to
/// windows-1252, so any single-byte input is accepted by the second
/// candidate; `None` stays a typed outcome rather than an unreachable panic.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(String, &'static str)> {
    for label in ENCODING_CANDIDATES {
        let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
            continue;
        };
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return Some((text.into_owned(), label));
        }
    }
    None
}
