//! Query-string access for the current page location.
//!
//! Decoding matches `URLSearchParams`: `+` means space, percent sequences
//! decode bytewise, and malformed sequences pass through unchanged.

use std::collections::HashMap;

use crate::traits::Page;

/// Value of the query parameter `name`, if present.
///
/// When the name repeats, the first occurrence wins, like
/// `URLSearchParams.get`.
pub fn get_url_param<P: Page>(page: &P, name: &str) -> Option<String> {
    parse_query(&page.query_string())
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Every query parameter as a name/value map.
///
/// Repeated names keep the last value, matching what iterating
/// `URLSearchParams` into an object produces.
pub fn get_all_url_params<P: Page>(page: &P) -> HashMap<String, String> {
    parse_query(&page.query_string()).into_iter().collect()
}

/// Split a raw query string (with or without the leading `?`) into decoded
/// name/value pairs, in order. A segment without `=` becomes a name with an
/// empty value; empty segments are skipped.
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (decode_component(name), decode_component(value)),
            None => (decode_component(segment), String::new()),
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_digit(bytes.get(i + 1)), hex_digit(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                // Malformed escape, keep the literal percent sign.
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(byte: Option<&u8>) -> Option<u8> {
    byte.and_then(|b| (*b as char).to_digit(16)).map(|d| d as u8)
}
