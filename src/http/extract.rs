//! Request field extraction.
//!
//! # Responsibilities
//! - Strip the port suffix from a peer address string
//! - Join multi-valued headers into flat string maps
//! - Decode urlencoded query strings and form bodies into scalar-or-list maps
//!
//! # Design Decisions
//! - All functions are pure; handlers stay trivially testable
//! - Map key order is left to the container (callers must not rely on it);
//!   value order within a repeated key IS preserved

use std::collections::BTreeMap;

use axum::http::HeaderMap;
use serde::Serialize;

/// Keep everything left of the first `:` in a peer address string.
///
/// This is a verbatim string split, not address parsing: a bracketed IPv6
/// peer like `"[::1]:9"` yields `"["`. Callers depend on the split-on-first-
/// colon behavior, so it stays.
pub fn strip_port(remote_addr: &str) -> &str {
    remote_addr.split(':').next().unwrap_or(remote_addr)
}

/// A query or form parameter value: a scalar when the name appeared once,
/// a list (in order of appearance) when it was repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Single(String),
    Many(Vec<String>),
}

/// Decode an `application/x-www-form-urlencoded` string into a parameter
/// map. Pairs are split on `&`; percent-escapes and `+` are decoded.
pub fn parse_args(input: &str) -> BTreeMap<String, ArgValue> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in url::form_urlencoded::parse(input.as_bytes()) {
        grouped
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    grouped
        .into_iter()
        .map(|(name, mut values)| {
            let value = if values.len() == 1 {
                ArgValue::Single(values.remove(0))
            } else {
                ArgValue::Many(values)
            };
            (name, value)
        })
        .collect()
}

/// Flatten a header map, joining the values of each name with `separator`.
///
/// Names are kept as the framework transmits them (lowercase). Values that
/// are not valid UTF-8 are decoded lossily rather than dropped.
pub fn join_headers(headers: &HeaderMap, separator: &str) -> BTreeMap<String, String> {
    let mut joined = BTreeMap::new();
    for name in headers.keys() {
        let value = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(separator);
        joined.insert(name.as_str().to_string(), value);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn strip_port_removes_port_suffix() {
        assert_eq!(strip_port("198.51.100.10:54321"), "198.51.100.10");
    }

    #[test]
    fn strip_port_keeps_address_without_colon() {
        assert_eq!(strip_port("198.51.100.10"), "198.51.100.10");
    }

    #[test]
    fn strip_port_splits_on_first_colon_even_for_bracketed_ipv6() {
        // Verbatim split, not address parsing.
        assert_eq!(strip_port("[::1]:9"), "[");
    }

    #[test]
    fn parse_args_collapses_single_values_to_scalars() {
        let args = parse_args("p1=v1&p2=v2");
        assert_eq!(args["p1"], ArgValue::Single("v1".to_string()));
        assert_eq!(args["p2"], ArgValue::Single("v2".to_string()));
    }

    #[test]
    fn parse_args_keeps_repeated_values_in_order() {
        let args = parse_args("p1=v1&p2=v2&p2=v21");
        assert_eq!(args["p1"], ArgValue::Single("v1".to_string()));
        assert_eq!(
            args["p2"],
            ArgValue::Many(vec!["v2".to_string(), "v21".to_string()])
        );
    }

    #[test]
    fn parse_args_decodes_escapes() {
        let args = parse_args("q=a+b&r=c%2Fd");
        assert_eq!(args["q"], ArgValue::Single("a b".to_string()));
        assert_eq!(args["r"], ArgValue::Single("c/d".to_string()));
    }

    #[test]
    fn parse_args_of_empty_string_is_empty() {
        assert!(parse_args("").is_empty());
    }

    #[test]
    fn join_headers_uses_given_separator_for_repeated_names() {
        let mut headers = HeaderMap::new();
        headers.append("x-test", HeaderValue::from_static("v2"));
        headers.append("x-test", HeaderValue::from_static("v3"));
        headers.insert("foo", HeaderValue::from_static("bar"));

        let comma = join_headers(&headers, ",");
        assert_eq!(comma["x-test"], "v2,v3");
        assert_eq!(comma["foo"], "bar");

        let semicolon = join_headers(&headers, ";");
        assert_eq!(semicolon["x-test"], "v2;v3");
    }
}
