//! Request URL and form-body construction.

use trendsearch_core::TrendsError;
use url::Url;

/// A single query-string value.
///
/// `None` entries in a parameter list are omitted from the final URL rather
/// than serialized as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A string value, percent-encoded as needed.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A boolean value, serialized as `true`/`false`.
    Bool(bool),
}

impl QueryValue {
    fn write_into(&self, out: &mut String) {
        match self {
            Self::Str(s) => out.push_str(s),
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Builds a request URL from a base, an endpoint path, and query parameters.
///
/// Parameters with a `None` value are omitted. Parameter order is preserved.
pub fn build_url(
    base_url: &str,
    path: &str,
    params: &[(&str, Option<QueryValue>)],
) -> Result<String, TrendsError> {
    let base = Url::parse(base_url)
        .map_err(|e| TrendsError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
    let mut url = base
        .join(path.trim_start_matches('/'))
        .map_err(|e| TrendsError::Config(format!("invalid endpoint path {path:?}: {e}")))?;

    {
        let mut pairs = url.query_pairs_mut();
        let mut buf = String::new();
        for (name, value) in params {
            if let Some(value) = value {
                buf.clear();
                value.write_into(&mut buf);
                pairs.append_pair(name, &buf);
            }
        }
    }

    // An empty pair set still leaves a trailing "?" behind.
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url.into())
}

/// Encodes key/value pairs as an `application/x-www-form-urlencoded` body.
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Characters that must be escaped inside a path segment.
const PATH_SEGMENT: &percent_encoding::AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes a value for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_preserves_order_and_encodes() {
        let url = build_url(
            "https://trends.google.com",
            "/trends/api/explore",
            &[
                ("hl", Some("en-US".into())),
                ("tz", Some(QueryValue::Int(-120))),
                ("req", Some("a b&c".into())),
            ],
        )
        .unwrap();
        assert_eq!(
            url,
            "https://trends.google.com/trends/api/explore?hl=en-US&tz=-120&req=a+b%26c"
        );
    }

    #[test]
    fn test_build_url_omits_none_values() {
        let url = build_url(
            "https://trends.google.com",
            "trends/api/dailytrends",
            &[
                ("geo", Some("US".into())),
                ("cat", None),
                ("ns", Some(QueryValue::Int(15))),
            ],
        )
        .unwrap();
        assert_eq!(url, "https://trends.google.com/trends/api/dailytrends?geo=US&ns=15");
    }

    #[test]
    fn test_build_url_without_params_has_no_query() {
        let url = build_url("https://trends.google.com", "/trends/hottrends", &[]).unwrap();
        assert_eq!(url, "https://trends.google.com/trends/hottrends");
    }

    #[test]
    fn test_build_url_rejects_bad_base() {
        let err = build_url("not a url", "/x", &[]).unwrap_err();
        assert!(matches!(err, TrendsError::Config(_)));
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("caffè latte"), "caff%C3%A8%20latte");
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_encode_form() {
        let body = encode_form(&[("f.req", r#"[[["i0OFE","[]",null,"generic"]]]"#)]);
        assert!(body.starts_with("f.req=%5B%5B%5B%22i0OFE%22"));
    }
}
