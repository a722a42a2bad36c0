//! Decomposition of raw deep-link and QR-code strings.
//!
//! Two link shapes reach the app:
//!
//! - universal links, `https://<app-domain>/checkin/<payload>`, where the
//!   host is just the app's domain;
//! - custom-scheme links, `stamp://checkin/<payload>`, where the authority is
//!   the first route segment.
//!
//! Both decompose to the same [`ParsedUri`] path (`checkin/<payload>`).

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use url::Url;

/// Path plus query parameters of an incoming link.
///
/// `path` is `None` when the raw input could not be decomposed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUri {
    pub path: Option<String>,
    pub query_params: HashMap<String, String>,
}

impl ParsedUri {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            query_params: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    /// Decompose a raw link string.
    ///
    /// Unparseable input yields a `ParsedUri` without a path rather than an
    /// error, so the validator's catch-all reports it.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Ok(url) = Url::parse(raw.trim()) else {
            tracing::debug!(raw, "link is not a parseable URL");
            return Self::default();
        };

        let path = route_path(&url);
        let query_params = url.query().map(parse_query).unwrap_or_default();

        Self {
            path: Some(path),
            query_params,
        }
    }
}

/// Route path of `url` with percent-escapes decoded, so an envelope whose
/// padding arrives as `%3D%3D` matches one sent with `==`. A path that does
/// not decode to UTF-8 is kept raw and fails payload decoding instead.
fn route_path(url: &Url) -> String {
    let path = url.path();
    let path = path.strip_prefix('/').unwrap_or(path);

    let raw = match url.scheme() {
        "http" | "https" => path.to_owned(),
        _ => match url.host_str() {
            Some(host) if !host.is_empty() => {
                if path.is_empty() {
                    host.to_owned()
                } else {
                    format!("{host}/{path}")
                }
            }
            _ => path.to_owned(),
        },
    };

    match percent_decode_str(&raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            tracing::debug!(path = %raw, "route path is not valid UTF-8 once decoded");
            raw
        }
    }
}

/// Split a raw query string into decoded name/value pairs.
///
/// `+` is kept literally because base64 payloads carry it. The first
/// occurrence of a repeated name wins.
fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (Ok(name), Ok(value)) = (
            percent_decode_str(name).decode_utf8(),
            percent_decode_str(value).decode_utf8(),
        ) else {
            tracing::debug!(pair, "skipping query pair that is not valid UTF-8");
            continue;
        };
        params
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}
