//! URL splitting and query composition.
//!
//! Works on absolute URLs and bare paths alike, so it does not go through
//! `url::Url` (which only accepts absolute URLs). Query strings are parsed
//! and serialized with `application/x-www-form-urlencoded` rules.

use std::fmt;

use ::url::form_urlencoded;

use securelink_core::error::AppError;
use securelink_core::result::AppResult;

/// Schemes whose last path segment may carry `;params`.
const SCHEMES_WITH_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// A URL split into its six components.
///
/// Reassembling with [`Display`](fmt::Display) reproduces the input, except
/// that the scheme is lowercased and an empty query or fragment is dropped
/// together with its delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Lowercased scheme, empty when absent.
    pub scheme: String,
    /// Authority after `//`. `None` when the URL has no `//` section.
    pub authority: Option<String>,
    /// Path, without params.
    pub path: String,
    /// Params of the last path segment (after `;`).
    pub params: String,
    /// Raw query string, without the leading `?`.
    pub query: String,
    /// Fragment, without the leading `#`.
    pub fragment: String,
}

impl UrlParts {
    /// Splits a URL into its components.
    ///
    /// Fails only when the authority contains an unbalanced IPv6 bracket.
    pub fn parse(url: &str) -> AppResult<Self> {
        let (scheme, mut rest) = split_scheme(url);

        let mut authority = None;
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            let netloc = &after[..end];
            if netloc.contains('[') != netloc.contains(']') {
                return Err(AppError::invalid_url(format!("Invalid IPv6 URL: {url}")));
            }
            authority = Some(netloc.to_string());
            rest = &after[end..];
        }

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

        let (path, params) = if SCHEMES_WITH_PARAMS.contains(&scheme.as_str()) {
            split_params(rest)
        } else {
            (rest, "")
        };

        Ok(Self {
            scheme,
            authority,
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            write!(f, ";{}", self.params)?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Ordered query mapping. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    /// Parses a raw query string. Later duplicates overwrite earlier ones.
    pub fn parse(query: &str) -> Self {
        let mut map = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            map.insert(key.into_owned(), value.into_owned());
        }
        map
    }

    /// Inserts or overwrites a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Looks up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serializes back into a query string.
    pub fn serialize(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Merges `pairs` into the query of `url`, overwriting same-named keys.
pub fn add_query<K, V>(url: &str, pairs: &[(K, V)]) -> AppResult<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parts = UrlParts::parse(url)?;
    let mut query = QueryMap::parse(&parts.query);
    for (key, value) in pairs {
        query.insert(key.as_ref(), value.as_ref());
    }
    parts.query = query.serialize();
    Ok(parts.to_string())
}

/// Returns `url` with its query component removed.
pub fn strip_query(url: &str) -> AppResult<String> {
    let mut parts = UrlParts::parse(url)?;
    parts.query.clear();
    Ok(parts.to_string())
}

/// Returns only the path component of `url`.
pub fn path_of(url: &str) -> AppResult<String> {
    UrlParts::parse(url).map(|parts| parts.path)
}

fn split_scheme(url: &str) -> (String, &str) {
    if let Some(colon) = url.find(':') {
        let candidate = &url[..colon];
        let valid = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid {
            return (candidate.to_ascii_lowercase(), &url[colon + 1..]);
        }
    }
    (String::new(), url)
}

fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(offset) => {
            let index = search_from + offset;
            (&path[..index], &path[index + 1..])
        }
        None => (path, ""),
    }
}
