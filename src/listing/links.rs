//! Download URL and permalink construction.
//!
//! Every function here is pure: the same path, name and token always produce
//! the byte-identical URL. Mirror hosts are injected through [`LinkBuilder`]
//! instead of being baked into the code, so each deployment can point the
//! listing at its own direct and proxy hosts.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query prefix of the raw-content endpoint served by every mirror.
pub const RAW_API_PATH: &str = "/api/raw/?path=";
/// Query parameter carrying the hashed access token.
pub const TOKEN_PARAM: &str = "&odpt=";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MirrorHostError {
    #[error("no mirror hosts configured")]
    NoMirrors,
    #[error("mirror host must not be empty")]
    Empty,
    #[error("mirror host '{0}' must not include a scheme")]
    Scheme(String),
    #[error("mirror host '{host}' contains invalid character {ch:?}")]
    InvalidChar { host: String, ch: char },
}

/// One host serving the drive content, e.g. a direct endpoint or a proxy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MirrorHost {
    /// Bare hostname, optionally with a port (`repo.example.org:8443`)
    pub host: String,
    /// Translation key used as the link title
    pub label: String,
}

impl MirrorHost {
    pub fn new(host: impl Into<String>, label: impl Into<String>) -> Result<Self, MirrorHostError> {
        let host = host.into();
        validate_host(&host)?;
        Ok(Self { host, label: label.into() })
    }
}

/// Checks that `host` can be spliced into `https://{host}/...` unchanged.
pub fn validate_host(host: &str) -> Result<(), MirrorHostError> {
    if host.is_empty() {
        return Err(MirrorHostError::Empty);
    }
    if host.contains("://") {
        return Err(MirrorHostError::Scheme(host.to_string()));
    }
    if let Some(ch) = host.chars().find(|c| matches!(c, '/' | '?' | '#' | '@') || c.is_whitespace()) {
        return Err(MirrorHostError::InvalidChar { host: host.to_string(), ch });
    }
    Ok(())
}

/// Percent-encodes an entry name as a URI component. Only the RFC 3986
/// unreserved characters survive unescaped.
pub fn encode_name(name: &str) -> Cow<'_, str> {
    urlencoding::encode(name)
}

/// Path of an entry below `path`. The root contributes no segment of its own,
/// so `("/", "a")` gives `/a`, not `//a`.
pub fn item_path(path: &str, name: &str) -> String {
    // Root and trailing slashes both collapse to a single separator
    let parent = path.trim_end_matches('/');
    format!("{}/{}", parent, encode_name(name))
}

fn token_suffix(token: Option<&str>) -> String {
    match token {
        Some(t) if !t.is_empty() => format!("{}{}", TOKEN_PARAM, t),
        _ => String::new(),
    }
}

/// `https://{host}/api/raw/?path={item_path}[&odpt={token}]`
pub fn download_url(host: &str, path: &str, name: &str, token: Option<&str>) -> String {
    raw_url(&format!("https://{}", host), path, name, token)
}

/// Raw-content URL of an entry against an arbitrary site origin.
pub fn raw_url(base_url: &str, path: &str, name: &str, token: Option<&str>) -> String {
    format!(
        "{}{}{}{}",
        base_url.trim_end_matches('/'),
        RAW_API_PATH,
        item_path(path, name),
        token_suffix(token)
    )
}

/// `https://{host}{item_path}`. Permalinks never carry a token.
pub fn permalink(host: &str, path: &str, name: &str) -> String {
    format!("https://{}{}", host, item_path(path, name))
}

/// Newline-separated raw URLs for a set of names, in the order given.
pub fn joined_raw_urls<'a>(
    base_url: &str,
    path: &str,
    names: impl IntoIterator<Item = &'a str>,
    token: Option<&str>,
) -> String {
    names.into_iter().map(|name| raw_url(base_url, path, name, token)).collect::<Vec<_>>().join("\n")
}

/// A configured set of mirrors plus the hosts used for permalinks.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    mirrors: Vec<MirrorHost>,
    permalink_host: String,
    base_url: String,
}

impl LinkBuilder {
    /// Builds from an ordered, non-empty mirror list. The first mirror doubles
    /// as permalink host and site origin until overridden.
    pub fn new(mirrors: Vec<MirrorHost>) -> Result<Self, MirrorHostError> {
        let first = mirrors.first().ok_or(MirrorHostError::NoMirrors)?;
        for m in &mirrors {
            validate_host(&m.host)?;
        }
        let permalink_host = first.host.clone();
        let base_url = format!("https://{}", permalink_host);
        Ok(Self { mirrors, permalink_host, base_url })
    }

    pub fn with_permalink_host(mut self, host: impl Into<String>) -> Result<Self, MirrorHostError> {
        let host = host.into();
        validate_host(&host)?;
        self.permalink_host = host;
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn mirrors(&self) -> &[MirrorHost] {
        &self.mirrors
    }

    pub fn permalink_host(&self) -> &str {
        &self.permalink_host
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One download URL per mirror, in configuration order.
    pub fn download_urls<'a>(
        &'a self,
        path: &str,
        name: &str,
        token: Option<&str>,
    ) -> Vec<(&'a MirrorHost, String)> {
        self.mirrors.iter().map(|m| (m, download_url(&m.host, path, name, token))).collect()
    }

    /// Shareable permalink of a folder on the permalink host.
    pub fn folder_permalink(&self, path: &str, name: &str) -> String {
        permalink(&self.permalink_host, path, name)
    }

    /// Raw URLs of `names` on the site origin, one per line.
    pub fn selected_permalink<'a>(
        &self,
        path: &str,
        names: impl IntoIterator<Item = &'a str>,
        token: Option<&str>,
    ) -> String {
        joined_raw_urls(&self.base_url, path, names, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirrors(hosts: &[&str]) -> Vec<MirrorHost> {
        hosts.iter().map(|h| MirrorHost::new(*h, format!("via {}", h)).unwrap()).collect()
    }

    #[test]
    fn root_path_has_single_slash() {
        assert_eq!(item_path("/", "a"), "/a");
        assert_eq!(item_path("/docs", "a"), "/docs/a");
    }

    #[test]
    fn trailing_slash_on_parent_is_not_doubled() {
        assert_eq!(item_path("/docs/", "a"), "/docs/a");
        assert_eq!(download_url("h", "/docs/", "a b", None), "https://h/api/raw/?path=/docs/a%20b");
        assert_eq!(permalink("h", "/docs/sub/", "x"), "https://h/docs/sub/x");
    }

    #[test]
    fn reserved_characters_are_encoded_and_round_trip() {
        for name in ["a/b", "what?.txt", "#1 hit", "with space", "Ünïcødé 漢字.md", "100%&more=yes"] {
            let path = item_path("/", name);
            let encoded = path.trim_start_matches('/');
            assert!(!encoded.contains(['/', '?', '#', ' ', '&', '=']), "{encoded}");
            assert!(encoded.is_ascii());
            assert_eq!(urlencoding::decode(encoded).unwrap(), name);
        }
    }

    #[test]
    fn download_url_shape() {
        assert_eq!(
            download_url("dl.example.org", "/music", "a b.mp3", None),
            "https://dl.example.org/api/raw/?path=/music/a%20b.mp3"
        );
        assert_eq!(
            download_url("dl.example.org", "/", "x", Some("tok123")),
            "https://dl.example.org/api/raw/?path=/x&odpt=tok123"
        );
    }

    #[test]
    fn token_suffix_present_only_with_token() {
        let b = LinkBuilder::new(mirrors(&["a.example", "b.example"])).unwrap();
        for (_, url) in b.download_urls("/p", "f.bin", Some("tok123")) {
            assert!(url.ends_with("&odpt=tok123"));
        }
        for (_, url) in b.download_urls("/p", "f.bin", None) {
            assert!(!url.contains("&odpt="));
        }
        for (_, url) in b.download_urls("/p", "f.bin", Some("")) {
            assert!(!url.contains("&odpt="));
        }
    }

    #[test]
    fn download_urls_follow_mirror_order() {
        let b = LinkBuilder::new(mirrors(&["A", "B", "C"])).unwrap();
        let urls = b.download_urls("/dir", "file.iso", Some("t"));
        let hosts: Vec<_> = urls.iter().map(|(m, _)| m.host.as_str()).collect();
        assert_eq!(hosts, ["A", "B", "C"]);
        for (m, url) in &urls {
            assert_eq!(url.replacen(&m.host, "HOST", 1), "https://HOST/api/raw/?path=/dir/file.iso&odpt=t");
        }
    }

    #[test]
    fn output_is_deterministic() {
        let b = LinkBuilder::new(mirrors(&["a.example"])).unwrap();
        assert_eq!(b.download_urls("/x", "ä ö", Some("k")), b.download_urls("/x", "ä ö", Some("k")));
        assert_eq!(b.folder_permalink("/x", "y z"), b.folder_permalink("/x", "y z"));
    }

    #[test]
    fn folder_permalink_uses_permalink_host_without_token() {
        let b = LinkBuilder::new(mirrors(&["direct.example", "proxy.example"])).unwrap();
        assert_eq!(b.folder_permalink("/", "My Docs"), "https://direct.example/My%20Docs");
        let b = b.with_permalink_host("share.example").unwrap();
        assert_eq!(b.folder_permalink("/a", "b"), "https://share.example/a/b");
    }

    #[test]
    fn selected_permalink_joins_lines_in_order() {
        let b = LinkBuilder::new(mirrors(&["direct.example"])).unwrap().with_base_url("https://site.example/");
        let text = b.selected_permalink("/d", ["one.txt", "two three.txt"], Some("tk"));
        assert_eq!(
            text,
            "https://site.example/api/raw/?path=/d/one.txt&odpt=tk\n\
             https://site.example/api/raw/?path=/d/two%20three.txt&odpt=tk"
        );
        assert_eq!(b.selected_permalink("/d", std::iter::empty(), None), "");
    }

    #[test]
    fn base_url_defaults_to_first_mirror() {
        let b = LinkBuilder::new(mirrors(&["first.example", "second.example"])).unwrap();
        assert_eq!(b.base_url(), "https://first.example");
        assert_eq!(b.permalink_host(), "first.example");
    }

    #[test]
    fn rejects_invalid_hosts() {
        assert_eq!(LinkBuilder::new(vec![]).unwrap_err(), MirrorHostError::NoMirrors);
        assert_eq!(MirrorHost::new("", "x").unwrap_err(), MirrorHostError::Empty);
        assert!(matches!(MirrorHost::new("https://a", "x"), Err(MirrorHostError::Scheme(_))));
        assert!(matches!(
            MirrorHost::new("a.example/path", "x"),
            Err(MirrorHostError::InvalidChar { ch: '/', .. })
        ));
        assert!(MirrorHost::new("repo.example:8443", "x").is_ok());
    }
}
