//! Collaborators the listing relies on but does not implement itself.
//!
//! The listing only needs narrow answers from the outside world: which glyph
//! an entry gets, which access token applies to a path, how a label reads in
//! the user's language, and somewhere to put clipboard text and toasts. Each
//! of those is a trait here, with the implementation the service uses.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use super::entry::Entry;
use super::links::encode_name;

/// Maps an entry to an icon identifier (Font Awesome names).
pub trait IconResolver: Send + Sync {
    fn icon_for(&self, entry: &Entry) -> &'static str;
}

/// Returns the access token authorizing raw downloads below `path`.
pub trait TokenStore {
    fn token_for(&self, path: &str) -> Option<String>;
}

/// Maps a label key to its localized display string.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Best-effort clipboard. Failures are swallowed by the implementation.
pub trait Clipboard {
    fn copy(&mut self, text: &str);
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Borrowed bundle of the read-only collaborators used while rendering.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub icons: &'a dyn IconResolver,
    pub tokens: &'a dyn TokenStore,
    pub translator: &'a dyn Translator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastStyle {
    Plain,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), style: ToastStyle::Success, icon: None }
    }

    pub fn with_icon(message: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { message: message.into(), style: ToastStyle::Plain, icon: Some(icon.into()) }
    }
}

/// Icons by folder flag and file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionIcons;

impl IconResolver for ExtensionIcons {
    fn icon_for(&self, entry: &Entry) -> &'static str {
        if entry.is_folder() {
            return "folder";
        }
        let Some(ext) = entry.extension() else {
            return "file";
        };
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "svg" | "ico" | "heic" | "tif" | "tiff" => "file-image",
            "mp4" | "mkv" | "webm" | "avi" | "mov" | "flv" | "m4v" | "ts" => "file-video",
            "mp3" | "flac" | "wav" | "ogg" | "m4a" | "aac" | "opus" => "file-audio",
            "pdf" => "file-pdf",
            "zip" | "rar" | "7z" | "gz" | "tar" | "xz" | "bz2" | "zst" | "iso" => "file-archive",
            "doc" | "docx" | "odt" => "file-word",
            "xls" | "xlsx" | "ods" | "csv" => "file-excel",
            "ppt" | "pptx" | "odp" => "file-powerpoint",
            "txt" | "md" | "markdown" | "log" => "file-alt",
            "rs" | "js" | "tsx" | "jsx" | "py" | "go" | "c" | "h" | "cpp" | "java" | "json" | "toml"
            | "yaml" | "yml" | "html" | "css" | "sh" => "file-code",
            _ => "file",
        }
    }
}

/// Tokens the client has stored per protected route.
///
/// A path is authorized by the first protected route that equals it or is a
/// whole-segment prefix of it (`/private` covers `/private/a`, not
/// `/privateer`). The token is whatever the client stored under that route.
pub struct StoredTokens<'a> {
    protected_routes: &'a [String],
    stored: &'a HashMap<String, String>,
}

impl<'a> StoredTokens<'a> {
    pub fn new(protected_routes: &'a [String], stored: &'a HashMap<String, String>) -> Self {
        Self { protected_routes, stored }
    }

    /// Routes are configured with raw folder names while listing paths carry
    /// the percent-encoded names produced by
    /// [`item_path`](super::links::item_path), so each route is compared in its
    /// encoded form as well as verbatim. The returned route is the configured
    /// (unencoded) one, which is the key tokens are stored under.
    pub fn matching_route(&self, path: &str) -> Option<&'a str> {
        self.protected_routes
            .iter()
            .map(|r| r.trim_end_matches('/'))
            .find(|route| covers(&encode_route(route), path) || covers(route, path))
    }
}

fn encode_route(route: &str) -> String {
    route.split('/').map(encode_name).collect::<Vec<_>>().join("/")
}

// Whole-segment prefix: `/private` covers `/private/a` but not `/privateer`
fn covers(route: &str, path: &str) -> bool {
    match path.strip_prefix(route) {
        Some(rest) => route.is_empty() || rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

impl TokenStore for StoredTokens<'_> {
    fn token_for(&self, path: &str) -> Option<String> {
        let route = self.matching_route(path)?;
        // Clients may have stored the route with or without a trailing slash
        self.stored
            .get(route)
            .or_else(|| self.stored.get(&format!("{}/", route)))
            .filter(|t| !t.is_empty())
            .cloned()
    }
}

/// Key -> localized string table. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).context("translation catalog must be a flat JSON object of strings")?;
        Ok(Self { entries })
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading translation catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!("Loaded {} translations from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// Keeps the last copied text so it can be handed back to the client that
/// triggered the action.
#[derive(Debug, Default)]
pub struct ClipboardBuffer {
    pub text: Option<String>,
}

impl Clipboard for ClipboardBuffer {
    fn copy(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// Collects toasts in emission order.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::entry::fixtures::{file, folder};
    use crate::listing::links::item_path;

    #[test]
    fn icons_by_kind_and_extension() {
        let icons = ExtensionIcons;
        assert_eq!(icons.icon_for(&folder("1", "photos.zip")), "folder");
        assert_eq!(icons.icon_for(&file("2", "IMG_01.JPG", 1)), "file-image");
        assert_eq!(icons.icon_for(&file("3", "album.flac", 1)), "file-audio");
        assert_eq!(icons.icon_for(&file("4", "backup.tar", 1)), "file-archive");
        assert_eq!(icons.icon_for(&file("5", ".password", 1)), "file");
        assert_eq!(icons.icon_for(&file("6", "Makefile", 1)), "file");
    }

    #[test]
    fn token_lookup_matches_whole_segments() {
        let routes = vec!["/private".to_string(), "/shared/team/".to_string()];
        let mut stored = HashMap::new();
        stored.insert("/private".to_string(), "abc".to_string());
        stored.insert("/shared/team/".to_string(), "xyz".to_string());
        let tokens = StoredTokens::new(&routes, &stored);

        assert_eq!(tokens.token_for("/private").as_deref(), Some("abc"));
        assert_eq!(tokens.token_for("/private/sub/dir").as_deref(), Some("abc"));
        assert_eq!(tokens.token_for("/privateer"), None);
        assert_eq!(tokens.token_for("/shared/team/docs").as_deref(), Some("xyz"));
        assert_eq!(tokens.token_for("/public"), None);
    }

    #[test]
    fn token_lookup_matches_encoded_listing_paths() {
        let routes = vec!["/Private Files".to_string(), "/Über/Geheim".to_string()];
        let mut stored = HashMap::new();
        stored.insert("/Private Files".to_string(), "tok123".to_string());
        stored.insert("/Über/Geheim".to_string(), "u1".to_string());
        let tokens = StoredTokens::new(&routes, &stored);

        let opened = item_path("/", "Private Files");
        assert_eq!(opened, "/Private%20Files");
        assert_eq!(tokens.token_for(&opened).as_deref(), Some("tok123"));
        assert_eq!(tokens.token_for("/Private%20Files/x").as_deref(), Some("tok123"));
        assert_eq!(tokens.matching_route("/Private%20Files/x"), Some("/Private Files"));
        assert_eq!(tokens.token_for("/Private%20Filesystem"), None);

        let nested = item_path(&item_path("/", "Über"), "Geheim");
        assert_eq!(tokens.token_for(&format!("{}/report", nested)).as_deref(), Some("u1"));
    }

    #[test]
    fn token_missing_for_unstored_route() {
        let routes = vec!["/private".to_string()];
        let stored = HashMap::new();
        let tokens = StoredTokens::new(&routes, &stored);
        assert_eq!(tokens.matching_route("/private/x"), Some("/private"));
        assert_eq!(tokens.token_for("/private/x"), None);
    }

    #[test]
    fn catalog_falls_back_to_key() {
        let catalog = Catalog::from_json_str(r#"{"Name": "Name", "Size": "Größe"}"#).unwrap();
        assert_eq!(catalog.translate("Size"), "Größe");
        assert_eq!(catalog.translate("Actions"), "Actions");
        assert!(Catalog::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn clipboard_keeps_last_text_and_toasts_queue_up() {
        let mut clip = ClipboardBuffer::default();
        clip.copy("one");
        clip.copy("two");
        assert_eq!(clip.text.as_deref(), Some("two"));

        let mut queue = ToastQueue::default();
        queue.notify(Toast::success("done"));
        queue.notify(Toast::with_icon("copied", "👌"));
        assert_eq!(queue.toasts.len(), 2);
        assert_eq!(queue.toasts[0], Toast::success("done"));
    }
}
