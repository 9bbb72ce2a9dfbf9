use serde::Serialize;

use super::collab::Collaborators;
use super::entry::Entry;
use super::format::{format_modified, human_file_size};
use super::links::{item_path, LinkBuilder};

pub const COPY_FOLDER_PERMALINK: &str = "Copy folder permalink";
pub const SELECT_FILE: &str = "Select file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Plain anchor to a mirror's raw endpoint
    Download,
    /// Copies `url` to the clipboard when activated
    CopyPermalink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowLink {
    pub kind: LinkKind,
    pub title: String,
    pub host: String,
    pub url: String,
}

/// Display record for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: String,
    pub icon: &'static str,
    pub display_name: String,
    /// Navigation target of the row
    pub href: String,
    pub formatted_size: String,
    pub formatted_timestamp: String,
    pub is_folder: bool,
    pub is_selectable: bool,
    /// Checkbox title, only on selectable rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_title: Option<String>,
    pub selected: bool,
    pub downloading: bool,
    pub links: Vec<RowLink>,
}

/// Per-row inputs that come from the listing rather than the entry.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub path: &'a str,
    pub selected: bool,
    pub downloading: bool,
    pub datetime_format: &'a str,
}

pub fn render_row(entry: &Entry, ctx: RowContext<'_>, collab: Collaborators<'_>, links: &LinkBuilder) -> RowView {
    let is_folder = entry.is_folder();
    let is_selectable = entry.is_selectable();

    let row_links = if is_folder {
        vec![RowLink {
            kind: LinkKind::CopyPermalink,
            title: collab.translator.translate(COPY_FOLDER_PERMALINK),
            host: links.permalink_host().to_string(),
            url: links.folder_permalink(ctx.path, &entry.name),
        }]
    } else {
        let token = collab.tokens.token_for(ctx.path);
        links
            .download_urls(ctx.path, &entry.name, token.as_deref())
            .into_iter()
            .map(|(mirror, url)| RowLink {
                kind: LinkKind::Download,
                title: collab.translator.translate(&mirror.label),
                host: mirror.host.clone(),
                url,
            })
            .collect()
    };

    RowView {
        id: entry.id.clone(),
        icon: collab.icons.icon_for(entry),
        display_name: entry.name.clone(),
        href: item_path(ctx.path, &entry.name),
        formatted_size: human_file_size(entry.size),
        formatted_timestamp: format_modified(&entry.last_modified_date_time, ctx.datetime_format),
        is_folder,
        is_selectable,
        select_title: is_selectable.then(|| collab.translator.translate(SELECT_FILE)),
        selected: is_selectable && ctx.selected,
        downloading: is_folder && ctx.downloading,
        links: row_links,
    }
}
