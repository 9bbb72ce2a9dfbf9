use std::collections::HashMap;

use serde::Serialize;

use super::collab::Collaborators;
use super::entry::Entry;
use super::links::LinkBuilder;
use super::row::{render_row, RowContext, RowView};
use super::selection::{SelectionTracker, TotalSelected};

/// Everything the containing page hands to the listing for one render.
pub struct ListingProps<'a> {
    pub path: &'a str,
    pub entries: &'a [Entry],
    pub selection: &'a SelectionTracker,
    /// Folders with an archive download in flight, by entry id
    pub folder_generating: &'a HashMap<String, bool>,
    /// A bulk download of the selection is in flight
    pub total_generating: bool,
    pub datetime_format: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub name_label: String,
    pub modified_label: String,
    pub size_label: String,
    pub actions_label: String,
    pub select_all_title: String,
    pub copy_selected_title: String,
    pub total_selected: TotalSelected,
    pub selected_count: usize,
    /// Bulk controls are disabled while nothing is selected
    pub copy_selected_enabled: bool,
    pub downloading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub path: String,
    pub header: HeaderView,
    pub rows: Vec<RowView>,
}

pub fn render(props: &ListingProps<'_>, collab: Collaborators<'_>, links: &LinkBuilder) -> ListingView {
    let t = |key: &str| collab.translator.translate(key);
    let count = props.selection.count();

    let header = HeaderView {
        name_label: t("Name"),
        modified_label: t("Last Modified"),
        size_label: t("Size"),
        actions_label: t("Actions"),
        select_all_title: t("Select files"),
        copy_selected_title: t("Copy selected files permalink"),
        total_selected: props.selection.total_selected(),
        selected_count: count,
        copy_selected_enabled: count > 0,
        downloading: props.total_generating,
    };

    let rows = props
        .entries
        .iter()
        .map(|entry| {
            let ctx = RowContext {
                path: props.path,
                selected: props.selection.is_selected(&entry.id),
                downloading: props.folder_generating.get(&entry.id).copied().unwrap_or(false),
                datetime_format: props.datetime_format,
            };
            render_row(entry, ctx, collab, links)
        })
        .collect();

    ListingView { path: props.path.to_string(), header, rows }
}
