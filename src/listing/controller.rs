//! The listing's callback surface.
//!
//! The containing page talks to the listing through [`ListingAction`]s. Each
//! action maps to one method here with a fixed signature; side effects go to
//! the [`Clipboard`] and [`Notifier`] passed in by the caller and are never
//! awaited or checked.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use super::collab::{Clipboard, Notifier, Toast, Translator};
use super::entry::Entry;
use super::links::LinkBuilder;
use super::selection::{SelectionTracker, TotalSelected};

pub const COPIED_FOLDER_PERMALINK: &str = "Copied folder permalink.";
pub const COPIED_SELECTED_PERMALINK: &str = "Copied selected files permalink.";
const FOLDER_TOAST_ICON: &str = "👌";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListingAction {
    ToggleItem { id: String },
    ToggleAll,
    CopyFolderPermalink { id: String },
    CopySelectedPermalink,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("no entry with id '{0}' in this listing")]
    UnknownEntry(String),
    #[error("entry '{0}' is not a folder")]
    NotAFolder(String),
    #[error("no files selected")]
    NothingSelected,
}

pub struct ListingController<'a> {
    path: &'a str,
    entries: &'a [Entry],
    links: &'a LinkBuilder,
    translator: &'a dyn Translator,
    token: Option<String>,
    selection: SelectionTracker,
}

impl<'a> ListingController<'a> {
    pub fn new(
        path: &'a str,
        entries: &'a [Entry],
        selection: SelectionTracker,
        links: &'a LinkBuilder,
        translator: &'a dyn Translator,
        token: Option<String>,
    ) -> Self {
        Self { path, entries, links, translator, token, selection }
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn into_selection(self) -> SelectionTracker {
        self.selection
    }

    pub fn toggle_item_selected(&mut self, id: &str) {
        if !self.selection.toggle(id) {
            tracing::debug!("Ignoring toggle for unselectable id {}", id);
        }
    }

    pub fn toggle_total_selected(&mut self) {
        self.selection.toggle_all();
    }

    pub fn total_selected(&self) -> TotalSelected {
        self.selection.total_selected()
    }

    /// Raw URLs of the selected files on the site origin, one per line.
    pub fn selected_permalink(&self) -> String {
        let mut names_by_id: HashMap<&str, &str> = HashMap::with_capacity(self.entries.len());
        for e in self.entries {
            names_by_id.entry(e.id.as_str()).or_insert(e.name.as_str());
        }
        let names = self.selection.selected_ids().filter_map(|id| names_by_id.get(id).copied());
        self.links.selected_permalink(self.path, names, self.token.as_deref())
    }

    pub fn folder_permalink(&self, id: &str) -> Result<String, ActionError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ActionError::UnknownEntry(id.to_string()))?;
        if !entry.is_folder() {
            return Err(ActionError::NotAFolder(id.to_string()));
        }
        Ok(self.links.folder_permalink(self.path, &entry.name))
    }

    pub fn dispatch(
        &mut self,
        action: &ListingAction,
        clipboard: &mut dyn Clipboard,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ActionError> {
        match action {
            ListingAction::ToggleItem { id } => self.toggle_item_selected(id),
            ListingAction::ToggleAll => self.toggle_total_selected(),
            ListingAction::CopyFolderPermalink { id } => {
                let url = self.folder_permalink(id)?;
                clipboard.copy(&url);
                notifier.notify(Toast::with_icon(
                    self.translator.translate(COPIED_FOLDER_PERMALINK),
                    FOLDER_TOAST_ICON,
                ));
            }
            ListingAction::CopySelectedPermalink => {
                if self.selection.count() == 0 {
                    return Err(ActionError::NothingSelected);
                }
                clipboard.copy(&self.selected_permalink());
                notifier.notify(Toast::success(self.translator.translate(COPIED_SELECTED_PERMALINK)));
            }
        }
        Ok(())
    }
}
