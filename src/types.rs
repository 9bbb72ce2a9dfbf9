use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::listing::collab::Toast;
use crate::listing::{Entry, ListingAction, TotalSelected};

/// Body of `POST /api/listing`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub path: String,
    pub entries: Vec<Entry>,
    /// Entry id -> selected
    #[serde(default)]
    pub selected: HashMap<String, bool>,
    /// Protected route -> token, as stored by the client
    #[serde(default)]
    pub stored_tokens: HashMap<String, String>,
    #[serde(default)]
    pub folder_generating: HashMap<String, bool>,
    #[serde(default)]
    pub total_generating: bool,
}

/// Body of `POST /api/listing/actions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub path: String,
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub selected: HashMap<String, bool>,
    #[serde(default)]
    pub stored_tokens: HashMap<String, String>,
    pub action: ListingAction,
}

/// Selection after the action plus the side effects the client should perform.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub selected: BTreeMap<String, bool>,
    pub total_selected: TotalSelected,
    pub selected_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<String>,
    pub toasts: Vec<Toast>,
}
