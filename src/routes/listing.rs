use axum::{extract::State, Json};

use crate::{
    error::{validation::validate_listing_path, AppResult},
    listing::{
        collab::{ClipboardBuffer, Collaborators, StoredTokens, ToastQueue, TokenStore},
        layout::{render, ListingProps, ListingView},
        ListingAction, ListingController, SelectionTracker,
    },
    state::AppState,
    types::{ActionRequest, ActionResponse, RenderRequest},
};

pub async fn render_listing(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> AppResult<Json<ListingView>> {
    validate_listing_path(&req.path)?;

    let selection = SelectionTracker::from_map(&req.entries, &req.selected);
    let tokens = StoredTokens::new(&state.config.auth.protected_routes, &req.stored_tokens);
    let collab = Collaborators { icons: &state.icons, tokens: &tokens, translator: state.translator.as_ref() };
    let props = ListingProps {
        path: &req.path,
        entries: &req.entries,
        selection: &selection,
        folder_generating: &req.folder_generating,
        total_generating: req.total_generating,
        datetime_format: &state.config.listing.datetime_format,
    };
    let view = render(&props, collab, &state.links);

    let link_count: usize = view.rows.iter().map(|r| r.links.len()).sum();
    state.metrics.inc_listings_rendered();
    state.metrics.add_rows(view.rows.len() as u64);
    state.metrics.add_links(link_count as u64);
    tracing::debug!("Rendered {} rows ({} links) for {}", view.rows.len(), link_count, req.path);

    Ok(Json(view))
}

pub async fn listing_action(
    State(state): State<AppState>,
    Json(req): Json<ActionRequest>,
) -> AppResult<Json<ActionResponse>> {
    validate_listing_path(&req.path)?;

    let token = StoredTokens::new(&state.config.auth.protected_routes, &req.stored_tokens).token_for(&req.path);
    let selection = SelectionTracker::from_map(&req.entries, &req.selected);
    let mut controller = ListingController::new(
        &req.path,
        &req.entries,
        selection,
        &state.links,
        state.translator.as_ref(),
        token,
    );

    let mut clipboard = ClipboardBuffer::default();
    let mut toasts = ToastQueue::default();
    if let Err(e) = controller.dispatch(&req.action, &mut clipboard, &mut toasts) {
        tracing::warn!("Rejected listing action {:?} on {}: {}", req.action, req.path, e);
        return Err(e.into());
    }
    state.metrics.inc_actions_handled();
    if matches!(req.action, ListingAction::CopyFolderPermalink { .. } | ListingAction::CopySelectedPermalink) {
        state.metrics.inc_permalinks_copied();
    }

    let selection = controller.into_selection();
    Ok(Json(ActionResponse {
        selected: selection.to_map(),
        total_selected: selection.total_selected(),
        selected_count: selection.count(),
        clipboard: clipboard.text,
        toasts: toasts.toasts,
    }))
}
