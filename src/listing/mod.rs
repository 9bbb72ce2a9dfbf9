//! Directory listing core: entries in, display rows and links out.
//!
//! - [`links`]: download URL / permalink construction over the mirror hosts
//! - [`format`]: size and timestamp formatting
//! - [`selection`]: bulk-selection state
//! - [`row`]: one entry -> one display record
//! - [`layout`]: the render entry point for a whole listing
//! - [`controller`]: the listing's actions (toggle, copy permalinks)
//! - [`collab`]: collaborator traits (icons, tokens, translation, clipboard, toasts)

pub mod collab;
pub mod controller;
pub mod entry;
pub mod format;
pub mod layout;
pub mod links;
pub mod row;
pub mod selection;

pub use controller::{ActionError, ListingAction, ListingController};
pub use entry::Entry;
pub use layout::{render, ListingProps, ListingView};
pub use links::{LinkBuilder, MirrorHost};
pub use selection::{SelectionTracker, TotalSelected};
