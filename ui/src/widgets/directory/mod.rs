//! The users directory: status views, toolbar, table and pagination bar.
//!
//! Rendering only borrows the `StateCtx`. Every interaction is collected as
//! a `DirectoryAction` and written back into `ViewInput` once the frame's
//! widgets are laid out.

mod pagination;
mod panel;
pub mod table;
mod toolbar;

use directory_business::{DirectoryView, SortKey, ViewInput};
use directory_states::StateCtx;
use log::{debug, error};

pub use panel::directory_panel;

/// A user interaction with the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryAction {
    Search(String),
    Sort(SortKey),
    PageSize(usize),
    PreviousPage,
    NextPage,
}

/// Write collected actions into `ViewInput`, in order.
///
/// The view is recomputed before each action, so page moves are bounded by
/// the rows left after any earlier search in the same batch.
pub fn apply_actions(state_ctx: &mut StateCtx, actions: Vec<DirectoryAction>) {
    for action in actions {
        debug!("Applying directory action: {action:?}");
        if let Err(err) = state_ctx.run_computed() {
            error!("Failed to refresh directory view: {err}");
        }
        let total = state_ctx
            .cached::<DirectoryView>()
            .map_or(0, DirectoryView::total);

        state_ctx.update::<ViewInput>(|input| match action {
            DirectoryAction::Search(text) => input.set_search_text(text),
            DirectoryAction::Sort(key) => input.request_sort(key),
            DirectoryAction::PageSize(size) => {
                input.set_page_size(size);
            }
            DirectoryAction::PreviousPage => input.previous_page(),
            DirectoryAction::NextPage => input.next_page(total),
        });
    }
}
