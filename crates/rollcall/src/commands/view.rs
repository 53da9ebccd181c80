use crate::commands::{displayed, CmdMessage, CmdResult};
use crate::model::{SortField, SortOrder, ViewUpdate};
use crate::store::RosterStore;

/// The displayed sequence under the current view, unchanged.
pub fn list(store: &RosterStore) -> CmdResult {
    let mut result = CmdResult::default().with_listed(displayed(store));
    if result.listed.is_empty() && !store.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No one matches \"{}\"",
            store.view().search_text
        )));
    }
    result
}

/// Merges `update` into the stored view and lists the result.
pub fn apply(store: &mut RosterStore, update: ViewUpdate) -> CmdResult {
    store.merge_view(update);
    list(store)
}

pub fn sort(store: &mut RosterStore, field: SortField, order: SortOrder) -> CmdResult {
    apply(store, ViewUpdate::sort(field, order))
}

pub fn search(store: &mut RosterStore, text: impl Into<String>) -> CmdResult {
    apply(store, ViewUpdate::search(text))
}
