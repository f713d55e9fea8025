use roster_logging::{roster_debug, roster_error, roster_warn};

use crate::{Effect, FetchSource, ListState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListState, msg: Msg) -> (ListState, Vec<Effect>) {
    let effects = match msg {
        Msg::Reload => {
            let request = state.begin_reload();
            roster_debug!("Retrieving items request={}", request);
            vec![Effect::FetchAll { request }]
        }
        Msg::ItemsLoaded { request, result } => {
            if !state.accept_items_response(request) {
                roster_debug!("Discarding stale items response request={}", request);
                return (state, Vec::new());
            }
            match result {
                Ok(items) => {
                    roster_debug!("Received {} item(s) request={}", items.len(), request);
                    state.install_items(items);
                    let owner_id = state.owner_id();
                    let request = state.begin_memberships(owner_id);
                    vec![Effect::FetchMemberships { request, owner_id }]
                }
                Err(error) => {
                    roster_error!("Error during retrieving items from API. Error: {}", error);
                    state.fail(FetchSource::Items, error);
                    Vec::new()
                }
            }
        }
        Msg::LoadMemberships { owner_id } => {
            let request = state.begin_memberships(owner_id);
            roster_debug!(
                "Retrieving memberships owner_id={} request={}",
                owner_id,
                request
            );
            vec![Effect::FetchMemberships { request, owner_id }]
        }
        Msg::MembershipsLoaded { request, result } => {
            if !state.accept_memberships_response(request) {
                roster_debug!("Discarding stale memberships response request={}", request);
                return (state, Vec::new());
            }
            match result {
                Ok(memberships) => {
                    state.install_memberships(memberships);
                    if state.is_loaded() {
                        emit_view(&state)
                    } else {
                        Vec::new()
                    }
                }
                Err(error) => {
                    roster_error!(
                        "Error during retrieving memberships from API. Error: {}",
                        error
                    );
                    state.fail(FetchSource::Memberships, error);
                    Vec::new()
                }
            }
        }
        Msg::ApplyFilter(items) => {
            state.install_items(items);
            emit_view(&state)
        }
        Msg::FilterChanged(mode) => {
            state.set_filter(mode);
            if state.is_loaded() {
                emit_view(&state)
            } else {
                Vec::new()
            }
        }
        Msg::Add(item) => match state.add_item(item) {
            Ok(true) => emit_view(&state),
            Ok(false) => Vec::new(),
            Err(err) => {
                roster_warn!("Add rejected: {}", err);
                state.set_error(err);
                Vec::new()
            }
        },
        Msg::Remove(item) => {
            if state.remove_item(&item) {
                emit_view(&state)
            } else {
                roster_debug!("Remove ignored, item {} not present", item.id());
                Vec::new()
            }
        }
        Msg::SelectionChanged(ids) => {
            state.set_selection(ids);
            Vec::new()
        }
    };

    (state, effects)
}

fn emit_view(state: &ListState) -> Vec<Effect> {
    vec![Effect::EmitView(state.visible_items())]
}
