use std::collections::HashSet;

use roster_logging::roster_warn;

use crate::view_model::{ItemRowView, ListViewModel, LoadStatus};
use crate::{
    filter_items, DisplayError, FetchSource, FilterMode, Item, ItemId, ItemRef, Membership,
    OwnerId, RequestSeq, SyncError,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    owner_id: OwnerId,
    /// Base collection; `None` until a fetch completes.
    items: Option<Vec<Item>>,
    memberships: Vec<Membership>,
    filter: FilterMode,
    selection: Vec<ItemId>,
    error: Option<SyncError>,
    last_request: RequestSeq,
    pending_items: Option<RequestSeq>,
    pending_memberships: Option<RequestSeq>,
}

impl ListState {
    pub fn new(owner_id: OwnerId, filter: FilterMode) -> Self {
        Self {
            owner_id,
            filter,
            ..Self::default()
        }
    }

    pub fn view(&self) -> ListViewModel {
        let status = match (&self.items, &self.error) {
            (Some(_), _) => LoadStatus::Loaded,
            (None, Some(_)) => LoadStatus::Failed,
            (None, None) => LoadStatus::Loading,
        };
        let rows = self
            .visible_items()
            .into_iter()
            .map(|item| ItemRowView {
                selected: self.selection.contains(&item.id),
                id: item.id,
                name: item.name,
                description: item.description,
            })
            .collect();

        ListViewModel {
            status,
            filter: self.filter,
            total: self.items.as_ref().map_or(0, Vec::len),
            rows,
            error: self.error.clone(),
        }
    }

    /// Filtered view of the base collection. Empty while data is absent.
    pub fn visible_items(&self) -> Vec<Item> {
        match &self.items {
            Some(items) => filter_items(items, &self.memberships, self.filter),
            None => Vec::new(),
        }
    }

    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    pub fn error(&self) -> Option<&SyncError> {
        self.error.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// Linear scan for `id` in the base collection.
    pub fn find_index(&self, id: ItemId) -> Option<usize> {
        self.items
            .as_ref()
            .and_then(|items| items.iter().position(|item| item.id == id))
    }

    pub(crate) fn begin_reload(&mut self) -> RequestSeq {
        let request = self.next_request();
        self.items = None;
        self.error = None;
        self.selection.clear();
        self.pending_items = Some(request);
        // A membership answer from the previous cycle must not land in this one.
        self.pending_memberships = None;
        request
    }

    pub(crate) fn begin_memberships(&mut self, owner_id: OwnerId) -> RequestSeq {
        let request = self.next_request();
        self.owner_id = owner_id;
        self.memberships.clear();
        self.error = None;
        self.pending_memberships = Some(request);
        request
    }

    /// Accepts the response to `request` only if it is the latest base fetch issued.
    pub(crate) fn accept_items_response(&mut self, request: RequestSeq) -> bool {
        if self.pending_items == Some(request) {
            self.pending_items = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn accept_memberships_response(&mut self, request: RequestSeq) -> bool {
        if self.pending_memberships == Some(request) {
            self.pending_memberships = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn install_items(&mut self, mut items: Vec<Item>) {
        let mut seen = HashSet::with_capacity(items.len());
        let before = items.len();
        items.retain(|item| seen.insert(item.id));
        if items.len() != before {
            roster_warn!(
                "Dropped {} item(s) with duplicate identifiers",
                before - items.len()
            );
        }
        self.items = Some(items);
        self.prune_selection();
    }

    pub(crate) fn install_memberships(&mut self, memberships: Vec<Membership>) {
        self.memberships = memberships;
    }

    pub(crate) fn fail(&mut self, origin: FetchSource, error: DisplayError) {
        self.set_error(SyncError::FetchFailed { origin, error });
    }

    pub(crate) fn set_error(&mut self, error: SyncError) {
        self.error = Some(error);
    }

    pub(crate) fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    /// Inserts or replaces an item. Returns `Ok(false)` while data is absent.
    pub(crate) fn add_item(&mut self, item: ItemRef) -> Result<bool, SyncError> {
        if self.items.is_none() {
            return Ok(false);
        }
        let item = match item {
            ItemRef::Item(item) => item,
            ItemRef::Id(id) => self.resolve(id).ok_or(SyncError::ItemNotFound(id))?,
        };

        let index = self.find_index(item.id);
        let Some(items) = self.items.as_mut() else {
            return Ok(false);
        };
        match index {
            Some(index) => items[index] = item,
            None => items.push(item),
        }
        self.clear_rejection();
        Ok(true)
    }

    /// Removes an item. Returns `false` when it is not in the collection.
    pub(crate) fn remove_item(&mut self, item: &ItemRef) -> bool {
        let id = item.id();
        let Some(index) = self.find_index(id) else {
            return false;
        };
        if let Some(items) = self.items.as_mut() {
            items.remove(index);
        }
        self.selection.retain(|selected| *selected != id);
        self.clear_rejection();
        true
    }

    pub(crate) fn set_selection(&mut self, ids: Vec<ItemId>) {
        let mut seen = HashSet::with_capacity(ids.len());
        let selection: Vec<ItemId> = ids
            .into_iter()
            .filter(|id| self.find_index(*id).is_some() && seen.insert(*id))
            .collect();
        self.selection = selection;
    }

    /// A rejected add only stands until the next successful mutation.
    fn clear_rejection(&mut self) {
        if matches!(self.error, Some(SyncError::ItemNotFound(_))) {
            self.error = None;
        }
    }

    fn resolve(&self, id: ItemId) -> Option<Item> {
        self.find_index(id)
            .and_then(|index| self.items.as_ref().map(|items| items[index].clone()))
    }

    fn prune_selection(&mut self) {
        let Some(items) = self.items.as_ref() else {
            self.selection.clear();
            return;
        };
        self.selection
            .retain(|id| items.iter().any(|item| item.id == *id));
    }

    fn next_request(&mut self) -> RequestSeq {
        self.last_request += 1;
        self.last_request
    }
}
