use crate::{FilterMode, ItemId, SyncError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListViewModel {
    pub status: LoadStatus,
    pub filter: FilterMode,
    /// Size of the base collection, before filtering.
    pub total: usize,
    pub rows: Vec<ItemRowView>,
    pub error: Option<SyncError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub selected: bool,
}
