use crate::{DisplayError, FilterMode, Item, ItemId, ItemRef, Membership, OwnerId, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Drop current data and error, then fetch the base collection again.
    Reload,
    /// Result of a base collection fetch.
    ItemsLoaded {
        request: RequestSeq,
        result: Result<Vec<Item>, DisplayError>,
    },
    /// Fetch the memberships of `owner_id`.
    LoadMemberships { owner_id: OwnerId },
    /// Result of a membership fetch.
    MembershipsLoaded {
        request: RequestSeq,
        result: Result<Vec<Membership>, DisplayError>,
    },
    /// Replace the base collection and emit the filtered view.
    ApplyFilter(Vec<Item>),
    /// Switch the filter mode. The mode survives reloads.
    FilterChanged(FilterMode),
    /// Insert an item, or resolve an identifier against the base collection.
    Add(ItemRef),
    /// Remove an item by identity or identifier.
    Remove(ItemRef),
    /// User selected rows in the rendered table.
    SelectionChanged(Vec<ItemId>),
}
