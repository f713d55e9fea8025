pub type ItemId = u64;
pub type OwnerId = u64;

/// Sequence number attached to every fetch request.
pub type RequestSeq = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Links an item (by `item_id`) to the owner the memberships were fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub item_id: ItemId,
    pub owner_id: OwnerId,
}

/// Argument of add/remove: either a full item or a bare identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Item(Item),
    Id(ItemId),
}

impl ItemRef {
    pub fn id(&self) -> ItemId {
        match self {
            ItemRef::Item(item) => item.id,
            ItemRef::Id(id) => *id,
        }
    }
}

impl From<Item> for ItemRef {
    fn from(item: Item) -> Self {
        ItemRef::Item(item)
    }
}

impl From<ItemId> for ItemRef {
    fn from(id: ItemId) -> Self {
        ItemRef::Id(id)
    }
}
