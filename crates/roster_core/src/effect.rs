use crate::{Item, OwnerId, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the whole base collection.
    FetchAll { request: RequestSeq },
    /// Fetch the memberships of `owner_id`.
    FetchMemberships {
        request: RequestSeq,
        owner_id: OwnerId,
    },
    /// Notify observers with the freshly filtered view.
    EmitView(Vec<Item>),
}
