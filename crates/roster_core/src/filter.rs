use std::collections::HashSet;

use crate::{Item, ItemId, Membership};

/// How memberships partition the base collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Pass-through: every item is visible.
    #[default]
    Unset,
    /// Keep only items with a membership.
    IncludeOnly,
    /// Keep only items without a membership.
    ExcludeOnly,
}

/// Computes the filtered view of `items`, preserving order.
///
/// The result is always a subsequence of `items`.
pub fn filter_items(items: &[Item], memberships: &[Membership], mode: FilterMode) -> Vec<Item> {
    let keep_members = match mode {
        FilterMode::Unset => return items.to_vec(),
        FilterMode::IncludeOnly => true,
        FilterMode::ExcludeOnly => false,
    };

    let member_ids: HashSet<ItemId> = memberships.iter().map(|m| m.item_id).collect();
    items
        .iter()
        .filter(|item| member_ids.contains(&item.id) == keep_members)
        .cloned()
        .collect()
}
