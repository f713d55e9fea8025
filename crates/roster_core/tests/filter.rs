use pretty_assertions::assert_eq;
use roster_core::{filter_items, FilterMode, Item, Membership};

fn items(ids: &[u64]) -> Vec<Item> {
    ids.iter()
        .map(|id| Item::new(*id, format!("group {id}"), ""))
        .collect()
}

fn memberships(ids: &[u64]) -> Vec<Membership> {
    ids.iter()
        .map(|id| Membership {
            item_id: *id,
            owner_id: 1,
        })
        .collect()
}

fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|item| item.id).collect()
}

#[test]
fn include_only_keeps_members() {
    let base = items(&[1, 2, 3]);
    let filtered = filter_items(&base, &memberships(&[2]), FilterMode::IncludeOnly);
    assert_eq!(filtered, vec![Item::new(2, "group 2", "")]);
}

#[test]
fn exclude_only_is_the_complement_in_order() {
    let base = items(&[5, 1, 4, 2, 3]);
    let members = memberships(&[4, 1]);

    let included = filter_items(&base, &members, FilterMode::IncludeOnly);
    let excluded = filter_items(&base, &members, FilterMode::ExcludeOnly);

    assert_eq!(ids(&included), vec![1, 4]);
    assert_eq!(ids(&excluded), vec![5, 2, 3]);
    assert_eq!(included.len() + excluded.len(), base.len());
}

#[test]
fn unset_passes_everything_through() {
    let base = items(&[3, 1, 2]);
    let filtered = filter_items(&base, &memberships(&[1]), FilterMode::Unset);
    assert_eq!(filtered, base);
}

#[test]
fn memberships_for_unknown_items_do_not_fabricate_rows() {
    let base = items(&[1, 2]);
    let filtered = filter_items(&base, &memberships(&[2, 42, 43]), FilterMode::IncludeOnly);
    assert_eq!(ids(&filtered), vec![2]);
}

#[test]
fn empty_memberships() {
    let base = items(&[1, 2]);
    assert!(filter_items(&base, &[], FilterMode::IncludeOnly).is_empty());
    assert_eq!(filter_items(&base, &[], FilterMode::ExcludeOnly), base);
}
