use super::*;

#[test]
fn store_starts_empty() {
    let store = SessionStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::default();
    store.set("T");
    assert_eq!(store.get(), Some("T".to_owned()));
}

#[test]
fn clear_empties_the_slot() {
    let store = SessionStore::default();
    store.set("T");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clear_on_empty_store_is_a_no_op() {
    let store = SessionStore::default();
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clones_share_the_same_slot() {
    let store = SessionStore::default();
    let other = store.clone();
    store.set("T");
    assert_eq!(other.get(), Some("T".to_owned()));
    other.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn events_count_each_invalidation() {
    let events = SessionEvents::new();
    assert_eq!(events.epoch_untracked(), 0);
    events.notify_expired();
    events.notify_expired();
    assert_eq!(events.epoch_untracked(), 2);
}
