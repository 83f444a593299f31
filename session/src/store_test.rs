use super::*;

#[test]
fn new_store_is_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.get(), Ok(None));
}

#[test]
fn set_then_get_returns_token() {
    let store = MemoryTokenStore::new();
    store.set("T").unwrap();
    assert_eq!(store.get(), Ok(Some("T".to_owned())));
}

#[test]
fn set_replaces_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.set("new").unwrap();
    assert_eq!(store.token().as_deref(), Some("new"));
}

#[test]
fn delete_is_idempotent() {
    let store = MemoryTokenStore::with_token("T");
    store.delete().unwrap();
    store.delete().unwrap();
    assert_eq!(store.get(), Ok(None));
}

#[test]
fn clones_share_the_slot() {
    let store = MemoryTokenStore::new();
    let handle = store.clone();
    store.set("T").unwrap();
    assert_eq!(handle.token().as_deref(), Some("T"));
}
