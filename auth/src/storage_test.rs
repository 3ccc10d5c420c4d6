use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn memory_store_save_replaces_token() {
    let store = MemoryTokenStore::with_token("old");
    store.save("new").expect("save");
    assert_eq!(store.token().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("T");
    store.clear().expect("clear");
    store.clear().expect("clear again");
    assert_eq!(store.load(), Ok(None));
}

#[test]
fn shared_store_sees_writes_through_rc() {
    let store = Rc::new(MemoryTokenStore::new());
    let handle = Rc::clone(&store);
    handle.save("T").expect("save");
    assert_eq!(store.token().as_deref(), Some("T"));
}
