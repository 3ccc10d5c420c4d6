use super::*;
use crate::test_support::{sample_session, sample_user};

#[test]
fn store_starts_signed_out() {
    let store = SessionStore::new();
    assert!(!store.is_authenticated());
    assert_eq!(store.current(), None);
    assert_eq!(store.token(), None);
}

#[test]
fn replace_publishes_snapshot_to_observers() {
    let store = SessionStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |session| {
        sink.borrow_mut().push(session.map(|s| s.username().to_owned()));
    });

    assert!(store.replace(Some(sample_session("T"))));
    assert!(store.replace(None));

    assert_eq!(*seen.borrow(), vec![Some("alice".to_owned()), None]);
}

#[test]
fn replace_with_same_value_does_not_notify() {
    let store = SessionStore::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(!store.replace(None));
    store.replace(Some(sample_session("T")));
    assert!(!store.replace(Some(sample_session("T"))));

    assert_eq!(calls.get(), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = SessionStore::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.replace(Some(sample_session("T")));

    assert_eq!(calls.get(), 0);
}

#[test]
fn observer_can_read_store_during_notification() {
    let store = Rc::new(SessionStore::new());
    let observed = Rc::new(RefCell::new(None));
    let reader = Rc::clone(&store);
    let sink = Rc::clone(&observed);
    store.subscribe(move |_| {
        *sink.borrow_mut() = Some(reader.is_authenticated());
    });

    store.replace(Some(sample_session("T")));

    assert_eq!(*observed.borrow(), Some(true));
}

#[test]
fn observer_can_subscribe_during_notification() {
    let store = Rc::new(SessionStore::new());
    let inner = Rc::clone(&store);
    store.subscribe(move |_| {
        inner.subscribe(|_| {});
    });

    store.replace(Some(sample_session("T")));

    assert_eq!(store.observers.borrow().len(), 2);
}

#[test]
fn token_tracks_current_session() {
    let store = SessionStore::new();
    store.replace(Some(Session {
        user: sample_user(),
        token: "abc".to_owned(),
    }));
    assert_eq!(store.token().as_deref(), Some("abc"));
}
