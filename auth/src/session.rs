//! In-memory session store with explicit observer registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store exists per process. Components read snapshots through
//! [`SessionStore::current`] or register an observer with
//! [`SessionStore::subscribe`]; only [`crate::AuthGateway`] writes.
//!
//! Observers run after the new value is in place and with no internal borrow
//! held, so an observer may read the store or (un)subscribe.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::types::User;

/// The authenticated user together with the bearer token that proved it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(Option<&Session>)>;

#[derive(Default)]
pub struct SessionStore {
    current: RefCell<Option<Session>>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the cached session. Never performs I/O.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Bearer token of the cached session.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    /// Register `observer` to be called after every session change.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(Option<&Session>) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        let observer: Observer = Rc::new(observer);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    /// Swap in `next` and notify observers if the value changed.
    pub(crate) fn replace(&self, next: Option<Session>) -> bool {
        {
            let mut current = self.current.borrow_mut();
            if *current == next {
                return false;
            }
            *current = next;
        }
        self.notify();
        true
    }

    fn notify(&self) {
        let snapshot = self.current();
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(snapshot.as_ref());
        }
    }
}
