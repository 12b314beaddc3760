//! Observer capability and the shared observer list used by subjects.
//!
//! # Invariants
//! - An observer appears at most once per list (pointer identity).
//! - Notification visits observers in attachment order.
//! - A notification pass iterates a snapshot, so attach/detach during a pass
//!   only affects later passes.

use log::debug;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Reacts to notifications published by a subject.
///
/// Implementations must not fail and must not mutate the subject.
pub trait NotificationObserver {
    /// Display name used in logs and listings.
    fn name(&self) -> &str;

    fn update(&self, message: &str);
}

/// Subject side of the notification contract.
pub trait NotificationSubject {
    /// Attaches `observer` unless already attached. Returns whether it was added.
    fn attach(&self, observer: Rc<dyn NotificationObserver>) -> bool;

    /// Detaches `observer` if present. Returns whether it was removed.
    fn detach(&self, observer: &Rc<dyn NotificationObserver>) -> bool;

    fn notify_observers(&self, message: &str);
}

/// Ordered, identity-deduplicated observer list.
///
/// Cloning yields another handle to the same list.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Rc<RefCell<Vec<Rc<dyn NotificationObserver>>>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, observer: Rc<dyn NotificationObserver>) -> bool {
        let mut observers = self.observers.borrow_mut();
        if observers
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &observer))
        {
            return false;
        }
        observers.push(observer);
        true
    }

    pub fn detach(&self, observer: &Rc<dyn NotificationObserver>) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|existing| !Rc::ptr_eq(existing, observer));
        observers.len() != before
    }

    pub fn contains(&self, observer: &Rc<dyn NotificationObserver>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|existing| Rc::ptr_eq(existing, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Copies the current list; the internal borrow ends before returning.
    pub fn snapshot(&self) -> Vec<Rc<dyn NotificationObserver>> {
        self.observers.borrow().clone()
    }

    /// Delivers `message` to every observer attached when the pass starts.
    pub fn notify(&self, message: &str) {
        let snapshot = self.snapshot();
        debug!(
            "event=notify_observers module=observer status=ok observers={}",
            snapshot.len()
        );
        for observer in snapshot {
            observer.update(message);
        }
    }
}

impl Debug for ObserverSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let observers = self.observers.borrow();
        f.debug_list()
            .entries(observers.iter().map(|observer| observer.name()))
            .finish()
    }
}
