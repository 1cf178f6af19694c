//! Typed signal channel for the bubble menu.
//!
//! The app owns one [`MenuBus`] and hands it down through context. Pages that
//! want the menu to open (the home intro, for instance) dispatch a
//! [`MenuSignal`]; the menu subscribes while it is mounted.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSignal {
    Open,
    Close,
}

#[derive(Default)]
struct BusInner {
    next_id: Cell<usize>,
    observers: RefCell<Vec<(usize, Callback<MenuSignal>)>>,
}

#[derive(Clone, Default)]
pub struct MenuBus {
    inner: Rc<BusInner>,
}

impl PartialEq for MenuBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MenuBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` until the returned subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, observer: Callback<MenuSignal>) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.observers.borrow_mut().push((id, observer));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `signal` to every live observer and returns how many there were.
    pub fn dispatch(&self, signal: MenuSignal) -> usize {
        // Observers may subscribe or unsubscribe while handling the signal.
        let observers: Vec<Callback<MenuSignal>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in &observers {
            observer.emit(signal);
        }
        log::debug!("menu signal {:?} reached {} observer(s)", signal, observers.len());
        observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

pub struct Subscription {
    id: usize,
    bus: Weak<BusInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.observers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
