//! Single-threaded observable values.
//!
//! A [`Writable`] holds a value and a list of listeners. Subscribing calls the listener once with
//! the current value; every later change is published synchronously to all current listeners.
//! Setting a value equal to the current one publishes nothing.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

/// Read side of an observable value.
pub trait Readable<T> {
    /// Snapshot of the current value.
    fn get(&self) -> T;

    /// Register `listener`; it runs immediately with the current value and then on every
    /// change until the returned [`Subscription`] is dropped or unsubscribed.
    fn subscribe(&self, listener: Box<dyn Fn(&T)>) -> Subscription;
}

/// A shared, observable value. Clones refer to the same value and listeners.
pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for Writable<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T> Writable<T>
where
    T: Clone + PartialEq + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Replace the value and publish it if it changed.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
        }
        self.publish();
    }

    /// Derive the next value from the current one.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.borrow().value);
        self.set(next);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn publish(&self) {
        // Listeners may set or subscribe re-entrantly, so nothing stays borrowed while they run.
        let (value, listeners): (T, Vec<Listener<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.value.clone(),
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect(),
            )
        };
        for listener in listeners {
            listener(&value);
        }
    }
}

impl<T> Readable<T> for Writable<T>
where
    T: Clone + PartialEq + 'static,
{
    fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    fn subscribe(&self, listener: Box<dyn Fn(&T)>) -> Subscription {
        let listener: Listener<T> = Rc::from(listener);
        let (id, value) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            (id, inner.value.clone())
        };
        listener(&value);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }
}

/// Handle returned by [`Readable::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }

    /// Keep the listener registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/store.rs"]
mod tests;
