use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Anything that reports the viewport's vertical offset.
///
/// The callback runs once per scroll sample with the current offset in CSS
/// pixels. Dropping the returned subscription stops all further calls.
pub trait ScrollSource {
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> ScrollSubscription;
}

/// Releases its subscription when dropped, whichever way the owner goes away.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription to a source that will never emit.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_inert(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// The browser window's `scroll` event.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> ScrollSubscription {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll position will stay at the top");
            return ScrollSubscription::inert();
        };

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            warn!("Failed to listen for scroll events: {:?}", e);
            return ScrollSubscription::inert();
        }
        debug!("Subscribed to window scroll");

        ScrollSubscription::new(move || {
            let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            debug!("Unsubscribed from window scroll");
            drop(callback);
        })
    }
}

/// Shared handle to a scroll source, usable as a component prop.
/// Two handles are equal when they point at the same source.
#[derive(Clone)]
pub struct ScrollHandle(Rc<dyn ScrollSource>);

impl ScrollHandle {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn window() -> Self {
        Self::new(WindowScroll)
    }

    pub fn subscribe(&self, on_scroll: impl FnMut(f64) + 'static) -> ScrollSubscription {
        self.0.subscribe(Box::new(on_scroll))
    }
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ScrollHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollHandle")
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::{Headless, ManualScroll};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subscriber_sees_every_sample() {
        let source = ManualScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = source.subscribe(Box::new(move |offset| sink.borrow_mut().push(offset)));

        source.emit(0.0);
        source.emit(120.0);
        source.emit(10.0);

        assert_eq!(*seen.borrow(), vec![0.0, 120.0, 10.0]);
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let source = ManualScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = source.subscribe(Box::new(move |offset| sink.borrow_mut().push(offset)));

        source.emit(10.0);
        drop(subscription);
        assert_eq!(source.listener_count(), 0);
        source.emit(500.0);

        assert_eq!(*seen.borrow(), vec![10.0]);
    }

    #[test]
    fn release_runs_once() {
        let released = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&released);
        let subscription = ScrollSubscription::new(move || *counter.borrow_mut() += 1);
        assert!(!subscription.is_inert());
        drop(subscription);
        assert_eq!(*released.borrow(), 1);
    }

    #[test]
    fn headless_source_hands_out_inert_subscriptions() {
        let handle = ScrollHandle::new(Headless);
        let subscription = handle.subscribe(|_| panic!("headless source emitted"));
        assert!(subscription.is_inert());
    }

    #[test]
    fn handles_compare_by_source_identity() {
        let a = ScrollHandle::new(ManualScroll::default());
        let b = ScrollHandle::new(ManualScroll::default());
        assert!(a == a.clone());
        assert!(a != b);
    }
}
