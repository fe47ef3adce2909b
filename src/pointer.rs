use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use crate::parallax::Point;

/// Forwards pointer positions to a handler until closed.
///
/// Clones share the same liveness flag, so closing any clone stops delivery
/// for the DOM closure still registered with the browser.
#[derive(Clone)]
pub struct PointerFeed {
    live: Rc<Cell<bool>>,
    handler: Rc<dyn Fn(Point)>,
}

impl PointerFeed {
    pub fn new(handler: impl Fn(Point) + 'static) -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
            handler: Rc::new(handler),
        }
    }

    pub fn deliver(&self, point: Point) {
        if self.live.get() {
            (self.handler)(point);
        }
    }

    pub fn close(&self) {
        self.live.set(false);
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

/// A `mousemove` subscription on the window. Dropping it removes the listener
/// and closes the feed.
pub struct WindowListener {
    window: Window,
    feed: PointerFeed,
    callback: Closure<dyn Fn(MouseEvent)>,
}

impl WindowListener {
    pub fn attach(window: Window, feed: PointerFeed) -> Option<Self> {
        let callback = Closure::<dyn Fn(MouseEvent)>::new({
            let feed = feed.clone();
            move |e: MouseEvent| {
                feed.deliver(Point::new(e.client_x() as f64, e.client_y() as f64));
            }
        });

        if let Err(err) = window
            .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
        {
            warn!("could not subscribe to mousemove: {:?}", err);
            feed.close();
            return None;
        }

        debug!("pointer listener attached");
        Some(Self { window, feed, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.feed.close();
        let _ = self
            .window
            .remove_event_listener_with_callback("mousemove", self.callback.as_ref().unchecked_ref());
        debug!("pointer listener detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn delivers_while_live() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let feed = PointerFeed::new({
            let seen = seen.clone();
            move |p| seen.borrow_mut().push(p)
        });

        feed.deliver(Point::new(1.0, 2.0));
        feed.deliver(Point::new(3.0, 4.0));

        assert_eq!(*seen.borrow(), vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn no_recompute_after_teardown() {
        let calls = Rc::new(Cell::new(0));
        let feed = PointerFeed::new({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        // the browser keeps its own handle to the closure
        let registered = feed.clone();

        registered.deliver(Point::new(5.0, 5.0));
        feed.close();
        registered.deliver(Point::new(6.0, 6.0));
        registered.deliver(Point::new(7.0, 7.0));

        assert_eq!(calls.get(), 1);
        assert!(!registered.is_live());
    }
}
