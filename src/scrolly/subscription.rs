//! Window listeners tied to a component's lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A window event listener that is removed when dropped.
pub struct EventSubscription {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventSubscription {
    /// `None` when there is no window or the listener could not be added.
    pub fn on_window(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("could not listen for {event}: {err:?}");
            return None;
        }
        Some(Self { window, event, callback })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Coalesces bursts of calls into one run after `delay_ms`. Dropping the
/// last clone cancels a pending run.
#[derive(Clone)]
pub struct Throttle {
    delay_ms: u32,
    pending: Rc<Cell<bool>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl Throttle {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(false)),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, run: impl FnOnce() + 'static) {
        if self.pending.get() {
            return;
        }
        self.pending.set(true);
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.set(false);
            run();
        });
        // the replaced timer has already fired
        *self.timer.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        if let Some(timeout) = self.timer.borrow_mut().take() {
            timeout.cancel();
        }
        self.pending.set(false);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    fn dispatch(event: &str) {
        let window = web_sys::window().expect("window");
        let event = Event::new(event).expect("event");
        window.dispatch_event(&event).expect("dispatch");
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + Clone + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[wasm_bindgen_test]
    fn dropped_subscription_stops_receiving_events() {
        let (count, handler) = counter();
        let subscription = EventSubscription::on_window("scroll", handler).expect("subscribed");

        dispatch("scroll");
        dispatch("scroll");
        assert_eq!(count.get(), 2);

        drop(subscription);
        dispatch("scroll");
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    fn subscriptions_are_scoped_to_their_event() {
        let (count, handler) = counter();
        let _subscription = EventSubscription::on_window("resize", handler).expect("subscribed");
        dispatch("scroll");
        assert_eq!(count.get(), 0);
        dispatch("resize");
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn burst_of_calls_runs_once() {
        let (count, handler) = counter();
        let throttle = Throttle::new(10);
        for _ in 0..5 {
            let mut run = handler.clone();
            throttle.schedule(move || run());
        }
        assert_eq!(count.get(), 0);

        TimeoutFuture::new(40).await;
        assert_eq!(count.get(), 1);

        // the window reopens after the run
        let mut run = handler.clone();
        throttle.schedule(move || run());
        TimeoutFuture::new(40).await;
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn cancel_stops_pending_run() {
        let (count, handler) = counter();
        let throttle = Throttle::new(10);
        let mut run = handler.clone();
        throttle.schedule(move || run());
        throttle.cancel();

        TimeoutFuture::new(40).await;
        assert_eq!(count.get(), 0);

        let mut run = handler;
        throttle.schedule(move || run());
        TimeoutFuture::new(40).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn dropping_last_clone_cancels_pending_run() {
        let (count, mut handler) = counter();
        let throttle = Throttle::new(10);
        throttle.schedule(move || handler());
        drop(throttle);

        TimeoutFuture::new(40).await;
        assert_eq!(count.get(), 0);
    }
}
