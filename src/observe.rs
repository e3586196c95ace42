//! First-visibility detection for below-the-fold content.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// How much of the element has to intersect the viewport before it counts
/// as visible.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Subscription that delivers at most one event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SingleShot {
    fired: bool,
}

impl SingleShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time only.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }
}

/// Invokes `on_visible` once, the first time `node` intersects the viewport.
///
/// Priority nodes skip observation and count as immediately visible. The
/// observer is disconnected on unmount whether or not it ever fired; a node
/// that never resolves to an element is a silent no-op.
#[hook]
pub fn use_visible_once(node: NodeRef, priority: bool, on_visible: Callback<()>) {
    use_effect_with_deps(
        move |(node, priority)| {
            let mut observer = None;
            let mut observer_callback = None;

            if *priority {
                on_visible.emit(());
            } else if let Some(element) = node.cast::<web_sys::Element>() {
                let shot = Rc::new(RefCell::new(SingleShot::new()));
                let callback = Closure::wrap(Box::new(
                    move |entries: Vec<IntersectionObserverEntry>, obs: IntersectionObserver| {
                        let intersecting = entries.iter().any(|e| e.is_intersecting());
                        if intersecting && shot.borrow_mut().fire() {
                            obs.disconnect();
                            on_visible.emit(());
                        }
                    },
                )
                    as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
                if let Ok(obs) =
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                {
                    obs.observe(&element);
                    observer = Some(obs);
                    observer_callback = Some(callback);
                }
            }

            move || {
                if let Some(obs) = observer {
                    obs.disconnect();
                }
                drop(observer_callback);
            }
        },
        (node, priority),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shot_fires_exactly_once() {
        let mut shot = SingleShot::new();
        assert!(shot.fire());
        assert!(!shot.fire());
        assert!(!shot.fire());
    }
}
