//! Viewport visibility tracking for scroll-reveal animations.
//!
//! A tracked element reports whether it currently intersects the viewport
//! (expanded by a root margin) by at least the configured threshold. The
//! signal follows every notification, so a section scrolled out of view
//! goes back to hidden and re-animates when it returns.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("failed to create intersection observer: {0}")]
    Create(String),
    #[error("tracked element is not mounted")]
    NotMounted,
}

impl From<JsValue> for ObserverError {
    fn from(value: JsValue) -> Self {
        ObserverError::Create(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Resolved observer configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: config::DEFAULT_THRESHOLD,
            root_margin: config::DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

/// Caller-supplied overrides. Any key that is set wins over the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObserverOverrides {
    pub threshold: Option<f64>,
    pub root_margin: Option<String>,
}

impl ObserverOptions {
    pub fn merged(overrides: &ObserverOverrides) -> Self {
        let defaults = Self::default();
        Self {
            threshold: overrides.threshold.unwrap_or(defaults.threshold),
            root_margin: overrides
                .root_margin
                .clone()
                .unwrap_or(defaults.root_margin),
        }
    }

    fn to_init(&self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        init.set_root_margin(&self.root_margin);
        init
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Revealed => "reveal-shown",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    revealed: bool,
}

impl VisibilityState {
    /// Takes the latest notification verbatim; there is no first-entry latch.
    pub fn on_intersection(&mut self, is_intersecting: bool) {
        self.revealed = is_intersecting;
    }

    pub fn reveal_state(&self) -> RevealState {
        RevealState::from_revealed(self.revealed)
    }
}

/// The operations a live observation needs from the browser observer.
pub trait ObserverBackend {
    type Target;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
    fn disconnect(&self);
}

impl ObserverBackend for IntersectionObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }

    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

/// A live observation of one element. The same backend instance serves the
/// observe call here and the unobserve call in `Drop`; the JS callback is
/// kept alive until then.
pub struct ObserverHandle<B: ObserverBackend = IntersectionObserver> {
    backend: B,
    target: B::Target,
    _callback: Option<Closure<dyn FnMut(Array)>>,
}

impl<B: ObserverBackend> ObserverHandle<B> {
    fn start(backend: B, target: B::Target, callback: Option<Closure<dyn FnMut(Array)>>) -> Self {
        backend.observe(&target);
        Self {
            backend,
            target,
            _callback: callback,
        }
    }
}

impl<B: ObserverBackend> Drop for ObserverHandle<B> {
    fn drop(&mut self) {
        log::debug!("Releasing viewport observer");
        self.backend.unobserve(&self.target);
        self.backend.disconnect();
    }
}

/// Forwards the first entry's flag, or nothing for an empty batch.
fn first_intersecting<I>(flags: I) -> Option<bool>
where
    I: IntoIterator<Item = bool>,
{
    flags.into_iter().next()
}

pub fn attach<F>(target: Element, options: &ObserverOptions, mut on_change: F) -> Result<ObserverHandle, ObserverError>
where
    F: FnMut(bool) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        let flags = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| entry.is_intersecting());
        if let Some(is_intersecting) = first_intersecting(flags) {
            on_change(is_intersecting);
        }
    }) as Box<dyn FnMut(Array)>);

    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options.to_init(),
    )?;

    Ok(ObserverHandle::start(observer, target, Some(callback)))
}

/// Applies the outcome of attaching to the tracked state. When tracking is
/// unavailable the section is shown rather than left hidden for good.
fn settle_attach<H>(attached: Result<H, ObserverError>, state: &mut VisibilityState) -> Option<H> {
    match attached {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Viewport tracking unavailable, showing section: {}", e);
            state.on_intersection(true);
            None
        }
    }
}

/// Tracks the element behind the returned `NodeRef` and reports its
/// current reveal state.
#[hook]
pub fn use_visibility(overrides: ObserverOverrides) -> (NodeRef, RevealState) {
    let node = use_node_ref();
    let visibility = use_state(VisibilityState::default);

    {
        let node = node.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |_| {
                let options = ObserverOptions::merged(&overrides);

                let attached = node
                    .cast::<Element>()
                    .ok_or(ObserverError::NotMounted)
                    .and_then(|target| {
                        let visibility = visibility.clone();
                        attach(target, &options, move |is_intersecting| {
                            let mut next = *visibility;
                            next.on_intersection(is_intersecting);
                            visibility.set(next);
                        })
                    });

                let mut next = *visibility;
                let handle = settle_attach(attached, &mut next);
                if next != *visibility {
                    visibility.set(next);
                }

                move || {
                    // Section unmounted
                    drop(handle);
                }
            },
            (),
        );
    }

    (node, visibility.reveal_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_hidden() {
        let state = VisibilityState::default();
        assert_eq!(state.reveal_state(), RevealState::Hidden);
    }

    #[test]
    fn follows_every_notification_without_latching() {
        let mut state = VisibilityState::default();

        state.on_intersection(true);
        assert_eq!(state.reveal_state(), RevealState::Revealed);

        state.on_intersection(false);
        assert_eq!(state.reveal_state(), RevealState::Hidden);

        state.on_intersection(true);
        assert_eq!(state.reveal_state(), RevealState::Revealed);
    }

    #[test]
    fn repeated_notifications_are_stable() {
        let mut state = VisibilityState::default();
        state.on_intersection(true);
        state.on_intersection(true);
        assert_eq!(state.reveal_state(), RevealState::Revealed);
    }

    #[test]
    fn default_options() {
        let options = ObserverOptions::merged(&ObserverOverrides::default());
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "50px");
    }

    #[test]
    fn overrides_win_per_key() {
        let options = ObserverOptions::merged(&ObserverOverrides {
            threshold: Some(0.5),
            root_margin: None,
        });
        assert_eq!(options.threshold, 0.5);
        assert_eq!(options.root_margin, "50px");

        let options = ObserverOptions::merged(&ObserverOverrides {
            threshold: None,
            root_margin: Some("0px 0px -50px 0px".to_string()),
        });
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }

    #[derive(Default)]
    struct CountingBackend {
        calls: RefCell<Vec<(&'static str, u32)>>,
    }

    impl ObserverBackend for Rc<CountingBackend> {
        type Target = u32;

        fn observe(&self, target: &u32) {
            self.calls.borrow_mut().push(("observe", *target));
        }

        fn unobserve(&self, target: &u32) {
            self.calls.borrow_mut().push(("unobserve", *target));
        }

        fn disconnect(&self) {
            self.calls.borrow_mut().push(("disconnect", 0));
        }
    }

    #[test]
    fn handle_observes_on_start_and_releases_once_on_drop() {
        let backend = Rc::new(CountingBackend::default());
        let handle = ObserverHandle::start(backend.clone(), 7, None);
        assert_eq!(*backend.calls.borrow(), vec![("observe", 7)]);

        drop(handle);
        assert_eq!(
            *backend.calls.borrow(),
            vec![("observe", 7), ("unobserve", 7), ("disconnect", 0)]
        );
    }

    #[test]
    fn early_exit_still_releases() {
        let backend = Rc::new(CountingBackend::default());
        let run = |fail: bool| -> Result<(), ()> {
            let _handle = ObserverHandle::start(backend.clone(), 1, None);
            if fail {
                return Err(());
            }
            Ok(())
        };
        assert!(run(true).is_err());

        let released = backend
            .calls
            .borrow()
            .iter()
            .filter(|(call, _)| *call == "unobserve")
            .count();
        assert_eq!(released, 1);
    }

    #[test]
    fn first_entry_flag_is_forwarded_verbatim() {
        assert_eq!(first_intersecting([true]), Some(true));
        assert_eq!(first_intersecting([false]), Some(false));
        assert_eq!(first_intersecting([false, true]), Some(false));
        assert_eq!(first_intersecting(std::iter::empty()), None);
    }

    #[test]
    fn failed_attach_reveals_the_section() {
        let mut state = VisibilityState::default();
        let handle: Option<()> = settle_attach(Err(ObserverError::NotMounted), &mut state);
        assert!(handle.is_none());
        assert_eq!(state.reveal_state(), RevealState::Revealed);
    }

    #[test]
    fn successful_attach_leaves_state_to_notifications() {
        let mut state = VisibilityState::default();
        let handle = settle_attach(Ok(42), &mut state);
        assert_eq!(handle, Some(42));
        assert_eq!(state.reveal_state(), RevealState::Hidden);
    }

    #[test]
    fn reveal_classes() {
        assert_eq!(RevealState::from_revealed(false).class(), "reveal-hidden");
        assert_eq!(RevealState::from_revealed(true).class(), "reveal-shown");
    }
}
