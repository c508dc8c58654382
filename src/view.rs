use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};
use yew::prelude::*;

const THANK_YOU_TOKEN: &str = "obrigado";

/// Which page is on screen. Always derived from the location fragment, so
/// back/forward buttons and explicit navigation go through the same path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    ThankYou,
}

impl View {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            THANK_YOU_TOKEN => View::ThankYou,
            _ => View::Landing,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            View::Landing => "",
            View::ThankYou => THANK_YOU_TOKEN,
        }
    }
}

pub fn current_view() -> View {
    window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| View::from_hash(&hash))
        .unwrap_or(View::Landing)
}

/// Moves to `view` by rewriting the fragment. The `hashchange` listener
/// picks the change up and re-renders.
pub fn navigate(view: View) {
    let Some(window) = window() else { return };
    info!("Navigating to {:?}", view);
    if let Err(e) = window.location().set_hash(view.token()) {
        warn!("Failed to set location hash: {:?}", e);
    }
}

/// A live `hashchange` subscription, removed when dropped.
pub struct HashListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl HashListener {
    pub fn subscribe(on_change: impl Fn(View) + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(move || {
            on_change(current_view());
        }) as Box<dyn FnMut()>);

        if let Err(e) = window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref()) {
            warn!("Failed to subscribe to hashchange: {:?}", e);
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for HashListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("hashchange", self.callback.as_ref().unchecked_ref());
    }
}

/// Current view, kept in sync with the location fragment for the lifetime
/// of the calling component.
#[hook]
pub fn use_view() -> UseStateHandle<View> {
    let view = use_state(current_view);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let listener = HashListener::subscribe(move |next| view.set(next));
                move || drop(listener)
            },
            (),
        );
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thank_you_token_with_or_without_hash() {
        assert_eq!(View::from_hash("#obrigado"), View::ThankYou);
        assert_eq!(View::from_hash("obrigado"), View::ThankYou);
    }

    #[test]
    fn anything_else_is_the_landing_page() {
        for hash in ["", "#", "#planos", "#final-cta", "#Obrigado"] {
            assert_eq!(View::from_hash(hash), View::Landing, "hash {:?}", hash);
        }
    }

    #[test]
    fn toggling_the_token_toggles_the_view() {
        let seen: Vec<View> = [View::ThankYou, View::Landing, View::ThankYou]
            .iter()
            .map(|target| View::from_hash(&format!("#{}", target.token())))
            .collect();

        assert_eq!(seen, vec![View::ThankYou, View::Landing, View::ThankYou]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // hashchange is dispatched asynchronously after set_hash
    async fn settle() {
        TimeoutFuture::new(50).await;
    }

    #[wasm_bindgen_test]
    async fn navigate_round_trips_through_the_fragment() {
        navigate(View::Landing);
        settle().await;
        assert_eq!(current_view(), View::Landing);

        navigate(View::ThankYou);
        assert_eq!(current_view(), View::ThankYou);

        navigate(View::Landing);
        assert_eq!(current_view(), View::Landing);
    }

    #[wasm_bindgen_test]
    async fn listener_follows_hash_until_dropped() {
        navigate(View::Landing);
        settle().await;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener = {
            let seen = seen.clone();
            HashListener::subscribe(move |view| seen.borrow_mut().push(view))
        };
        assert!(listener.is_some());

        navigate(View::ThankYou);
        settle().await;
        navigate(View::Landing);
        settle().await;
        assert_eq!(*seen.borrow(), vec![View::ThankYou, View::Landing]);

        drop(listener);
        navigate(View::ThankYou);
        settle().await;
        assert_eq!(seen.borrow().len(), 2);

        navigate(View::Landing);
        settle().await;
    }
}
