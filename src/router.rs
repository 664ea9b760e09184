//! History Router
//!
//! Tracks the current `Route` in a signal, pushes history entries on
//! navigation and follows the browser's back/forward buttons.

use leptos::ev;
use leptos::prelude::*;

use market_core::Route;

/// Router handle provided via context
#[derive(Clone, Copy)]
pub struct Router {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl Router {
    /// Create the router and start listening to `popstate`
    pub fn new() -> Self {
        let (route, set_route) = signal(Route::parse(&current_path()));
        let _ = window_event_listener(ev::popstate, move |_| {
            set_route.set(Route::parse(&current_path()));
        });
        Self { route, set_route }
    }

    /// Push `path` onto the history stack and render its route
    pub fn navigate(&self, path: &str) {
        web_sys::console::log_1(&format!("[Router] Navigate to {}", path).into());
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)));
        if let Some(Err(e)) = pushed {
            web_sys::console::warn_1(&format!("[Router] pushState failed: {:?}", e).into());
        }
        self.set_route.set(Route::parse(path));
    }
}

pub fn use_router() -> Router {
    expect_context::<Router>()
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Primary-button click with no modifier keys. Anything else (new tab,
/// new window, download) is left to the browser.
fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// In-app anchor that navigates without a page reload. `active` adds the
/// `active` class while it holds.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] active: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = href.clone();
    view! {
        <a
            href=href
            class=class
            class:active=move || active.is_some_and(|a| a.get())
            on:click=move |ev: web_sys::MouseEvent| {
                if !is_plain_click(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key(), ev.alt_key()) {
                    return;
                }
                ev.prevent_default();
                router.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_click() {
        assert!(is_plain_click(0, false, false, false, false));
        assert!(!is_plain_click(0, true, false, false, false));
        assert!(!is_plain_click(0, false, true, false, false));
        assert!(!is_plain_click(0, false, false, true, false));
        assert!(!is_plain_click(0, false, false, false, true));
        assert!(!is_plain_click(1, false, false, false, false));
    }
}
