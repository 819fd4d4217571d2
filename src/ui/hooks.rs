use std::rc::Rc;

use dioxus::document::{self, Document};
use dioxus::prelude::*;
use tracing::debug;
use uuid::Uuid;

/// A window scroll listener registered in the webview. Dropping the
/// subscription removes the listener.
struct ScrollSubscription {
    key: String,
    document: Rc<dyn Document>,
}

impl ScrollSubscription {
    fn new() -> Self {
        Self {
            key: Uuid::new_v4().simple().to_string(),
            document: document::document(),
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        debug!(key = %self.key, "removing scroll listener");
        let _ = self.document.eval(unsubscribe_script(&self.key));
    }
}

fn subscribe_script(key: &str) -> String {
    format!(
        r#"
        const handler = () => dioxus.send(window.scrollY);
        (window.__portfolioScroll ??= new Map()).set("{key}", handler);
        window.addEventListener("scroll", handler, {{ passive: true }});
        handler();
        "#
    )
}

fn unsubscribe_script(key: &str) -> String {
    format!(
        r#"
        const handler = window.__portfolioScroll?.get("{key}");
        if (handler) {{
            window.removeEventListener("scroll", handler);
            window.__portfolioScroll.delete("{key}");
        }}
        "#
    )
}

/// Scroll the element with the given id into view, if the page has one.
pub fn scroll_to_anchor(anchor: &str) {
    // JSON string literals are valid JS string literals
    let id = match serde_json::to_string(anchor) {
        Ok(id) => id,
        Err(err) => {
            debug!(error = %err, "unusable anchor");
            return;
        }
    };
    debug!(%anchor, "scrolling to anchor");
    let _ = document::eval(&format!(
        "document.getElementById({id})?.scrollIntoView({{ behavior: \"smooth\" }});"
    ));
}

/// Vertical scroll offset of the window, updated on every scroll event for
/// as long as the calling component is mounted.
pub fn use_window_scroll() -> ReadOnlySignal<f64> {
    let mut offset = use_signal(|| 0.0);
    let subscription = use_hook(|| Rc::new(ScrollSubscription::new()));

    use_future(move || {
        let script = subscribe_script(&subscription.key);
        async move {
            debug!("adding scroll listener");
            let mut eval = document::eval(&script);
            while let Ok(y) = eval.recv::<f64>().await {
                offset.set(y);
            }
        }
    });

    offset.into()
}
