//! Modal Component
//!
//! Generic show/hide overlay. Backdrop click or Escape asks to close.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.try_get_untracked().unwrap_or(false) {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal-content"
                    role="dialog"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
