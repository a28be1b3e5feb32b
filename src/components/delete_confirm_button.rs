//! Delete Confirm Button Component
//!
//! Guards a food card's delete flow behind a second click.

use leptos::prelude::*;

/// Delete control for one food card.
///
/// The first click only arms the button; `on_confirm` runs after the user
/// confirms, and the control disarms again either way.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    /// `data-testid` of the unarmed button
    #[prop(into)] test_id: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let disarm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button
                    type="button"
                    class=button_class.clone()
                    title="Delete dish"
                    data-testid=test_id.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Remove this dish?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        disarm(ev);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="cancel-btn" on:click=disarm>
                    "No"
                </button>
            </span>
        </Show>
    }
}
