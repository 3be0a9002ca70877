//! Page-level error block.

use leptos::prelude::*;

/// Shows a fetch failure. The Retry button only renders when `on_retry` is
/// given; screens without a retry affordance omit it.
#[component]
pub fn ErrorPanel(#[prop(into)] message: Signal<String>, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <p class="error-panel__title">"Something went wrong"</p>
            <p class="error-panel__message">{move || message.get()}</p>
            {on_retry
                .map(|cb| {
                    view! {
                        <button class="btn error-panel__retry" on:click=move |_| cb.run(())>
                            "Retry"
                        </button>
                    }
                })}
        </div>
    }
}

/// Dismissible inline error for failed submissions; entered data is kept.
#[component]
pub fn SubmitError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="submit-error" role="alert">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="btn btn--small" type="button" title="Dismiss" on:click=move |_| error.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
