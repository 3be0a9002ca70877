//! Toast stack rendered once by `App`, plus the `notify` helper pages call.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u32 = 4_000;

/// Queue a toast; it dismisses itself after a few seconds in the browser.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    #[cfg(feature = "hydrate")]
    log::info!("toast [{kind:?}] {message}");
    let Some(id) = ui.try_update(|u| u.push_toast(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        ui.update(|u| u.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || ui.get().toasts key=|toast| toast.id let:toast>
                <div class=toast.kind.class()>
                    <span>{toast.message.clone()}</span>
                    <button class="toast__close" title="Dismiss" on:click=move |_| ui.update(|u| u.dismiss_toast(toast.id))>
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
}
