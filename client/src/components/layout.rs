//! Authenticated page chrome: navigation, global search, theme and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside `Layout`. It installs the
//! unauthenticated redirect, owns the only writer of the search context, and
//! clears persisted tokens on logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::search::SearchState;
use crate::state::ui::UiState;

/// Sidebar entries: `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 11] = [
    ("/", "Dashboard"),
    ("/students", "Students"),
    ("/employees", "Employees"),
    ("/teachers", "Teachers"),
    ("/directors", "Directors"),
    ("/attendance", "Attendance"),
    ("/expenses", "Expenses"),
    ("/earnings", "Earnings"),
    ("/class-count", "Class Count"),
    ("/class-count/running-month", "Running Month"),
    ("/management-timing", "Management Timing"),
];

#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate.clone());

    let on_logout = move |_| {
        crate::util::session::clear_tokens();
        auth.set(AuthState::signed_out());
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <nav class="layout__nav">
                <span class="layout__brand">"School Admin"</span>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="layout__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="layout__body">
                <header class="layout__header toolbar">
                    <h1 class="layout__title">{title}</h1>
                    <span class="toolbar__spacer"></span>
                    <input
                        class="layout__search"
                        type="search"
                        placeholder="Search..."
                        prop:value=move || search.with(|s| s.term.clone())
                        on:input=move |ev| search.update(|s| s.term = event_target_value(&ev))
                    />
                    <button
                        class="btn toolbar__dark-toggle"
                        title="Toggle dark mode"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                    >
                        {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
                    </button>
                    <span class="toolbar__self">{move || auth.with(AuthState::display_name)}</span>
                    <button class="btn toolbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <Show when=move || !auth.with(AuthState::is_authenticated)>
                    <p class="layout__pending">
                        {move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}
                    </p>
                </Show>
                <main class="layout__main">{children()}</main>
            </div>
        </div>
    }
}
