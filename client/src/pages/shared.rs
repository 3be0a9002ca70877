//! Orchestration shared by list and form pages: fetch-on-refresh, search
//! narrowing, single and bulk delete, and submit plumbing.

use std::collections::BTreeSet;

use leptos::prelude::*;
use records::bulk::Identified;
use records::endpoints::Resource;
use records::grid::TableRow;
use records::search::{Searchable, filter_items};
use serde::de::DeserializeOwned;

use crate::components::error_panel::ErrorPanel;
use crate::components::toast::notify;
use crate::state::auth::AuthState;
use crate::state::list::ListState;
use crate::state::search::SearchState;
use crate::state::ui::{ToastKind, UiState};

/// Loading and error chrome around a list body. `children` render once the
/// fetch has settled without error.
#[component]
pub fn ListFrame(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let failed = move || error.with(Option::is_some);
    view! {
        {move || {
            error
                .get()
                .map(|message| match on_retry {
                    Some(cb) => view! { <ErrorPanel message=message on_retry=cb/> }.into_any(),
                    None => view! { <ErrorPanel message=message/> }.into_any(),
                })
        }}
        <Show when=move || loading.get() && !failed()>
            <p class="loading">"Loading..."</p>
        </Show>
        <Show when=move || !loading.get() && !failed()>{children()}</Show>
    }
}

/// Create list state for a page and re-fetch `path()` on mount and whenever
/// the refresh counter (or anything `path` reads) changes.
pub fn use_list<T, P>(path: P) -> RwSignal<ListState<T>>
where
    T: DeserializeOwned + Identified + Send + Sync + 'static,
    P: Fn() -> String + Send + Sync + 'static,
{
    let auth = expect_context::<RwSignal<AuthState>>();
    let list = RwSignal::new(ListState::<T>::default());
    let refresh = Memo::new(move |_| list.with(|l| l.refresh));

    Effect::new(move || {
        refresh.track();
        let path = path();
        list.update(ListState::start_loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::get_json::<Vec<T>>(&path).await;
            if let Err(err) = &result {
                log::warn!("list fetch {path} failed: {err}");
                end_rejected_session(err, auth);
            }
            list.update(|l| l.finish(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (path, auth);
    });

    list
}

/// Drop a session the backend (or the fetch layer) refused. The layout's
/// unauthenticated redirect then sends the user to `/login`.
#[cfg(feature = "hydrate")]
fn end_rejected_session(err: &records::ApiError, auth: RwSignal<AuthState>) {
    if let Some(signed_out) = AuthState::after_failure(err) {
        crate::util::session::clear_tokens();
        auth.set(signed_out);
    }
}

/// Selection signal and toggle callbacks for a bulk-capable grid.
pub fn selection_handlers<T>(list: RwSignal<ListState<T>>) -> (Signal<BTreeSet<String>>, Callback<String>, Callback<Vec<String>>)
where
    T: Identified + Send + Sync + 'static,
{
    (
        Signal::derive(move || list.with(|l| l.selection.clone())),
        Callback::new(move |id: String| list.update(|l| l.toggle_selected(&id))),
        Callback::new(move |ids: Vec<String>| list.update(|l| l.toggle_all(&ids))),
    )
}

/// Rows narrowed by the global search term, then mapped for the grid.
pub fn searched_rows<T>(list: RwSignal<ListState<T>>, to_row: fn(&T) -> TableRow) -> Memo<Vec<TableRow>>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    let search = expect_context::<RwSignal<SearchState>>();
    Memo::new(move |_| {
        let term = search.with(|s| s.term.clone());
        list.with(|l| filter_items(&l.rows, &term).iter().map(to_row).collect())
    })
}

/// Delete one record, then re-fetch.
pub fn delete_one<T>(resource: Resource, id: String, list: RwSignal<ListState<T>>, ui: RwSignal<UiState>)
where
    T: Identified + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::remove(resource, &id).await {
            Ok(()) => {
                list.update(|l| {
                    l.remove_row(&id);
                    l.bump();
                });
                notify(ui, ToastKind::Success, "Deleted");
            }
            Err(err) => notify(ui, ToastKind::Error, format!("Delete failed: {err}")),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id, list);
        notify(ui, ToastKind::Error, "Delete is only available in the browser");
    }
}

/// Bulk-delete the current selection and reconcile locally without a
/// re-fetch.
pub fn delete_selected<T>(resource: Resource, list: RwSignal<ListState<T>>, ui: RwSignal<UiState>)
where
    T: Identified + Send + Sync + 'static,
{
    let requested = list.with_untracked(ListState::selected_ids);
    if requested.is_empty() {
        notify(ui, ToastKind::Info, "Select at least one row");
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::bulk_delete(resource, &requested).await {
            Ok(response) => {
                let Some(outcome) = list.try_update(|l| l.apply_bulk(&requested, &response)) else {
                    return;
                };
                let kind = if outcome.is_complete() { ToastKind::Success } else { ToastKind::Error };
                notify(ui, kind, outcome.summary());
                for failure in outcome.failed.iter().filter(|f| !f.message.is_empty()) {
                    notify(ui, ToastKind::Error, format!("{}: {}", failure.id, failure.message));
                }
            }
            Err(err) => notify(ui, ToastKind::Error, format!("Bulk delete failed: {err}")),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, requested);
        notify(ui, ToastKind::Error, "Delete is only available in the browser");
    }
}

/// Fetch one record for an edit form.
pub fn load_item<T, F>(resource: Resource, id: String, apply: F, error: RwSignal<Option<String>>)
where
    T: DeserializeOwned + 'static,
    F: FnOnce(T) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_json::<T>(&resource.item(&id)).await {
            Ok(item) => apply(item),
            Err(err) => error.set(Some(err.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id, apply, error);
    }
}

/// POST (no id) or PATCH (with id) a validated payload. On success toasts and
/// runs `done`; on failure sets `error` and leaves the form untouched.
pub fn submit<B, F>(resource: Resource, id: Option<String>, payload: B, busy: RwSignal<bool>, error: RwSignal<Option<String>>, done: F)
where
    B: serde::Serialize + 'static,
    F: FnOnce() + 'static,
{
    let ui = expect_context::<RwSignal<UiState>>();
    busy.set(true);
    error.set(None);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = match &id {
            Some(id) => crate::net::api::update(resource, id, &payload).await,
            None => crate::net::api::create(resource, &payload).await,
        };
        busy.set(false);
        match result {
            Ok(_) => {
                notify(ui, ToastKind::Success, if id.is_some() { "Saved changes" } else { "Created" });
                done();
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (resource, id, payload, done, ui);
        busy.set(false);
        error.set(Some("Saving is only available in the browser".to_owned()));
    }
}
