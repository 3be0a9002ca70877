//! Login page: email + password against `/auth/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::FieldErrors;
use records::forms::LoginForm;

use crate::components::error_panel::SubmitError;
use crate::components::form_field::{TextField, bind};
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(LoginForm::validate) {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submit_error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&payload).await {
                    Ok(tokens) => {
                        crate::util::session::save_tokens(&tokens);
                        auth.set(AuthState::signed_in(&tokens));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => submit_error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"School Admin"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        field="email"
                        input_type="email"
                        binding=bind(form, |f| &f.email, |f| &mut f.email)
                        errors=errors
                    />
                    <TextField
                        label="Password"
                        field="password"
                        input_type="password"
                        binding=bind(form, |f| &f.password, |f| &mut f.password)
                        errors=errors
                    />
                    <SubmitError error=submit_error/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "No account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
