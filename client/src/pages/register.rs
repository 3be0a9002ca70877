//! Registration page; a successful register signs the user in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::FieldErrors;
use records::forms::RegisterForm;

use crate::components::error_panel::SubmitError;
use crate::components::form_field::{TextField, bind};
use crate::state::auth::AuthState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(RegisterForm::validate) {
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
                match crate::net::api::register(&payload).await {
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
            let _ = (payload, &navigate, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <TextField label="Name" field="name" binding=bind(form, |f| &f.name, |f| &mut f.name) errors=errors/>
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
                    <TextField
                        label="Confirm password"
                        field="confirmPassword"
                        input_type="password"
                        binding=bind(form, |f| &f.confirm_password, |f| &mut f.confirm_password)
                        errors=errors
                    />
                    <SubmitError error=submit_error/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
