//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use records::types::EmployeeRole;

use crate::components::toast::ToastStack;
use crate::config::API_BASE_META;
use crate::pages::{
    attendance::AttendancePage, class_count::ClassCountPage, dashboard::DashboardPage, directors::DirectorsPage,
    earnings::EarningsPage, employee_form::EmployeeFormPage, employees::EmployeesPage, employees::TeachersPage,
    expenses::ExpensesPage, login::LoginPage, register::RegisterPage, running_month::RunningMonthPage,
    student_form::StudentFormPage, students::StudentsPage, timing::TimingPage,
};
use crate::state::{auth::AuthState, search::SearchState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration. `api_base_url` is
/// published as a meta tag for the browser fetch layer.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, search, and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let search = RwSignal::new(SearchState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(search);
    provide_context(ui);

    // Restore the persisted session and theme once the browser is available.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let restored = AuthState::restored(crate::util::session::load_access_token(), crate::util::session::load_user());
            auth.set(restored);
            let dark = crate::util::dark_mode::read_preference();
            ui.update(|u| u.dark_mode = dark);
        }
    });
    Effect::new(move || crate::util::dark_mode::apply(ui.with(|u| u.dark_mode)));

    view! {
        <Stylesheet id="leptos" href="/pkg/school-admin.css"/>
        <Title text="School Admin"/>
        <ToastStack/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>

                <Route path=StaticSegment("students") view=StudentsPage/>
                <Route path=(StaticSegment("students"), StaticSegment("new")) view=StudentFormPage/>
                <Route path=(StaticSegment("students"), ParamSegment("id"), StaticSegment("edit")) view=StudentFormPage/>

                <Route path=StaticSegment("employees") view=EmployeesPage/>
                <Route
                    path=(StaticSegment("employees"), StaticSegment("new"))
                    view=|| view! { <EmployeeFormPage role=EmployeeRole::Employee/> }
                />
                <Route
                    path=(StaticSegment("employees"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| view! { <EmployeeFormPage role=EmployeeRole::Employee/> }
                />

                <Route path=StaticSegment("teachers") view=TeachersPage/>
                <Route
                    path=(StaticSegment("teachers"), StaticSegment("new"))
                    view=|| view! { <EmployeeFormPage role=EmployeeRole::Teacher/> }
                />
                <Route
                    path=(StaticSegment("teachers"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| view! { <EmployeeFormPage role=EmployeeRole::Teacher/> }
                />

                <Route path=StaticSegment("directors") view=DirectorsPage/>
                <Route
                    path=(StaticSegment("directors"), StaticSegment("new"))
                    view=|| view! { <EmployeeFormPage role=EmployeeRole::Director/> }
                />

                <Route path=StaticSegment("attendance") view=AttendancePage/>
                <Route path=StaticSegment("expenses") view=ExpensesPage/>
                <Route path=StaticSegment("earnings") view=EarningsPage/>
                <Route path=StaticSegment("class-count") view=ClassCountPage/>
                <Route path=(StaticSegment("class-count"), StaticSegment("running-month")) view=RunningMonthPage/>
                <Route path=StaticSegment("management-timing") view=TimingPage/>
            </Routes>
        </Router>
    }
}
