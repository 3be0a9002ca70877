//! Step indicator for the employee/teacher wizard.

use leptos::prelude::*;
use records::forms::EmployeeStep;

#[component]
pub fn Stepper(#[prop(into)] current: Signal<EmployeeStep>) -> impl IntoView {
    view! {
        <ol class="stepper">
            {EmployeeStep::ALL
                .into_iter()
                .map(|step| {
                    let class = move || {
                        let at = current.get().index();
                        if step.index() == at {
                            "stepper__step stepper__step--active"
                        } else if step.index() < at {
                            "stepper__step stepper__step--done"
                        } else {
                            "stepper__step"
                        }
                    };
                    view! {
                        <li class=class>
                            <span class="stepper__index">{step.index() + 1}</span>
                            <span class="stepper__title">{step.title()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
