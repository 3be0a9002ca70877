//! Daily class-count entries: log a teacher's classes (plus proxies) and
//! browse the month's entries, optionally for one teacher.

#[cfg(test)]
#[path = "class_count_test.rs"]
mod class_count_test;

use leptos::prelude::*;
use records::endpoints::{self, Resource};
use records::filters::ColumnFilters;
use records::forms::{ClassCountForm, ProxyClassInput};
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::types::{ClassCountRecord, ClassRange, Employee, ProxyClass};
use records::{FieldErrors, RepeatGroup};

use super::shared::{ListFrame, delete_one, searched_rows, submit, use_list};
use crate::components::data_table::DataTable;
use crate::components::error_panel::SubmitError;
use crate::components::form_field::{CheckboxField, GroupAccess, SelectField, TextField, bind, bind_entry};
use crate::components::layout::Layout;
use crate::components::month_picker::MonthPicker;
use crate::state::list::ListState;
use crate::state::ui::UiState;

/// Filter id carrying the selected teacher alongside month/year.
const TEACHER_FILTER: &str = "teacher";

pub const CLASS_COUNT_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new("teacher", "Teacher"),
    ColumnSpec::new("date", "Date"),
    ColumnSpec::new("3-8", "3-8"),
    ColumnSpec::new("9-10", "9-10"),
    ColumnSpec::new("11-12", "11-12"),
    ColumnSpec::new("proxy", "Proxy"),
];

/// `9-10 ×2 for Rahim; 3-8 ×1 for Sumi`.
pub fn proxy_summary(proxies: &[ProxyClass]) -> String {
    proxies
        .iter()
        .map(|p| format!("{} ×{} for {}", p.class_range, p.count, p.covered_for))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn class_count_row(record: &ClassCountRecord) -> TableRow {
    let mut cells = vec![CellValue::text(record.teacher.name.as_str()), CellValue::Date(record.date.clone())];
    cells.extend(ClassRange::ALL.iter().map(|range| CellValue::Number(f64::from(record.class_count.get(*range)))));
    cells.push(CellValue::text(proxy_summary(&record.proxy_classes)));
    TableRow { id: record.id.clone(), cells }
}

fn proxies(form: &ClassCountForm) -> &RepeatGroup<ProxyClassInput> {
    &form.proxy_classes
}

fn proxies_mut(form: &mut ClassCountForm) -> &mut RepeatGroup<ProxyClassInput> {
    &mut form.proxy_classes
}

const PROXY_ROWS: GroupAccess<ClassCountForm, ProxyClassInput> = GroupAccess { group: proxies, group_mut: proxies_mut };

fn range_options() -> Vec<(String, String)> {
    ClassRange::ALL.iter().map(|r| (r.label().to_owned(), r.label().to_owned())).collect()
}

#[component]
pub fn ClassCountPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let fallback = crate::util::clock::current_month_year();
    let filters = RwSignal::new(ColumnFilters::for_month(fallback.0, fallback.1));
    let list = use_list::<ClassCountRecord, _>(move || {
        filters.with(|f| {
            let (month0, year) = f.month_year_or(fallback);
            endpoints::class_count_records(f.get(TEACHER_FILTER), month0, year)
        })
    });
    let teachers = use_list::<Employee, _>(|| Resource::Teachers.path().to_owned());
    let rows = searched_rows(list, class_count_row);
    let teacher_options: Signal<Vec<(String, String)>> =
        Signal::derive(move || teachers.with(|l| l.rows.iter().map(|t| (t.id.clone(), t.name.clone())).collect()));

    let form = RwSignal::new(ClassCountForm { date: crate::util::clock::today(), ..ClassCountForm::default() });
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let has_proxy = Signal::derive(move || form.with(|f| f.has_proxy));
    let proxy_keys = Memo::new(move |_| form.with(|f| f.proxy_classes.keys()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match form.with_untracked(ClassCountForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                submit(Resource::ClassCount, None, payload, busy, submit_error, move || {
                    form.update(|f| {
                        *f = ClassCountForm { teacher_id: f.teacher_id.clone(), date: f.date.clone(), ..ClassCountForm::default() };
                    });
                    list.update(ListState::bump);
                });
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <Layout title="Class Count">
            <form class="record-form" on:submit=on_submit>
                <SelectField
                    label="Teacher"
                    field="teacher"
                    binding=bind(form, |f| &f.teacher_id, |f| &mut f.teacher_id)
                    options=teacher_options
                    errors=errors
                />
                <TextField
                    label="Date"
                    field="date"
                    input_type="date"
                    binding=bind(form, |f| &f.date, |f| &mut f.date)
                    errors=errors
                />
                <div class="record-form__buckets">
                    <TextField
                        label="Class 3-8"
                        field="classCount.3-8"
                        input_type="number"
                        binding=bind(form, |f| &f.three_to_eight, |f| &mut f.three_to_eight)
                        errors=errors
                    />
                    <TextField
                        label="Class 9-10"
                        field="classCount.9-10"
                        input_type="number"
                        binding=bind(form, |f| &f.nine_to_ten, |f| &mut f.nine_to_ten)
                        errors=errors
                    />
                    <TextField
                        label="Class 11-12"
                        field="classCount.11-12"
                        input_type="number"
                        binding=bind(form, |f| &f.eleven_to_twelve, |f| &mut f.eleven_to_twelve)
                        errors=errors
                    />
                </div>
                <Show when=move || errors.with(|e| e.contains("classCount"))>
                    <p class="form-field__error">{move || errors.with(|e| e.get("classCount").unwrap_or_default().to_owned())}</p>
                </Show>
                <CheckboxField
                    label="Took proxy classes"
                    checked=has_proxy
                    on_change=Callback::new(move |checked: bool| form.update(|f| f.has_proxy = checked))
                />
                <Show when=move || has_proxy.get()>
                    <fieldset class="repeat-group">
                        <legend>"Proxy classes"</legend>
                        {move || {
                            proxy_keys
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, key)| {
                                    view! {
                                        <div class="repeat-group__row">
                                            <SelectField
                                                label="Class range"
                                                field=format!("proxyClasses.{idx}.classRange")
                                                binding=bind_entry(form, PROXY_ROWS, key, |r| &r.class_range, |r| &mut r.class_range)
                                                options=range_options()
                                                errors=errors
                                            />
                                            <TextField
                                                label="Count"
                                                field=format!("proxyClasses.{idx}.count")
                                                input_type="number"
                                                binding=bind_entry(form, PROXY_ROWS, key, |r| &r.count, |r| &mut r.count)
                                                errors=errors
                                            />
                                            <TextField
                                                label="Covered for"
                                                field=format!("proxyClasses.{idx}.coveredFor")
                                                binding=bind_entry(form, PROXY_ROWS, key, |r| &r.covered_for, |r| &mut r.covered_for)
                                                errors=errors
                                            />
                                            <Show when=move || form.with(|f| f.proxy_classes.can_remove())>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    type="button"
                                                    on:click=move |_| {
                                                        form.update(|f| {
                                                            f.proxy_classes.remove(key);
                                                        });
                                                    }
                                                >
                                                    "Remove"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <button
                            class="btn btn--small"
                            type="button"
                            on:click=move |_| {
                                form.update(|f| {
                                    f.proxy_classes.push(ProxyClassInput::default());
                                });
                            }
                        >
                            "+ Add proxy"
                        </button>
                    </fieldset>
                </Show>
                <SubmitError error=submit_error/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save Entry"
                </button>
            </form>

            <div class="page-actions">
                <MonthPicker filters=filters fallback=fallback/>
                <select
                    class="page-actions__filter"
                    aria-label="Teacher"
                    on:change=move |ev| filters.update(|f| f.set(TEACHER_FILTER, &event_target_value(&ev)))
                >
                    <option value="">"All teachers"</option>
                    {move || {
                        teacher_options
                            .get()
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable
                    columns=CLASS_COUNT_COLUMNS
                    rows=rows
                    on_delete=Callback::new(move |id: String| delete_one(Resource::ClassCount, id, list, ui))
                />
            </ListFrame>
        </Layout>
    }
}
