//! Directors are a read-only `{id, name, phone}` projection; new directors
//! are created through the staff wizard with the Director role.

use leptos::prelude::*;
use records::endpoints::Resource;
use records::grid::{CellValue, ColumnSpec, TableRow};
use records::types::Director;

use super::shared::{ListFrame, searched_rows, use_list};
use crate::components::data_table::DataTable;
use crate::components::layout::Layout;
use crate::state::list::ListState;

const DIRECTOR_COLUMNS: &[ColumnSpec] = &[ColumnSpec::new("name", "Name"), ColumnSpec::new("phone", "Phone")];

fn director_row(director: &Director) -> TableRow {
    TableRow {
        id: director.id.clone(),
        cells: vec![CellValue::text(director.name.as_str()), CellValue::opt_text(director.phone.as_deref())],
    }
}

#[component]
pub fn DirectorsPage() -> impl IntoView {
    let list = use_list::<Director, _>(|| Resource::Directors.path().to_owned());
    let rows = searched_rows(list, director_row);

    view! {
        <Layout title="Directors">
            <div class="page-actions">
                <a class="btn btn--primary" href="/directors/new">"+ Add Director"</a>
            </div>
            <ListFrame
                loading=Signal::derive(move || list.with(|l| l.loading))
                error=Signal::derive(move || list.with(|l| l.error.clone()))
                on_retry=Callback::new(move |()| list.update(ListState::bump))
            >
                <DataTable columns=DIRECTOR_COLUMNS rows=rows/>
            </ListFrame>
        </Layout>
    }
}
