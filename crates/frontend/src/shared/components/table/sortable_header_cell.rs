//! Sortable column header.
//!
//! ```text
//! <SortableHeaderCell label="Amount" field="amount" sort=controls.sort />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::common::SortState;
use leptos::prelude::*;
use thaw::*;

/// Header cell that toggles `sort` on click: same column flips the
/// direction, another column starts ascending.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    field: &'static str,
    sort: RwSignal<SortState>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| sort.update(|s| s.toggle(field))
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, field))>
                    {move || sort.with(|s| get_sort_indicator(s, field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
