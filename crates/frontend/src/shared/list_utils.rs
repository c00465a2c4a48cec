//! Shared state and helpers of the list pages (filter panel, sortable columns).

use contracts::domain::common::{FilterForm, RecordFilter, SortState};
use leptos::prelude::*;

/// A text box of the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Status,
    Category,
    Priority,
    DateFrom,
    DateTo,
    Amount,
}

impl FilterField {
    fn get(self, form: &FilterForm) -> &String {
        match self {
            FilterField::Search => &form.search,
            FilterField::Status => &form.status,
            FilterField::Category => &form.category,
            FilterField::Priority => &form.priority,
            FilterField::DateFrom => &form.date_from,
            FilterField::DateTo => &form.date_to,
            FilterField::Amount => &form.amount,
        }
    }

    fn get_mut(self, form: &mut FilterForm) -> &mut String {
        match self {
            FilterField::Search => &mut form.search,
            FilterField::Status => &mut form.status,
            FilterField::Category => &mut form.category,
            FilterField::Priority => &mut form.priority,
            FilterField::DateFrom => &mut form.date_from,
            FilterField::DateTo => &mut form.date_to,
            FilterField::Amount => &mut form.amount,
        }
    }
}

/// Filter to apply for `form`: while the input does not parse, the last
/// valid filter stays in effect.
pub fn resolve_filter(form: &FilterForm, previous: Option<&RecordFilter>) -> RecordFilter {
    match form.to_filter() {
        Ok(filter) => filter,
        Err(_) => previous.cloned().unwrap_or_default(),
    }
}

/// Filter panel input, parsed filter and sort column of one list page
#[derive(Clone, Copy)]
pub struct ListControls {
    pub form: RwSignal<FilterForm>,
    pub sort: RwSignal<SortState>,
    pub filter: Memo<RecordFilter>,
    pub filter_error: Memo<Option<String>>,
    pub expanded: RwSignal<bool>,
}

impl ListControls {
    pub fn new(initial_sort: SortState) -> Self {
        let form = RwSignal::new(FilterForm::default());
        let filter = Memo::new(move |previous: Option<&RecordFilter>| {
            form.with(|f| resolve_filter(f, previous))
        });
        let filter_error =
            Memo::new(move |_| form.with(|f| f.to_filter().err().map(|e| e.to_string())));

        Self {
            form,
            sort: RwSignal::new(initial_sort),
            filter,
            filter_error,
            expanded: RwSignal::new(false),
        }
    }

    pub fn value(&self, field: FilterField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| field.get(f).clone()))
    }

    pub fn setter(&self, field: FilterField) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| *field.get_mut(f) = value))
    }

    pub fn active_count(&self) -> Signal<usize> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|f| f.active_count()))
    }

    pub fn clear(&self) {
        self.form.update(|f| f.clear());
    }

    pub fn toggle_sort(&self, field: &str) {
        self.sort.update(|s| s.toggle(field));
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        if sort.ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors_match() {
        let mut form = FilterForm::default();
        for (i, field) in [
            FilterField::Search,
            FilterField::Status,
            FilterField::Category,
            FilterField::Priority,
            FilterField::DateFrom,
            FilterField::DateTo,
            FilterField::Amount,
        ]
        .into_iter()
        .enumerate()
        {
            *field.get_mut(&mut form) = i.to_string();
            assert_eq!(field.get(&form), &i.to_string());
        }
        assert_eq!(form.search, "0");
        assert_eq!(form.amount, "6");
    }

    #[test]
    fn test_invalid_input_keeps_previous_filter() {
        let valid = FilterForm {
            status: "closed".into(),
            ..Default::default()
        };
        let previous = resolve_filter(&valid, None);
        assert_eq!(previous.status, "closed");

        let invalid = FilterForm {
            status: "closed".into(),
            date_from: "not a date".into(),
            ..Default::default()
        };
        assert_eq!(resolve_filter(&invalid, Some(&previous)), previous);
        assert_eq!(resolve_filter(&invalid, None), RecordFilter::default());
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::new("amount", false);
        assert_eq!(get_sort_indicator(&sort, "amount"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "id"), " ⇅");
        assert_eq!(get_sort_class(&SortState::unsorted(), "id"), "table__sort-indicator");
    }
}
