use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Types that can be sorted by a named column
pub trait Sortable {
    /// Compare two objects by the given field; unknown fields compare equal
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Single-column sort state of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    /// No column selected: rows keep the order they were given in
    pub fn unsorted() -> Self {
        Self::new(String::new(), true)
    }

    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
    }

    /// Header click: same column flips the direction, a new column starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    /// Sorted copy of `items`; the input is never reordered
    pub fn sorted<T: Sortable + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        if self.is_active() {
            sort_list(&mut copy, &self.field, self.ascending);
        }
        copy
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::unsorted()
    }
}

/// Stable sort of a list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// `None` sorts before any value
pub fn cmp_opt<T: PartialOrd>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        price: f64,
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "price" => cmp_f64(self.price, other.price),
                _ => Ordering::Equal,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "b", price: 2.0 },
            Item { name: "a", price: 2.0 },
            Item { name: "c", price: 1.0 },
        ]
    }

    #[test]
    fn test_toggle_cycles_direction() {
        let mut sort = SortState::unsorted();
        sort.toggle("price");
        assert_eq!(sort, SortState::new("price", true));
        sort.toggle("price");
        assert!(!sort.ascending);
        sort.toggle("name");
        assert_eq!(sort, SortState::new("name", true));
    }

    #[test]
    fn test_toggling_twice_restores_order() {
        let source = items();
        let mut sort = SortState::unsorted();
        sort.toggle("price");
        let first = sort.sorted(&source);
        sort.toggle("price");
        let reversed = sort.sorted(&source);
        sort.toggle("price");
        let again = sort.sorted(&source);

        assert_eq!(first, again);
        assert_ne!(first, reversed);
        // stable: equal prices keep their source order
        assert_eq!(first.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_unsorted_keeps_source_order() {
        assert_eq!(SortState::unsorted().sorted(&items()), items());
    }

    #[test]
    fn test_cmp_opt_puts_none_first() {
        assert_eq!(cmp_opt(&None, &Some(1)), Ordering::Less);
        assert_eq!(cmp_opt(&Some(2), &Some(1)), Ordering::Greater);
    }
}
