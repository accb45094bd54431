//! List helpers shared by the card lists and tables (search, sort).

use std::cmp::Ordering;

/// Types that can be matched against a free-text search box.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types sortable by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive filter; an empty query keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    let lowered = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&lowered))
        .collect()
}

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

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        "▲"
    } else {
        "▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Row {
        name: String,
        price: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter) || self.price.to_string().contains(filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "price" => self.price.partial_cmp(&other.price).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Clutch Plate".into(), price: 1800.0 },
            Row { name: "alternator".into(), price: 2500.0 },
            Row { name: "Brake Pad".into(), price: 950.0 },
        ]
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filtered = filter_list(rows(), "ALT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "alternator");
    }

    #[test]
    fn filter_matches_prices_too() {
        assert_eq!(filter_list(rows(), "950").len(), 1);
    }

    #[test]
    fn empty_filter_keeps_all() {
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn sort_by_field_and_direction() {
        let mut items = rows();
        sort_list(&mut items, "price", true);
        assert_eq!(items[0].name, "Brake Pad");
        sort_list(&mut items, "price", false);
        assert_eq!(items[0].name, "alternator");
        sort_list(&mut items, "name", true);
        assert_eq!(items[0].name, "alternator");
    }

    #[test]
    fn indicator_only_on_active_column() {
        assert_eq!(get_sort_indicator("date", "date", true), "▲");
        assert_eq!(get_sort_indicator("date", "date", false), "▼");
        assert_eq!(get_sort_indicator("date", "status", true), "");
    }
}
