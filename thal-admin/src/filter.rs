//! Client-side list filters
//!
//! Pure projections over cached lists. They never mutate the source and
//! never trigger a fetch.

use std::fmt;

use shared::{MenuItem, Order, OrderStatus};

/// Label of the "no status filter" choice
pub const ALL_STATUS: &str = "All Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Next choice in dropdown order
    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(OrderStatus::Pending),
            StatusFilter::Only(OrderStatus::Pending) => StatusFilter::Only(OrderStatus::Preparing),
            StatusFilter::Only(OrderStatus::Preparing) => StatusFilter::Only(OrderStatus::Completed),
            StatusFilter::Only(OrderStatus::Completed | OrderStatus::Unknown) => StatusFilter::All,
        }
    }

    /// Unrecognised statuses only ever show under `All`
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status.is_known() && *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL_STATUS),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Lower-cased search term, or `None` when the term filters nothing
fn needle(term: &str) -> Option<String> {
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// Orders matching a status filter and an optional search term
///
/// The term is matched case-insensitively against the customer name and
/// the order id.
pub fn filter_orders<'a>(orders: &'a [Order], status: StatusFilter, term: &str) -> Vec<&'a Order> {
    let needle = needle(term);
    if status == StatusFilter::All && needle.is_none() {
        return orders.iter().collect();
    }

    orders
        .iter()
        .filter(|o| status.matches(o.status))
        .filter(|o| match &needle {
            None => true,
            Some(n) => {
                o.id.to_lowercase().contains(n)
                    || o.name.as_deref().is_some_and(|name| name.to_lowercase().contains(n))
            }
        })
        .collect()
}

/// Menu items whose name or category contains the term, ignoring case
pub fn filter_menu<'a>(items: &'a [MenuItem], term: &str) -> Vec<&'a MenuItem> {
    let Some(needle) = needle(term) else {
        return items.iter().collect();
    };

    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: &str, name: Option<&str>, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            name: name.map(str::to_string),
            items: Vec::new(),
            total: 100.0,
            status,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn item(name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: String::new(),
            price: 150.0,
            category: category.to_string(),
            image: None,
        }
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("a1", Some("Ravi Patel"), OrderStatus::Pending),
            order("b2", Some("Asha Shah"), OrderStatus::Completed),
            order("c3", None, OrderStatus::Preparing),
            order("d4", Some("Kiran Rao"), OrderStatus::Pending),
        ]
    }

    #[test]
    fn test_all_status_returns_everything() {
        let orders = sample_orders();
        let filtered = filter_orders(&orders, StatusFilter::All, "");
        assert_eq!(filtered.len(), orders.len());
    }

    #[test]
    fn test_status_equality() {
        let orders = sample_orders();
        for status in OrderStatus::ALL {
            let filtered = filter_orders(&orders, StatusFilter::Only(status), "");
            let expected: Vec<&Order> = orders.iter().filter(|o| o.status == status).collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn test_order_search_combines_with_status() {
        let orders = sample_orders();
        let filtered = filter_orders(&orders, StatusFilter::Only(OrderStatus::Pending), "RAO");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "d4");

        let by_id = filter_orders(&orders, StatusFilter::All, "c3");
        assert_eq!(by_id.len(), 1);
        assert!(by_id[0].name.is_none());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(StatusFilter::All.to_string(), ALL_STATUS);
        assert_eq!(StatusFilter::Only(OrderStatus::Preparing).to_string(), "Preparing");
    }

    #[test]
    fn test_unknown_status_only_under_all() {
        let mut orders = sample_orders();
        orders.push(order("e5", Some("Dev Joshi"), OrderStatus::Unknown));

        assert_eq!(filter_orders(&orders, StatusFilter::All, "").len(), 5);
        for status in OrderStatus::ALL {
            let filtered = filter_orders(&orders, StatusFilter::Only(status), "");
            assert!(filtered.iter().all(|o| o.id != "e5"));
        }
        assert!(filter_orders(&orders, StatusFilter::Only(OrderStatus::Unknown), "").is_empty());
        assert_eq!(StatusFilter::Only(OrderStatus::Unknown).cycle(), StatusFilter::All);
    }

    #[test]
    fn test_cycle_visits_every_choice() {
        let mut filter = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = filter.cycle();
            seen.push(filter);
        }
        assert_eq!(seen.last(), Some(&StatusFilter::All));
        assert!(seen.contains(&StatusFilter::Only(OrderStatus::Completed)));
    }

    #[test]
    fn test_menu_search_matches_name_or_category() {
        let items = vec![
            item("Paneer Tikka", "Snacks"),
            item("Veg Pulao", "Rice"),
            item("Gulab Jamun", "Desserts"),
        ];

        let hits = filter_menu(&items, "pan");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Paneer Tikka");

        assert!(filter_menu(&items, "zzz").is_empty());

        let by_category = filter_menu(&items, "RICE");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].name, "Veg Pulao");
    }

    #[test]
    fn test_empty_term_returns_all_items() {
        let items = vec![item("Paneer Tikka", "Snacks"), item("Chai", "Drinks")];
        assert_eq!(filter_menu(&items, "").len(), 2);
        // a blank is still a substring to look for
        assert_eq!(filter_menu(&items, " ").len(), 1);
    }
}
