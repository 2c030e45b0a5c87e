//! CSS Class Helpers
//!
//! Pure mappings from view state to class strings and labels.

use todo_sync::Filter;

pub fn todo_class(completed: bool) -> &'static str {
    if completed {
        "todo completed"
    } else {
        "todo"
    }
}

/// The overlay covering a row while one of its requests is in flight
pub fn loader_class(active: bool) -> &'static str {
    if active {
        "modal overlay is-active"
    } else {
        "modal overlay"
    }
}

pub fn toggle_all_class(all_completed: bool) -> &'static str {
    if all_completed {
        "todoapp__toggle-all active"
    } else {
        "todoapp__toggle-all"
    }
}

pub fn filter_link_class(selected: bool) -> &'static str {
    if selected {
        "filter__link selected"
    } else {
        "filter__link"
    }
}

pub fn filter_href(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "#/",
        Filter::Active => "#/active",
        Filter::Completed => "#/completed",
    }
}

pub fn notification_class(hidden: bool) -> &'static str {
    if hidden {
        "notification is-danger is-light has-text-weight-normal hidden"
    } else {
        "notification is-danger is-light has-text-weight-normal"
    }
}

pub fn items_left_label(count: usize) -> String {
    format!("{} items left", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_classes() {
        assert_eq!(todo_class(true), "todo completed");
        assert_eq!(todo_class(false), "todo");
        assert!(loader_class(true).ends_with("is-active"));
        assert!(!loader_class(false).contains("is-active"));
    }

    #[test]
    fn test_filter_links() {
        let hrefs: Vec<_> = Filter::ALL.into_iter().map(filter_href).collect();
        assert_eq!(hrefs, vec!["#/", "#/active", "#/completed"]);
        assert_eq!(filter_link_class(true), "filter__link selected");
    }

    #[test]
    fn test_notification_hidden_when_no_notice() {
        assert!(notification_class(true).ends_with(" hidden"));
        assert!(!notification_class(false).contains("hidden"));
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(3), "3 items left");
    }
}
