//! Утилиты для заголовков сортируемых колонок.

use contracts::listing::SortOrder;

/// Стрелка-индикатор сортировки для заголовка колонки
pub fn sort_indicator(sort: Option<SortOrder>, field: &str) -> &'static str {
    match sort {
        Some(order) if order.field == field => {
            if order.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn sort_class(sort: Option<SortOrder>, field: &str) -> &'static str {
    match sort {
        Some(order) if order.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_shows_direction_only_for_active_field() {
        let sort = Some(SortOrder {
            field: "name",
            ascending: true,
        });
        assert_eq!(sort_indicator(sort, "name"), " ▲");
        assert_eq!(sort_indicator(sort, "email"), " ⇅");

        let sort = Some(SortOrder {
            field: "name",
            ascending: false,
        });
        assert_eq!(sort_indicator(sort, "name"), " ▼");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }

    #[test]
    fn active_field_gets_highlighted_class() {
        let sort = Some(SortOrder {
            field: "city",
            ascending: true,
        });
        assert!(sort_class(sort, "city").ends_with("--active"));
        assert!(!sort_class(sort, "name").ends_with("--active"));
    }
}
