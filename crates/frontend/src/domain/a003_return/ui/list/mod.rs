//! Список возвратов

use contracts::domain::a003_return::Return;
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{return_form, return_view};
use crate::shared::date_utils::format_day;
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<Return>; 4] = [
    ColumnSpec {
        title: "Клиент",
        sort_field: "client",
        cell: |item: &Return| item.client.clone(),
    },
    ColumnSpec {
        title: "Товар",
        sort_field: "product",
        cell: |item: &Return| item.product.clone(),
    },
    ColumnSpec {
        title: "Количество",
        sort_field: "quantity",
        cell: |item: &Return| item.quantity.to_string(),
    },
    ColumnSpec {
        title: "Дата",
        sort_field: "date",
        cell: |item: &Return| format_day(item.date),
    },
];

#[component]
pub fn ReturnList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: return_form,
        view_body: return_view,
        fixtures: fixtures::returns,
    })
}
