//! Список товаров

use contracts::domain::a004_product::Product;
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{product_form, product_view};
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<Product>; 4] = [
    ColumnSpec {
        title: "Наименование",
        sort_field: "name",
        cell: |item: &Product| item.name.clone(),
    },
    ColumnSpec {
        title: "Категория",
        sort_field: "category",
        cell: |item: &Product| item.category.clone(),
    },
    ColumnSpec {
        title: "Цена",
        sort_field: "price",
        cell: |item: &Product| format!("{:.2}", item.price),
    },
    ColumnSpec {
        title: "Остаток",
        sort_field: "stock",
        cell: |item: &Product| item.stock.to_string(),
    },
];

#[component]
pub fn ProductList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: product_form,
        view_body: product_view,
        fixtures: fixtures::products,
    })
}
