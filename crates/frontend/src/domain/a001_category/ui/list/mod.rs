//! Список категорий

use contracts::domain::a001_category::Category;
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{category_form, category_view};
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<Category>; 2] = [
    ColumnSpec {
        title: "Наименование",
        sort_field: "name",
        cell: |item: &Category| item.name.clone(),
    },
    ColumnSpec {
        title: "Описание",
        sort_field: "description",
        cell: |item: &Category| item.description.clone(),
    },
];

#[component]
pub fn CategoryList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: category_form,
        view_body: category_view,
        fixtures: fixtures::categories,
    })
}
