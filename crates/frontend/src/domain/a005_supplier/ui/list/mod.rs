//! Список поставщиков

use contracts::domain::a005_supplier::Supplier;
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{supplier_form, supplier_view};
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<Supplier>; 4] = [
    ColumnSpec {
        title: "Компания",
        sort_field: "company",
        cell: |item: &Supplier| item.company.clone(),
    },
    ColumnSpec {
        title: "Контактное лицо",
        sort_field: "contact_name",
        cell: |item: &Supplier| item.contact_name.clone(),
    },
    ColumnSpec {
        title: "Email",
        sort_field: "",
        cell: |item: &Supplier| item.email.clone(),
    },
    ColumnSpec {
        title: "Город",
        sort_field: "city",
        cell: |item: &Supplier| item.city.clone(),
    },
];

#[component]
pub fn SupplierList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: supplier_form,
        view_body: supplier_view,
        fixtures: fixtures::suppliers,
    })
}
