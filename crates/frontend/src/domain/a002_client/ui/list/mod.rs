//! Список клиентов

use contracts::domain::a002_client::Client;
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{client_form, client_view};
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<Client>; 4] = [
    ColumnSpec {
        title: "ФИО",
        sort_field: "full_name",
        cell: |item: &Client| item.full_name.clone(),
    },
    ColumnSpec {
        title: "Email",
        sort_field: "email",
        cell: |item: &Client| item.email.clone(),
    },
    ColumnSpec {
        title: "Телефон",
        sort_field: "",
        cell: |item: &Client| item.phone.clone(),
    },
    ColumnSpec {
        title: "Город",
        sort_field: "city",
        cell: |item: &Client| item.city.clone(),
    },
];

#[component]
pub fn ClientList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: client_form,
        view_body: client_view,
        fixtures: fixtures::clients,
    })
}
