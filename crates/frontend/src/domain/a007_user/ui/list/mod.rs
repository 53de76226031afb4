//! Список пользователей

use contracts::domain::a007_user::User;
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{user_form, user_view};
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<User>; 3] = [
    ColumnSpec {
        title: "ФИО",
        sort_field: "full_name",
        cell: |item: &User| item.full_name.clone(),
    },
    ColumnSpec {
        title: "Email",
        sort_field: "email",
        cell: |item: &User| item.email.clone(),
    },
    ColumnSpec {
        title: "Роль",
        sort_field: "role",
        cell: |item: &User| item.role.clone(),
    },
];

#[component]
pub fn UserList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: user_form,
        view_body: user_view,
        fixtures: fixtures::users,
    })
}
