//! Список ролей

use contracts::domain::a006_role::{permission_label, Role};
use contracts::fixtures;
use leptos::prelude::*;

use super::details::{role_form, role_view};
use crate::shared::entity_page::{entity_list_page, ColumnSpec, PageConfig};

static COLUMNS: [ColumnSpec<Role>; 3] = [
    ColumnSpec {
        title: "Наименование",
        sort_field: "name",
        cell: |item: &Role| item.name.clone(),
    },
    ColumnSpec {
        title: "Описание",
        sort_field: "",
        cell: |item: &Role| item.description.clone(),
    },
    ColumnSpec {
        title: "Права доступа",
        sort_field: "permissions",
        cell: |item: &Role| {
            if item.permissions.is_empty() {
                "—".to_string()
            } else {
                item.permissions
                    .iter()
                    .map(|code| permission_label(code))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        },
    },
];

#[component]
pub fn RoleList() -> impl IntoView {
    entity_list_page(PageConfig {
        columns: &COLUMNS,
        form_body: role_form,
        view_body: role_view,
        fixtures: fixtures::roles,
    })
}
