//! Карточка пользователя: поля формы и просмотр

use contracts::domain::a007_user::User;
use contracts::domain::common::AggregateRoot;
use contracts::fixtures;
use contracts::listing::{EntityListController, FormMode};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, StatusBadge};
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_page::{draft_text, field_error, set_text};

pub fn user_form(state: RwSignal<EntityListController<User>>) -> AnyView {
    let roles: Vec<(String, String)> = fixtures::roles()
        .into_iter()
        .map(|r| (r.name.clone(), r.name))
        .collect();
    let role_options = Signal::derive(move || roles.clone());

    // Пароль обязателен только при создании; при редактировании
    // пустое поле оставляет прежний пароль
    let is_create =
        state.with_untracked(|ctl| matches!(ctl.modal().form_mode(), Some(FormMode::Create)));
    let password_hint = if is_create {
        ""
    } else {
        "Оставьте пустым, чтобы сохранить текущий"
    };

    view! {
        <Input
            label="ФИО"
            required=true
            value=draft_text(state, "full_name")
            on_input=set_text(state, "full_name")
            error=field_error(state, "full_name")
        />
        <Input
            label="Email"
            required=true
            input_type="email"
            value=draft_text(state, "email")
            on_input=set_text(state, "email")
            error=field_error(state, "email")
        />
        <Input
            label="Пароль"
            required=is_create
            input_type="password"
            placeholder=password_hint
            value=draft_text(state, "password")
            on_input=set_text(state, "password")
            error=field_error(state, "password")
        />
        <Select
            label="Роль"
            required=true
            empty_option="Выберите роль"
            value=draft_text(state, "role")
            options=role_options
            on_change=set_text(state, "role")
            error=field_error(state, "role")
        />
    }
    .into_any()
}

pub fn user_view(item: &User) -> AnyView {
    let is_active = item.is_active();
    view! {
        <div class="view-card">
            <div class="view-card__field">
                <span class="view-card__label">"ФИО"</span>
                <span class="view-card__value">{item.full_name.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Email"</span>
                <span class="view-card__value">{item.email.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Роль"</span>
                <span class="view-card__value">{item.role.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Статус"</span>
                <StatusBadge active=Signal::derive(move || is_active) />
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Создано"</span>
                <span class="view-card__value">
                    {format_timestamp(item.metadata().created_at)}
                </span>
            </div>
        </div>
    }
    .into_any()
}
