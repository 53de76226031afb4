//! Карточка роли: поля формы и просмотр

use contracts::domain::a006_role::{permission_label, Role, PERMISSION_OPTIONS};
use contracts::domain::common::AggregateRoot;
use contracts::listing::{EntityListController, FieldValue};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input, StatusBadge, Textarea};
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_page::{draft_text, field_error, set_text};

/// Перечень прав роли через запятую; прочерк для пустого набора
fn permissions_summary(codes: &[String]) -> String {
    if codes.is_empty() {
        return "—".to_string();
    }
    codes
        .iter()
        .map(|code| permission_label(code))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn role_form(state: RwSignal<EntityListController<Role>>) -> AnyView {
    view! {
        <Input
            label="Наименование"
            required=true
            value=draft_text(state, "name")
            on_input=set_text(state, "name")
            error=field_error(state, "name")
        />
        <Textarea
            label="Описание"
            required=true
            rows=3
            value=draft_text(state, "description")
            on_input=set_text(state, "description")
            error=field_error(state, "description")
        />
        <div class="form__group">
            <label class="form__label">"Права доступа"</label>
            <div class="form__checkbox-list">
                {PERMISSION_OPTIONS
                    .iter()
                    .map(|(code, label)| {
                        let code = *code;
                        let checked = Signal::derive(move || {
                            state
                                .with(|ctl| {
                                    ctl.draft().items("permissions").iter().any(|c| c == code)
                                })
                        });
                        let on_change = Callback::new(move |now_checked: bool| {
                            state
                                .update(|ctl| {
                                    let mut items = ctl.draft().items("permissions").to_vec();
                                    if now_checked {
                                        if !items.iter().any(|c| c == code) {
                                            items.push(code.to_string());
                                        }
                                    } else {
                                        items.retain(|c| c != code);
                                    }
                                    ctl.update_field("permissions", FieldValue::Items(items));
                                });
                        });
                        view! {
                            <Checkbox
                                label=label.to_string()
                                checked=checked
                                on_change=on_change
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

pub fn role_view(item: &Role) -> AnyView {
    let is_active = item.is_active();
    view! {
        <div class="view-card">
            <div class="view-card__field">
                <span class="view-card__label">"Наименование"</span>
                <span class="view-card__value">{item.name.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Описание"</span>
                <span class="view-card__value">{item.description.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Права доступа"</span>
                <span class="view-card__value">{permissions_summary(&item.permissions)}</span>
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
