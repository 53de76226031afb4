//! Карточка поставщика: поля формы и просмотр

use contracts::domain::a005_supplier::Supplier;
use contracts::domain::common::AggregateRoot;
use contracts::listing::EntityListController;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, StatusBadge};
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_page::{draft_text, field_error, set_text};

pub fn supplier_form(state: RwSignal<EntityListController<Supplier>>) -> AnyView {
    view! {
        <Input
            label="Компания"
            required=true
            value=draft_text(state, "company")
            on_input=set_text(state, "company")
            error=field_error(state, "company")
        />
        <Input
            label="Контактное лицо"
            value=draft_text(state, "contact_name")
            on_input=set_text(state, "contact_name")
            error=field_error(state, "contact_name")
        />
        <Input
            label="Email"
            input_type="email"
            value=draft_text(state, "email")
            on_input=set_text(state, "email")
            error=field_error(state, "email")
        />
        <Input
            label="Телефон"
            value=draft_text(state, "phone")
            on_input=set_text(state, "phone")
            error=field_error(state, "phone")
        />
        <Input
            label="Город"
            value=draft_text(state, "city")
            on_input=set_text(state, "city")
            error=field_error(state, "city")
        />
        <Input
            label="ИНН"
            value=draft_text(state, "tax_number")
            on_input=set_text(state, "tax_number")
            error=field_error(state, "tax_number")
        />
    }
    .into_any()
}

pub fn supplier_view(item: &Supplier) -> AnyView {
    let is_active = item.is_active();
    let optional = |value: &str| {
        if value.is_empty() {
            "—".to_string()
        } else {
            value.to_string()
        }
    };

    view! {
        <div class="view-card">
            <div class="view-card__field">
                <span class="view-card__label">"Компания"</span>
                <span class="view-card__value">{item.company.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Контактное лицо"</span>
                <span class="view-card__value">{optional(&item.contact_name)}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Email"</span>
                <span class="view-card__value">{optional(&item.email)}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Телефон"</span>
                <span class="view-card__value">{optional(&item.phone)}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Город"</span>
                <span class="view-card__value">{optional(&item.city)}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"ИНН"</span>
                <span class="view-card__value">{optional(&item.tax_number)}</span>
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
