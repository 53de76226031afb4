//! Карточка возврата: поля формы и просмотр

use contracts::domain::a003_return::Return;
use contracts::domain::common::AggregateRoot;
use contracts::fixtures;
use contracts::listing::EntityListController;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, StatusBadge, Textarea};
use crate::shared::date_utils::{format_day, format_timestamp};
use crate::shared::entity_page::{draft_text, field_error, set_text};

pub fn return_form(state: RwSignal<EntityListController<Return>>) -> AnyView {
    let clients: Vec<(String, String)> = fixtures::clients()
        .into_iter()
        .map(|c| (c.full_name.clone(), c.full_name))
        .collect();
    let client_options = Signal::derive(move || clients.clone());

    let products: Vec<(String, String)> = fixtures::products()
        .into_iter()
        .map(|p| (p.name.clone(), p.name))
        .collect();
    let product_options = Signal::derive(move || products.clone());

    view! {
        <Select
            label="Клиент"
            required=true
            empty_option="Выберите клиента"
            value=draft_text(state, "client")
            options=client_options
            on_change=set_text(state, "client")
            error=field_error(state, "client")
        />
        <Select
            label="Товар"
            required=true
            empty_option="Выберите товар"
            value=draft_text(state, "product")
            options=product_options
            on_change=set_text(state, "product")
            error=field_error(state, "product")
        />
        <Input
            label="Количество"
            required=true
            input_type="number"
            value=draft_text(state, "quantity")
            on_input=set_text(state, "quantity")
            error=field_error(state, "quantity")
        />
        <Textarea
            label="Причина"
            required=true
            rows=3
            value=draft_text(state, "reason")
            on_input=set_text(state, "reason")
            error=field_error(state, "reason")
        />
        <Input
            label="Дата"
            required=true
            input_type="date"
            value=draft_text(state, "date")
            on_input=set_text(state, "date")
            error=field_error(state, "date")
        />
    }
    .into_any()
}

pub fn return_view(item: &Return) -> AnyView {
    let is_active = item.is_active();
    view! {
        <div class="view-card">
            <div class="view-card__field">
                <span class="view-card__label">"Клиент"</span>
                <span class="view-card__value">{item.client.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Товар"</span>
                <span class="view-card__value">{item.product.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Количество"</span>
                <span class="view-card__value">{item.quantity.to_string()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Причина"</span>
                <span class="view-card__value">{item.reason.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Дата"</span>
                <span class="view-card__value">{format_day(item.date)}</span>
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
