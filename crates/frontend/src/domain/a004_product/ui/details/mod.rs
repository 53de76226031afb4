//! Карточка товара: поля формы и просмотр

use contracts::domain::a004_product::Product;
use contracts::domain::common::AggregateRoot;
use contracts::fixtures;
use contracts::listing::EntityListController;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, StatusBadge, Textarea};
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_page::{draft_text, field_error, set_text};

pub fn product_form(state: RwSignal<EntityListController<Product>>) -> AnyView {
    let categories: Vec<(String, String)> = fixtures::categories()
        .into_iter()
        .map(|c| (c.name.clone(), c.name))
        .collect();
    let category_options = Signal::derive(move || categories.clone());

    let suppliers: Vec<(String, String)> = fixtures::suppliers()
        .into_iter()
        .map(|s| (s.company.clone(), s.company))
        .collect();
    let supplier_options = Signal::derive(move || suppliers.clone());

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
            rows=3
            value=draft_text(state, "description")
            on_input=set_text(state, "description")
            error=field_error(state, "description")
        />
        <Select
            label="Категория"
            required=true
            empty_option="Выберите категорию"
            value=draft_text(state, "category")
            options=category_options
            on_change=set_text(state, "category")
            error=field_error(state, "category")
        />
        <Select
            label="Поставщик"
            empty_option="Не выбран"
            value=draft_text(state, "supplier")
            options=supplier_options
            on_change=set_text(state, "supplier")
            error=field_error(state, "supplier")
        />
        <Input
            label="Цена"
            required=true
            placeholder="0.00"
            value=draft_text(state, "price")
            on_input=set_text(state, "price")
            error=field_error(state, "price")
        />
        <Input
            label="Остаток"
            required=true
            input_type="number"
            value=draft_text(state, "stock")
            on_input=set_text(state, "stock")
            error=field_error(state, "stock")
        />
    }
    .into_any()
}

pub fn product_view(item: &Product) -> AnyView {
    let is_active = item.is_active();
    view! {
        <div class="view-card">
            <div class="view-card__field">
                <span class="view-card__label">"Наименование"</span>
                <span class="view-card__value">{item.name.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Описание"</span>
                <span class="view-card__value">
                    {if item.description.is_empty() { "—".to_string() } else { item.description.clone() }}
                </span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Категория"</span>
                <span class="view-card__value">{item.category.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Поставщик"</span>
                <span class="view-card__value">
                    {if item.supplier.is_empty() { "—".to_string() } else { item.supplier.clone() }}
                </span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Цена"</span>
                <span class="view-card__value">{format!("{:.2}", item.price)}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Остаток"</span>
                <span class="view-card__value">{item.stock.to_string()}</span>
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
