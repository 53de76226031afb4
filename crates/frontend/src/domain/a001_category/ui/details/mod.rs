//! Карточка категории: поля формы и просмотр

use contracts::domain::a001_category::Category;
use contracts::domain::common::AggregateRoot;
use contracts::listing::EntityListController;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, StatusBadge, Textarea};
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_page::{draft_text, field_error, set_text};

pub fn category_form(state: RwSignal<EntityListController<Category>>) -> AnyView {
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
        <Input
            label="Изображение (URL)"
            value=draft_text(state, "image_url")
            on_input=set_text(state, "image_url")
            error=field_error(state, "image_url")
            placeholder="https://..."
        />
    }
    .into_any()
}

pub fn category_view(item: &Category) -> AnyView {
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
                <span class="view-card__label">"Изображение (URL)"</span>
                <span class="view-card__value">
                    {item.image_url.clone().unwrap_or_else(|| "—".to_string())}
                </span>
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
