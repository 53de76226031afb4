//! Карточка клиента: поля формы и просмотр

use contracts::domain::a002_client::Client;
use contracts::domain::common::AggregateRoot;
use contracts::listing::EntityListController;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::ui::{Input, StatusBadge};
use crate::shared::date_utils::format_timestamp;
use crate::shared::entity_page::{draft_text, field_error, set_text};
use crate::shared::geo::fetch_regions;

pub fn client_form(state: RwSignal<EntityListController<Client>>) -> AnyView {
    // Подсказки регионов подтягиваются при открытии карточки;
    // без них поле остаётся свободным вводом
    let regions = RwSignal::new(Vec::<String>::new());
    spawn_local(async move {
        match fetch_regions().await {
            Ok(names) => regions.set(names),
            Err(e) => log!("Справочник регионов недоступен: {}", e),
        }
    });

    let region_value = draft_text(state, "region");
    let on_region = set_text(state, "region");

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
            label="Телефон"
            required=true
            placeholder="Только цифры"
            value=draft_text(state, "phone")
            on_input=set_text(state, "phone")
            error=field_error(state, "phone")
        />
        <Input
            label="ИНН"
            value=draft_text(state, "tax_number")
            on_input=set_text(state, "tax_number")
            error=field_error(state, "tax_number")
        />
        <div class="form__group">
            <label class="form__label" for="client-region">"Регион"</label>
            <input
                id="client-region"
                class="form__input"
                list="client-region-options"
                prop:value=move || region_value.get()
                on:input=move |ev| on_region.run(event_target_value(&ev))
            />
            <datalist id="client-region-options">
                <For
                    each=move || regions.get()
                    key=|name| name.clone()
                    children=move |name: String| view! { <option value=name /> }
                />
            </datalist>
        </div>
        <Input
            label="Город"
            value=draft_text(state, "city")
            on_input=set_text(state, "city")
            error=field_error(state, "city")
        />
        <Input
            label="Адрес"
            value=draft_text(state, "address")
            on_input=set_text(state, "address")
            error=field_error(state, "address")
        />
    }
    .into_any()
}

pub fn client_view(item: &Client) -> AnyView {
    let is_active = item.is_active();
    let address = [
        item.region.as_str(),
        item.city.as_str(),
        item.address.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");

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
                <span class="view-card__label">"Телефон"</span>
                <span class="view-card__value">{item.phone.clone()}</span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"ИНН"</span>
                <span class="view-card__value">
                    {if item.tax_number.is_empty() { "—".to_string() } else { item.tax_number.clone() }}
                </span>
            </div>
            <div class="view-card__field">
                <span class="view-card__label">"Адрес"</span>
                <span class="view-card__value">
                    {if address.is_empty() { "—".to_string() } else { address }}
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
