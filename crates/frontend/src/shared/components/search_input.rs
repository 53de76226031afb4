use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска по списку.
///
/// Управляемое поле: значение живёт в состоянии страницы, фильтр
/// применяется на каждое нажатие клавиши, без задержки. Крестик
/// справа очищает запрос и возвращает полный список.
#[component]
pub fn SearchInput(
    /// Текущий поисковый запрос
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается на каждое изменение текста
    on_input: Callback<String>,
    /// Дополнительная реакция на очистку поля
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
    /// Плейсхолдер
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let handle_input = move |ev| {
        on_input.run(event_target_value(&ev));
    };

    let handle_clear = move |_| {
        on_input.run(String::new());
        if let Some(on_clear) = on_clear {
            on_clear.run(());
        }
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Поиск...".to_string())
                prop:value=move || value.get()
                on:input=handle_input
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    type="button"
                    class="search-input__clear"
                    title="Очистить поиск"
                    on:click=handle_clear
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
