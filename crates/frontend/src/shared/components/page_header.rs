use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Шапка страницы списка: заголовок, счётчик записей, кнопки действий.
#[component]
pub fn PageHeader(
    /// Заголовок страницы
    #[prop(into)]
    title: String,

    /// Количество записей после фильтров
    #[prop(optional, into)]
    count: Option<Signal<usize>>,

    /// Кнопки действий справа
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {count
                    .map(|count| {
                        view! {
                            <Badge variant="primary">
                                {move || count.get().to_string()}
                            </Badge>
                        }
                    })}
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}
