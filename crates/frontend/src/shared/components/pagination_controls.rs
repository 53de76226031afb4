use crate::shared::icons::icon;
use leptos::prelude::*;

/// Панель постраничной навигации.
///
/// Страницы нумеруются с единицы. У пустого списка страниц нет,
/// но счётчик всё равно показывает "1 / 1 (0)".
#[component]
pub fn PaginationControls(
    /// Текущая страница (с единицы)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Всего записей после фильтров
    #[prop(into)]
    total_count: Signal<usize>,

    /// Текущий размер страницы
    #[prop(into)]
    page_size: Signal<usize>,

    /// Вызывается при смене страницы
    on_page_change: Callback<usize>,

    /// Вызывается при смене размера страницы
    on_page_size_change: Callback<usize>,

    /// Доступные размеры страницы (по умолчанию [7, 10, 25, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![7, 10, 25, 50]);

    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", page, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=at_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(7);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page_size.get() == size
                            >
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
