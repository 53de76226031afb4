//! Универсальная страница справочника.
//!
//! Одна и та же страница обслуживает все виды агрегатов: таблица с
//! сортировкой, поиск, фильтр по статусу, пагинация, модальные карточки
//! просмотра и редактирования, шлюз подтверждения удаления, выгрузка.
//! Конкретный вид подключается через `PageConfig`: колонки, тело формы,
//! карточка просмотра и поставщик стартовых данных.

use contracts::domain::common::AggregateRoot;
use contracts::listing::{
    EntityKind, EntityListController, FieldValue, ModalState, Notice, StatusFilter,
};
use leptos::children::{ChildrenFn, ToChildren};
use leptos::logging::log;
use leptos::prelude::*;
use serde::Serialize;

use crate::shared::components::ui::{Button, Select, StatusBadge};
use crate::shared::components::{
    ConfirmDeleteModal, FilterPanel, PageHeader, PaginationControls, SearchInput, ToastService,
    UniversalModal,
};
use crate::shared::date_utils::format_timestamp;
use crate::shared::export::{export_csv, export_json};
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_class, sort_indicator};

/// Колонка таблицы списка
pub struct ColumnSpec<K> {
    /// Заголовок колонки
    pub title: &'static str,
    /// Ключ сортировки; пустая строка выключает сортировку по колонке
    pub sort_field: &'static str,
    /// Текст ячейки
    pub cell: fn(&K) -> String,
}

impl<K> Clone for ColumnSpec<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ColumnSpec<K> {}

/// Конфигурация страницы одного вида агрегата
pub struct PageConfig<K: EntityKind> {
    /// Колонки таблицы
    pub columns: &'static [ColumnSpec<K>],
    /// Поля формы создания и редактирования
    pub form_body: fn(RwSignal<EntityListController<K>>) -> AnyView,
    /// Карточка просмотра записи
    pub view_body: fn(&K) -> AnyView,
    /// Поставщик стартовых данных
    pub fixtures: fn() -> Vec<K>,
}

impl<K: EntityKind> Clone for PageConfig<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: EntityKind> Copy for PageConfig<K> {}

/// Прогоняет операцию контроллера и показывает вернувшееся уведомление
fn dispatch<K: EntityKind>(
    state: RwSignal<EntityListController<K>>,
    toasts: ToastService,
    op: impl FnOnce(&mut EntityListController<K>) -> Option<Notice>,
) {
    let mut notice = None;
    state.update(|ctl| notice = op(ctl));
    if let Some(notice) = notice {
        toasts.show(notice);
    }
}

// ----------------------------------------------------------------------------
// Привязка полей формы к черновику контроллера
// ----------------------------------------------------------------------------

/// Сигнал текста поля черновика
pub fn draft_text<K: EntityKind>(
    state: RwSignal<EntityListController<K>>,
    field: &'static str,
) -> Signal<String> {
    Signal::derive(move || state.with(|ctl| ctl.draft().text(field).to_string()))
}

/// Сигнал ошибки валидации поля
pub fn field_error<K: EntityKind>(
    state: RwSignal<EntityListController<K>>,
    field: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || state.with(|ctl| ctl.error(field).map(str::to_string)))
}

/// Колбэк записи текстового поля черновика
pub fn set_text<K: EntityKind>(
    state: RwSignal<EntityListController<K>>,
    field: &'static str,
) -> Callback<String> {
    Callback::new(move |value: String| {
        state.update(|ctl| ctl.update_field(field, FieldValue::text(value)));
    })
}

/// Строит страницу списка для вида агрегата `K`.
pub fn entity_list_page<K>(config: PageConfig<K>) -> impl IntoView
where
    K: EntityKind + Serialize,
{
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");
    let state = RwSignal::new(EntityListController::<K>::new((config.fixtures)()));
    let is_filter_expanded = RwSignal::new(false);

    let page_view = Signal::derive(move || state.with(|ctl| ctl.view()));
    let sort = Signal::derive(move || state.with(|ctl| ctl.sort()));
    let search_term = Signal::derive(move || state.with(|ctl| ctl.search_term().to_string()));
    let status_code = Signal::derive(move || {
        state.with(|ctl| ctl.status_filter().code().to_string())
    });
    let active_filters_count = Signal::derive(move || {
        state.with(|ctl| {
            let mut count = 0;
            if !ctl.search_term().trim().is_empty() {
                count += 1;
            }
            if ctl.status_filter() != StatusFilter::All {
                count += 1;
            }
            count
        })
    });
    let status_options = Signal::derive(move || {
        [
            StatusFilter::All,
            StatusFilter::Active,
            StatusFilter::Inactive,
        ]
        .iter()
        .map(|f| (f.code().to_string(), f.label().to_string()))
        .collect::<Vec<_>>()
    });

    let close_modal = Callback::new(move |_: ()| {
        state.update(|ctl| ctl.close_modal());
    });
    let cancel_delete = Callback::new(move |_: ()| {
        state.update(|ctl| ctl.cancel_delete());
    });
    let confirm_delete = Callback::new(move |_: ()| {
        dispatch(state, toasts, |ctl| ctl.confirm_delete());
    });

    let handle_reload = move |_| {
        state.update(|ctl| ctl.reload((config.fixtures)()));
        toasts.show(Notice::info("Данные загружены заново"));
    };

    let handle_export_csv = move |_| {
        let rows = state.with_untracked(|ctl| ctl.filtered_rows());
        let headers: Vec<&str> = config
            .columns
            .iter()
            .map(|col| col.title)
            .chain(["Статус", "Создано"])
            .collect();
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|item| {
                let mut cells: Vec<String> =
                    config.columns.iter().map(|col| (col.cell)(item)).collect();
                cells.push(
                    if item.is_active() { "Активен" } else { "Неактивен" }.to_string(),
                );
                cells.push(format_timestamp(item.metadata().created_at));
                cells
            })
            .collect();
        let filename = format!(
            "{}_{}.csv",
            K::collection_name(),
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = export_csv(&headers, &data, &filename) {
            log!("Выгрузка CSV не удалась: {}", e);
            toasts.show(Notice::warning(e));
        }
    };

    let handle_export_json = move |_| {
        let rows = state.with_untracked(|ctl| ctl.filtered_rows());
        let filename = format!(
            "{}_{}.json",
            K::collection_name(),
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = export_json(&rows, &filename) {
            log!("Выгрузка JSON не удалась: {}", e);
            toasts.show(Notice::warning(e));
        }
    };

    // Карточка создания/редактирования; кнопка "Сохранить" отправляет форму
    let render_form_modal = move |subtitle: String| -> AnyView {
        view! {
            <UniversalModal
                title=K::element_name().to_string()
                subtitle=subtitle
                on_close=close_modal
            >
                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        dispatch(state, toasts, |ctl| ctl.save());
                    }
                >
                    {(config.form_body)(state)}
                    <div class="modal-footer">
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| close_modal.run(()))
                        >
                            "Отмена"
                        </Button>
                        <Button variant="primary" button_type="submit">
                            "Сохранить"
                        </Button>
                    </div>
                </form>
            </UniversalModal>
        }
        .into_any()
    };

    let render_row = move |item: K| {
        let id = item.id();
        let cells = config
            .columns
            .iter()
            .map(|col| {
                view! { <td class="table__cell">{(col.cell)(&item)}</td> }
            })
            .collect_view();
        let is_active = item.is_active();
        let created = format_timestamp(item.metadata().created_at);
        let toggle_title = if is_active {
            "Деактивировать"
        } else {
            "Активировать"
        };

        view! {
            <tr class="table__row" on:click=move |_| state.update(|ctl| ctl.open_view(id))>
                {cells}
                <td class="table__cell">
                    <StatusBadge active=Signal::derive(move || is_active) />
                </td>
                <td class="table__cell">{created}</td>
                <td class="table__cell table__cell--actions">
                    <button
                        class="button button--icon"
                        title="Просмотр"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            state.update(|ctl| ctl.open_view(id));
                        }
                    >
                        {icon("eye")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Редактировать"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch(state, toasts, move |ctl| ctl.open_edit(id));
                        }
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon"
                        title=toggle_title
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch(state, toasts, move |ctl| ctl.toggle_active(id));
                        }
                    >
                        {icon("power")}
                    </button>
                    <button
                        class="button button--icon button--icon-danger"
                        title="Удалить"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch(state, toasts, move |ctl| ctl.request_delete(id));
                        }
                    >
                        {icon("trash")}
                    </button>
                </td>
            </tr>
        }
    };

    let total_cols = config.columns.len() + 3;

    view! {
        <div class="page">
            <PageHeader
                title=K::list_name()
                count=Signal::derive(move || page_view.get().filtered_count)
            >
                <Button
                    variant="primary"
                    on_click=Callback::new(move |_| state.update(|ctl| ctl.open_create()))
                >
                    {icon("plus")}
                    " Новая запись"
                </Button>
                <Button variant="secondary" on_click=Callback::new(handle_export_csv)>
                    {icon("download")}
                    " CSV"
                </Button>
                <Button variant="secondary" on_click=Callback::new(handle_export_json)>
                    {icon("download")}
                    " JSON"
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                pagination_controls=ChildrenFn::to_children(move || {
                    view! {
                        <PaginationControls
                            current_page=Signal::derive(move || page_view.get().page)
                            total_pages=Signal::derive(move || page_view.get().total_pages)
                            total_count=Signal::derive(move || page_view.get().filtered_count)
                            page_size=Signal::derive(move || state.with(|ctl| ctl.page_size()))
                            on_page_change=Callback::new(move |page| {
                                state.update(|ctl| ctl.set_page(page))
                            })
                            on_page_size_change=Callback::new(move |size| {
                                state.update(|ctl| ctl.set_page_size(size))
                            })
                        />
                    }
                })
                filter_content=ChildrenFn::to_children(move || {
                    view! {
                        <div class="filter-panel__fields">
                            <div class="filter-panel__field">
                                <label class="form__label">"Поиск"</label>
                                <SearchInput
                                    value=search_term
                                    on_input=Callback::new(move |term: String| {
                                        state.update(|ctl| ctl.set_search_term(term))
                                    })
                                />
                            </div>
                            <div class="filter-panel__field">
                                <Select
                                    label="Статус"
                                    value=status_code
                                    options=status_options
                                    on_change=Callback::new(move |code: String| {
                                        state
                                            .update(|ctl| {
                                                ctl.set_status_filter(StatusFilter::from_code(&code))
                                            })
                                    })
                                />
                            </div>
                        </div>
                    }
                })
                header_actions=ChildrenFn::to_children(move || {
                    view! {
                        <Button variant="ghost" on_click=Callback::new(handle_reload)>
                            {icon("refresh")}
                            " Обновить"
                        </Button>
                    }
                })
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {config
                                .columns
                                .iter()
                                .map(|col| {
                                    let col = *col;
                                    if col.sort_field.is_empty() {
                                        view! { <th class="table__header-cell">{col.title}</th> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <th
                                                class="table__header-cell table__header-cell--sortable"
                                                on:click=move |_| {
                                                    state.update(|ctl| ctl.toggle_sort(col.sort_field))
                                                }
                                            >
                                                {col.title}
                                                <span class=move || sort_class(
                                                    sort.get(),
                                                    col.sort_field,
                                                )>
                                                    {move || sort_indicator(sort.get(), col.sort_field)}
                                                </span>
                                            </th>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect_view()}
                            <th class="table__header-cell">"Статус"</th>
                            <th class="table__header-cell">"Создано"</th>
                            <th class="table__header-cell table__header-cell--actions">
                                "Действия"
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let current = page_view.get();
                            if current.rows.is_empty() {
                                view! {
                                    <tr class="table__row">
                                        <td
                                            class="table__cell table__cell--empty"
                                            colspan=total_cols.to_string()
                                        >
                                            "Ничего не найдено"
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                current
                                    .rows
                                    .into_iter()
                                    .map(render_row)
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                let modal = state.with(|ctl| ctl.modal().clone());
                match modal {
                    ModalState::Closed => view! { <></> }.into_any(),
                    ModalState::Viewing(entity) => {
                        let subtitle = entity.display_label();
                        let body = (config.view_body)(&entity);
                        view! {
                            <UniversalModal
                                title=K::element_name().to_string()
                                subtitle=subtitle
                                on_close=close_modal
                            >
                                {body}
                                <div class="modal-footer">
                                    <Button
                                        variant="secondary"
                                        on_click=Callback::new(move |_| close_modal.run(()))
                                    >
                                        "Закрыть"
                                    </Button>
                                </div>
                            </UniversalModal>
                        }
                            .into_any()
                    }
                    ModalState::Creating => render_form_modal("Новая запись".to_string()),
                    ModalState::Editing(entity) => {
                        render_form_modal(
                            format!("Редактирование: {}", entity.display_label()),
                        )
                    }
                }
            }}

            {move || {
                let target = state
                    .with(|ctl| ctl.delete_target().map(|item| item.display_label()));
                target
                    .map(|label| {
                        view! {
                            <ConfirmDeleteModal
                                label=label
                                on_confirm=confirm_delete
                                on_cancel=cancel_delete
                            />
                        }
                    })
            }}
        </div>
    }
}
