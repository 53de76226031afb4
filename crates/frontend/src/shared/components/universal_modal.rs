use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Универсальное модальное окно для карточек справочников.
///
/// Закрывается крестиком, клавишей Escape и кликом по подложке.
/// Клик внутри самого окна наружу не всплывает, поэтому окно не закрывает.
/// Кнопки действий рисует вызывающая сторона внутри children
/// (блок `div.modal-footer` в конце).
#[component]
pub fn UniversalModal(
    /// Заголовок окна
    title: String,
    /// Подзаголовок под заголовком (обычно наименование записи)
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Вызывается, когда окно нужно закрыть
    on_close: Callback<()>,
    /// Содержимое окна
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    // Глобальный обработчик Escape. Окно живёт до закрытия карточки,
    // повторный вызов on_close по уже закрытому окну безвреден.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем только если и нажатие, и отпускание пришлись на подложку.
    // Иначе выделение текста в форме с уводом курсора за край закрывало бы окно.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Закрытие откладываем на следующий тик: синхронное удаление подложки
                // во время диспетчеризации её же клика роняет делегирование событий Leptos.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <div class="modal-header__titles">
                        <h2 class="modal-title">{title}</h2>
                        {subtitle
                            .map(|text| {
                                view! { <div class="modal-subtitle">{text}</div> }
                            })}
                    </div>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
