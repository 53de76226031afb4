use contracts::listing::Notice;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Время показа тоста в миллисекундах.
const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Clone, PartialEq)]
struct ActiveToast {
    id: u64,
    notice: Notice,
}

/// Сервис всплывающих уведомлений.
///
/// Показывается не больше одного тоста: новый вытесняет предыдущий
/// и отсчёт трёх секунд начинается заново. Таймер вытесненного тоста
/// узнаёт себя по id и чужой тост не трогает.
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<ActiveToast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(1),
        }
    }

    /// Показывает уведомление и через три секунды убирает его,
    /// если за это время не появилось более свежее.
    pub fn show(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.current.set(Some(ActiveToast { id, notice }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            current.update(|slot| {
                if slot.as_ref().map(|t| t.id) == Some(id) {
                    *slot = None;
                }
            });
        });
    }

    /// Убирает текущий тост, не дожидаясь таймера.
    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Рендерит текущий тост поверх приложения.
///
/// Монтируется один раз в корне приложения.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .current
                    .get()
                    .map(|toast| {
                        let class = format!("toast toast--{}", toast.notice.kind.css_class());
                        view! {
                            <div class=class on:click=move |_| toasts.dismiss()>
                                {toast.notice.message.clone()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
