use crate::shared::components::ui::Button;
use crate::shared::components::universal_modal::UniversalModal;
use leptos::prelude::*;

/// Диалог подтверждения удаления записи.
///
/// Закрытие любым способом, кроме кнопки "Удалить", трактуется как отмена:
/// подложка, Escape и крестик никогда не подтверждают удаление.
#[component]
pub fn ConfirmDeleteModal(
    /// Наименование записи для текста вопроса
    label: String,
    /// Подтверждение удаления
    on_confirm: Callback<()>,
    /// Отмена удаления
    on_cancel: Callback<()>,
) -> impl IntoView {
    let question = format!("Удалить запись «{label}»? Это действие нельзя отменить.");

    view! {
        <UniversalModal title="Удаление записи".to_string() on_close=on_cancel>
            <p class="confirm-delete__question">{question}</p>
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Отмена"
                </Button>
                <Button variant="danger" on_click=Callback::new(move |_| on_confirm.run(()))>
                    "Удалить"
                </Button>
            </div>
        </UniversalModal>
    }
}
