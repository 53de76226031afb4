use std::cmp::Ordering;

use super::validation::{validate_fields, FieldSpec, FormMode};
use super::value::{Draft, FieldErrors, FieldValue};
use crate::domain::common::AggregateRoot;

/// Трейт для фильтрации сущностей по строке поиска.
/// Строка приходит уже обрезанной и в нижнем регистре.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Трейт для сортировки сущностей по имени колонки
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Тексты уведомлений одного вида агрегата.
/// Задаются на виде, потому что формулировка зависит от рода существительного
/// ("Категория создана", но "Товар создан").
#[derive(Debug, Clone, Copy)]
pub struct KindMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub activated: &'static str,
    pub deactivated: &'static str,
}

/// Конфигурация вида агрегата для универсального контроллера списка:
/// поля формы, черновики, валидация, тексты уведомлений и защита записей.
pub trait EntityKind:
    AggregateRoot + Searchable + Sortable + Clone + Send + Sync + Sized + 'static
{
    /// Размер страницы списка по умолчанию
    const PAGE_SIZE: usize = 7;

    /// Табличное описание полей формы
    fn field_specs() -> &'static [FieldSpec];

    /// Тексты уведомлений
    fn messages() -> &'static KindMessages;

    /// Черновик для формы создания: пустой текст по каждому полю
    fn empty_draft() -> Draft {
        let mut draft = Draft::new();
        for spec in Self::field_specs() {
            draft.set(spec.name, FieldValue::text(""));
        }
        draft
    }

    /// Черновик, заполненный значениями существующей записи
    fn to_draft(&self) -> Draft;

    /// Построить новую запись из черновика (черновик уже валиден)
    fn new_for_insert(draft: &Draft) -> Self;

    /// Перенести значения черновика в существующую запись,
    /// идентификатор остаётся прежним
    fn apply_draft(&mut self, draft: &Draft);

    /// Валидация черновика: табличные правила плюс дополнительная проверка вида
    fn validate_draft(draft: &Draft, mode: FormMode) -> FieldErrors {
        let mut errors = validate_fields(Self::field_specs(), draft, mode);
        Self::validate_extra(draft, mode, &mut errors);
        errors
    }

    /// Дополнительные проверки вида поверх табличных правил
    fn validate_extra(_draft: &Draft, _mode: FormMode, _errors: &mut FieldErrors) {}

    /// Защищённые записи нельзя редактировать, удалять и переключать
    fn is_protected(&self) -> bool {
        false
    }
}
