//! Универсальный контроллер страниц списков.
//!
//! Все семь страниц справочников работают через один параметризованный
//! контроллер: фильтр по строке и статусу, сортировка, пагинация,
//! модальный CRUD с валидацией и шлюз подтверждения удаления.
//! Конфигурация вида агрегата задаётся трейтом [`EntityKind`].

pub mod controller;
pub mod kind;
pub mod notice;
pub mod validation;
pub mod value;

pub use controller::{
    EntityListController, ModalState, PageView, SortOrder, StatusFilter, MSG_DELETE_ACTIVE,
    MSG_PROTECTED,
};
pub use kind::{EntityKind, KindMessages, Searchable, Sortable};
pub use notice::{Notice, NoticeKind};
pub use validation::{
    validate_fields, FieldSpec, FormMode, Requirement, ValueRule, MSG_DATE, MSG_DIGITS, MSG_EMAIL,
    MSG_NON_NEGATIVE_INT, MSG_NON_NEGATIVE_NUMBER, MSG_REQUIRED,
};
pub use value::{Draft, FieldErrors, FieldValue};
