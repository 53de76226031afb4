use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение поля формы в черновике
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Текстовое поле (input, textarea, select)
    Text(String),
    /// Флажок
    Flag(bool),
    /// Набор строк (например, права доступа роли)
    Items(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Строковая форма значения для валидации: текст как есть,
    /// флаг и набор считаются "пустыми" только когда они пусты по смыслу
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s.as_str(),
            _ => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(_) => false,
            FieldValue::Items(items) => items.is_empty(),
        }
    }
}

/// Черновик формы: упорядоченная карта "имя поля -> значение".
///
/// Живёт только пока открыта модалка создания/редактирования;
/// сохранение или закрытие модалки его сбрасывает.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft(BTreeMap<&'static str, FieldValue>);

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, value: FieldValue) {
        self.0.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Текст поля; пустая строка для отсутствующих и нетекстовых значений
    pub fn text(&self, field: &str) -> &str {
        self.0.get(field).map(FieldValue::as_text).unwrap_or("")
    }

    /// Текст поля с обрезанными пробелами
    pub fn trimmed(&self, field: &str) -> &str {
        self.text(field).trim()
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(FieldValue::Flag(true)))
    }

    pub fn items(&self, field: &str) -> &[String] {
        match self.0.get(field) {
            Some(FieldValue::Items(items)) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ошибки валидации формы: "имя поля -> сообщение"
pub type FieldErrors = BTreeMap<&'static str, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_missing_field_is_empty() {
        let draft = Draft::new();
        assert_eq!(draft.text("name"), "");
        assert!(draft.get("name").is_none());
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("  Молоко  "));
        assert_eq!(draft.trimmed("name"), "Молоко");
    }

    #[test]
    fn blank_detection_per_value_kind() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text("x").is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
        assert!(FieldValue::Items(vec![]).is_blank());
        assert!(!FieldValue::Items(vec!["a".into()]).is_blank());
    }

    #[test]
    fn set_replaces_value() {
        let mut draft = Draft::new();
        draft.set("phone", FieldValue::text("123"));
        draft.set("phone", FieldValue::text("456"));
        assert_eq!(draft.text("phone"), "456");
    }
}
