use super::value::{Draft, FieldErrors};

/// Режим формы: часть правил действует только при создании
/// (например, пароль пользователя)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Обязательность поля
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Обязательно всегда
    Always,
    /// Обязательно только при создании
    CreateOnly,
    /// Необязательное поле
    Optional,
}

/// Правило формата значения; проверяется только для непустых значений
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Без ограничений
    Any,
    /// Адрес электронной почты
    Email,
    /// Только цифры (телефон, ИНН)
    Digits,
    /// Целое число >= 0
    NonNegativeInt,
    /// Число >= 0 (цена)
    NonNegativeNumber,
    /// Дата в формате ГГГГ-ММ-ДД (значение HTML input type="date")
    Date,
}

/// Декларативное описание поля формы одного вида агрегата
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: Requirement,
    pub rule: ValueRule,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        required: Requirement,
        rule: ValueRule,
    ) -> Self {
        Self {
            name,
            label,
            required,
            rule,
        }
    }
}

pub const MSG_REQUIRED: &str = "Обязательное поле";
pub const MSG_EMAIL: &str = "Некорректный email";
pub const MSG_DIGITS: &str = "Допустимы только цифры";
pub const MSG_NON_NEGATIVE_INT: &str = "Введите неотрицательное целое число";
pub const MSG_NON_NEGATIVE_NUMBER: &str = "Введите неотрицательное число";
pub const MSG_DATE: &str = "Некорректная дата";

/// Прогнать табличные правила по черновику.
/// Пустые необязательные значения правилами формата не проверяются.
pub fn validate_fields(specs: &[FieldSpec], draft: &Draft, mode: FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for spec in specs {
        let blank = draft.get(spec.name).map(|v| v.is_blank()).unwrap_or(true);

        let required_now = match spec.required {
            Requirement::Always => true,
            Requirement::CreateOnly => mode == FormMode::Create,
            Requirement::Optional => false,
        };

        if blank {
            if required_now {
                errors.insert(spec.name, MSG_REQUIRED.to_string());
            }
            continue;
        }

        let value = draft.trimmed(spec.name);
        if let Some(message) = check_rule(spec.rule, value) {
            errors.insert(spec.name, message.to_string());
        }
    }

    errors
}

fn check_rule(rule: ValueRule, value: &str) -> Option<&'static str> {
    match rule {
        ValueRule::Any => None,
        ValueRule::Email => (!is_valid_email(value)).then_some(MSG_EMAIL),
        ValueRule::Digits => {
            let ok = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
            (!ok).then_some(MSG_DIGITS)
        }
        ValueRule::NonNegativeInt => {
            (value.parse::<u32>().is_err()).then_some(MSG_NON_NEGATIVE_INT)
        }
        ValueRule::NonNegativeNumber => {
            let ok = value
                .parse::<f64>()
                .map(|n| n.is_finite() && n >= 0.0)
                .unwrap_or(false);
            (!ok).then_some(MSG_NON_NEGATIVE_NUMBER)
        }
        ValueRule::Date => {
            (chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err()).then_some(MSG_DATE)
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::FieldValue;

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Наименование", Requirement::Always, ValueRule::Any),
            FieldSpec::new("email", "Email", Requirement::Always, ValueRule::Email),
            FieldSpec::new("phone", "Телефон", Requirement::Optional, ValueRule::Digits),
            FieldSpec::new(
                "password",
                "Пароль",
                Requirement::CreateOnly,
                ValueRule::Any,
            ),
            FieldSpec::new(
                "stock",
                "Остаток",
                Requirement::Optional,
                ValueRule::NonNegativeInt,
            ),
            FieldSpec::new(
                "price",
                "Цена",
                Requirement::Optional,
                ValueRule::NonNegativeNumber,
            ),
            FieldSpec::new("date", "Дата", Requirement::Optional, ValueRule::Date),
        ]
    }

    #[test]
    fn missing_required_field_is_reported() {
        let errors = validate_fields(&specs(), &Draft::new(), FormMode::Create);
        assert_eq!(errors.get("name").map(String::as_str), Some(MSG_REQUIRED));
        assert_eq!(errors.get("email").map(String::as_str), Some(MSG_REQUIRED));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("   "));
        let errors = validate_fields(&specs(), &draft, FormMode::Create);
        assert_eq!(errors.get("name").map(String::as_str), Some(MSG_REQUIRED));
    }

    #[test]
    fn create_only_requirement_skipped_on_edit() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("Иван"));
        draft.set("email", FieldValue::text("ivan@example.ru"));

        let create_errors = validate_fields(&specs(), &draft, FormMode::Create);
        assert!(create_errors.contains_key("password"));

        let edit_errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert!(!edit_errors.contains_key("password"));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["ivan", "ivan@", "@example.ru", "ivan@example", "a b@c.ru"] {
            let mut draft = Draft::new();
            draft.set("name", FieldValue::text("x"));
            draft.set("email", FieldValue::text(bad));
            let errors = validate_fields(&specs(), &draft, FormMode::Edit);
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some(MSG_EMAIL),
                "ожидалась ошибка для {bad}"
            );
        }

        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("x"));
        draft.set("email", FieldValue::text("ivan.petrov@mail.ru"));
        assert!(!validate_fields(&specs(), &draft, FormMode::Edit).contains_key("email"));
    }

    #[test]
    fn digits_rule_rejects_mixed_text() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("x"));
        draft.set("email", FieldValue::text("a@b.ru"));
        draft.set("phone", FieldValue::text("8 (912) 555-17-28"));
        let errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert_eq!(errors.get("phone").map(String::as_str), Some(MSG_DIGITS));

        draft.set("phone", FieldValue::text("89125551728"));
        assert!(!validate_fields(&specs(), &draft, FormMode::Edit).contains_key("phone"));
    }

    #[test]
    fn numeric_rules_reject_negative_values() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("x"));
        draft.set("email", FieldValue::text("a@b.ru"));
        draft.set("stock", FieldValue::text("-1"));
        draft.set("price", FieldValue::text("-0.5"));
        let errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert_eq!(
            errors.get("stock").map(String::as_str),
            Some(MSG_NON_NEGATIVE_INT)
        );
        assert_eq!(
            errors.get("price").map(String::as_str),
            Some(MSG_NON_NEGATIVE_NUMBER)
        );

        draft.set("stock", FieldValue::text("0"));
        draft.set("price", FieldValue::text("149.90"));
        let errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert!(!errors.contains_key("stock"));
        assert!(!errors.contains_key("price"));
    }

    #[test]
    fn fractional_stock_is_rejected() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("x"));
        draft.set("email", FieldValue::text("a@b.ru"));
        draft.set("stock", FieldValue::text("2.5"));
        let errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert_eq!(
            errors.get("stock").map(String::as_str),
            Some(MSG_NON_NEGATIVE_INT)
        );
    }

    #[test]
    fn date_rule_accepts_iso_dates_only() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("x"));
        draft.set("email", FieldValue::text("a@b.ru"));
        draft.set("date", FieldValue::text("14.07.2025"));
        let errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert_eq!(errors.get("date").map(String::as_str), Some(MSG_DATE));

        draft.set("date", FieldValue::text("2025-07-14"));
        assert!(!validate_fields(&specs(), &draft, FormMode::Edit).contains_key("date"));
    }

    #[test]
    fn optional_blank_values_skip_format_rules() {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text("x"));
        draft.set("email", FieldValue::text("a@b.ru"));
        draft.set("phone", FieldValue::text(""));
        let errors = validate_fields(&specs(), &draft, FormMode::Edit);
        assert!(!errors.contains_key("phone"));
    }
}
