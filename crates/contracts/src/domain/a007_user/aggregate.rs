use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::listing::{
    Draft, EntityKind, FieldSpec, FieldValue, KindMessages, Requirement, Searchable, Sortable,
    ValueRule,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Учётная запись администратора из демо-данных, защищена от изменений
pub const ADMIN_EMAIL: &str = "admin@shop.local";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UserId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseAggregate<UserId>,

    pub full_name: String,
    pub email: String,
    /// Демо-приложение без аутентификации, пароль хранится как есть
    #[serde(skip_serializing)]
    pub password: String,
    /// Роль по наименованию из справочника ролей
    pub role: String,
}

impl User {
    pub fn new(full_name: String, email: String, password: String, role: String) -> Self {
        Self {
            base: BaseAggregate::new(UserId::new_v4()),
            full_name,
            email,
            password,
            role,
        }
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn is_active(&self) -> bool {
        self.base.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.base.is_active = active;
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn display_label(&self) -> String {
        self.full_name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "Пользователь"
    }

    fn list_name() -> &'static str {
        "Пользователи"
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        self.full_name.to_lowercase().contains(filter)
            || self.email.to_lowercase().contains(filter)
            || self.role.to_lowercase().contains(filter)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "full_name" => self.full_name.cmp(&other.full_name),
            "email" => self.email.cmp(&other.email),
            "role" => self.role.cmp(&other.role),
            "created_at" => self
                .base
                .metadata
                .created_at
                .cmp(&other.base.metadata.created_at),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Конфигурация списка
// ============================================================================
static USER_FIELDS: [FieldSpec; 4] = [
    FieldSpec::new("full_name", "ФИО", Requirement::Always, ValueRule::Any),
    FieldSpec::new("email", "Email", Requirement::Always, ValueRule::Email),
    FieldSpec::new(
        "password",
        "Пароль",
        Requirement::CreateOnly,
        ValueRule::Any,
    ),
    FieldSpec::new("role", "Роль", Requirement::Always, ValueRule::Any),
];

static USER_MESSAGES: KindMessages = KindMessages {
    created: "Пользователь создан",
    updated: "Пользователь обновлён",
    deleted: "Пользователь удалён",
    activated: "Пользователь активирован",
    deactivated: "Пользователь деактивирован",
};

impl EntityKind for User {
    fn field_specs() -> &'static [FieldSpec] {
        &USER_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &USER_MESSAGES
    }

    /// Пароль в черновик не копируется: пустое поле при редактировании
    /// означает "оставить прежний"
    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("full_name", FieldValue::text(self.full_name.clone()));
        draft.set("email", FieldValue::text(self.email.clone()));
        draft.set("password", FieldValue::text(""));
        draft.set("role", FieldValue::text(self.role.clone()));
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("full_name").to_string(),
            draft.trimmed("email").to_string(),
            draft.trimmed("password").to_string(),
            draft.trimmed("role").to_string(),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.full_name = draft.trimmed("full_name").to_string();
        self.email = draft.trimmed("email").to_string();
        self.role = draft.trimmed("role").to_string();
        let password = draft.trimmed("password");
        if !password.is_empty() {
            self.password = password.to_string();
        }
    }

    fn is_protected(&self) -> bool {
        self.email == ADMIN_EMAIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::FormMode;

    fn user() -> User {
        User::new(
            "Петров Иван".to_string(),
            "petrov@shop.local".to_string(),
            "пароль-1".to_string(),
            "Менеджер".to_string(),
        )
    }

    #[test]
    fn password_is_required_on_create_but_not_on_edit() {
        let mut draft = user().to_draft();
        draft.set("password", FieldValue::text(""));

        let create_errors = User::validate_draft(&draft, FormMode::Create);
        assert!(create_errors.contains_key("password"));

        let edit_errors = User::validate_draft(&draft, FormMode::Edit);
        assert!(edit_errors.is_empty());
    }

    #[test]
    fn blank_password_on_edit_keeps_old_one() {
        let mut item = user();
        let mut draft = item.to_draft();
        draft.set("full_name", FieldValue::text("Петров Пётр"));

        item.apply_draft(&draft);
        assert_eq!(item.full_name, "Петров Пётр");
        assert_eq!(item.password, "пароль-1");

        draft.set("password", FieldValue::text("новый-пароль"));
        item.apply_draft(&draft);
        assert_eq!(item.password, "новый-пароль");
    }

    #[test]
    fn admin_account_is_protected() {
        let mut admin = user();
        admin.email = ADMIN_EMAIL.to_string();
        assert!(admin.is_protected());
        assert!(!user().is_protected());
    }
}
