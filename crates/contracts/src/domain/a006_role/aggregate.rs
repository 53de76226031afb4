use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::listing::{
    Draft, EntityKind, FieldSpec, FieldValue, KindMessages, Requirement, Searchable, Sortable,
    ValueRule,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Встроенная роль, защищена от изменения и удаления
pub const ADMIN_ROLE_NAME: &str = "Администратор";

/// Разделы системы, на которые роль выдаёт доступ: (код, подпись)
pub const PERMISSION_OPTIONS: &[(&str, &str)] = &[
    ("categories", "Категории"),
    ("products", "Товары"),
    ("suppliers", "Поставщики"),
    ("clients", "Клиенты"),
    ("returns", "Возвраты"),
    ("roles", "Роли"),
    ("users", "Пользователи"),
];

/// Подпись раздела по коду права
pub fn permission_label(code: &str) -> &str {
    PERMISSION_OPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub Uuid);

impl RoleId {
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

impl AggregateId for RoleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RoleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(flatten)]
    pub base: BaseAggregate<RoleId>,

    pub name: String,
    pub description: String,
    /// Коды разделов из PERMISSION_OPTIONS
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    pub fn new(name: String, description: String, permissions: Vec<String>) -> Self {
        Self {
            base: BaseAggregate::new(RoleId::new_v4()),
            name,
            description,
            permissions,
        }
    }
}

impl AggregateRoot for Role {
    type Id = RoleId;

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
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "role"
    }

    fn element_name() -> &'static str {
        "Роль"
    }

    fn list_name() -> &'static str {
        "Роли"
    }
}

impl Searchable for Role {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
    }
}

impl Sortable for Role {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "permissions" => self.permissions.len().cmp(&other.permissions.len()),
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
static ROLE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("name", "Наименование", Requirement::Always, ValueRule::Any),
    FieldSpec::new(
        "description",
        "Описание",
        Requirement::Always,
        ValueRule::Any,
    ),
    FieldSpec::new(
        "permissions",
        "Права доступа",
        Requirement::Optional,
        ValueRule::Any,
    ),
];

static ROLE_MESSAGES: KindMessages = KindMessages {
    created: "Роль создана",
    updated: "Роль обновлена",
    deleted: "Роль удалена",
    activated: "Роль активирована",
    deactivated: "Роль деактивирована",
};

impl EntityKind for Role {
    fn field_specs() -> &'static [FieldSpec] {
        &ROLE_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &ROLE_MESSAGES
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text(self.name.clone()));
        draft.set("description", FieldValue::text(self.description.clone()));
        draft.set("permissions", FieldValue::Items(self.permissions.clone()));
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("name").to_string(),
            draft.trimmed("description").to_string(),
            draft.items("permissions").to_vec(),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.name = draft.trimmed("name").to_string();
        self.description = draft.trimmed("description").to_string();
        self.permissions = draft.items("permissions").to_vec();
    }

    fn is_protected(&self) -> bool {
        self.name == ADMIN_ROLE_NAME
    }
}
