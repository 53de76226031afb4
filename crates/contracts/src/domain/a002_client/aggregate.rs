use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::listing::{
    Draft, EntityKind, FieldSpec, FieldValue, KindMessages, Requirement, Searchable, Sortable,
    ValueRule,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
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

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    pub full_name: String,
    pub email: String,
    /// Телефон хранится строкой из одних цифр
    #[serde(default)]
    pub phone: String,
    /// ИНН физлица, необязателен
    #[serde(default)]
    pub tax_number: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
}

impl Client {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: String,
        email: String,
        phone: String,
        tax_number: String,
        region: String,
        city: String,
        address: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ClientId::new_v4()),
            full_name,
            email,
            phone,
            tax_number,
            region,
            city,
            address,
        }
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Клиент"
    }

    fn list_name() -> &'static str {
        "Клиенты"
    }
}

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        self.full_name.to_lowercase().contains(filter)
            || self.email.to_lowercase().contains(filter)
            || self.phone.contains(filter)
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "full_name" => self.full_name.cmp(&other.full_name),
            "email" => self.email.cmp(&other.email),
            "city" => self.city.cmp(&other.city),
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
static CLIENT_FIELDS: [FieldSpec; 7] = [
    FieldSpec::new("full_name", "ФИО", Requirement::Always, ValueRule::Any),
    FieldSpec::new("email", "Email", Requirement::Always, ValueRule::Email),
    FieldSpec::new("phone", "Телефон", Requirement::Always, ValueRule::Digits),
    FieldSpec::new("tax_number", "ИНН", Requirement::Optional, ValueRule::Digits),
    FieldSpec::new("region", "Регион", Requirement::Optional, ValueRule::Any),
    FieldSpec::new("city", "Город", Requirement::Optional, ValueRule::Any),
    FieldSpec::new("address", "Адрес", Requirement::Optional, ValueRule::Any),
];

static CLIENT_MESSAGES: KindMessages = KindMessages {
    created: "Клиент создан",
    updated: "Клиент обновлён",
    deleted: "Клиент удалён",
    activated: "Клиент активирован",
    deactivated: "Клиент деактивирован",
};

impl EntityKind for Client {
    fn field_specs() -> &'static [FieldSpec] {
        &CLIENT_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &CLIENT_MESSAGES
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("full_name", FieldValue::text(self.full_name.clone()));
        draft.set("email", FieldValue::text(self.email.clone()));
        draft.set("phone", FieldValue::text(self.phone.clone()));
        draft.set("tax_number", FieldValue::text(self.tax_number.clone()));
        draft.set("region", FieldValue::text(self.region.clone()));
        draft.set("city", FieldValue::text(self.city.clone()));
        draft.set("address", FieldValue::text(self.address.clone()));
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("full_name").to_string(),
            draft.trimmed("email").to_string(),
            draft.trimmed("phone").to_string(),
            draft.trimmed("tax_number").to_string(),
            draft.trimmed("region").to_string(),
            draft.trimmed("city").to_string(),
            draft.trimmed("address").to_string(),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.full_name = draft.trimmed("full_name").to_string();
        self.email = draft.trimmed("email").to_string();
        self.phone = draft.trimmed("phone").to_string();
        self.tax_number = draft.trimmed("tax_number").to_string();
        self.region = draft.trimmed("region").to_string();
        self.city = draft.trimmed("city").to_string();
        self.address = draft.trimmed("address").to_string();
    }
}
