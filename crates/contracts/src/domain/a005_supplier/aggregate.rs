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
pub struct SupplierId(pub Uuid);

impl SupplierId {
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

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(flatten)]
    pub base: BaseAggregate<SupplierId>,

    pub company: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    /// В отличие от клиента телефон поставщика свободного формата:
    /// встречаются добавочные номера
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub tax_number: String,
}

impl Supplier {
    pub fn new(
        company: String,
        contact_name: String,
        email: String,
        phone: String,
        city: String,
        tax_number: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(SupplierId::new_v4()),
            company,
            contact_name,
            email,
            phone,
            city,
            tax_number,
        }
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

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
        self.company.clone()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Поставщик"
    }

    fn list_name() -> &'static str {
        "Поставщики"
    }
}

impl Searchable for Supplier {
    fn matches_filter(&self, filter: &str) -> bool {
        self.company.to_lowercase().contains(filter)
            || self.contact_name.to_lowercase().contains(filter)
            || self.email.to_lowercase().contains(filter)
            || self.city.to_lowercase().contains(filter)
    }
}

impl Sortable for Supplier {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "company" => self.company.cmp(&other.company),
            "city" => self.city.cmp(&other.city),
            "contact_name" => self.contact_name.cmp(&other.contact_name),
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
static SUPPLIER_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("company", "Компания", Requirement::Always, ValueRule::Any),
    FieldSpec::new(
        "contact_name",
        "Контактное лицо",
        Requirement::Optional,
        ValueRule::Any,
    ),
    FieldSpec::new("email", "Email", Requirement::Optional, ValueRule::Email),
    FieldSpec::new("phone", "Телефон", Requirement::Optional, ValueRule::Any),
    FieldSpec::new("city", "Город", Requirement::Optional, ValueRule::Any),
    FieldSpec::new("tax_number", "ИНН", Requirement::Optional, ValueRule::Digits),
];

static SUPPLIER_MESSAGES: KindMessages = KindMessages {
    created: "Поставщик создан",
    updated: "Поставщик обновлён",
    deleted: "Поставщик удалён",
    activated: "Поставщик активирован",
    deactivated: "Поставщик деактивирован",
};

impl EntityKind for Supplier {
    fn field_specs() -> &'static [FieldSpec] {
        &SUPPLIER_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &SUPPLIER_MESSAGES
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("company", FieldValue::text(self.company.clone()));
        draft.set("contact_name", FieldValue::text(self.contact_name.clone()));
        draft.set("email", FieldValue::text(self.email.clone()));
        draft.set("phone", FieldValue::text(self.phone.clone()));
        draft.set("city", FieldValue::text(self.city.clone()));
        draft.set("tax_number", FieldValue::text(self.tax_number.clone()));
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("company").to_string(),
            draft.trimmed("contact_name").to_string(),
            draft.trimmed("email").to_string(),
            draft.trimmed("phone").to_string(),
            draft.trimmed("city").to_string(),
            draft.trimmed("tax_number").to_string(),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.company = draft.trimmed("company").to_string();
        self.contact_name = draft.trimmed("contact_name").to_string();
        self.email = draft.trimmed("email").to_string();
        self.phone = draft.trimmed("phone").to_string();
        self.city = draft.trimmed("city").to_string();
        self.tax_number = draft.trimmed("tax_number").to_string();
    }
}
